//! Capacity growth policy.
//!
//! [`GrowthPolicy`] decides the capacity a full buffer grows to. With the
//! default [`ArrayConfig`] it is plain doubling with a floor of one:
//! `0 -> 1 -> 2 -> 4 -> 8 -> ...`.

use dynarr_core::{AllocFailure, ArrayConfig, ConfigError, MAX_ELEMENTS};

/// A validated growth rule derived from an [`ArrayConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    factor: usize,
    min_capacity: usize,
    max_capacity: usize,
}

impl GrowthPolicy {
    /// Build a policy from `config`, validating it first.
    pub fn new(config: &ArrayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            factor: config.growth_factor,
            min_capacity: config.min_capacity,
            max_capacity: config.max_capacity,
        })
    }

    /// Capacity ceiling in elements.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Capacity to grow to so that at least `required` elements fit.
    ///
    /// Returns `current` unchanged when it already suffices. Otherwise
    /// multiplies by the growth factor (raising to the floor after each
    /// step) until `required` fits, then clamps to the ceiling. The result
    /// is never below `current`.
    pub fn next_capacity(&self, current: usize, required: usize) -> Result<usize, AllocFailure> {
        if required <= current {
            return Ok(current);
        }
        if required > MAX_ELEMENTS {
            return Err(AllocFailure::CapacityOverflow);
        }
        if required > self.max_capacity {
            return Err(AllocFailure::LimitExceeded {
                limit: self.max_capacity,
            });
        }
        let mut cap = current;
        while cap < required {
            cap = cap.saturating_mul(self.factor).max(self.min_capacity);
        }
        Ok(cap.min(self.max_capacity))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            factor: ArrayConfig::DEFAULT_GROWTH_FACTOR,
            min_capacity: ArrayConfig::DEFAULT_MIN_CAPACITY,
            max_capacity: ArrayConfig::DEFAULT_MAX_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_grows_to_one() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(0, 1), Ok(1));
    }

    #[test]
    fn full_buffer_doubles() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(1, 2), Ok(2));
        assert_eq!(policy.next_capacity(2, 3), Ok(4));
        assert_eq!(policy.next_capacity(4, 5), Ok(8));
        assert_eq!(policy.next_capacity(1000, 1001), Ok(2000));
    }

    #[test]
    fn sufficient_capacity_is_kept() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(8, 5), Ok(8));
        assert_eq!(policy.next_capacity(0, 0), Ok(0));
    }

    #[test]
    fn large_request_doubles_repeatedly() {
        let policy = GrowthPolicy::default();
        // 3 -> 6 -> 12 -> 24
        assert_eq!(policy.next_capacity(3, 20), Ok(24));
    }

    #[test]
    fn default_matches_default_config() {
        let policy = GrowthPolicy::new(&ArrayConfig::default()).unwrap();
        assert_eq!(policy, GrowthPolicy::default());
    }

    #[test]
    fn invalid_config_rejected() {
        let config = ArrayConfig {
            growth_factor: 0,
            ..ArrayConfig::default()
        };
        assert_eq!(
            GrowthPolicy::new(&config),
            Err(ConfigError::GrowthFactorTooSmall { factor: 0 })
        );
    }

    #[test]
    fn custom_factor_and_floor() {
        let config = ArrayConfig {
            growth_factor: 3,
            min_capacity: 4,
            max_capacity: 1000,
        };
        let policy = GrowthPolicy::new(&config).unwrap();
        assert_eq!(policy.next_capacity(0, 1), Ok(4));
        assert_eq!(policy.next_capacity(4, 5), Ok(12));
    }

    #[test]
    fn last_step_clamps_to_ceiling() {
        let policy = GrowthPolicy::new(&ArrayConfig::with_max_capacity(6)).unwrap();
        assert_eq!(policy.next_capacity(4, 5), Ok(6));
    }

    #[test]
    fn past_ceiling_is_refused() {
        let policy = GrowthPolicy::new(&ArrayConfig::with_max_capacity(6)).unwrap();
        assert_eq!(
            policy.next_capacity(6, 7),
            Err(AllocFailure::LimitExceeded { limit: 6 })
        );
    }

    #[test]
    fn past_addressable_is_overflow() {
        let policy = GrowthPolicy::default();
        assert_eq!(
            policy.next_capacity(4, MAX_ELEMENTS + 1),
            Err(AllocFailure::CapacityOverflow)
        );
    }

    #[test]
    fn doubling_near_ceiling_clamps_to_max_elements() {
        let policy = GrowthPolicy::default();
        let current = MAX_ELEMENTS / 2 + 1;
        assert_eq!(policy.next_capacity(current, current + 1), Ok(MAX_ELEMENTS));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn result_covers_request_and_never_shrinks(
                current in 0usize..1_000_000,
                extra in 0usize..1_000_000,
            ) {
                let policy = GrowthPolicy::default();
                let required = current + extra;
                let next = policy.next_capacity(current, required).unwrap();
                prop_assert!(next >= required);
                prop_assert!(next >= current);
            }

            #[test]
            fn single_step_growth_is_exact_doubling(current in 1usize..1_000_000) {
                let policy = GrowthPolicy::default();
                prop_assert_eq!(policy.next_capacity(current, current + 1), Ok(current * 2));
            }
        }
    }
}
