//! Growth configuration and its validation.

use std::error::Error;
use std::fmt;

use crate::element::MAX_ELEMENTS;

/// Configuration for array growth.
///
/// Controls how capacity grows when an append finds the buffer full, and
/// the hard ceiling capacity may never pass. The default reproduces the
/// classic doubling rule `new_cap = max(1, 2 * old_cap)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Multiplier applied to the old capacity on each growth step.
    ///
    /// Default: 2. Must be at least 2 so that every step makes progress
    /// and appends stay amortised O(1).
    pub growth_factor: usize,

    /// Floor applied after multiplying, so that a zero-capacity array
    /// still grows. Default: 1. Must be at least 1.
    pub min_capacity: usize,

    /// Capacity never grows past this many elements.
    ///
    /// Default: [`MAX_ELEMENTS`]. The last growth step before the ceiling
    /// is clamped to land exactly on it.
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default capacity floor.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Default capacity ceiling.
    pub const DEFAULT_MAX_CAPACITY: usize = MAX_ELEMENTS;

    /// Default config with a custom capacity ceiling.
    pub fn with_max_capacity(max_capacity: usize) -> Self {
        Self {
            max_capacity,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.growth_factor < 2 {
            return Err(ConfigError::GrowthFactorTooSmall {
                factor: self.growth_factor,
            });
        }
        if self.min_capacity == 0 {
            return Err(ConfigError::ZeroMinCapacity);
        }
        if self.max_capacity < self.min_capacity {
            return Err(ConfigError::MaxBelowMin {
                min: self.min_capacity,
                max: self.max_capacity,
            });
        }
        if self.max_capacity > MAX_ELEMENTS {
            return Err(ConfigError::MaxAboveAddressable {
                max: self.max_capacity,
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }
}

/// Errors detected by [`ArrayConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `growth_factor` is below 2.
    GrowthFactorTooSmall {
        /// The configured factor.
        factor: usize,
    },
    /// `min_capacity` is zero.
    ZeroMinCapacity,
    /// `max_capacity` is below `min_capacity`.
    MaxBelowMin {
        /// Configured floor.
        min: usize,
        /// Configured ceiling.
        max: usize,
    },
    /// `max_capacity` exceeds [`MAX_ELEMENTS`].
    MaxAboveAddressable {
        /// Configured ceiling.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrowthFactorTooSmall { factor } => {
                write!(f, "growth_factor must be at least 2, got {factor}")
            }
            Self::ZeroMinCapacity => write!(f, "min_capacity must be at least 1"),
            Self::MaxBelowMin { min, max } => {
                write!(f, "max_capacity {max} is below min_capacity {min}")
            }
            Self::MaxAboveAddressable { max } => {
                write!(f, "max_capacity {max} exceeds {MAX_ELEMENTS} elements")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_doubling() {
        let config = ArrayConfig::default();
        assert_eq!(config.growth_factor, 2);
        assert_eq!(config.min_capacity, 1);
        assert_eq!(config.max_capacity, MAX_ELEMENTS);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn factor_one_rejected() {
        let config = ArrayConfig {
            growth_factor: 1,
            ..ArrayConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GrowthFactorTooSmall { factor: 1 })
        );
    }

    #[test]
    fn zero_floor_rejected() {
        let config = ArrayConfig {
            min_capacity: 0,
            ..ArrayConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinCapacity));
    }

    #[test]
    fn ceiling_below_floor_rejected() {
        let config = ArrayConfig {
            min_capacity: 8,
            max_capacity: 4,
            ..ArrayConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MaxBelowMin { min: 8, max: 4 })
        );
    }

    #[test]
    fn ceiling_above_addressable_rejected() {
        let config = ArrayConfig::with_max_capacity(MAX_ELEMENTS + 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MaxAboveAddressable { .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_fields_always_validate(
                factor in 2usize..64,
                min in 1usize..1024,
                extra in 0usize..1_000_000,
            ) {
                let config = ArrayConfig {
                    growth_factor: factor,
                    min_capacity: min,
                    max_capacity: min + extra,
                };
                prop_assert_eq!(config.validate(), Ok(()));
            }
        }
    }
}
