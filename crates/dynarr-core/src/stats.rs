//! Growth counters kept by every array.
//!
//! [`GrowthStats`] records how often an array appended, regrew, and copied,
//! so callers can check the amortised cost of a workload after the fact.

/// Cumulative growth counters for a single array.
///
/// Counters only ever increase. They are updated by the array itself and
/// read through its `stats()` accessor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Number of elements successfully appended.
    pub appends: u64,
    /// Number of successful buffer regrowths.
    pub reallocations: u64,
    /// Total elements migrated from an old buffer into a new one.
    pub elements_copied: u64,
    /// Number of growth attempts that were refused.
    pub failed_growths: u64,
}

impl GrowthStats {
    /// Average elements copied per appended element, or `0.0` before the
    /// first append.
    pub fn copies_per_append(&self) -> f64 {
        if self.appends == 0 {
            return 0.0;
        }
        self.elements_copied as f64 / self.appends as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = GrowthStats::default();
        assert_eq!(s.appends, 0);
        assert_eq!(s.reallocations, 0);
        assert_eq!(s.elements_copied, 0);
        assert_eq!(s.failed_growths, 0);
        assert_eq!(s.copies_per_append(), 0.0);
    }

    #[test]
    fn copies_per_append_is_ratio() {
        let s = GrowthStats {
            appends: 8,
            elements_copied: 7,
            ..Default::default()
        };
        assert!((s.copies_per_append() - 0.875).abs() < 1e-12);
    }
}
