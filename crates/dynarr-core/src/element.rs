//! The element type stored by every array, and its size limits.

/// A single array element: one machine word on 64-bit targets.
pub type Element = i64;

/// The zero value every freshly constructed slot is initialised to.
pub const ZERO: Element = 0;

/// Largest element count whose byte size fits in a single allocation.
///
/// Rust allocations are capped at `isize::MAX` bytes, so any length or
/// capacity above this is rejected before the allocator is consulted.
pub const MAX_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<Element>();

/// Byte size of `elements` elements, or `None` if it exceeds the
/// allocation limit.
pub fn bytes_for(elements: usize) -> Option<usize> {
    if elements > MAX_ELEMENTS {
        return None;
    }
    elements.checked_mul(std::mem::size_of::<Element>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_elements_need_zero_bytes() {
        assert_eq!(bytes_for(0), Some(0));
    }

    #[test]
    fn bytes_scale_with_element_size() {
        assert_eq!(bytes_for(10), Some(80));
    }

    #[test]
    fn max_elements_fits_isize() {
        let bytes = bytes_for(MAX_ELEMENTS).unwrap();
        assert!(bytes <= isize::MAX as usize);
    }

    #[test]
    fn one_past_max_is_rejected() {
        assert_eq!(bytes_for(MAX_ELEMENTS + 1), None);
        assert_eq!(bytes_for(usize::MAX), None);
    }
}
