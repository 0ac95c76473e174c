//! dynarr: a growable, bounds-checked array of machine-word integers.
//!
//! [`DynArray`] owns one contiguous buffer and tracks a logical length
//! separately from the physical capacity. Appends are amortised O(1):
//! a full buffer doubles (from a floor of one) before the write. Every
//! indexed access is checked against the length, and every failure is
//! returned as an [`ArrayError`] value.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::prelude::*;
//!
//! let mut a = DynArray::with_length_and_capacity(1, 2).unwrap();
//! a.append(1).unwrap();
//! assert_eq!((a.len(), a.capacity()), (2, 2));
//!
//! a.append(2).unwrap(); // buffer full: grows to 4
//! assert_eq!((a.len(), a.capacity()), (3, 4));
//! assert_eq!(a.get(2), Ok(2));
//! assert!(matches!(a.get(3), Err(ArrayError::IndexOutOfRange { .. })));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `dynarr` | The [`DynArray`] container |
//! | [`types`] | `dynarr-core` | Element type, errors, config, growth stats |
//! | [`buffer`] | `dynarr-buffer` | Raw buffer and growth policy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;

/// Element type, errors, configuration, and growth counters (`dynarr-core`).
pub use dynarr_core as types;

/// Owned buffer and growth policy (`dynarr-buffer`).
///
/// Most users never touch this directly; [`DynArray`] wraps it.
pub use dynarr_buffer as buffer;

pub use array::DynArray;
pub use dynarr_core::{
    AllocFailure, ArrayConfig, ArrayError, ConfigError, Element, GrowthStats, Precondition,
    MAX_ELEMENTS,
};

/// Common imports for working with arrays.
///
/// ```rust
/// use dynarr::prelude::*;
/// ```
pub mod prelude {
    pub use crate::array::DynArray;
    pub use dynarr_core::{ArrayConfig, ArrayError, Element, GrowthStats};
}
