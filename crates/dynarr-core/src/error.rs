//! Error types for array construction, growth, and indexed access.
//!
//! Three failure classes, all reported as values to the immediate caller:
//! invalid arguments ([`Precondition`]), refused allocations
//! ([`AllocFailure`]), and out-of-range indices. None of them leaves an
//! array in a state it cannot recover from.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Errors returned by array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The caller supplied invalid arguments. Detected before any
    /// allocation; the operation had no effect.
    PreconditionViolation(Precondition),
    /// The buffer could not be allocated or grown. When raised by a
    /// growing operation, the array still holds its prior contents,
    /// length, and capacity.
    AllocationFailed {
        /// Capacity (in elements) that was requested.
        requested: usize,
        /// Why the request was refused.
        cause: AllocFailure,
    },
    /// `get` or `set` was called with an index outside `[0, len)`.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Logical length of the array at the time of the call.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreconditionViolation(p) => write!(f, "precondition violated: {p}"),
            Self::AllocationFailed { requested, cause } => {
                write!(f, "allocation of {requested} elements failed: {cause}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PreconditionViolation(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Precondition> for ArrayError {
    fn from(p: Precondition) -> Self {
        Self::PreconditionViolation(p)
    }
}

/// Invalid constructor or configuration arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Precondition {
    /// Requested capacity is smaller than the requested length.
    CapacityBelowLength {
        /// Requested length.
        length: usize,
        /// Requested capacity.
        capacity: usize,
    },
    /// The byte size of the request does not fit a single allocation.
    SizeOverflow {
        /// Element count that overflowed.
        elements: usize,
    },
    /// Requested capacity is above the configured `max_capacity`.
    CapacityAboveLimit {
        /// Requested capacity.
        capacity: usize,
        /// Configured ceiling.
        limit: usize,
    },
    /// The supplied [`ArrayConfig`](crate::ArrayConfig) failed validation.
    InvalidConfig(ConfigError),
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityBelowLength { length, capacity } => {
                write!(f, "capacity {capacity} is less than length {length}")
            }
            Self::SizeOverflow { elements } => {
                write!(f, "{elements} elements exceed the maximum allocation size")
            }
            Self::CapacityAboveLimit { capacity, limit } => {
                write!(f, "capacity {capacity} exceeds configured limit {limit}")
            }
            Self::InvalidConfig(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for Precondition {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

/// Why an allocation request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocFailure {
    /// The global allocator could not satisfy the request.
    Allocator,
    /// The grown capacity would exceed [`MAX_ELEMENTS`](crate::MAX_ELEMENTS).
    CapacityOverflow,
    /// Growth would pass the configured `max_capacity`.
    LimitExceeded {
        /// Configured ceiling.
        limit: usize,
    },
}

impl fmt::Display for AllocFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocator => write!(f, "allocator refused the request"),
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::LimitExceeded { limit } => {
                write!(f, "configured capacity limit {limit} reached")
            }
        }
    }
}

impl Error for AllocFailure {}
