//! The growable, bounds-checked array.
//!
//! [`DynArray`] is the sole owner of its buffer. Growth happens inside
//! `append`, `append_all`, and `reserve` only, and is failure-atomic: the
//! new buffer is fully populated before the old one is released, so a
//! refused allocation leaves the array exactly as it was.

use std::fmt;

use dynarr_buffer::{Buffer, GrowthPolicy};
use dynarr_core::{
    AllocFailure, ArrayConfig, ArrayError, Element, GrowthStats, Precondition, MAX_ELEMENTS,
};
use tracing::{debug, trace, warn};

/// A growable array of [`Element`]s with a separate length and capacity.
///
/// Invariant: `len() <= capacity()` after construction and after every
/// operation, successful or not. Indices in `[0, len())` are readable and
/// writable; reserved capacity beyond `len()` is not addressable until an
/// append brings it into the length.
pub struct DynArray {
    buf: Buffer,
    policy: GrowthPolicy,
    stats: GrowthStats,
}

impl DynArray {
    /// An empty array with zero capacity. Does not allocate.
    pub fn new() -> Self {
        Self {
            buf: Buffer::empty(),
            policy: GrowthPolicy::default(),
            stats: GrowthStats::default(),
        }
    }

    /// An array of `length` zeroes with `capacity == length`.
    pub fn with_length(length: usize) -> Result<Self, ArrayError> {
        Self::build(length, length, GrowthPolicy::default())
    }

    /// An array of `length` zeroes with room for `capacity` elements.
    ///
    /// `capacity < length` is a precondition violation; it is reported,
    /// not corrected.
    pub fn with_length_and_capacity(length: usize, capacity: usize) -> Result<Self, ArrayError> {
        Self::build(length, capacity, GrowthPolicy::default())
    }

    /// Like [`with_length_and_capacity`](Self::with_length_and_capacity),
    /// growing according to `config`.
    pub fn with_config(
        length: usize,
        capacity: usize,
        config: &ArrayConfig,
    ) -> Result<Self, ArrayError> {
        let policy = GrowthPolicy::new(config).map_err(Precondition::InvalidConfig)?;
        Self::build(length, capacity, policy)
    }

    /// An array holding a copy of `values`, with `len == capacity`.
    pub fn from_values(values: &[Element]) -> Result<Self, ArrayError> {
        let buf = Buffer::from_slice(values).map_err(|cause| {
            warn!(requested = values.len(), %cause, "array allocation refused");
            ArrayError::AllocationFailed {
                requested: values.len(),
                cause,
            }
        })?;
        trace!(length = values.len(), "array constructed from values");
        Ok(Self {
            buf,
            policy: GrowthPolicy::default(),
            stats: GrowthStats::default(),
        })
    }

    fn build(length: usize, capacity: usize, policy: GrowthPolicy) -> Result<Self, ArrayError> {
        if capacity < length {
            return Err(Precondition::CapacityBelowLength { length, capacity }.into());
        }
        if capacity > MAX_ELEMENTS {
            return Err(Precondition::SizeOverflow {
                elements: capacity,
            }
            .into());
        }
        if capacity > policy.max_capacity() {
            return Err(Precondition::CapacityAboveLimit {
                capacity,
                limit: policy.max_capacity(),
            }
            .into());
        }
        let buf = Buffer::zeroed(length, capacity).map_err(|cause| {
            warn!(requested = capacity, %cause, "array allocation refused");
            ArrayError::AllocationFailed {
                requested: capacity,
                cause,
            }
        })?;
        trace!(length, capacity, "array constructed");
        Ok(Self {
            buf,
            policy,
            stats: GrowthStats::default(),
        })
    }

    /// Number of logically present elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of elements the current buffer holds without regrowing.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Bytes held by the current buffer's capacity.
    pub fn memory_bytes(&self) -> usize {
        self.buf.memory_bytes()
    }

    /// Cumulative growth counters.
    pub fn stats(&self) -> &GrowthStats {
        &self.stats
    }

    /// The element at `index`, or `IndexOutOfRange` unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<Element, ArrayError> {
        self.buf
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Overwrite the element at `index`, or report `IndexOutOfRange`
    /// unless `index < len()`. Reserved capacity is never writable.
    pub fn set(&mut self, index: usize, value: Element) -> Result<(), ArrayError> {
        let err = self.out_of_range(index);
        let slot = self.buf.get_mut(index).ok_or(err)?;
        *slot = value;
        Ok(())
    }

    /// Add `value` as the new last element.
    ///
    /// O(1) while capacity remains. A full buffer is first regrown per the
    /// growth policy, which copies every element once. Growth moves the
    /// buffer, so nothing borrowed from it may outlive this call.
    pub fn append(&mut self, value: Element) -> Result<(), ArrayError> {
        if self.buf.remaining() == 0 {
            self.grow_to(self.buf.len() + 1)?;
        }
        self.buf
            .push_within_capacity(value)
            .expect("grow_to leaves at least one free slot");
        self.stats.appends += 1;
        Ok(())
    }

    /// Append every value in `values`, in order.
    ///
    /// Grows at most once. All or nothing: on error, no value is appended.
    pub fn append_all(&mut self, values: &[Element]) -> Result<(), ArrayError> {
        self.grow_to(self.buf.len() + values.len())?;
        let fitted = self.buf.extend_within_capacity(values);
        debug_assert!(fitted, "grow_to leaves room for every value");
        self.stats.appends += values.len() as u64;
        Ok(())
    }

    /// Grow, if needed, so that `additional` more elements fit without
    /// another regrowth. Capacity is chosen by the growth policy.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArrayError> {
        self.grow_to(self.buf.len().saturating_add(additional))
    }

    /// Ensure capacity for `required` elements.
    fn grow_to(&mut self, required: usize) -> Result<(), ArrayError> {
        let old_capacity = self.buf.capacity();
        if required <= old_capacity {
            return Ok(());
        }
        let new_capacity = match self.policy.next_capacity(old_capacity, required) {
            Ok(cap) => cap,
            Err(cause) => return Err(self.refuse(required, cause)),
        };
        let copied = match self.buf.regrow(new_capacity) {
            Ok(copied) => copied,
            Err(cause) => return Err(self.refuse(new_capacity, cause)),
        };
        self.stats.reallocations += 1;
        self.stats.elements_copied += copied as u64;
        debug!(
            len = self.buf.len(),
            old_capacity, new_capacity, "array regrown"
        );
        Ok(())
    }

    fn refuse(&mut self, requested: usize, cause: AllocFailure) -> ArrayError {
        self.stats.failed_growths += 1;
        warn!(
            requested,
            len = self.buf.len(),
            capacity = self.buf.capacity(),
            %cause,
            "array growth refused"
        );
        ArrayError::AllocationFailed { requested, cause }
    }

    fn out_of_range(&self, index: usize) -> ArrayError {
        ArrayError::IndexOutOfRange {
            index,
            len: self.buf.len(),
        }
    }
}

impl Default for DynArray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DynArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.buf.len())
            .field("capacity", &self.buf.capacity())
            .field("elements", &self.buf.as_slice())
            .finish()
    }
}

/// Arrays are equal when their logical elements are; capacity is ignored.
impl PartialEq for DynArray {
    fn eq(&self, other: &Self) -> bool {
        self.buf.as_slice() == other.buf.as_slice()
    }
}

impl Eq for DynArray {}
