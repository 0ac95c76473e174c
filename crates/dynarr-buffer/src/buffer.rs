//! Contiguous element buffer with exact, fallible allocation.

use dynarr_core::{AllocFailure, Element, MAX_ELEMENTS, ZERO};

/// A single contiguous allocation of [`Element`]s.
///
/// Tracks its own logical capacity, independent of whatever slack the
/// allocator handed back, so capacity is always exactly what was asked
/// for. Elements in `[0, len)` are initialised; the rest of the capacity
/// is reserved and unreachable through this API.
pub struct Buffer {
    /// Backing storage. `data.len()` is the logical length and
    /// `data.capacity() >= capacity` always holds.
    data: Vec<Element>,
    /// Logical capacity in elements.
    capacity: usize,
}

impl Buffer {
    /// An empty buffer with zero capacity. Does not allocate.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Allocate room for `capacity` elements and zero-initialise the
    /// first `len`.
    ///
    /// `len` must not exceed `capacity`; callers validate that first.
    pub fn zeroed(len: usize, capacity: usize) -> Result<Self, AllocFailure> {
        debug_assert!(len <= capacity, "len {len} > capacity {capacity}");
        let mut data = allocate(capacity)?;
        data.resize(len, ZERO);
        Ok(Self { data, capacity })
    }

    /// Allocate exactly `values.len()` elements holding a copy of `values`.
    pub fn from_slice(values: &[Element]) -> Result<Self, AllocFailure> {
        let mut data = allocate(values.len())?;
        data.extend_from_slice(values);
        Ok(Self {
            data,
            capacity: values.len(),
        })
    }

    /// Number of initialised elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no elements are initialised.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical capacity in elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots before the next regrowth is needed.
    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Bytes covered by the logical capacity.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<Element>()
    }

    /// The element at `index`, if it is initialised.
    pub fn get(&self, index: usize) -> Option<Element> {
        self.data.get(index).copied()
    }

    /// Mutable access to the element at `index`, if it is initialised.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.data.get_mut(index)
    }

    /// The initialised elements.
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Write `value` at index `len` and bump the length, if a free slot
    /// exists. Hands the value back when the buffer is full.
    pub fn push_within_capacity(&mut self, value: Element) -> Result<(), Element> {
        if self.data.len() == self.capacity {
            return Err(value);
        }
        // data.capacity() >= capacity > len, so this never reallocates.
        self.data.push(value);
        Ok(())
    }

    /// Append all of `values` if they fit in the remaining capacity.
    /// Returns `false` and leaves the buffer untouched otherwise.
    pub fn extend_within_capacity(&mut self, values: &[Element]) -> bool {
        if values.len() > self.remaining() {
            return false;
        }
        self.data.extend_from_slice(values);
        true
    }

    /// Move the contents into a fresh allocation of `new_capacity`
    /// elements and release the old one.
    ///
    /// The old allocation is only released after the new one exists and
    /// holds every element, so on `Err` the buffer is exactly as it was.
    /// Returns the number of elements copied.
    pub fn regrow(&mut self, new_capacity: usize) -> Result<usize, AllocFailure> {
        debug_assert!(
            new_capacity >= self.capacity,
            "regrow must not shrink: {} -> {new_capacity}",
            self.capacity
        );
        let mut fresh = allocate(new_capacity)?;
        fresh.extend_from_slice(&self.data);
        let copied = self.data.len();
        self.data = fresh;
        self.capacity = new_capacity;
        Ok(copied)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::empty()
    }
}

/// Reserve exactly `capacity` elements through the fallible path.
fn allocate(capacity: usize) -> Result<Vec<Element>, AllocFailure> {
    if capacity > MAX_ELEMENTS {
        return Err(AllocFailure::CapacityOverflow);
    }
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|_| AllocFailure::Allocator)?;
    Ok(data)
}
