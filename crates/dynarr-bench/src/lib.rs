//! Benchmark workloads for dynarr.
//!
//! Shared builders so every benchmark measures the same array shapes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use dynarr::{ArrayError, DynArray};

/// Element count used by the append and access benchmarks.
pub const WORKLOAD_LEN: usize = 100_000;

/// An array of `len` elements `0, 1, 2, ...` built by appending from an
/// empty, zero-capacity array.
pub fn appended(len: usize) -> Result<DynArray, ArrayError> {
    let mut a = DynArray::new();
    for v in 0..len {
        a.append(v as i64)?;
    }
    Ok(a)
}

/// Same contents as [`appended`], but with the full capacity reserved up
/// front so no regrowth happens.
pub fn preallocated(len: usize) -> Result<DynArray, ArrayError> {
    let mut a = DynArray::with_length_and_capacity(0, len)?;
    for v in 0..len {
        a.append(v as i64)?;
    }
    Ok(a)
}

/// Index sequence that visits every slot of a `len`-element array once,
/// in a cache-unfriendly order. `len` must be non-zero.
pub fn strided_indices(len: usize) -> impl Iterator<Item = usize> {
    // 7919 is prime, so the stride generates all residues when it does
    // not divide len.
    let stride = if len % 7919 == 0 { 1 } else { 7919 };
    (0..len).map(move |i| (i * stride) % len)
}
