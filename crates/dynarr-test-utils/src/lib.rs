//! Reference model and strategies for differential testing of dynarr.
//!
//! [`ShadowArray`] is a deliberately naive model of the array contract,
//! backed by a plain `Vec` and computing expected capacities by direct
//! doubling. Tests drive a real array and a shadow through the same
//! [`ArrayOp`] script and compare outcomes after every step.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr_core::{AllocFailure, ArrayError, Element, MAX_ELEMENTS};
use proptest::prelude::*;

/// One step of a test script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayOp {
    Append(Element),
    AppendAll(Vec<Element>),
    Get(usize),
    Set(usize, Element),
    Reserve(usize),
}

/// What a step produced: a read value, a write acknowledgement, or an error.
pub type OpOutcome = Result<Option<Element>, ArrayError>;

/// Vec-backed model of the array contract with default doubling growth.
#[derive(Clone, Debug)]
pub struct ShadowArray {
    values: Vec<Element>,
    capacity: usize,
    max_capacity: usize,
}

impl ShadowArray {
    /// Model of `with_length_and_capacity(length, capacity)`.
    pub fn new(length: usize, capacity: usize) -> Self {
        Self::with_max_capacity(length, capacity, MAX_ELEMENTS)
    }

    /// Model of an array configured with a capacity ceiling.
    pub fn with_max_capacity(length: usize, capacity: usize, max_capacity: usize) -> Self {
        assert!(length <= capacity && capacity <= max_capacity);
        Self {
            values: vec![0; length],
            capacity,
            max_capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn values(&self) -> &[Element] {
        &self.values
    }

    /// Apply `op` and return the outcome the real array must also produce.
    pub fn apply(&mut self, op: &ArrayOp) -> OpOutcome {
        match op {
            ArrayOp::Append(v) => {
                self.grow_to(self.values.len() + 1)?;
                self.values.push(*v);
                Ok(None)
            }
            ArrayOp::AppendAll(vs) => {
                self.grow_to(self.values.len() + vs.len())?;
                self.values.extend_from_slice(vs);
                Ok(None)
            }
            ArrayOp::Get(i) => self.values.get(*i).copied().map(Some).ok_or(
                ArrayError::IndexOutOfRange {
                    index: *i,
                    len: self.values.len(),
                },
            ),
            ArrayOp::Set(i, v) => {
                let len = self.values.len();
                match self.values.get_mut(*i) {
                    Some(slot) => {
                        *slot = *v;
                        Ok(None)
                    }
                    None => Err(ArrayError::IndexOutOfRange { index: *i, len }),
                }
            }
            ArrayOp::Reserve(n) => {
                self.grow_to(self.values.len().saturating_add(*n))?;
                Ok(None)
            }
        }
    }

    fn grow_to(&mut self, required: usize) -> Result<(), ArrayError> {
        if required <= self.capacity {
            return Ok(());
        }
        if required > self.max_capacity {
            return Err(ArrayError::AllocationFailed {
                requested: required,
                cause: AllocFailure::LimitExceeded {
                    limit: self.max_capacity,
                },
            });
        }
        let mut cap = self.capacity;
        while cap < required {
            cap = if cap == 0 { 1 } else { cap * 2 };
        }
        self.capacity = cap.min(self.max_capacity);
        Ok(())
    }
}

/// Any element value, biased towards small numbers and the extremes.
pub fn arb_element() -> impl Strategy<Value = Element> {
    prop_oneof![
        4 => -100i64..100,
        1 => Just(Element::MIN),
        1 => Just(Element::MAX),
        2 => any::<Element>(),
    ]
}

/// A single operation. Indices reach a little past `max_index` so that
/// both in-range and out-of-range accesses are generated.
pub fn arb_op(max_index: usize) -> impl Strategy<Value = ArrayOp> {
    let idx = 0..max_index + 4;
    prop_oneof![
        6 => arb_element().prop_map(ArrayOp::Append),
        1 => proptest::collection::vec(arb_element(), 0..12).prop_map(ArrayOp::AppendAll),
        3 => idx.clone().prop_map(ArrayOp::Get),
        3 => (idx, arb_element()).prop_map(|(i, v)| ArrayOp::Set(i, v)),
        1 => (0usize..40).prop_map(ArrayOp::Reserve),
    ]
}

/// A script of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<ArrayOp>> {
    proptest::collection::vec(arb_op(max_len), 0..max_len)
}
