//! Owned element storage and growth policy for dynarr.
//!
//! A [`Buffer`] is a single contiguous allocation with a logical length and
//! a logical capacity. It never grows on its own: growth is an explicit,
//! failure-atomic [`regrow`](Buffer::regrow) to a capacity chosen by a
//! [`GrowthPolicy`].
//!
//! ```text
//! Buffer
//! ├── [0, len)        initialised elements
//! └── [len, capacity) reserved, not addressable
//! ```
//!
//! All storage is `Vec<Element>` allocated through the fallible
//! `try_reserve_exact` path, so an exhausted allocator surfaces as an
//! error value instead of an abort.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod growth;

pub use buffer::Buffer;
pub use growth::GrowthPolicy;
