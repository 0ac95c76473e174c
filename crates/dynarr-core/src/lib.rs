//! Core types for the dynarr growable array.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! element type, the error taxonomy shared by every layer, growth
//! configuration, and the growth counters exposed to callers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod element;
pub mod error;
pub mod stats;

pub use config::{ArrayConfig, ConfigError};
pub use element::{bytes_for, Element, MAX_ELEMENTS, ZERO};
pub use error::{AllocFailure, ArrayError, Precondition};
pub use stats::GrowthStats;
