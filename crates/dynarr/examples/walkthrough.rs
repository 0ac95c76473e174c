//! dynarr walkthrough: length, capacity, and growth, step by step.
//!
//! Demonstrates:
//!   1. Constructing an array with spare capacity
//!   2. Appending within capacity (no reallocation)
//!   3. Appending into a full buffer (doubling growth)
//!   4. Bounds-checked reads past the length
//!
//! Run with:
//!   RUST_LOG=dynarr=debug cargo run --example walkthrough

use dynarr::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_elements(a: &DynArray) -> Result<(), ArrayError> {
    for i in 0..a.len() {
        let v = a.get(i)?;
        info!(index = i, value = v, "element");
    }
    Ok(())
}

fn main() -> Result<(), ArrayError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dynarr=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // One zeroed element, room for two.
    let mut a = DynArray::with_length_and_capacity(1, 2)?;
    info!(len = a.len(), capacity = a.capacity(), "constructed");

    a.append(1)?;
    info!(len = a.len(), capacity = a.capacity(), "appended 1");
    print_elements(&a)?;

    // Buffer is full: this append doubles the capacity first.
    a.append(2)?;
    info!(len = a.len(), capacity = a.capacity(), "appended 2");
    print_elements(&a)?;

    match a.get(a.len()) {
        Ok(v) => info!(value = v, "unexpected read past the end"),
        Err(e) => info!(error = %e, "read past the end rejected"),
    }

    let stats = a.stats();
    info!(
        appends = stats.appends,
        reallocations = stats.reallocations,
        elements_copied = stats.elements_copied,
        "growth summary"
    );
    Ok(())
}
