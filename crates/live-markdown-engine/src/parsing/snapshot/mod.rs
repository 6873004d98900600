//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parse results to a stable, serializable `Snap`
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   content contained in its block, siblings ordered, ranges sorted and grouped)

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_ranges};
pub use normalize::{BlockSnap, Snap, normalize};
