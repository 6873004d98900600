//! # Style Ranges
//!
//! The output model of the parser: typed, positioned annotations over the
//! source text.
//!
//! - **`kind`**: the closed [`RangeKind`] vocabulary
//! - **`range`**: the [`MarkdownRange`] record
//! - **`normalize`**: the final sort + group pass
//! - **`utf16`**: offset conversion for hosts that index UTF-16

pub mod kind;
pub mod normalize;
pub mod range;
pub mod utf16;

pub use kind::RangeKind;
pub use normalize::sort_and_group;
pub use range::{MarkdownRange, TableAlignment, TableCell};
pub use utf16::to_utf16;
