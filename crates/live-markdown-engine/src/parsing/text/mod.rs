//! Source text primitives shared by both parsing phases: spans, the line
//! splitter and the character/indentation classifiers.

pub mod classify;
pub mod lines;
pub mod span;

pub use lines::{LineInfo, split_lines};
pub use span::Span;
