//! # Inline Parsing
//!
//! The second phase: a single forward scan over each block's content,
//! dispatching on trigger characters to [`InlineRule`]s.
//!
//! ## Modules
//!
//! - **`types`**: `InlineRule` and `InlineMatch`
//! - **`context`**: per-block scan state (`InlineContext`)
//! - **`registry`**: `InlineRegistry`, rules indexed by trigger
//! - **`parser`**: `parse_inline`, the scan loop
//! - **`nested`**: the one-level emphasis rescan used by bold and strikethrough
//! - **`cursor`**: character cursor with absolute positions
//! - **`kinds`**: one module per grammar rule
//!
//! ## Precedence
//!
//! Rules are greedy and local: whatever matches first at a position wins,
//! and its span is never revisited by the main scan. Code spans therefore
//! shield their content, and emphasis nested inside bold is found only by
//! the bounded rescan.

pub mod context;
pub mod cursor;
pub mod kinds;
pub mod nested;
pub mod parser;
pub mod registry;
pub mod types;

pub use context::InlineContext;
pub use parser::{InlineOutput, parse_inline};
pub use registry::InlineRegistry;
pub use types::{InlineMatch, InlineRule};
