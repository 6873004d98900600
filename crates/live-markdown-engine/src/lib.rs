//! # live-markdown-engine
//!
//! Turns markdown source into an ordered list of typed, positioned style
//! ranges for a text input that renders markdown while the user types.
//!
//! ```text
//! Source → Lines → Block parser → Blocks + block ranges
//!                                   ↓
//!                    Inline parser (per block content) → inline ranges
//!                                   ↓
//!                        sort + group → Vec<MarkdownRange>
//! ```
//!
//! Parsing is total: every input produces a (possibly empty) range list.
//! Grammar lives in rules registered on a [`RuleSet`]; the scanning loops
//! never change when syntax is added.
//!
//! ```
//! use live_markdown_engine::{RangeKind, parse_markdown};
//!
//! let ranges = parse_markdown("# Hello");
//! assert_eq!(ranges[0].kind, RangeKind::Syntax);
//! assert_eq!((ranges[1].kind, ranges[1].start, ranges[1].length), (RangeKind::H1, 2, 5));
//! ```

pub mod parsing;

pub use parsing::{
    MarkdownParser, ParserConfig, RuleSet,
    blocks::{Block, BlockKind, BlockRegistry, BlockRule},
    inline::{InlineRegistry, InlineRule},
    parse_markdown,
    ranges::{MarkdownRange, RangeKind, TableAlignment, TableCell},
    registry::RegistryError,
};
