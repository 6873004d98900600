//! # Block Parsing
//!
//! The first phase: lines are grouped into [`Block`]s by an ordered set of
//! [`BlockRule`]s.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind` and the facts rules record on them
//! - **`rule`**: the `BlockRule` trait, `BlockContext`, `Continuation`
//! - **`registry`**: `BlockRegistry`, rules in priority order
//! - **`builder`**: `BlockBuilder`, the open-stack state machine
//! - **`kinds`**: one module per grammar rule
//! - **`collect`**: flattens finished blocks into ranges
//!
//! ## Key Invariants
//!
//! - `span` contains `content` for every block
//! - sibling blocks are disjoint and ordered by start
//! - code blocks are raw zones: no inline parsing inside

pub mod builder;
pub mod collect;
pub mod kinds;
pub mod registry;
pub mod rule;
pub mod types;

pub use builder::BlockBuilder;
pub use registry::BlockRegistry;
pub use rule::{BlockContext, BlockRule, Continuation, Processed};
pub use types::{Block, BlockKind, Fence, ListKind, ListMarker, RuleId, TaskState};
