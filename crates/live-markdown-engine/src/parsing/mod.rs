//! # Parsing
//!
//! Markdown source in, ordered style ranges out.
//!
//! ```text
//! text::split_lines → blocks::BlockBuilder → blocks::collect
//!                                          → inline::parse_inline (per block)
//!                                          → ranges::sort_and_group
//! ```
//!
//! A [`MarkdownParser`] owns the [`RuleSet`] it runs and a [`ParserConfig`].
//! Parsing takes `&self` and allocates all scan state per call, so one
//! parser may serve any number of threads.

pub mod blocks;
pub mod inline;
pub mod ranges;
pub mod registry;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use blocks::{Block, BlockBuilder, collect};
use inline::parse_inline;
use ranges::{MarkdownRange, sort_and_group};
use text::split_lines;

pub use registry::RuleSet;

/// Default ceiling on input length, in bytes.
pub const MAX_PARSABLE_LENGTH: usize = 500_000;

/// Tunables for [`MarkdownParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Inputs longer than this (in bytes) produce no ranges.
    pub max_parsable_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_parsable_length: MAX_PARSABLE_LENGTH,
        }
    }
}

/// A rule set plus configuration, ready to parse.
#[derive(Debug)]
pub struct MarkdownParser {
    rules: RuleSet,
    config: ParserConfig,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MarkdownParser {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            config: ParserConfig::default(),
        }
    }

    /// Built-in rules, default configuration.
    pub fn builtin() -> Self {
        Self::new(RuleSet::builtin())
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Whether `source` passes the length guard.
    pub fn accepts(&self, source: &str) -> bool {
        !source.is_empty() && source.len() <= self.config.max_parsable_length
    }

    /// Runs the block phase only.
    pub fn parse_blocks(&self, source: &str) -> Vec<Block> {
        if !self.accepts(source) {
            return vec![];
        }
        let lines = split_lines(source);
        BlockBuilder::build(self.rules.blocks(), &lines)
    }

    /// Parses `source` into sorted, grouped style ranges.
    ///
    /// Never fails: malformed markup degrades to fewer ranges, and input the
    /// length guard rejects yields none.
    pub fn parse(&self, source: &str) -> Vec<MarkdownRange> {
        if !self.accepts(source) {
            log::debug!(
                "skipping parse: {} bytes (limit {})",
                source.len(),
                self.config.max_parsable_length
            );
            return vec![];
        }

        let blocks = self.parse_blocks(source);

        let mut ranges = Vec::new();
        collect::block_ranges(&blocks, &mut ranges);
        for block in collect::inline_targets(&blocks) {
            let content = block.content.slice(source);
            ranges.extend(parse_inline(self.rules.inlines(), content, block.content.start).ranges);
        }

        let ranges = sort_and_group(ranges);
        log::trace!(
            "parsed {} bytes into {} blocks, {} ranges",
            source.len(),
            blocks.len(),
            ranges.len()
        );
        ranges
    }
}

static DEFAULT_PARSER: OnceLock<MarkdownParser> = OnceLock::new();

/// Parses with the built-in rules and default configuration.
pub fn parse_markdown(source: &str) -> Vec<MarkdownRange> {
    DEFAULT_PARSER.get_or_init(MarkdownParser::builtin).parse(source)
}
