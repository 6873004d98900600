use thiserror::Error;

use super::{blocks::BlockRegistry, inline::InlineRegistry};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("inline rule '{rule}' declares no trigger characters")]
    EmptyTriggers { rule: &'static str },

    #[error("block rule '{rule}' registered after fallback rule '{fallback}'")]
    RuleAfterFallback {
        rule: &'static str,
        fallback: &'static str,
    },
}

/// The block and inline grammar a parser runs.
///
/// Built once and never mutated while parsing; share it by reference.
#[derive(Debug, Default)]
pub struct RuleSet {
    blocks: BlockRegistry,
    inlines: InlineRegistry,
}

impl RuleSet {
    pub fn new(blocks: BlockRegistry, inlines: InlineRegistry) -> Self {
        Self { blocks, inlines }
    }

    /// Every rule this crate ships with, in its default priority.
    pub fn builtin() -> Self {
        Self::new(BlockRegistry::builtin(), InlineRegistry::builtin())
    }

    pub fn blocks(&self) -> &BlockRegistry {
        &self.blocks
    }

    pub fn inlines(&self) -> &InlineRegistry {
        &self.inlines
    }
}
