use crate::parsing::registry::RegistryError;

use super::{
    kinds::{BlockQuoteRule, CodeFenceRule, HeadingRule, IndentedCodeRule, ListItemRule, ParagraphRule},
    rule::BlockRule,
    types::RuleId,
};

/// Block rules in priority order.
///
/// Rules are tried in registration order; the fallback rule, if any, is
/// last. A [`RuleId`] is the rule's index here.
#[derive(Default)]
pub struct BlockRegistry {
    rules: Vec<Box<dyn BlockRule>>,
    fallback: Option<RuleId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading, fenced code, blockquote, list item, indented code, paragraph.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.rules.push(Box::new(HeadingRule));
        registry.rules.push(Box::new(CodeFenceRule));
        registry.rules.push(Box::new(BlockQuoteRule));
        registry.rules.push(Box::new(ListItemRule));
        registry.rules.push(Box::new(IndentedCodeRule));
        registry.rules.push(Box::new(ParagraphRule));
        registry.fallback = Some(registry.rules.len() - 1);
        registry
    }

    /// Appends `rule`, returning its id.
    pub fn register(&mut self, rule: impl BlockRule + 'static) -> Result<RuleId, RegistryError> {
        if let Some(fallback) = self.fallback {
            return Err(RegistryError::RuleAfterFallback {
                rule: rule.name(),
                fallback: self.rules[fallback].name(),
            });
        }
        let id = self.rules.len();
        if rule.is_fallback() {
            self.fallback = Some(id);
        }
        self.rules.push(Box::new(rule));
        Ok(id)
    }

    pub fn rules(&self) -> &[Box<dyn BlockRule>] {
        &self.rules
    }

    pub fn get(&self, id: RuleId) -> Option<&dyn BlockRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Id of the rule with `name`, if registered.
    pub fn find(&self, name: &str) -> Option<RuleId> {
        self.rules.iter().position(|r| r.name() == name)
    }

    pub fn fallback(&self) -> Option<RuleId> {
        self.fallback
    }

    pub fn clear(&mut self) {
        self.rules.clear();
        self.fallback = None;
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for BlockRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.name()))
            .finish()
    }
}
