use crate::parsing::registry::RegistryError;

use super::{
    kinds::{Autolink, CodeSpan, Emphasis, HardBreak, Image, Link, Strikethrough},
    types::InlineRule,
};

/// Inline rules indexed by trigger character.
///
/// ASCII triggers live in a dense 128-slot table; anything else in a short
/// list. Rules sharing a trigger are tried in registration order, and
/// [`triggers`](Self::triggers) reports characters in the order they were
/// first registered.
pub struct InlineRegistry {
    rules: Vec<Box<dyn InlineRule>>,
    ascii: [Vec<usize>; 128],
    other: Vec<(char, Vec<usize>)>,
    triggers: Vec<char>,
}

impl Default for InlineRegistry {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            ascii: std::array::from_fn(|_| Vec::new()),
            other: Vec::new(),
            triggers: Vec::new(),
        }
    }
}

impl InlineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code span, emphasis, strikethrough, link, image, autolink, hard break.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(Box::new(CodeSpan));
        registry.insert(Box::new(Emphasis));
        registry.insert(Box::new(Strikethrough));
        registry.insert(Box::new(Link));
        registry.insert(Box::new(Image));
        registry.insert(Box::new(Autolink));
        registry.insert(Box::new(HardBreak));
        registry
    }

    /// Appends `rule`, returning its index.
    pub fn register(&mut self, rule: impl InlineRule + 'static) -> Result<usize, RegistryError> {
        if rule.triggers().is_empty() {
            return Err(RegistryError::EmptyTriggers { rule: rule.name() });
        }
        Ok(self.insert(Box::new(rule)))
    }

    fn insert(&mut self, rule: Box<dyn InlineRule>) -> usize {
        let id = self.rules.len();
        for &c in rule.triggers() {
            let slot = if c.is_ascii() {
                &mut self.ascii[c as usize]
            } else {
                let i = match self.other.iter().position(|(t, _)| *t == c) {
                    Some(i) => i,
                    None => {
                        self.other.push((c, Vec::new()));
                        self.other.len() - 1
                    }
                };
                &mut self.other[i].1
            };
            if slot.is_empty() {
                self.triggers.push(c);
            }
            if !slot.contains(&id) {
                slot.push(id);
            }
        }
        self.rules.push(rule);
        id
    }

    fn ids_for(&self, c: char) -> &[usize] {
        if c.is_ascii() {
            return &self.ascii[c as usize];
        }
        self.other
            .iter()
            .find(|(t, _)| *t == c)
            .map_or(&[], |(_, ids)| ids.as_slice())
    }

    /// Rules to try at `c`, in registration order.
    pub fn rules_for_trigger(&self, c: char) -> impl Iterator<Item = &dyn InlineRule> + '_ {
        self.ids_for(c).iter().map(|&id| self.rules[id].as_ref())
    }

    #[inline]
    pub fn is_trigger(&self, c: char) -> bool {
        if c.is_ascii() {
            !self.ascii[c as usize].is_empty()
        } else {
            self.other.iter().any(|(t, _)| *t == c)
        }
    }

    pub fn triggers(&self) -> &[char] {
        &self.triggers
    }

    pub fn rules(&self) -> &[Box<dyn InlineRule>] {
        &self.rules
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for InlineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineRegistry")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("triggers", &self.triggers)
            .finish()
    }
}
