use crate::parsing::text::{LineInfo, classify::is_blank_line};

use super::{
    registry::BlockRegistry,
    types::{Block, RuleId},
};

/// Everything a rule may look at besides the current line.
///
/// Rules never see the open stack or the completed list; they get read-only
/// access to the document lines and to the registry they belong to.
#[derive(Clone, Copy)]
pub struct BlockContext<'a, 'src> {
    pub lines: &'a [LineInfo<'src>],
    /// Index of the line being processed; `lines.len()` at end of input.
    pub index: usize,
    pub registry: &'a BlockRegistry,
    /// The rule being consulted.
    pub rule: Option<RuleId>,
}

impl<'a, 'src> BlockContext<'a, 'src> {
    pub fn line(&self) -> Option<&'a LineInfo<'src>> {
        self.lines.get(self.index)
    }

    pub fn has_next_line(&self) -> bool {
        self.index + 1 < self.lines.len()
    }

    pub fn previous_line(&self) -> Option<&'a LineInfo<'src>> {
        self.index.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    /// First non-blank line after the current one.
    pub fn next_non_blank(&self) -> Option<&'a LineInfo<'src>> {
        self.lines
            .iter()
            .skip(self.index + 1)
            .find(|l| !is_blank_line(l.text))
    }

    /// End offset of `line` including its terminator, when one follows.
    pub fn end_with_terminator(&self, line: &LineInfo<'_>) -> usize {
        self.lines
            .get(line.line_number + 1)
            .map_or(line.end, |next| next.start)
    }

    /// Whether another rule that interrupts paragraphs would open a block at
    /// `line`.
    ///
    /// Fallback rules never count, so a paragraph asking this is never
    /// answered by itself.
    pub fn other_rule_matches(&self, line: &LineInfo<'_>) -> bool {
        self.registry
            .rules()
            .iter()
            .enumerate()
            .filter(|&(id, rule)| {
                Some(id) != self.rule && !rule.is_fallback() && rule.interrupts_paragraph()
            })
            .any(|(id, rule)| {
                rule.matches(
                    line,
                    &BlockContext {
                        rule: Some(id),
                        ..*self
                    },
                )
            })
    }
}

/// Outcome of [`BlockRule::process`].
#[derive(Debug)]
pub enum Processed {
    /// A complete single-line block.
    Closed(Block),
    /// A block that waits on the open stack for continuation lines.
    Open(Block),
}

/// Answer of [`BlockRule::continues`] for an open block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The line belongs to the block; keep it open.
    Continue,
    /// The line is the block's closing line; close after absorbing it.
    Finish,
    /// The line does not belong to the block.
    Reject,
}

/// A block-level grammar rule.
///
/// Rules are stateless and shared; everything they learn about a block is
/// stored in the [`Block`] itself. The parser extends `span` for absorbed
/// lines; rules own `content`, `children` and `syntax_ranges`.
pub trait BlockRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Cheap test: would this rule open a block at `line`?
    fn matches(&self, line: &LineInfo<'_>, ctx: &BlockContext<'_, '_>) -> bool;

    /// Builds the block for a matched line. Returning `None` declines the
    /// line as if `matches` had failed.
    fn process(&self, line: &LineInfo<'_>, ctx: &BlockContext<'_, '_>) -> Option<Processed>;

    /// Rules without continuation produce single-line blocks.
    fn continues(
        &self,
        _line: &LineInfo<'_>,
        _block: &mut Block,
        _ctx: &BlockContext<'_, '_>,
    ) -> Continuation {
        Continuation::Reject
    }

    /// Whether an open `block` stays open across a blank line.
    fn survives_blank_line(&self, _block: &Block, _ctx: &BlockContext<'_, '_>) -> bool {
        false
    }

    /// Whether a match of this rule ends an open paragraph.
    fn interrupts_paragraph(&self) -> bool {
        true
    }

    /// The catch-all rule; nothing may be registered after it.
    fn is_fallback(&self) -> bool {
        false
    }

    /// Runs once when the block leaves the open stack.
    fn finalize(&self, _block: &mut Block, _ctx: &BlockContext<'_, '_>) {}
}
