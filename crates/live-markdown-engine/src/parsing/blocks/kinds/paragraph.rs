use crate::parsing::{
    blocks::{
        rule::{BlockContext, BlockRule, Continuation, Processed},
        types::{Block, BlockKind},
    },
    text::{LineInfo, classify::is_blank_line},
};

/// The catch-all: any non-blank line no other rule claimed.
///
/// Continues while the next line is non-blank and would not open a block
/// under another paragraph-interrupting rule.
pub struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn matches(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> bool {
        !is_blank_line(line.text)
    }

    fn process(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> Option<Processed> {
        Some(Processed::Open(Block::new(
            BlockKind::Paragraph,
            line.span(),
            line.span(),
        )))
    }

    fn continues(
        &self,
        line: &LineInfo<'_>,
        block: &mut Block,
        ctx: &BlockContext<'_, '_>,
    ) -> Continuation {
        if is_blank_line(line.text) || ctx.other_rule_matches(line) {
            return Continuation::Reject;
        }
        block.content.end = line.end;
        Continuation::Continue
    }

    fn is_fallback(&self) -> bool {
        true
    }
}
