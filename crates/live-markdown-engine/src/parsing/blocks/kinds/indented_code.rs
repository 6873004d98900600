use crate::parsing::{
    blocks::{
        rule::{BlockContext, BlockRule, Continuation, Processed},
        types::{Block, BlockKind},
    },
    text::{LineInfo, Span, classify::code_indent_len},
};

/// Code blocks made of lines indented to column four or more.
///
/// Indentation is marked as syntax on every line; the block as a whole is
/// `pre`. Blank lines stay inside the block only when more code follows.
pub struct IndentedCodeRule;

impl IndentedCodeRule {
    fn mark_indent(block: &mut Block, line: &LineInfo<'_>) -> bool {
        let indent = code_indent_len(line.text);
        if indent == 0 {
            return false;
        }
        block.push_syntax(Span::new(line.start, line.start + indent));
        true
    }
}

impl BlockRule for IndentedCodeRule {
    fn name(&self) -> &'static str {
        "indented-code"
    }

    fn matches(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> bool {
        code_indent_len(line.text) > 0
    }

    fn process(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> Option<Processed> {
        let mut block = Block::new(BlockKind::IndentedCode, line.span(), line.span());
        Self::mark_indent(&mut block, line).then_some(Processed::Open(block))
    }

    fn continues(
        &self,
        line: &LineInfo<'_>,
        block: &mut Block,
        _ctx: &BlockContext<'_, '_>,
    ) -> Continuation {
        if !Self::mark_indent(block, line) {
            return Continuation::Reject;
        }
        block.content.end = line.end;
        Continuation::Continue
    }

    fn survives_blank_line(&self, _block: &Block, ctx: &BlockContext<'_, '_>) -> bool {
        ctx.next_non_blank()
            .is_some_and(|next| code_indent_len(next.text) > 0)
    }

    fn interrupts_paragraph(&self) -> bool {
        false
    }
}
