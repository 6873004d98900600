use crate::parsing::{
    blocks::{
        rule::{BlockContext, BlockRule, Continuation, Processed},
        types::{Block, BlockKind, Fence},
    },
    text::{
        LineInfo, Span,
        classify::{MAX_MARKER_INDENT, leading_spaces},
    },
};

/// Fenced code blocks opened by three or more backticks or tildes.
pub struct CodeFenceRule;

impl CodeFenceRule {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_LENGTH: usize = 3;

    /// Reads an opening fence, returning `(indent, fence char, run length)`.
    ///
    /// A backtick fence whose info string contains a backtick is not a fence.
    pub fn opening(text: &str) -> Option<(usize, char, usize)> {
        let indent = leading_spaces(text);
        if indent > MAX_MARKER_INDENT {
            return None;
        }
        let rest = &text[indent..];
        let fence_char = rest.chars().next().filter(|&c| c == Self::BACKTICK || c == Self::TILDE)?;
        let run = rest.bytes().take_while(|&b| b == fence_char as u8).count();
        if run < Self::MIN_LENGTH {
            return None;
        }
        if fence_char == Self::BACKTICK && rest[run..].contains(Self::BACKTICK) {
            return None;
        }
        Some((indent, fence_char, run))
    }

    /// Whether `text` closes a fence opened with `fence`.
    ///
    /// Up to three leading spaces, at least as many fence characters, then
    /// only spaces or tabs.
    pub fn closes(fence: &Fence, text: &str) -> bool {
        let indent = leading_spaces(text);
        if indent > MAX_MARKER_INDENT {
            return false;
        }
        let rest = &text[indent..];
        let run = rest.bytes().take_while(|&b| b == fence.fence_char as u8).count();
        run >= fence.fence_length && rest[run..].bytes().all(|b| b == b' ' || b == b'\t')
    }
}

impl BlockRule for CodeFenceRule {
    fn name(&self) -> &'static str {
        "fenced-code"
    }

    fn matches(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> bool {
        Self::opening(line.text).is_some()
    }

    fn process(&self, line: &LineInfo<'_>, ctx: &BlockContext<'_, '_>) -> Option<Processed> {
        let (indent, fence_char, fence_length) = Self::opening(line.text)?;

        let info_raw = &line.text[indent + fence_length..];
        let info_lead = info_raw.len() - info_raw.trim_start().len();
        let info_start = line.start + indent + fence_length + info_lead;
        let info = Span::new(info_start, info_start + info_raw.trim().len());

        let content_start = if ctx.has_next_line() {
            ctx.end_with_terminator(line)
        } else {
            line.end
        };

        let mut block = Block::new(
            BlockKind::FencedCode(Fence {
                fence_char,
                fence_length,
                indent_length: indent,
                info,
                is_open: true,
            }),
            line.span(),
            Span::empty(content_start),
        );
        block.push_syntax(line.span());
        Some(Processed::Open(block))
    }

    fn continues(
        &self,
        line: &LineInfo<'_>,
        block: &mut Block,
        ctx: &BlockContext<'_, '_>,
    ) -> Continuation {
        let BlockKind::FencedCode(fence) = &block.kind else {
            return Continuation::Reject;
        };

        if Self::closes(fence, line.text) {
            if let Some(prev) = ctx.previous_line() {
                block.content.end = block.content.start.max(prev.end);
            }
            block.push_syntax(line.span());
            return Continuation::Finish;
        }

        block.content.end = line.end;
        Continuation::Continue
    }

    fn survives_blank_line(&self, block: &Block, _ctx: &BlockContext<'_, '_>) -> bool {
        matches!(block.kind, BlockKind::FencedCode(Fence { is_open: true, .. }))
    }

    fn finalize(&self, block: &mut Block, _ctx: &BlockContext<'_, '_>) {
        if let BlockKind::FencedCode(fence) = &mut block.kind {
            fence.is_open = false;
        }
        if block.content.start > block.span.end {
            block.content = Span::empty(block.span.end);
        }
    }
}
