use crate::parsing::{
    blocks::{
        rule::{BlockContext, BlockRule, Continuation, Processed},
        types::{Block, BlockKind},
    },
    ranges::{MarkdownRange, RangeKind},
    text::{
        LineInfo, Span,
        classify::{MAX_MARKER_INDENT, is_blank_line, leading_spaces},
    },
};

/// Blockquotes: `>`-prefixed lines, nesting counted by consecutive markers.
///
/// Every quoted line carries its own marker and depth, and its remainder
/// becomes a child paragraph. Lines without a marker end the quote.
pub struct BlockQuoteRule;

impl BlockQuoteRule {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Reads the marker prefix of a line, returning `(depth, marker_len)`.
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`; depth 0 means
    /// the line is not quoted.
    pub fn strip_prefixes(s: &str) -> (u32, usize) {
        let b = s.as_bytes();
        let mut i = leading_spaces(s);
        if i > MAX_MARKER_INDENT {
            return (0, 0);
        }

        let mut depth = 0u32;
        while i < b.len() && b[i] == Self::PREFIX {
            depth += 1;
            i += 1;
            if i < b.len() && b[i] == b' ' {
                i += 1;
            }
        }

        if depth == 0 { (0, 0) } else { (depth, i) }
    }

    fn quote_line(block: &mut Block, line: &LineInfo<'_>, ctx: &BlockContext<'_, '_>) {
        let (depth, marker_len) = Self::strip_prefixes(line.text);
        let marker_end = line.start + marker_len;

        block.push_range(MarkdownRange::over(
            RangeKind::BlockquoteMarker,
            Span::new(line.start, marker_end),
        ));
        block.push_range(
            MarkdownRange::over(
                RangeKind::Blockquote,
                Span::new(line.start, ctx.end_with_terminator(line)),
            )
            .with_depth(depth),
        );

        if !is_blank_line(&line.text[marker_len..]) {
            let content = Span::new(marker_end, line.end);
            let mut child = Block::new(BlockKind::Paragraph, content, content);
            child.rule = ctx.registry.fallback();
            block.children.push(child);
        }
        block.content.end = line.end;
    }
}

impl BlockRule for BlockQuoteRule {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn matches(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> bool {
        Self::strip_prefixes(line.text).0 > 0
    }

    fn process(&self, line: &LineInfo<'_>, ctx: &BlockContext<'_, '_>) -> Option<Processed> {
        let (depth, marker_len) = Self::strip_prefixes(line.text);
        if depth == 0 {
            return None;
        }
        let content_start = line.start + marker_len;
        let mut block = Block::new(
            BlockKind::BlockQuote { depth },
            line.span(),
            Span::new(content_start, line.end),
        );
        Self::quote_line(&mut block, line, ctx);
        Some(Processed::Open(block))
    }

    fn continues(
        &self,
        line: &LineInfo<'_>,
        block: &mut Block,
        ctx: &BlockContext<'_, '_>,
    ) -> Continuation {
        if Self::strip_prefixes(line.text).0 == 0 {
            return Continuation::Reject;
        }
        Self::quote_line(block, line, ctx);
        Continuation::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", (0, 0))]
    #[case("> hello", (1, 2))]
    #[case(">hello", (1, 1))]
    #[case("> > hello", (2, 4))]
    #[case(">> hello", (2, 3))]
    #[case("   > x", (1, 5))]
    #[case("    > x", (0, 0))]
    #[case(">", (1, 1))]
    #[case(">\tx", (1, 1))]
    fn prefixes(#[case] text: &str, #[case] expected: (u32, usize)) {
        assert_eq!(BlockQuoteRule::strip_prefixes(text), expected);
    }
}
