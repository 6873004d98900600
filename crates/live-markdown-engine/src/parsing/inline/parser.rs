use crate::parsing::ranges::MarkdownRange;

use super::{context::InlineContext, cursor::Cursor, registry::InlineRegistry};

/// Result of scanning one block's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineOutput {
    /// Document-offset ranges in production order.
    pub ranges: Vec<MarkdownRange>,
    /// Literal text; always equal to the scanned content.
    pub output: String,
}

/// Scans `text` (content starting at document offset `base`) once.
///
/// At a trigger character the registered rules are tried in order and the
/// first match wins; otherwise the character is copied and the scan moves
/// on. There is no delimiter stack: a rule that declines simply leaves its
/// opening character as literal text.
pub fn parse_inline(registry: &InlineRegistry, text: &str, base: usize) -> InlineOutput {
    let mut ctx = InlineContext::new(text, base);
    let mut cur = Cursor::new(text);

    while let Some(c) = cur.peek() {
        ctx.position = cur.i;
        if registry.is_trigger(c) {
            let found = registry
                .rules_for_trigger(c)
                .find_map(|rule| rule.parse(text, cur.i, &ctx).filter(|m| m.consumed > 0));
            if let Some(m) = found {
                ctx.push_text(m.text);
                for range in m.ranges {
                    ctx.emit(range);
                }
                cur.bump_n(m.consumed);
                continue;
            }
        }
        ctx.output.push(c);
        cur.bump();
    }

    InlineOutput {
        ranges: ctx.ranges,
        output: ctx.output,
    }
}
