use crate::parsing::{
    blocks::{
        rule::{BlockContext, BlockRule, Processed},
        types::{Block, BlockKind},
    },
    text::{
        LineInfo,
        classify::{MAX_MARKER_INDENT, leading_spaces},
    },
};

/// Thematic breaks (`---`, `***`, `___`).
///
/// Not part of the built-in set; hosts that want `thematic-break` ranges
/// register it themselves, ahead of the list item rule so `* * *` is not
/// read as a bullet.
pub struct ThematicBreakRule;

impl ThematicBreakRule {
    pub fn is_break(text: &str) -> bool {
        let indent = leading_spaces(text);
        if indent > MAX_MARKER_INDENT {
            return false;
        }
        let rest = &text[indent..];
        let Some(marker) = rest.bytes().next().filter(|b| matches!(b, b'-' | b'*' | b'_')) else {
            return false;
        };

        let mut count = 0;
        for b in rest.bytes() {
            match b {
                b' ' | b'\t' => {}
                b if b == marker => count += 1,
                _ => return false,
            }
        }
        count >= 3
    }
}

impl BlockRule for ThematicBreakRule {
    fn name(&self) -> &'static str {
        "thematic-break"
    }

    fn matches(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> bool {
        Self::is_break(line.text)
    }

    fn process(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> Option<Processed> {
        Some(Processed::Closed(Block::new(
            BlockKind::ThematicBreak,
            line.span(),
            line.span(),
        )))
    }
}
