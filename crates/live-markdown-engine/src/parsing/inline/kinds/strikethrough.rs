use crate::parsing::{
    inline::{
        context::InlineContext,
        nested::nested_emphasis,
        types::{InlineMatch, InlineRule},
    },
    ranges::{MarkdownRange, RangeKind},
};

/// `~~struck~~`; the content is rescanned once for bold and italic.
pub struct Strikethrough;

impl Strikethrough {
    pub const DELIMITER: &'static str = "~~";
}

impl InlineRule for Strikethrough {
    fn name(&self) -> &'static str {
        "strikethrough"
    }

    fn triggers(&self) -> &'static [char] {
        &['~']
    }

    fn parse<'t>(&self, text: &'t str, pos: usize, _ctx: &InlineContext<'_>) -> Option<InlineMatch<'t>> {
        if !text.get(pos..)?.starts_with(Self::DELIMITER) {
            return None;
        }
        let inner = pos + Self::DELIMITER.len();
        let close = inner + text[inner..].find(Self::DELIMITER)?;
        if close == inner {
            return None;
        }

        let mut ranges = vec![
            MarkdownRange::syntax(pos, 2),
            MarkdownRange::new(RangeKind::Strikethrough, inner, close - inner),
        ];
        ranges.extend(nested_emphasis(&text[inner..close], inner, true));
        ranges.push(MarkdownRange::syntax(close, 2));

        Some(InlineMatch::verbatim(text, pos, close + 2 - pos, ranges))
    }
}
