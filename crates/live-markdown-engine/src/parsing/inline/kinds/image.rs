use crate::parsing::{
    inline::{
        context::InlineContext,
        kinds::Link,
        types::{InlineMatch, InlineRule},
    },
    ranges::{MarkdownRange, RangeKind},
};

/// Inline images: `!` followed by a link.
pub struct Image;

impl InlineRule for Image {
    fn name(&self) -> &'static str {
        "image"
    }

    fn triggers(&self) -> &'static [char] {
        &['!']
    }

    fn parse<'t>(&self, text: &'t str, pos: usize, _ctx: &InlineContext<'_>) -> Option<InlineMatch<'t>> {
        if text.as_bytes().get(pos) != Some(&b'!') {
            return None;
        }
        let (link, end) = Link::parse_at(text, pos + 1)?;

        let mut ranges = Vec::with_capacity(link.len() + 1);
        ranges.push(MarkdownRange::new(RangeKind::InlineImage, pos, end - pos));
        ranges.push(MarkdownRange::syntax(pos, 2));
        // The link's own `[` is covered by `![`.
        ranges.extend(link.into_iter().skip(1));

        Some(InlineMatch::verbatim(text, pos, end - pos, ranges))
    }
}
