use crate::parsing::{
    inline::{
        context::InlineContext,
        types::{InlineMatch, InlineRule},
    },
    ranges::{MarkdownRange, RangeKind},
    text::classify::{find_link_destination_end, find_link_title_end, skip_link_whitespace},
};

/// Inline links: `[label](destination "title")`.
///
/// The title is consumed but not ranged. Reference links are not supported.
pub struct Link;

impl Link {
    /// Offset of the `]` closing the label opened at `open`, honoring nested
    /// brackets and backslash escapes.
    pub fn label_end(text: &str, open: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let mut depth = 0usize;
        let mut i = open + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 1,
                b'[' => depth += 1,
                b']' if depth == 0 => return Some(i),
                b']' => depth -= 1,
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// Parses a link whose `[` is at `pos`, returning its ranges and the
    /// offset just past the closing `)`.
    pub fn parse_at(text: &str, pos: usize) -> Option<(Vec<MarkdownRange>, usize)> {
        let bytes = text.as_bytes();
        if bytes.get(pos) != Some(&b'[') {
            return None;
        }
        let close = Self::label_end(text, pos)?;
        if bytes.get(close + 1) != Some(&b'(') {
            return None;
        }

        let dest_start = skip_link_whitespace(bytes, close + 2);
        let dest_end = find_link_destination_end(text, dest_start)?;
        let destination = if bytes.get(dest_start) == Some(&b'<') {
            MarkdownRange::new(RangeKind::Link, dest_start + 1, dest_end - dest_start - 2)
        } else {
            MarkdownRange::new(RangeKind::Link, dest_start, dest_end - dest_start)
        };

        let mut after = skip_link_whitespace(bytes, dest_end);
        if after > dest_end && matches!(bytes.get(after), Some(b'"' | b'\'' | b'(')) {
            after = skip_link_whitespace(bytes, find_link_title_end(text, after)?);
        }
        if bytes.get(after) != Some(&b')') {
            return None;
        }

        let ranges = vec![
            MarkdownRange::syntax(pos, 1),
            MarkdownRange::syntax(close, 2),
            destination,
            MarkdownRange::syntax(after, 1),
        ];
        Some((ranges, after + 1))
    }
}

impl InlineRule for Link {
    fn name(&self) -> &'static str {
        "link"
    }

    fn triggers(&self) -> &'static [char] {
        &['[']
    }

    fn parse<'t>(&self, text: &'t str, pos: usize, _ctx: &InlineContext<'_>) -> Option<InlineMatch<'t>> {
        let (ranges, end) = Self::parse_at(text, pos)?;
        Some(InlineMatch::verbatim(text, pos, end - pos, ranges))
    }
}
