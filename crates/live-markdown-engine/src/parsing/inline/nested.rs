//! One-level rescan of captured emphasis content.
//!
//! Bold and strikethrough consume their whole span, so delimiters inside it
//! never reach the main scanner. This pass looks for single (and optionally
//! double) delimiter pairs in the captured text and reports them. It never
//! recurses.

use crate::parsing::{
    inline::kinds::Emphasis,
    ranges::{MarkdownRange, RangeKind},
    text::classify::char_at,
};

/// Emphasis ranges inside `content`, offset by `offset`.
///
/// Runs of one delimiter become italic; runs of two become bold when
/// `with_bold` is set and are skipped otherwise.
pub fn nested_emphasis(content: &str, offset: usize, with_bold: bool) -> Vec<MarkdownRange> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < content.len() {
        let c = char_at(content, i);
        if !Emphasis::is_delimiter(c) {
            i += c.len_utf8();
            continue;
        }

        let n = Emphasis::run_len(content, i, c);
        let kind = match n {
            1 => Some(RangeKind::Italic),
            2 if with_bold => Some(RangeKind::Bold),
            _ => None,
        };

        let close = kind
            .filter(|_| Emphasis::can_open(c, content, i, i + n))
            .and_then(|_| Emphasis::find_closer(content, i + n, c, n))
            .filter(|&close| close > i + n);

        match (kind, close) {
            (Some(kind), Some(close)) => {
                out.push(MarkdownRange::syntax(offset + i, n));
                out.push(MarkdownRange::new(kind, offset + i + n, close - i - n));
                out.push(MarkdownRange::syntax(offset + close, n));
                i = close + n;
            }
            _ => i += n,
        }
    }

    out
}
