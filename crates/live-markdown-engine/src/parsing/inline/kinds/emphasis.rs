use crate::parsing::{
    inline::{
        context::InlineContext,
        nested::nested_emphasis,
        types::{InlineMatch, InlineRule},
    },
    ranges::{MarkdownRange, RangeKind},
    text::classify::{char_at, char_before, is_ascii_punctuation, is_unicode_whitespace},
};

/// `*` / `_` emphasis: one delimiter is italic, two bold, three both.
///
/// The closer is the first later run of exactly the opener's length that
/// may close. Bold content is rescanned once for nested italic.
pub struct Emphasis;

/// Flanking classification of the delimiter run `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flanking {
    pub left: bool,
    pub right: bool,
    pub before_punctuation: bool,
    pub after_punctuation: bool,
}

impl Flanking {
    pub fn of(text: &str, start: usize, end: usize) -> Self {
        let before = char_before(text, start);
        let after = char_at(text, end);
        let before_ws = is_unicode_whitespace(before);
        let after_ws = is_unicode_whitespace(after);
        let before_punctuation = is_ascii_punctuation(before);
        let after_punctuation = is_ascii_punctuation(after);

        Self {
            left: !after_ws && (!after_punctuation || before_ws || before_punctuation),
            right: !before_ws && (!before_punctuation || after_ws || after_punctuation),
            before_punctuation,
            after_punctuation,
        }
    }
}

impl Emphasis {
    pub const DELIMITERS: [char; 2] = ['*', '_'];

    pub fn is_delimiter(c: char) -> bool {
        Self::DELIMITERS.contains(&c)
    }

    /// Longest run an opener may have.
    pub const MAX_RUN: usize = 3;

    /// Length in bytes of the run of `delim` at `pos`.
    pub fn run_len(text: &str, pos: usize, delim: char) -> usize {
        Self::run_len_upto(text, pos, delim, usize::MAX)
    }

    /// Like [`run_len`](Self::run_len), but stops counting after `max`.
    pub fn run_len_upto(text: &str, pos: usize, delim: char, max: usize) -> usize {
        text.get(pos..).map_or(0, |rest| {
            rest.bytes().take(max).take_while(|&b| b == delim as u8).count()
        })
    }

    /// `_` may not open intraword unless preceded by punctuation.
    pub fn can_open(delim: char, text: &str, start: usize, end: usize) -> bool {
        let f = Flanking::of(text, start, end);
        f.left && (delim == '*' || !f.right || f.before_punctuation)
    }

    /// `_` may not close intraword unless followed by punctuation.
    pub fn can_close(delim: char, text: &str, start: usize, end: usize) -> bool {
        let f = Flanking::of(text, start, end);
        f.right && (delim == '*' || !f.left || f.after_punctuation)
    }

    /// Start of the first run of exactly `len` delimiters at or after `from`
    /// that can close.
    pub fn find_closer(text: &str, from: usize, delim: char, len: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let mut i = from;
        while i < bytes.len() {
            if bytes[i] != delim as u8 {
                i += 1;
                continue;
            }
            let run = Self::run_len(text, i, delim);
            if run == len && Self::can_close(delim, text, i, i + run) {
                return Some(i);
            }
            i += run;
        }
        None
    }
}

impl InlineRule for Emphasis {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn triggers(&self) -> &'static [char] {
        &Self::DELIMITERS
    }

    fn parse<'t>(&self, text: &'t str, pos: usize, _ctx: &InlineContext<'_>) -> Option<InlineMatch<'t>> {
        let delim = char_at(text, pos);
        if !Self::is_delimiter(delim) {
            return None;
        }

        // Longer runs decline so the scan retries one delimiter later. The
        // count is capped so each retry inside a long run stays constant time.
        let n = Self::run_len_upto(text, pos, delim, Self::MAX_RUN + 1);
        if n > Self::MAX_RUN || !Self::can_open(delim, text, pos, pos + n) {
            return None;
        }

        let inner = pos + n;
        let close = Self::find_closer(text, inner, delim, n)?;
        if close == inner {
            return None;
        }
        let content = MarkdownRange::new(RangeKind::Italic, inner, close - inner);

        let mut ranges = vec![MarkdownRange::syntax(pos, n)];
        match n {
            1 => ranges.push(content),
            2 => {
                ranges.push(MarkdownRange { kind: RangeKind::Bold, ..content });
                ranges.extend(nested_emphasis(&text[inner..close], inner, false));
            }
            _ => {
                ranges.push(MarkdownRange { kind: RangeKind::Bold, ..content });
                ranges.push(content);
            }
        }
        ranges.push(MarkdownRange::syntax(close, n));

        Some(InlineMatch::verbatim(text, pos, close + n - pos, ranges))
    }
}
