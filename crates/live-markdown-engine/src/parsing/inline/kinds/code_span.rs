use crate::parsing::{
    inline::{
        context::InlineContext,
        cursor::Cursor,
        types::{InlineMatch, InlineRule},
    },
    ranges::{MarkdownRange, RangeKind},
    text::classify::char_before,
};

/// Code spans: a backtick run closed by a run of the same length.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: char = '`';

    /// Byte range of the displayed content inside the delimiters: one
    /// leading and trailing space (or line break) are dropped as a pair,
    /// unless the content is only spaces.
    pub fn strip(content: &str) -> (usize, usize) {
        let lead = if content.starts_with("\r\n") {
            2
        } else {
            usize::from(content.starts_with([' ', '\n']))
        };
        let trail = if content.ends_with("\r\n") {
            2
        } else {
            usize::from(content.ends_with([' ', '\n']))
        };

        if lead > 0
            && trail > 0
            && lead + trail <= content.len()
            && !content.bytes().all(|x| x == b' ')
        {
            (lead, content.len() - trail)
        } else {
            (0, content.len())
        }
    }

    /// Content as a renderer shows it: stripped, with each line break
    /// collapsed to one space.
    pub fn display_text(content: &str) -> String {
        let (start, end) = Self::strip(content);
        content[start..end].replace("\r\n", " ").replace('\n', " ")
    }
}

impl InlineRule for CodeSpan {
    fn name(&self) -> &'static str {
        "code-span"
    }

    fn triggers(&self) -> &'static [char] {
        &[Self::TICK]
    }

    fn parse<'t>(&self, text: &'t str, pos: usize, _ctx: &InlineContext<'_>) -> Option<InlineMatch<'t>> {
        // Only whole runs open; a run's tail is never an opener.
        if char_before(text, pos) == Self::TICK {
            return None;
        }

        let mut cur = Cursor::new(text);
        cur.bump_n(pos);
        let open = cur.run_of(Self::TICK);
        if open == 0 {
            return None;
        }
        cur.bump_n(open);
        let inner_start = cur.i;

        while !cur.eof() {
            let run = cur.run_of(Self::TICK);
            if run == 0 {
                cur.bump();
                continue;
            }
            if run == open {
                let close = cur.i;
                let (from, to) = Self::strip(&text[inner_start..close]);
                let ranges = vec![
                    MarkdownRange::syntax(pos, open),
                    MarkdownRange::new(RangeKind::Code, inner_start + from, to - from),
                    MarkdownRange::syntax(close, open),
                ];
                return Some(InlineMatch::verbatim(text, pos, close + open - pos, ranges));
            }
            cur.bump_n(run);
        }
        None
    }
}
