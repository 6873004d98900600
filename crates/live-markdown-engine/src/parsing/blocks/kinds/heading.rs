use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::{
        rule::{BlockContext, BlockRule, Processed},
        types::{Block, BlockKind},
    },
    text::{LineInfo, Span},
};

static OPEN_REGEX: OnceLock<Regex> = OnceLock::new();
static CLOSE_REGEX: OnceLock<Regex> = OnceLock::new();

fn open_regex() -> &'static Regex {
    OPEN_REGEX.get_or_init(|| Regex::new(r"^( {0,3})(#{1,6})(?:[ \t]+|$)").expect("Invalid heading regex"))
}

fn close_regex() -> &'static Regex {
    CLOSE_REGEX.get_or_init(|| Regex::new(r"(?:^|[ \t]+)#+[ \t]*$").expect("Invalid heading close regex"))
}

/// ATX headings: `# Title`, up to six `#`, optional closing `#` run.
pub struct HeadingRule;

impl BlockRule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn matches(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> bool {
        open_regex().is_match(line.text)
    }

    fn process(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> Option<Processed> {
        let caps = open_regex().captures(line.text)?;
        let indent = caps.get(1)?.len();
        let level = caps.get(2)?.len() as u8;
        let marker_end = caps.get(0)?.end();

        let rest = &line.text[marker_end..];
        let (content_len, closer) = match close_regex().find(rest) {
            Some(m) => (m.start(), Some(m.range())),
            None => (rest.trim_end_matches([' ', '\t']).len(), None),
        };

        let content_start = line.start + marker_end;
        let mut block = Block::new(
            BlockKind::Heading { level },
            line.span(),
            Span::new(content_start, content_start + content_len),
        );
        block.push_syntax(Span::new(line.start + indent, content_start));
        if let Some(closer) = closer {
            block.push_syntax(Span::new(content_start + closer.start, content_start + closer.end));
        }
        Some(Processed::Closed(block))
    }
}
