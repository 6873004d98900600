use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    inline::{
        context::InlineContext,
        types::{InlineMatch, InlineRule},
    },
    ranges::{MarkdownRange, RangeKind},
};

static URI_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn uri_regex() -> &'static Regex {
    URI_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]{1,31}:[^\s<>]*$").expect("Invalid URI regex")
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~\-]+@[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("Invalid email regex")
    })
}

/// `<scheme:...>` and `<user@example.com>` autolinks.
pub struct Autolink;

impl Autolink {
    pub fn is_uri(content: &str) -> bool {
        uri_regex().is_match(content)
    }

    pub fn is_email(content: &str) -> bool {
        email_regex().is_match(content)
    }
}

impl InlineRule for Autolink {
    fn name(&self) -> &'static str {
        "autolink"
    }

    fn triggers(&self) -> &'static [char] {
        &['<']
    }

    fn parse<'t>(&self, text: &'t str, pos: usize, _ctx: &InlineContext<'_>) -> Option<InlineMatch<'t>> {
        let rest = text.get(pos..)?.strip_prefix('<')?;
        let close = pos + 1 + rest.find('>')?;
        let content = &text[pos + 1..close];
        if !Self::is_uri(content) && !Self::is_email(content) {
            return None;
        }

        let ranges = vec![
            MarkdownRange::syntax(pos, 1),
            MarkdownRange::new(RangeKind::Link, pos + 1, content.len()),
            MarkdownRange::syntax(close, 1),
        ];
        Some(InlineMatch::verbatim(text, pos, close + 1 - pos, ranges))
    }
}
