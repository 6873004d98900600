use crate::parsing::{
    inline::{
        context::InlineContext,
        types::{InlineMatch, InlineRule},
    },
    ranges::MarkdownRange,
    text::classify::newline_len,
};

/// Hard line breaks: `\` or two or more spaces right before a line break.
///
/// The marker is ranged as syntax; the line break is consumed with it.
pub struct HardBreak;

impl InlineRule for HardBreak {
    fn name(&self) -> &'static str {
        "hard-break"
    }

    fn triggers(&self) -> &'static [char] {
        &['\\', ' ']
    }

    fn parse<'t>(&self, text: &'t str, pos: usize, _ctx: &InlineContext<'_>) -> Option<InlineMatch<'t>> {
        let bytes = text.as_bytes();
        let marker = match bytes.get(pos)? {
            b'\\' => 1,
            // Only the first space of a run counts it; later ones decline.
            b' ' if pos > 0 && bytes[pos - 1] == b' ' => return None,
            b' ' => {
                let spaces = bytes[pos..].iter().take_while(|&&b| b == b' ').count();
                if spaces < 2 {
                    return None;
                }
                spaces
            }
            _ => return None,
        };
        let newline = newline_len(bytes, pos + marker)?;

        Some(InlineMatch::verbatim(
            text,
            pos,
            marker + newline,
            vec![MarkdownRange::syntax(pos, marker)],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        inline::{InlineRegistry, parse_inline},
        ranges::RangeKind,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a\\\nb", Some((1, 1)))]
    #[case("a   \nb", Some((1, 3)))]
    #[case("a  \r\nb", Some((1, 2)))]
    #[case("a \nb", None)]
    #[case("a  ", None)]
    #[case("a\\b", None)]
    fn breaks(#[case] text: &str, #[case] expected: Option<(usize, usize)>) {
        let out = parse_inline(&InlineRegistry::builtin(), text, 0);
        let found = out
            .ranges
            .iter()
            .find(|r| r.kind == RangeKind::Syntax)
            .map(|r| (r.start, r.length));
        assert_eq!(found, expected);
        assert_eq!(out.output, text);
    }

    #[test]
    fn only_the_first_space_of_a_run_is_tried() {
        let text = "a   \nb";
        let ctx = InlineContext::new(text, 0);
        assert_eq!(HardBreak.parse(text, 1, &ctx).map(|m| m.consumed), Some(4));
        assert!(HardBreak.parse(text, 2, &ctx).is_none());
        assert!(HardBreak.parse(text, 3, &ctx).is_none());
    }

    #[test]
    fn long_space_run_before_newline() {
        let text = format!("a{}\nb", " ".repeat(1000));
        let out = parse_inline(&InlineRegistry::builtin(), &text, 0);
        assert_eq!(
            out.ranges,
            vec![MarkdownRange::syntax(1, 1000)]
        );
        assert_eq!(out.output, text);
    }
}
