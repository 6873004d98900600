//! Whole-pipeline tests for the parser: documented scenarios, the length
//! guard, extension through custom rule sets, and property tests.


use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use crate::parsing::{
    MarkdownParser, ParserConfig, RuleSet,
    blocks::{
        BlockRegistry,
        kinds::{HeadingRule, ListItemRule, ParagraphRule, ThematicBreakRule},
    },
    inline::InlineRegistry,
    parse_markdown,
    ranges::{MarkdownRange, RangeKind},
    snapshot,
};

fn r(kind: RangeKind, start: usize, length: usize) -> MarkdownRange {
    MarkdownRange::new(kind, start, length)
}

fn parse_checked(source: &str) -> Vec<MarkdownRange> {
    let ranges = parse_markdown(source);
    snapshot::check_ranges(source, &ranges);
    ranges
}

#[test]
fn heading() {
    assert_eq!(
        parse_checked("# Hello"),
        vec![r(RangeKind::Syntax, 0, 2), r(RangeKind::H1, 2, 5)]
    );
}

#[test]
fn bold() {
    assert_eq!(
        parse_checked("**bold**"),
        vec![
            r(RangeKind::Syntax, 0, 2),
            r(RangeKind::Bold, 2, 4),
            r(RangeKind::Syntax, 6, 2)
        ]
    );
}

#[test]
fn fenced_code_spanning_lines() {
    assert_eq!(
        parse_checked("```\ncode\n```"),
        vec![
            r(RangeKind::Syntax, 0, 3),
            r(RangeKind::Pre, 4, 4),
            r(RangeKind::Syntax, 9, 3)
        ]
    );
}

#[test]
fn blockquote() {
    assert_eq!(
        parse_checked("> quoted"),
        vec![
            r(RangeKind::BlockquoteMarker, 0, 2),
            r(RangeKind::Blockquote, 0, 8).with_depth(1)
        ]
    );
}

#[test]
fn link() {
    assert_eq!(
        parse_checked("[text](http://x)"),
        vec![
            r(RangeKind::Syntax, 0, 1),
            r(RangeKind::Syntax, 5, 2),
            r(RangeKind::Link, 7, 8),
            r(RangeKind::Syntax, 15, 1)
        ]
    );
}

#[test]
fn image() {
    assert_eq!(
        parse_checked("x ![a](u)"),
        vec![
            r(RangeKind::InlineImage, 2, 7),
            r(RangeKind::Syntax, 2, 2),
            r(RangeKind::Syntax, 5, 2),
            r(RangeKind::Link, 7, 1),
            r(RangeKind::Syntax, 8, 1)
        ]
    );
}

#[test]
fn heading_closing_run_is_syntax() {
    assert_eq!(
        parse_checked("## T ##"),
        vec![
            r(RangeKind::Syntax, 0, 3),
            r(RangeKind::H2, 3, 1),
            r(RangeKind::Syntax, 4, 3)
        ]
    );
}

#[test]
fn heading_of_only_hashes_is_empty() {
    assert_eq!(parse_checked("# #"), vec![r(RangeKind::Syntax, 0, 3)]);
    assert_eq!(parse_checked("### ###"), vec![r(RangeKind::Syntax, 0, 7)]);
}

#[test]
fn blank_line_closes_blockquote() {
    assert_eq!(
        parse_checked("> q\n\n*a*"),
        vec![
            r(RangeKind::BlockquoteMarker, 0, 2),
            r(RangeKind::Blockquote, 0, 3).with_depth(1),
            r(RangeKind::Syntax, 5, 1),
            r(RangeKind::Italic, 6, 1),
            r(RangeKind::Syntax, 7, 1),
        ]
    );
}

#[test]
fn blockquote_interrupts_paragraph() {
    assert_eq!(
        parse_checked("text\n> q"),
        vec![
            r(RangeKind::BlockquoteMarker, 5, 2),
            r(RangeKind::Blockquote, 5, 3).with_depth(1),
        ]
    );
}

#[test]
fn list_marker_interrupts_paragraph() {
    assert_eq!(
        parse_checked("text\n- item"),
        vec![r(RangeKind::Syntax, 5, 2), r(RangeKind::ListBullet, 5, 1)]
    );
}

#[test]
fn long_delimiter_runs_parse_in_linear_time() {
    for fill in [" ", "*", "`", "~", "_"] {
        let source = format!("a{}b", fill.repeat(200_000));
        let started = Instant::now();
        let ranges = parse_markdown(&source);
        let elapsed = started.elapsed();

        snapshot::check_ranges(&source, &ranges);
        assert!(
            elapsed < Duration::from_secs(2),
            "{fill:?} run took {elapsed:?}"
        );
    }
}

#[test]
fn unterminated_emphasis() {
    assert_eq!(parse_checked("*no close"), vec![]);
}

#[test]
fn quote_lines_group_by_depth() {
    assert_eq!(
        parse_checked("> a\n> b"),
        vec![
            r(RangeKind::BlockquoteMarker, 0, 2),
            r(RangeKind::Blockquote, 0, 7).with_depth(1),
            r(RangeKind::BlockquoteMarker, 4, 2),
        ]
    );
    assert_eq!(
        parse_checked("> a\n>> b"),
        vec![
            r(RangeKind::BlockquoteMarker, 0, 2),
            r(RangeKind::Blockquote, 0, 4).with_depth(1),
            r(RangeKind::BlockquoteMarker, 4, 3),
            r(RangeKind::Blockquote, 4, 4).with_depth(2),
        ]
    );
}

#[test]
fn heading_markup_groups_with_inline_syntax() {
    assert_eq!(
        parse_checked("# **x**"),
        vec![
            r(RangeKind::Syntax, 0, 4),
            r(RangeKind::H1, 2, 5),
            r(RangeKind::Bold, 4, 1),
            r(RangeKind::Syntax, 5, 2),
        ]
    );
}

#[test]
fn checked_task() {
    assert_eq!(
        parse_checked("- [x] done"),
        vec![
            r(RangeKind::Syntax, 0, 6),
            r(RangeKind::TaskChecked, 0, 6),
            r(RangeKind::TaskContentChecked, 6, 4),
        ]
    );
}

#[test]
fn code_blocks_are_not_inline_parsed() {
    let ranges = parse_checked("```\n**not bold**\n```\n    *nor this*");
    assert!(ranges.iter().all(|r| r.kind != RangeKind::Bold && r.kind != RangeKind::Italic));
}

#[test]
fn list_item_content_is_inline_parsed() {
    let ranges = parse_checked("1. a `b`");
    assert!(ranges.contains(&r(RangeKind::Code, 6, 1)));
    assert!(ranges.contains(&r(RangeKind::ListNumber, 0, 2)));
}

#[test]
fn crlf_input() {
    assert_eq!(
        parse_checked("# A\r\n**b**\r\n"),
        vec![
            r(RangeKind::Syntax, 0, 2),
            r(RangeKind::H1, 2, 1),
            r(RangeKind::Syntax, 5, 2),
            r(RangeKind::Bold, 7, 1),
            r(RangeKind::Syntax, 8, 2),
        ]
    );
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(parse_markdown(""), vec![]);
}

#[test]
fn length_guard() {
    let parser = MarkdownParser::builtin().with_config(ParserConfig {
        max_parsable_length: 8,
    });
    assert_eq!(parser.parse("**bold**").len(), 3);
    assert_eq!(parser.parse("**bold** "), vec![]);
    assert!(parser.parse_blocks("# too long!").is_empty());
}

#[test]
fn default_ceiling() {
    assert_eq!(ParserConfig::default().max_parsable_length, 500_000);
    let oversized = "a".repeat(500_001);
    assert_eq!(parse_markdown(&oversized), vec![]);
}

#[test]
fn deterministic() {
    let source = "# T\n\n> q *i*\n\n- [ ] t\n\n```\nx\n```\n[l](u) ~~s~~";
    assert_eq!(parse_markdown(source), parse_markdown(source));
}

#[test]
fn parser_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MarkdownParser>();
}

#[test]
fn custom_rule_set_enables_thematic_breaks() {
    let mut blocks = BlockRegistry::new();
    blocks.register(HeadingRule).unwrap();
    blocks.register(ThematicBreakRule).unwrap();
    blocks.register(ListItemRule).unwrap();
    blocks.register(ParagraphRule).unwrap();
    let parser = MarkdownParser::new(RuleSet::new(blocks, InlineRegistry::builtin()));

    assert_eq!(
        parser.parse("***\n# h"),
        vec![
            r(RangeKind::ThematicBreak, 0, 3),
            r(RangeKind::Syntax, 4, 2),
            r(RangeKind::H1, 6, 1),
        ]
    );
}

#[test]
fn empty_rule_set_still_parses() {
    let parser = MarkdownParser::new(RuleSet::default());
    assert_eq!(parser.parse("# not a heading"), vec![]);
    assert_eq!(parser.parse_blocks("a\n\nb").len(), 2);
}
