use live_markdown_engine::{
    MarkdownParser, RangeKind, parse_markdown,
    parsing::snapshot,
};

#[test]
fn fixture_heading_paragraph() {
    assert_fixture("heading_paragraph");
}

#[test]
fn fixture_quote_fence() {
    assert_fixture("quote_fence");
}

#[test]
fn fixture_tasks_links() {
    assert_fixture("tasks_links");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let parser = MarkdownParser::builtin();
    let blocks = parser.parse_blocks(&md);
    snapshot::invariants(&md, &blocks);

    let ranges = parser.parse(&md);
    snapshot::check_ranges(&md, &ranges);

    let snap = snapshot::normalize(&blocks, &ranges);
    insta::assert_yaml_snapshot!(name, snap);
}

/// Every range slices back to text without splitting a character.
#[test]
fn ranges_slice_cleanly_in_multibyte_text() {
    let md = "# Café **über** `日本`";
    for range in parse_markdown(md) {
        assert!(md.get(range.start..range.end()).is_some(), "{range:?}");
    }
}

/// Code spans shield their content from emphasis.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let ranges = parse_markdown("`**not bold**`");
    assert!(ranges.iter().all(|r| r.kind != RangeKind::Bold));
    assert!(ranges.iter().any(|r| r.kind == RangeKind::Code));
}
