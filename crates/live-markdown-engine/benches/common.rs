// Benchmark helpers; each bench target compiles this module separately, so
// unused helpers warn without the allow.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- [x] Done task\n1. Numbered [link](https://example.com)\n\n> Quoted ~~text~~\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// One long paragraph dense with inline markup.
#[allow(dead_code)]
pub fn generate_inline_heavy(words: usize) -> String {
    let markup = ["**bold**", "*italic*", "`code`", "~~gone~~", "[a](b)", "<https://x.io>", "plain"];
    markup.iter().cycle().take(words).copied().collect::<Vec<_>>().join(" ")
}

/// Unmatched delimiters: every opener scans to the end and declines.
#[allow(dead_code)]
pub fn generate_unclosed(size: usize) -> String {
    "*a **b `c [d ~~e ".repeat(size)
}
