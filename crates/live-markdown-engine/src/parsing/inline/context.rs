use crate::parsing::ranges::MarkdownRange;

/// Scan state for one block's content.
///
/// `base_offset` maps positions in `text` back to the document.
#[derive(Debug)]
pub struct InlineContext<'t> {
    pub text: &'t str,
    pub base_offset: usize,
    pub ranges: Vec<MarkdownRange>,
    /// Current byte position in `text`.
    pub position: usize,
    /// Literal text accumulated so far.
    pub output: String,
}

impl<'t> InlineContext<'t> {
    pub fn new(text: &'t str, base_offset: usize) -> Self {
        Self {
            text,
            base_offset,
            ranges: Vec::new(),
            position: 0,
            output: String::with_capacity(text.len()),
        }
    }

    /// Records a block-local range, translating it to document offsets.
    pub fn emit(&mut self, range: MarkdownRange) {
        self.ranges.push(range.translate(self.base_offset));
    }

    pub fn push_text(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn remaining(&self) -> &'t str {
        self.text.get(self.position..).unwrap_or("")
    }
}
