use crate::parsing::ranges::MarkdownRange;

use super::context::InlineContext;

/// A successful inline rule application at one position.
///
/// Range offsets are local to the scanned text; the parser translates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch<'t> {
    pub ranges: Vec<MarkdownRange>,
    /// Bytes consumed from the match position; always at least one.
    pub consumed: usize,
    /// Literal text appended to the output for the consumed source.
    pub text: &'t str,
}

impl<'t> InlineMatch<'t> {
    /// A match whose literal text is exactly `text[pos..pos + consumed]`.
    pub fn verbatim(text: &'t str, pos: usize, consumed: usize, ranges: Vec<MarkdownRange>) -> Self {
        Self {
            ranges,
            consumed,
            text: &text[pos..pos + consumed],
        }
    }
}

/// An inline grammar rule, dispatched on its trigger characters.
pub trait InlineRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Characters that make the scanner try this rule. Must not be empty.
    fn triggers(&self) -> &'static [char];

    /// Tries to match at byte offset `pos` of `text`; `None` declines and the
    /// character is emitted literally.
    fn parse<'t>(&self, text: &'t str, pos: usize, ctx: &InlineContext<'_>) -> Option<InlineMatch<'t>>;
}
