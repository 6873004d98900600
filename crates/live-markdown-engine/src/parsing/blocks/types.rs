use crate::parsing::{
    ranges::{MarkdownRange, RangeKind},
    text::Span,
};

/// Index of a rule inside its [`BlockRegistry`](super::BlockRegistry).
pub type RuleId = usize;

/// Opening fence facts recorded when a fenced code block opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    /// `` ` `` or `~`.
    pub fence_char: char,
    pub fence_length: usize,
    /// Leading spaces before the opening fence.
    pub indent_length: usize,
    /// Info string, trimmed.
    pub info: Span,
    /// Cleared when the closing fence is seen or the document ends.
    pub is_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet(char),
    Ordered { number: u32, delimiter: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Checked,
    Unchecked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub kind: ListKind,
    pub task: Option<TaskState>,
}

/// What a block is, together with the facts its rule recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading { level: u8 },
    FencedCode(Fence),
    IndentedCode,
    BlockQuote { depth: u32 },
    ListItem(ListMarker),
    ThematicBreak,
    Paragraph,
    /// Blocks produced by rules registered outside this crate.
    Extension(&'static str),
}

impl BlockKind {
    /// Raw zones: their content is never inline-parsed.
    pub fn is_raw(&self) -> bool {
        matches!(
            self,
            Self::FencedCode(_) | Self::IndentedCode | Self::ThematicBreak
        )
    }
}

/// A parsed block.
///
/// `span` covers every line the block absorbed (terminators excluded);
/// `content` is the part handed to the inline parser. `span` always contains
/// `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Owning rule; `None` only for the fallback paragraph built when no rule
    /// matched a line.
    pub rule: Option<RuleId>,
    pub span: Span,
    pub content: Span,
    pub children: Vec<Block>,
    /// Markup ranges found while the block was open.
    pub syntax_ranges: Vec<MarkdownRange>,
}

impl Block {
    pub fn new(kind: BlockKind, span: Span, content: Span) -> Self {
        Self {
            kind,
            rule: None,
            span,
            content,
            children: Vec::new(),
            syntax_ranges: Vec::new(),
        }
    }

    pub fn push_range(&mut self, range: MarkdownRange) {
        self.syntax_ranges.push(range);
    }

    pub fn push_syntax(&mut self, span: Span) {
        self.syntax_ranges.push(MarkdownRange::over(RangeKind::Syntax, span));
    }

    /// The semantic range a block contributes beyond its syntax ranges.
    pub fn kind_range(&self) -> Option<MarkdownRange> {
        let range = match self.kind {
            BlockKind::Heading { level } => {
                MarkdownRange::over(RangeKind::heading(level), self.content)
            }
            BlockKind::FencedCode(_) | BlockKind::IndentedCode => {
                MarkdownRange::over(RangeKind::Pre, self.content)
            }
            BlockKind::ThematicBreak => MarkdownRange::over(RangeKind::ThematicBreak, self.span),
            _ => return None,
        };
        (range.length > 0).then_some(range)
    }

    /// Blocks with children delegate inline content to them.
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }
}
