use serde::{Deserialize, Serialize};

use super::RangeKind;
use crate::parsing::text::Span;

/// Column alignment declared by a table delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableAlignment {
    Left,
    Center,
    Right,
}

/// Cell metadata carried by table ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableCell {
    pub column: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TableAlignment>,
    pub column_count: u32,
}

/// A typed annotation over `start..start + length` of the source.
///
/// Offsets are UTF-8 byte offsets into the parsed `&str`. Ranges may overlap:
/// a bold span and the italic span nested in it are both reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkdownRange {
    pub kind: RangeKind,
    pub start: usize,
    pub length: usize,
    /// Blockquote nesting depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableCell>,
}

impl MarkdownRange {
    pub fn new(kind: RangeKind, start: usize, length: usize) -> Self {
        Self {
            kind,
            start,
            length,
            depth: None,
            table: None,
        }
    }

    pub fn syntax(start: usize, length: usize) -> Self {
        Self::new(RangeKind::Syntax, start, length)
    }

    /// A range covering `span`.
    pub fn over(kind: RangeKind, span: Span) -> Self {
        Self::new(kind, span.start, span.len())
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_table(mut self, cell: TableCell) -> Self {
        self.table = Some(cell);
        self
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end())
    }

    /// Shifts the range by `offset` (block-local to document-global).
    pub fn translate(mut self, offset: usize) -> Self {
        self.start += offset;
        self
    }

    /// Whether two ranges may be merged by the grouping pass.
    pub fn same_style(&self, other: &Self) -> bool {
        self.kind == other.kind && self.depth == other.depth && self.table == other.table
    }
}
