use std::fmt;

use serde::{Deserialize, Serialize};

/// What a [`MarkdownRange`](super::MarkdownRange) styles.
///
/// The serialized names are the wire names hosts switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeKind {
    /// Markup characters (`#`, `**`, fences, brackets...).
    Syntax,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    /// Code block content.
    Pre,
    /// Code span content.
    Code,
    Bold,
    Italic,
    Strikethrough,
    Blockquote,
    BlockquoteMarker,
    /// Link destination.
    Link,
    InlineImage,
    ListBullet,
    ListNumber,
    TaskChecked,
    TaskUnchecked,
    TaskContentChecked,

    // Reserved: emitted only by rules hosts opt into.
    ThematicBreak,
    Table,
    TableRow,
    TableCell,
    TablePipe,
    TableDelimiter,
}

impl RangeKind {
    /// Heading kind for a level in `1..=6`; levels outside clamp.
    pub fn heading(level: u8) -> Self {
        match level {
            0 | 1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            _ => Self::H6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Pre => "pre",
            Self::Code => "code",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strikethrough => "strikethrough",
            Self::Blockquote => "blockquote",
            Self::BlockquoteMarker => "blockquote-marker",
            Self::Link => "link",
            Self::InlineImage => "inline-image",
            Self::ListBullet => "list-bullet",
            Self::ListNumber => "list-number",
            Self::TaskChecked => "task-checked",
            Self::TaskUnchecked => "task-unchecked",
            Self::TaskContentChecked => "task-content-checked",
            Self::ThematicBreak => "thematic-break",
            Self::Table => "table",
            Self::TableRow => "table-row",
            Self::TableCell => "table-cell",
            Self::TablePipe => "table-pipe",
            Self::TableDelimiter => "table-delimiter",
        }
    }

    /// Kinds no built-in rule emits yet.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::ThematicBreak
                | Self::Table
                | Self::TableRow
                | Self::TableCell
                | Self::TablePipe
                | Self::TableDelimiter
        )
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
