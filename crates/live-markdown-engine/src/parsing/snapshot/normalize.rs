use serde::Serialize;

use crate::parsing::{
    blocks::{Block, BlockKind, Fence, ListKind},
    ranges::MarkdownRange,
};

#[derive(Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
    pub ranges: Vec<MarkdownRange>,
}

#[derive(Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub start: usize,
    pub end: usize,
    pub content_start: usize,
    pub content_end: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockSnap>,
}

pub fn normalize(blocks: &[Block], ranges: &[MarkdownRange]) -> Snap {
    Snap {
        blocks: blocks.iter().map(block_snap).collect(),
        ranges: ranges.to_vec(),
    }
}

fn block_snap(b: &Block) -> BlockSnap {
    BlockSnap {
        kind: kind_label(&b.kind),
        start: b.span.start,
        end: b.span.end,
        content_start: b.content.start,
        content_end: b.content.end,
        children: b.children.iter().map(block_snap).collect(),
    }
}

fn kind_label(kind: &BlockKind) -> String {
    match kind {
        BlockKind::Heading { level } => format!("heading-{level}"),
        BlockKind::FencedCode(Fence { fence_char, fence_length, .. }) => {
            let name = if *fence_char == '`' { "backtick" } else { "tilde" };
            format!("fence-{name}-{fence_length}")
        }
        BlockKind::IndentedCode => "indented-code".into(),
        BlockKind::BlockQuote { depth } => format!("quote-{depth}"),
        BlockKind::ListItem(marker) => {
            let base = match marker.kind {
                ListKind::Bullet(_) => "bullet",
                ListKind::Ordered { .. } => "ordered",
            };
            match marker.task {
                Some(_) => format!("{base}-task"),
                None => base.into(),
            }
        }
        BlockKind::ThematicBreak => "thematic-break".into(),
        BlockKind::Paragraph => "paragraph".into(),
        BlockKind::Extension(name) => format!("extension-{name}"),
    }
}
