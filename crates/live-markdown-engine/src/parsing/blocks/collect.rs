use crate::parsing::ranges::MarkdownRange;

use super::types::{Block, BlockKind};

/// Pre-order walk over blocks and their children, without recursion.
pub fn walk(blocks: &[Block]) -> impl Iterator<Item = &Block> {
    let mut stack: Vec<&Block> = blocks.iter().rev().collect();
    std::iter::from_fn(move || {
        let block = stack.pop()?;
        stack.extend(block.children.iter().rev());
        Some(block)
    })
}

/// Appends the block-phase ranges of `blocks` to `out`: per block its syntax
/// ranges, then its kind range, then its children's.
pub fn block_ranges(blocks: &[Block], out: &mut Vec<MarkdownRange>) {
    for block in walk(blocks) {
        out.extend_from_slice(&block.syntax_ranges);
        out.extend(block.kind_range());
    }
}

/// Blocks whose `content` goes to the inline parser, in document order.
///
/// Raw zones are skipped; containers hand over to their children.
pub fn inline_targets(blocks: &[Block]) -> impl Iterator<Item = &Block> {
    walk(blocks).filter(|b| {
        !b.kind.is_raw() && !b.is_container() && !matches!(b.kind, BlockKind::BlockQuote { .. })
    })
}
