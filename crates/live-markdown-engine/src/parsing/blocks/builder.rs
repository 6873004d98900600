use crate::parsing::text::{LineInfo, classify::is_blank_line};

use super::{
    registry::BlockRegistry,
    rule::{BlockContext, Continuation, Processed},
    types::{Block, BlockKind, RuleId},
};

/// Drives a [`BlockRegistry`] across the lines of one document.
///
/// Holds the open-block stack (innermost last) and the completed list.
/// Created per parse and consumed by [`finish`](Self::finish).
pub struct BlockBuilder<'a, 'src> {
    registry: &'a BlockRegistry,
    lines: &'a [LineInfo<'src>],
    open: Vec<Block>,
    out: Vec<Block>,
}

impl<'a, 'src> BlockBuilder<'a, 'src> {
    pub fn new(registry: &'a BlockRegistry, lines: &'a [LineInfo<'src>]) -> Self {
        Self {
            registry,
            lines,
            open: vec![],
            out: vec![],
        }
    }

    /// Runs every line through the builder.
    pub fn build(registry: &'a BlockRegistry, lines: &'a [LineInfo<'src>]) -> Vec<Block> {
        let mut builder = Self::new(registry, lines);
        for index in 0..lines.len() {
            builder.push(index);
        }
        builder.finish()
    }

    /// Feeds line `index`.
    pub fn push(&mut self, index: usize) {
        let Some(line) = self.lines.get(index) else {
            return;
        };

        if is_blank_line(line.text) {
            self.close_on_blank(index);
            return;
        }

        if self.continue_open(line, index) {
            return;
        }

        self.open_new(line, index);
    }

    /// Closes whatever is still open and returns the completed blocks,
    /// ordered by start.
    pub fn finish(mut self) -> Vec<Block> {
        let end = self.lines.len();
        while let Some(block) = self.open.pop() {
            self.close(block, end);
        }
        self.out
    }

    fn ctx(&self, index: usize, rule: Option<RuleId>) -> BlockContext<'a, 'src> {
        BlockContext {
            lines: self.lines,
            index,
            registry: self.registry,
            rule,
        }
    }

    fn close_on_blank(&mut self, index: usize) {
        let mut i = self.open.len();
        while i > 0 {
            i -= 1;
            let block = &self.open[i];
            let survives = block
                .rule
                .and_then(|id| self.registry.get(id))
                .is_some_and(|rule| rule.survives_blank_line(block, &self.ctx(index, block.rule)));
            if !survives {
                let block = self.open.remove(i);
                self.close(block, index);
            }
        }
    }

    /// Offers the line to open blocks, innermost first. Blocks that reject
    /// it are closed.
    fn continue_open(&mut self, line: &LineInfo<'_>, index: usize) -> bool {
        let registry = self.registry;
        while let Some(mut block) = self.open.pop() {
            let ctx = self.ctx(index, block.rule);
            let answer = match block.rule.and_then(|id| registry.get(id)) {
                Some(rule) => rule.continues(line, &mut block, &ctx),
                None => Continuation::Reject,
            };

            match answer {
                Continuation::Continue => {
                    block.span.end = line.end;
                    self.open.push(block);
                    return true;
                }
                Continuation::Finish => {
                    block.span.end = line.end;
                    self.close(block, index);
                    return true;
                }
                Continuation::Reject => self.close(block, index),
            }
        }
        false
    }

    fn open_new(&mut self, line: &LineInfo<'_>, index: usize) {
        let registry = self.registry;
        for (id, rule) in registry.rules().iter().enumerate() {
            let ctx = self.ctx(index, Some(id));
            if !rule.matches(line, &ctx) {
                continue;
            }
            match rule.process(line, &ctx) {
                Some(Processed::Closed(mut block)) => {
                    block.rule = Some(id);
                    self.close(block, index);
                    return;
                }
                Some(Processed::Open(mut block)) => {
                    block.rule = Some(id);
                    self.open.push(block);
                    return;
                }
                None => {}
            }
        }

        log::warn!(
            "no block rule matched line {}; treating it as a paragraph",
            line.line_number
        );
        self.insert(Block::new(BlockKind::Paragraph, line.span(), line.span()));
    }

    fn close(&mut self, mut block: Block, index: usize) {
        let registry = self.registry;
        if let Some(rule) = block.rule.and_then(|id| registry.get(id)) {
            let ctx = self.ctx(index, block.rule);
            rule.finalize(&mut block, &ctx);
        }
        self.insert(block);
    }

    fn insert(&mut self, block: Block) {
        let at = self.out.partition_point(|b| b.span.start <= block.span.start);
        self.out.insert(at, block);
    }
}
