//! The open-block chain and its per-line driver.

use smallvec::{smallvec, SmallVec};

use crate::cursor::Cursor;
use crate::inline::html_tag::HtmlTag;
use crate::limits::MAX_BLOCK_NESTING;

use super::kind::{Block, Continuation};
use super::open::open_block;

/// Root-anchored chain of the blocks open at the current line.
#[derive(Debug, Clone)]
pub struct BlockChain {
    blocks: SmallVec<[Block; 8]>,
    prev_blank: bool,
}

impl BlockChain {
    /// A chain holding only [`Block::Root`].
    pub fn new() -> Self {
        Self {
            blocks: smallvec![Block::Root],
            prev_blank: true,
        }
    }

    /// The open blocks, `Root` first.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Innermost open block.
    #[inline]
    pub fn last(&self) -> &Block {
        // Root is never removed.
        &self.blocks[self.blocks.len() - 1]
    }

    /// Whether the previous line was blank.
    #[inline]
    pub fn prev_blank(&self) -> bool {
        self.prev_blank
    }

    /// Drop every block but `Root`.
    pub fn reset(&mut self) {
        self.blocks.truncate(1);
        self.prev_blank = true;
    }

    /// Record a line that was consumed by a pending inline span and never
    /// reached block processing.
    #[inline]
    pub fn note_continuation_line(&mut self) {
        self.prev_blank = false;
    }

    /// Close the block at `index` and everything nested inside it.
    fn kill_from(&mut self, index: usize) {
        let index = index.max(1);
        if index < self.blocks.len() {
            log::trace!("closing {:?}", &self.blocks[index..]);
            self.blocks.truncate(index);
        }
    }

    fn push(&mut self, block: Block) {
        debug_assert!(!self.last().is_leaf());
        log::trace!("opening {block:?}");
        self.blocks.push(block);
    }

    /// Run the block phase for the line under the cursor: re-validate the
    /// chain, close what no longer continues and open new blocks.
    ///
    /// Returns whether the line is blank once container syntax is removed.
    pub fn process_line(&mut self, cursor: &mut Cursor<'_>, tag: &mut HtmlTag) -> bool {
        cursor.eat_space();

        let mut brk = self.blocks.len();
        let mut outcome = Continuation::Continues;
        for (i, block) in self.blocks.iter().enumerate() {
            let result = block.continues(cursor);
            if result != Continuation::Continues {
                brk = i;
                outcome = result;
                break;
            }
        }

        let is_blank = cursor.at_end_of_line();
        let all_continued = brk == self.blocks.len();
        let skip_open =
            is_blank || (all_continued && self.last().is_leaf()) || brk >= MAX_BLOCK_NESTING;
        let opened = if skip_open {
            None
        } else {
            open_block(cursor, self.prev_blank, tag)
        };

        if opened.is_some()
            || outcome == Continuation::CannotContinue
            || (self.prev_blank && !is_blank)
        {
            self.kill_from(brk);
        } else {
            // Re-test what was left undecided; the cursor has moved on.
            for i in brk..self.blocks.len() {
                if self.blocks[i].continues(cursor) == Continuation::CannotContinue {
                    self.kill_from(i);
                    break;
                }
            }
        }

        if let Some(block) = opened {
            self.push(block);
            let mut last = block;
            while !last.is_leaf() && self.blocks.len() < MAX_BLOCK_NESTING {
                // A fresh container may start with an indented code block.
                match open_block(cursor, true, tag) {
                    Some(block) => {
                        self.push(block);
                        last = block;
                    }
                    None => break,
                }
            }
        }

        log::trace!("blocks: {:?}", self.blocks);
        self.prev_blank = is_blank;
        is_blank
    }
}

impl Default for BlockChain {
    fn default() -> Self {
        Self::new()
    }
}
