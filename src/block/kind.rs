//! The closed set of block containers and their per-line continuation rules.

use crate::cursor::Cursor;
use crate::limits::CODE_INDENT;

/// Outcome of asking an open block whether the current line belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The line continues the block; any syntax it owns has been consumed.
    Continues,
    /// The line ends the block.
    CannotContinue,
    /// The block neither claims nor rejects the line (lazy continuation).
    Undecided,
}

/// An open block container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Document root. Always first in the chain, always continues.
    Root,
    /// `>` block quote.
    BlockQuote,
    /// Bullet (`-`, `+`, `*`) or ordered (`1.`, `1)`) list item.
    ListItem {
        /// Bullet character, or the first digit of an ordered marker.
        marker: u8,
        /// Indentation a line needs to stay inside the item.
        required_indent: usize,
    },
    /// Code block opened by four columns of indentation after a blank line.
    IndentedCodeBlock,
    /// Code block fenced by three or more backticks or tildes.
    FencedCodeBlock {
        fence_char: u8,
        fence_len: usize,
    },
    /// Heading, thematic break, setext underline or link reference
    /// definition. Lives for exactly one line.
    SingleLineBlock,
    /// Raw HTML block opened by a complete tag at the start of a line.
    /// Ends at the next blank line.
    HtmlBlock,
}

impl Block {
    /// Leaf blocks cannot host nested blocks.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Block::IndentedCodeBlock
                | Block::FencedCodeBlock { .. }
                | Block::SingleLineBlock
                | Block::HtmlBlock
        )
    }

    /// Test whether the line under the cursor continues this block,
    /// consuming (and blanking) whatever syntax the block owns on it.
    pub fn continues(&self, cursor: &mut Cursor<'_>) -> Continuation {
        match *self {
            Block::Root => Continuation::Continues,
            Block::BlockQuote => {
                if cursor.current() == b'>' {
                    cursor.blank_advance(1);
                    Continuation::Continues
                } else if cursor.at_end_of_line() {
                    Continuation::CannotContinue
                } else {
                    Continuation::Undecided
                }
            }
            Block::ListItem {
                required_indent, ..
            } => {
                if !cursor.at_end_of_line() && cursor.indent() >= required_indent {
                    cursor.consume_indent(required_indent);
                    Continuation::Continues
                } else {
                    Continuation::Undecided
                }
            }
            Block::IndentedCodeBlock => {
                if cursor.indent() >= CODE_INDENT {
                    cursor.consume_indent(CODE_INDENT);
                    cursor.blank_to_end_of_line();
                    Continuation::Continues
                } else if cursor.at_end_of_line() {
                    Continuation::Continues
                } else {
                    Continuation::CannotContinue
                }
            }
            Block::FencedCodeBlock {
                fence_char,
                fence_len,
            } => {
                let run = fence_run(cursor, fence_char);
                if run >= fence_len && cursor.peek_past_space(run) == 0 {
                    cursor.blank_advance(run);
                    return Continuation::CannotContinue;
                }
                cursor.blank_to_end_of_line();
                Continuation::Continues
            }
            Block::SingleLineBlock => Continuation::CannotContinue,
            Block::HtmlBlock => {
                if cursor.at_end_of_line() {
                    Continuation::CannotContinue
                } else {
                    Continuation::Continues
                }
            }
        }
    }
}

/// Length of the run of `ch` starting at the cursor.
#[inline]
pub(crate) fn fence_run(cursor: &Cursor<'_>, ch: u8) -> usize {
    let mut len = 0;
    while cursor.peek(len) == ch {
        len += 1;
    }
    len
}
