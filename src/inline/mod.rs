//! Inline phase of the filter.
//!
//! Runs over the rest of each line once the block phase is done:
//! 1. Inline code spans are blanked
//! 2. HTML comments and tags are recognized and handed to the markup collaborator
//! 3. Any other bare `<` or `>` is blanked
//!
//! At most one span may be left open at the end of a line. It is stored as
//! a [`PendingSpan`] and resumed at the start of the next line, which may be
//! in the next buffer.

pub mod code_span;
pub mod comment;
pub mod html_tag;

pub use html_tag::{HtmlTag, TagState};

use crate::cursor::Cursor;
use crate::markup::MarkupBlanker;

/// A span left open at the end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingSpan {
    /// Inside a code span opened by `marker_len` backticks.
    InlineCode { marker_len: usize },
    /// Inside `<!-- ... -->`.
    HtmlComment,
    /// Inside a tag; the parse state lives in the shared [`HtmlTag`].
    HtmlTag,
}

impl PendingSpan {
    /// Whether the span's text is markup rather than code.
    #[inline]
    pub fn is_markup(self) -> bool {
        matches!(self, PendingSpan::HtmlComment | PendingSpan::HtmlTag)
    }
}

/// Outcome of trying to open or resume a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Nothing recognized; the cursor did not move.
    NoMatch,
    /// The span ended on this line; the cursor is past it.
    Closed,
    /// The span runs to the end of the line.
    Pending(PendingSpan),
}

impl Scan {
    #[inline]
    pub fn pending(self) -> Option<PendingSpan> {
        match self {
            Scan::Pending(span) => Some(span),
            _ => None,
        }
    }
}

/// Inline state carried between lines and buffers.
#[derive(Debug, Clone)]
pub struct InlineState {
    pending: Option<PendingSpan>,
    tag: HtmlTag,
}

impl InlineState {
    pub fn new(multiline_tags: bool) -> Self {
        Self {
            pending: None,
            tag: HtmlTag::new(multiline_tags),
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn pending(&self) -> Option<PendingSpan> {
        self.pending
    }

    #[inline]
    pub fn tag(&self) -> &HtmlTag {
        &self.tag
    }

    /// The tag parser, shared with the HTML block opener.
    #[inline]
    pub fn tag_mut(&mut self) -> &mut HtmlTag {
        &mut self.tag
    }

    pub fn set_multiline(&mut self, multiline_tags: bool) {
        self.tag.set_multiline(multiline_tags);
    }

    /// Drop any pending span and the tag parser state.
    pub fn reset(&mut self) {
        self.pending = None;
        self.tag.reset();
    }

    /// Called before each buffer: cached tag offsets refer to the previous one.
    pub fn begin_buffer(&mut self) {
        self.tag.clear_cache();
    }

    /// Continue the pending span at the start of a line.
    pub fn resume<M>(&mut self, cursor: &mut Cursor<'_>, markup: &mut M)
    where
        M: MarkupBlanker + ?Sized,
    {
        let Some(span) = self.pending.take() else {
            return;
        };
        let start = cursor.checkpoint();
        let scan = match span {
            PendingSpan::InlineCode { marker_len } => code_span::close(cursor, marker_len),
            PendingSpan::HtmlComment => comment::close(cursor),
            PendingSpan::HtmlTag => self.tag.resume(cursor),
        };
        if span.is_markup() && scan != Scan::NoMatch {
            let range = cursor.range_from(start);
            markup.blank_markup(cursor.buffer_mut(), range);
        }
        log::trace!("resumed {span:?}: {scan:?}");
        self.pending = scan.pending();
    }

    /// Scan the rest of the line, stopping early if a span is left open.
    pub fn scan_line<M>(&mut self, cursor: &mut Cursor<'_>, markup: &mut M)
    where
        M: MarkupBlanker + ?Sized,
    {
        while self.pending.is_none() && !cursor.at_end_of_line() {
            let start = cursor.checkpoint();
            let first = cursor.current();
            let scan = match first {
                b'`' => code_span::open(cursor),
                b'<' => match comment::open(cursor) {
                    Scan::NoMatch => self.tag.open(cursor),
                    scan => scan,
                },
                _ => Scan::NoMatch,
            };

            match scan {
                Scan::NoMatch => match cursor.current() {
                    b'<' | b'>' => cursor.blank_advance(1),
                    _ => match cursor.find3(b'`', b'<', b'>') {
                        Some(skip) => cursor.advance_raw(skip),
                        None => cursor.skip_to_end_of_line(),
                    },
                },
                Scan::Closed | Scan::Pending(_) => {
                    if first == b'<' {
                        let range = cursor.range_from(start);
                        log::trace!("markup at {range:?}");
                        markup.blank_markup(cursor.buffer_mut(), range);
                    }
                    self.pending = scan.pending();
                }
            }
        }
    }
}

impl Default for InlineState {
    fn default() -> Self {
        Self::new(false)
    }
}
