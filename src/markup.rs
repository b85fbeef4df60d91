//! Collaborator for recognized HTML markup.
//!
//! The filter itself only blanks Markdown syntax. HTML tags and comments are
//! reported as [`Range`]s so a downstream HTML filter can decide what, if
//! anything, to blank inside them.

use crate::cursor::blank;
use crate::Range;

/// Receives every HTML tag or comment range the inline scan recognizes,
/// including the partial range of a span that continues on the next line.
pub trait MarkupBlanker {
    /// Process `buf[range]` in place. Implementations must not change the
    /// length of the buffer or touch bytes outside `range`.
    fn blank_markup(&mut self, buf: &mut [u8], range: Range);

    /// Forget any state carried between buffers.
    fn reset(&mut self) {}
}

/// Leave markup untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl MarkupBlanker for Passthrough {
    #[inline]
    fn blank_markup(&mut self, _buf: &mut [u8], _range: Range) {}
}

/// Blank every non-whitespace byte of recognized markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankMarkup;

impl MarkupBlanker for BlankMarkup {
    fn blank_markup(&mut self, buf: &mut [u8], range: Range) {
        range.slice_mut(buf).iter_mut().for_each(blank);
    }
}

impl<M: MarkupBlanker + ?Sized> MarkupBlanker for &mut M {
    #[inline]
    fn blank_markup(&mut self, buf: &mut [u8], range: Range) {
        (**self).blank_markup(buf, range);
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset();
    }
}
