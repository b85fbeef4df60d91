//! Line-scoped cursor over a mutable filter buffer.
//!
//! The cursor never crosses a line terminator on its own: `\n`, `\r` and the
//! end of the buffer all read as the `0` sentinel until
//! [`Cursor::advance_to_next_line`] is called. Column tracking is tab-aware
//! (stops every 4 columns) and the most recent whitespace run is remembered
//! as the current indentation.

use memchr::{memchr2, memchr3};

use crate::limits::TAB_STOP;
use crate::Range;

/// Overwrite a syntax byte with a space. Whitespace is left as is so tabs
/// and line terminators keep their meaning downstream.
#[inline]
pub fn blank(b: &mut u8) {
    if !b.is_ascii_whitespace() {
        *b = b' ';
    }
}

/// Saved cursor position within the current line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
    column: usize,
    indent: usize,
}

/// A cursor for line-by-line scanning and in-place blanking.
///
/// # Example
/// ```
/// use mdblank::cursor::Cursor;
///
/// let mut buf = *b"> quote\nnext";
/// let mut cursor = Cursor::new(&mut buf);
///
/// assert_eq!(cursor.current(), b'>');
/// cursor.blank_advance(1);
/// assert_eq!(cursor.current(), b'q');
/// assert_eq!(cursor.indent(), 1);
///
/// cursor.advance_to_next_line();
/// assert_eq!(cursor.current(), b'n');
/// assert_eq!(&buf, b"  quote\nnext");
/// ```
pub struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
    line_end: usize,
    column: usize,
    indent: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the buffer's first line.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        let line_end = find_line_end(buf, 0);
        Self {
            buf,
            pos: 0,
            line_end,
            column: 0,
            indent: 0,
        }
    }

    /// Current offset from the start of the buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Offset of the current line's terminator (or the buffer end).
    #[inline]
    pub fn line_end(&self) -> usize {
        self.line_end
    }

    /// Display column within the current line.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Width of the whitespace eaten by the last whitespace-eating call,
    /// minus whatever open blocks have claimed since.
    #[inline]
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Overwrite the remaining indentation.
    #[inline]
    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    /// Claim `n` columns of the remaining indentation for an open block.
    #[inline]
    pub fn consume_indent(&mut self, n: usize) {
        self.indent = self.indent.saturating_sub(n);
    }

    /// Byte `offset` positions ahead, or `0` if that crosses the line end.
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        let at = self.pos + offset;
        if at < self.line_end { self.buf[at] } else { 0 }
    }

    /// Byte under the cursor, or `0` at end of line.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Display width of the byte under the cursor.
    #[inline]
    pub fn width(&self) -> usize {
        if self.at_end_of_line() {
            return 0;
        }
        match self.buf[self.pos] {
            b'\t' => TAB_STOP - self.column % TAB_STOP,
            // UTF-8 continuation bytes share the column of their lead byte.
            b if b & 0xC0 == 0x80 => 0,
            _ => 1,
        }
    }

    #[inline]
    pub fn at_end_of_line(&self) -> bool {
        self.pos >= self.line_end
    }

    #[inline]
    pub fn at_end_of_buffer(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// First byte at or after `offset` that is not a space or tab, or `0`.
    #[inline]
    pub fn peek_past_space(&self, mut offset: usize) -> u8 {
        loop {
            match self.peek(offset) {
                b' ' | b'\t' => offset += 1,
                b => return b,
            }
        }
    }

    /// Distance to the next `a`, `b` or `c` on the current line.
    #[inline]
    pub fn find3(&self, a: u8, b: u8, c: u8) -> Option<usize> {
        memchr3(a, b, c, &self.buf[self.pos..self.line_end])
    }

    /// Check whether the line continues with `bytes` at the cursor.
    #[inline]
    pub fn starts_with(&self, bytes: &[u8]) -> bool {
        self.buf[self.pos..self.line_end].starts_with(bytes)
    }

    /// Move one byte forward (never past the line end) and clear the indent.
    #[inline]
    pub fn bump(&mut self) {
        self.indent = 0;
        if self.at_end_of_line() {
            return;
        }
        self.column += self.width();
        self.pos += 1;
    }

    /// Move `n` bytes forward without touching trailing whitespace.
    #[inline]
    pub fn advance_raw(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Move `n` bytes forward, then eat the whitespace that follows.
    #[inline]
    pub fn advance_and_eat_space(&mut self, n: usize) {
        self.advance_raw(n);
        self.eat_space();
    }

    /// Blank up to `n` bytes while moving over them, then eat whitespace.
    pub fn blank_advance(&mut self, n: usize) {
        for _ in 0..n {
            if self.at_end_of_line() {
                break;
            }
            blank(&mut self.buf[self.pos]);
            self.bump();
        }
        self.eat_space();
    }

    /// Blank everything left on the line. The cursor does not move.
    pub fn blank_to_end_of_line(&mut self) {
        self.buf[self.pos..self.line_end].iter_mut().for_each(blank);
    }

    /// Move to the end of the line without modifying anything.
    #[inline]
    pub fn skip_to_end_of_line(&mut self) {
        while !self.at_end_of_line() {
            self.bump();
        }
    }

    /// Eat a run of spaces and tabs, recording its display width as the
    /// current indentation.
    pub fn eat_space(&mut self) -> usize {
        self.indent = 0;
        while !self.at_end_of_line() {
            let w = match self.buf[self.pos] {
                b' ' => 1,
                b'\t' => self.width(),
                _ => break,
            };
            self.pos += 1;
            self.indent += w;
            self.column += w;
        }
        self.indent
    }

    /// Step over the current line terminator (`\n`, `\r` or `\r\n`) and
    /// start the next line at column 0.
    pub fn advance_to_next_line(&mut self) {
        self.pos = self.line_end;
        match self.buf.get(self.pos) {
            Some(b'\r') => {
                self.pos += 1;
                if self.buf.get(self.pos) == Some(&b'\n') {
                    self.pos += 1;
                }
            }
            Some(b'\n') => self.pos += 1,
            _ => {}
        }
        self.line_end = find_line_end(self.buf, self.pos);
        self.column = 0;
        self.indent = 0;
    }

    /// Save the position within the current line.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            column: self.column,
            indent: self.indent,
        }
    }

    /// Return to a position saved on the current line.
    #[inline]
    pub fn rewind(&mut self, cp: Checkpoint) {
        debug_assert!(cp.pos <= self.line_end);
        self.pos = cp.pos;
        self.column = cp.column;
        self.indent = cp.indent;
    }

    /// Range from a checkpoint up to the cursor.
    #[inline]
    pub fn range_from(&self, cp: Checkpoint) -> Range {
        Range::from_usize(cp.pos, self.pos)
    }

    /// The whole underlying buffer, for collaborators handed a [`Range`].
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut *self.buf
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.pos)
            .field("line_end", &self.line_end)
            .field("column", &self.column)
            .field("indent", &self.indent)
            .finish()
    }
}

#[inline]
fn find_line_end(buf: &[u8], from: usize) -> usize {
    memchr2(b'\n', b'\r', &buf[from..]).map_or(buf.len(), |i| from + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_empty() {
        let mut buf = *b"";
        let cursor = Cursor::new(&mut buf);
        assert!(cursor.at_end_of_line());
        assert!(cursor.at_end_of_buffer());
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn test_peek_stops_at_line_end() {
        let mut buf = *b"ab\ncd";
        let cursor = Cursor::new(&mut buf);
        assert_eq!(cursor.peek(0), b'a');
        assert_eq!(cursor.peek(1), b'b');
        assert_eq!(cursor.peek(2), 0);
        assert_eq!(cursor.peek(3), 0);
    }

    #[test]
    fn test_bump_does_not_cross_line() {
        let mut buf = *b"a\nb";
        let mut cursor = Cursor::new(&mut buf);
        cursor.advance_raw(5);
        assert_eq!(cursor.offset(), 1);
        assert!(cursor.at_end_of_line());
        assert!(!cursor.at_end_of_buffer());
    }

    #[test]
    fn test_eat_space_counts_tab_stops() {
        let mut buf = *b" \tx";
        let mut cursor = Cursor::new(&mut buf);
        assert_eq!(cursor.eat_space(), 4);
        assert_eq!(cursor.column(), 4);
        assert_eq!(cursor.current(), b'x');
    }

    #[test]
    fn test_tab_width_depends_on_column() {
        let mut buf = *b"ab\tc";
        let mut cursor = Cursor::new(&mut buf);
        cursor.advance_raw(2);
        assert_eq!(cursor.width(), 2);
        cursor.eat_space();
        assert_eq!(cursor.column(), 4);
        assert_eq!(cursor.indent(), 2);
    }

    #[test]
    fn test_bump_resets_indent() {
        let mut buf = *b"  a b";
        let mut cursor = Cursor::new(&mut buf);
        cursor.eat_space();
        assert_eq!(cursor.indent(), 2);
        cursor.bump();
        assert_eq!(cursor.indent(), 0);
        cursor.eat_space();
        assert_eq!(cursor.indent(), 1);
    }

    #[test]
    fn test_utf8_continuation_has_no_width() {
        let mut buf = "é\tx".as_bytes().to_vec();
        let mut cursor = Cursor::new(&mut buf);
        cursor.advance_raw(2);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.eat_space(), 3);
    }

    #[test]
    fn test_blank_advance() {
        let mut buf = *b">>  text";
        let mut cursor = Cursor::new(&mut buf);
        cursor.blank_advance(2);
        assert_eq!(cursor.current(), b't');
        assert_eq!(cursor.indent(), 2);
        drop(cursor);
        assert_eq!(&buf, b"    text");
    }

    #[test]
    fn test_blank_advance_stops_at_line_end() {
        let mut buf = *b"``\nxx";
        let mut cursor = Cursor::new(&mut buf);
        cursor.blank_advance(10);
        assert!(cursor.at_end_of_line());
        drop(cursor);
        assert_eq!(&buf, b"  \nxx");
    }

    #[test]
    fn test_blank_to_end_of_line_keeps_position_and_tabs() {
        let mut buf = *b"a\tb\nc";
        let mut cursor = Cursor::new(&mut buf);
        cursor.blank_to_end_of_line();
        assert_eq!(cursor.offset(), 0);
        drop(cursor);
        assert_eq!(&buf, b" \t \nc");
    }

    #[test]
    fn test_next_line_terminators() {
        let mut buf = *b"a\r\nb\rc\nd";
        let mut cursor = Cursor::new(&mut buf);
        cursor.advance_to_next_line();
        assert_eq!(cursor.current(), b'b');
        cursor.advance_to_next_line();
        assert_eq!(cursor.current(), b'c');
        cursor.advance_to_next_line();
        assert_eq!(cursor.current(), b'd');
        cursor.advance_to_next_line();
        assert!(cursor.at_end_of_buffer());
    }

    #[test]
    fn test_next_line_resets_column() {
        let mut buf = *b"  abc\nx";
        let mut cursor = Cursor::new(&mut buf);
        cursor.eat_space();
        cursor.advance_raw(2);
        assert_eq!(cursor.column(), 4);
        cursor.advance_to_next_line();
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.indent(), 0);
    }

    #[test]
    fn test_checkpoint_rewind() {
        let mut buf = *b"  <tag";
        let mut cursor = Cursor::new(&mut buf);
        cursor.eat_space();
        let cp = cursor.checkpoint();
        cursor.advance_raw(3);
        cursor.rewind(cp);
        assert_eq!(cursor.current(), b'<');
        assert_eq!(cursor.indent(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_starts_with_is_line_scoped() {
        let mut buf = *b"<!-\n-";
        let cursor = Cursor::new(&mut buf);
        assert!(cursor.starts_with(b"<!-"));
        assert!(!cursor.starts_with(b"<!--"));
    }
}
