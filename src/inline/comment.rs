//! HTML comments. Nothing is blanked here; the comment range is handed to
//! the markup collaborator by the dispatcher.

use crate::cursor::Cursor;

use super::{PendingSpan, Scan};

/// Open a comment at `<!--`.
pub fn open(cursor: &mut Cursor<'_>) -> Scan {
    if !cursor.starts_with(b"<!--") {
        return Scan::NoMatch;
    }
    cursor.advance_and_eat_space(4);
    close(cursor)
}

/// Skip comment text up to and including `-->`, stopping right after it.
pub fn close(cursor: &mut Cursor<'_>) -> Scan {
    while !cursor.at_end_of_line() {
        if cursor.starts_with(b"-->") {
            cursor.advance_raw(3);
            return Scan::Closed;
        }
        cursor.bump();
    }
    Scan::Pending(PendingSpan::HtmlComment)
}
