//! Inline code spans.
//!
//! Everything from the opening backtick run to the closing run of the same
//! length is blanked. Runs of any other length are content.

use crate::cursor::Cursor;

use super::{PendingSpan, Scan};

#[inline]
fn backtick_run(cursor: &Cursor<'_>) -> usize {
    let mut n = 0;
    while cursor.peek(n) == b'`' {
        n += 1;
    }
    n
}

/// Open a code span at a backtick run.
pub fn open(cursor: &mut Cursor<'_>) -> Scan {
    let marker_len = backtick_run(cursor);
    if marker_len == 0 {
        return Scan::NoMatch;
    }
    cursor.blank_advance(marker_len);
    close(cursor, marker_len)
}

/// Blank span content until a run of exactly `marker_len` backticks.
pub fn close(cursor: &mut Cursor<'_>, marker_len: usize) -> Scan {
    while !cursor.at_end_of_line() {
        let run = backtick_run(cursor);
        if run == 0 {
            cursor.blank_advance(1);
            continue;
        }
        cursor.blank_advance(run);
        if run == marker_len {
            return Scan::Closed;
        }
    }
    Scan::Pending(PendingSpan::InlineCode { marker_len })
}
