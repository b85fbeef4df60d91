//! Block openers.
//!
//! Each opener inspects the cursor and either consumes the block's syntax
//! and returns the new block, or leaves the cursor exactly where it was.

use crate::cursor::Cursor;
use crate::inline::html_tag::{HtmlTag, TagState};
use crate::limits::{CODE_INDENT, MAX_LIST_MARKER_DIGITS, MIN_FENCE_LEN};

use super::kind::{fence_run, Block};

/// Try every opener in priority order; the first match wins.
pub fn open_block(cursor: &mut Cursor<'_>, prev_blank: bool, tag: &mut HtmlTag) -> Option<Block> {
    tag.reset();
    try_indented_code(cursor, prev_blank)
        .or_else(|| try_fenced_code(cursor))
        .or_else(|| try_block_quote(cursor))
        .or_else(|| try_list_item(cursor))
        .or_else(|| try_single_line(cursor))
        .or_else(|| try_html_block(cursor, tag))
}

/// Four columns of indentation after a blank line.
pub fn try_indented_code(cursor: &mut Cursor<'_>, prev_blank: bool) -> Option<Block> {
    if !prev_blank || cursor.at_end_of_line() || cursor.indent() < CODE_INDENT {
        return None;
    }
    cursor.consume_indent(CODE_INDENT);
    cursor.blank_to_end_of_line();
    Some(Block::IndentedCodeBlock)
}

/// Three or more backticks or tildes. The fence and its info string are
/// blanked.
pub fn try_fenced_code(cursor: &mut Cursor<'_>) -> Option<Block> {
    let fence_char = match cursor.current() {
        c @ (b'`' | b'~') => c,
        _ => return None,
    };
    let fence_len = fence_run(cursor, fence_char);
    if fence_len < MIN_FENCE_LEN {
        return None;
    }

    // A backtick in the info string makes this an inline code span instead.
    if fence_char == b'`' {
        let mut i = fence_len;
        loop {
            match cursor.peek(i) {
                0 => break,
                b'`' => return None,
                _ => i += 1,
            }
        }
    }

    cursor.blank_advance(fence_len);
    cursor.blank_to_end_of_line();
    Some(Block::FencedCodeBlock {
        fence_char,
        fence_len,
    })
}

/// `>` marker, blanked.
pub fn try_block_quote(cursor: &mut Cursor<'_>) -> Option<Block> {
    if cursor.current() != b'>' {
        return None;
    }
    cursor.blank_advance(1);
    Some(Block::BlockQuote)
}

/// Bullet or ordered list marker followed by whitespace or end of line.
///
/// With up to four columns of space after the marker, content lines must be
/// indented to the first content column. With a wider gap they must be
/// indented one column past the gap, and all but one column of it stays
/// available as indentation for a nested indented code block.
pub fn try_list_item(cursor: &mut Cursor<'_>) -> Option<Block> {
    let first = cursor.current();
    let width = match first {
        b'-' | b'+' | b'*' => 1,
        b'0'..=b'9' => {
            let mut digits = 1;
            while cursor.peek(digits).is_ascii_digit() {
                digits += 1;
            }
            if digits > MAX_LIST_MARKER_DIGITS || !matches!(cursor.peek(digits), b'.' | b')') {
                return None;
            }
            digits + 1
        }
        _ => return None,
    };
    if !matches!(cursor.peek(width), b' ' | b'\t' | 0) {
        return None;
    }

    cursor.advance_and_eat_space(width);
    let spaces = cursor.indent();
    let required_indent = if spaces <= CODE_INDENT {
        cursor.set_indent(0);
        width + spaces
    } else {
        cursor.set_indent(spaces - 1);
        spaces + 1
    };
    Some(Block::ListItem {
        marker: first,
        required_indent,
    })
}

/// Headings, thematic breaks, setext underlines and link reference
/// definitions.
pub fn try_single_line(cursor: &mut Cursor<'_>) -> Option<Block> {
    match cursor.current() {
        ch @ (b'-' | b'_' | b'*') => {
            if try_rule(cursor, ch) {
                return Some(Block::SingleLineBlock);
            }
            if ch == b'-' && try_underline(cursor, ch) {
                return Some(Block::SingleLineBlock);
            }
            None
        }
        b'=' => try_underline(cursor, b'=').then_some(Block::SingleLineBlock),
        b'#' => try_heading(cursor).then_some(Block::SingleLineBlock),
        b'[' => try_link_definition(cursor).then_some(Block::SingleLineBlock),
        _ => None,
    }
}

/// A raw HTML block starts with a tag the tag parser accepts as complete.
///
/// The cursor is always rewound: the inline scan picks the tag up again
/// from the parser's cached verdict, so markup is reported in one place.
pub fn try_html_block(cursor: &mut Cursor<'_>, tag: &mut HtmlTag) -> Option<Block> {
    if cursor.current() != b'<' {
        return None;
    }
    let start = cursor.checkpoint();
    tag.open(cursor);
    cursor.rewind(start);
    (tag.state() == TagState::Valid).then_some(Block::HtmlBlock)
}

/// Run of one character, spaces allowed between, filling the line.
fn try_rule(cursor: &mut Cursor<'_>, ch: u8) -> bool {
    let start = cursor.checkpoint();
    cursor.advance_and_eat_space(1);
    while cursor.current() == ch {
        cursor.advance_and_eat_space(1);
    }
    let matched = cursor.at_end_of_line();
    cursor.rewind(start);
    if matched {
        cursor.blank_to_end_of_line();
        cursor.skip_to_end_of_line();
    }
    matched
}

/// Unbroken run of one character, trailing space allowed.
fn try_underline(cursor: &mut Cursor<'_>, ch: u8) -> bool {
    let run = fence_run(cursor, ch);
    if cursor.peek_past_space(run) != 0 {
        return false;
    }
    cursor.blank_to_end_of_line();
    cursor.skip_to_end_of_line();
    true
}

/// One to six `#` followed by whitespace or end of line. The hashes are
/// blanked, the heading text is left for the inline scan.
fn try_heading(cursor: &mut Cursor<'_>) -> bool {
    let level = fence_run(cursor, b'#');
    if level > 6 || !matches!(cursor.peek(level), b' ' | b'\t' | 0) {
        return false;
    }
    cursor.blank_advance(level);
    true
}

/// `[label]: destination`. Brackets, colon and destination are blanked,
/// an optional title is left as prose.
fn try_link_definition(cursor: &mut Cursor<'_>) -> bool {
    if cursor.peek(1) == b']' {
        return false;
    }
    let mut close = 1;
    loop {
        match cursor.peek(close) {
            0 => return false,
            b']' => break,
            _ => close += 1,
        }
    }
    if cursor.peek(close + 1) != b':' {
        return false;
    }

    let bracket = cursor.offset() + close;
    cursor.blank_advance(1);
    cursor.advance_raw(bracket - cursor.offset());
    cursor.blank_advance(2);
    let mut dest = 0;
    while !matches!(cursor.peek(dest), b' ' | b'\t' | 0) {
        dest += 1;
    }
    cursor.blank_advance(dest);
    true
}
