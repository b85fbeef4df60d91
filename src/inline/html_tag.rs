//! Resumable parser for a single HTML start or end tag.
//!
//! The parse position inside the attribute list is kept as a [`TagState`]
//! so a tag cut by a line break can resume on the next line (or in the next
//! buffer) exactly where it stopped.

use crate::cursor::{Checkpoint, Cursor};

use super::{PendingSpan, Scan};

/// Where the tag parser stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    /// Between attributes: expecting a name, `>` or `/>`.
    Between,
    /// After an attribute name, expecting `=`.
    AfterName,
    /// After `=`, expecting a value.
    AfterEq,
    /// Inside a `'...'` value.
    InSingleQuote,
    /// Inside a `"..."` value.
    InDoubleQuote,
    /// The tag closed.
    Valid,
    /// The candidate was rejected.
    Invalid,
}

impl TagState {
    /// Whether a tag in this state still needs more input.
    #[inline]
    pub fn is_incomplete(self) -> bool {
        !matches!(self, TagState::Valid | TagState::Invalid)
    }
}

/// HTML tag parser with a one-entry cache keyed by the opening position.
#[derive(Debug, Clone)]
pub struct HtmlTag {
    /// Offset of the `<` of the last open attempt in the current buffer.
    start_pos: Option<usize>,
    /// Where a valid tag ended, for replaying a cached verdict.
    end: Option<Checkpoint>,
    name: String,
    closing: bool,
    state: TagState,
    multiline: bool,
}

impl HtmlTag {
    /// Create a parser. With `multiline` off, a tag still open at the end
    /// of a line is rejected instead of held pending.
    pub fn new(multiline: bool) -> Self {
        Self {
            start_pos: None,
            end: None,
            name: String::new(),
            closing: false,
            state: TagState::Invalid,
            multiline,
        }
    }

    #[inline]
    pub fn state(&self) -> TagState {
        self.state
    }

    /// Lowercased tag name of the current or last candidate.
    #[inline]
    pub fn tag_name(&self) -> &str {
        &self.name
    }

    /// Whether the current or last candidate is an end tag (`</...>`).
    #[inline]
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn set_multiline(&mut self, multiline: bool) {
        self.multiline = multiline;
    }

    /// Forget the current candidate entirely.
    pub fn reset(&mut self) {
        self.start_pos = None;
        self.end = None;
        self.name.clear();
        self.closing = false;
        self.state = TagState::Invalid;
    }

    /// Forget the cache key only. Offsets are per buffer, so this is done
    /// whenever a new buffer starts; a pending parse state survives it.
    pub fn clear_cache(&mut self) {
        self.start_pos = None;
        self.end = None;
    }

    /// Try to open a tag at the cursor.
    ///
    /// On `NoMatch` the cursor is where it started. A second call at the
    /// same position replays the verdict of the first instead of parsing
    /// again.
    pub fn open(&mut self, cursor: &mut Cursor<'_>) -> Scan {
        if self.start_pos == Some(cursor.offset()) {
            return self.replay(cursor);
        }
        self.reset();
        if cursor.current() != b'<' {
            return Scan::NoMatch;
        }
        self.start_pos = Some(cursor.offset());

        let start = cursor.checkpoint();
        cursor.bump();
        if cursor.current() == b'/' {
            cursor.bump();
            self.closing = true;
        }
        if !self.parse_name(cursor) {
            return self.invalid(cursor, start);
        }
        self.state = TagState::Between;
        if cursor.at_end_of_line() {
            self.incomplete(cursor, start)
        } else if parse_tag_close(cursor) {
            self.valid(cursor)
        } else if is_space(cursor.current()) {
            self.scan(cursor, start)
        } else {
            self.invalid(cursor, start)
        }
    }

    /// Continue a pending tag at the start of a new line.
    pub fn resume(&mut self, cursor: &mut Cursor<'_>) -> Scan {
        debug_assert!(self.state.is_incomplete());
        let start = cursor.checkpoint();
        self.scan(cursor, start)
    }

    fn replay(&mut self, cursor: &mut Cursor<'_>) -> Scan {
        match (self.state, self.end) {
            (TagState::Valid, Some(end)) => {
                cursor.rewind(end);
                Scan::Closed
            }
            (TagState::Valid | TagState::Invalid, _) => Scan::NoMatch,
            _ => {
                cursor.skip_to_end_of_line();
                Scan::Pending(PendingSpan::HtmlTag)
            }
        }
    }

    fn scan(&mut self, cursor: &mut Cursor<'_>, start: Checkpoint) -> Scan {
        while !cursor.at_end_of_line() {
            if self.state == TagState::Between {
                let leading_space = is_space(cursor.current());
                if leading_space {
                    cursor.eat_space();
                }
                if parse_tag_close(cursor) {
                    return self.valid(cursor);
                }
                if cursor.at_end_of_line() {
                    break;
                }
                // Attributes are separated by whitespace, except at the very
                // start of a continuation line.
                if cursor.column() != 0 && !leading_space {
                    return self.invalid(cursor, start);
                }
            }
            self.state = parse_attribute(cursor, self.state);
            if self.state == TagState::Invalid {
                return self.invalid(cursor, start);
            }
        }
        self.incomplete(cursor, start)
    }

    /// Tag names: an ASCII letter, then letters, digits and `-`.
    /// Trailing whitespace is not eaten.
    fn parse_name(&mut self, cursor: &mut Cursor<'_>) -> bool {
        if !cursor.current().is_ascii_alphabetic() {
            return false;
        }
        loop {
            let b = cursor.current();
            if !(b.is_ascii_alphanumeric() || b == b'-') {
                return true;
            }
            self.name.push(b.to_ascii_lowercase() as char);
            cursor.bump();
        }
    }

    fn valid(&mut self, cursor: &Cursor<'_>) -> Scan {
        self.state = TagState::Valid;
        self.end = Some(cursor.checkpoint());
        Scan::Closed
    }

    fn invalid(&mut self, cursor: &mut Cursor<'_>, start: Checkpoint) -> Scan {
        self.state = TagState::Invalid;
        cursor.rewind(start);
        Scan::NoMatch
    }

    fn incomplete(&mut self, cursor: &mut Cursor<'_>, start: Checkpoint) -> Scan {
        if self.multiline {
            log::trace!("tag <{}> pending in {:?}", self.name, self.state);
            Scan::Pending(PendingSpan::HtmlTag)
        } else {
            self.invalid(cursor, start)
        }
    }
}

#[inline]
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace()
}

/// `>` or `/>`. Whitespace after it belongs to the surrounding text.
fn parse_tag_close(cursor: &mut Cursor<'_>) -> bool {
    match (cursor.current(), cursor.peek(1)) {
        (b'>', _) => {
            cursor.advance_raw(1);
            true
        }
        (b'/', b'>') => {
            cursor.advance_raw(2);
            true
        }
        _ => false,
    }
}

#[inline]
fn is_attr_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b':'
}

#[inline]
fn is_attr_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b':' | b'.' | b'-')
}

#[inline]
fn is_unquoted_value_char(b: u8) -> bool {
    b != 0 && !b.is_ascii_whitespace() && !matches!(b, b'"' | b'\'' | b'=' | b'<' | b'>' | b'`')
}

/// Advance through one attribute starting from `state`.
///
/// Returns `Between` once the attribute is complete, the state to resume
/// from if the line ran out, or `Invalid`. Trailing whitespace after a
/// complete attribute is not eaten.
fn parse_attribute(cursor: &mut Cursor<'_>, mut state: TagState) -> TagState {
    loop {
        match state {
            TagState::Between => {
                if !is_attr_name_start(cursor.current()) {
                    return TagState::Invalid;
                }
                cursor.bump();
                while is_attr_name_char(cursor.current()) {
                    cursor.bump();
                }
                state = TagState::AfterName;
            }
            TagState::AfterName => {
                cursor.eat_space();
                if cursor.at_end_of_line() {
                    return TagState::AfterName;
                }
                if cursor.current() != b'=' {
                    return TagState::Invalid;
                }
                cursor.bump();
                state = TagState::AfterEq;
            }
            TagState::AfterEq => {
                cursor.eat_space();
                if cursor.at_end_of_line() {
                    return TagState::AfterEq;
                }
                match cursor.current() {
                    b'\'' => {
                        cursor.bump();
                        state = TagState::InSingleQuote;
                    }
                    b'"' => {
                        cursor.bump();
                        state = TagState::InDoubleQuote;
                    }
                    _ => {
                        let start = cursor.offset();
                        while is_unquoted_value_char(cursor.current()) {
                            cursor.bump();
                        }
                        return if cursor.offset() == start {
                            TagState::Invalid
                        } else {
                            TagState::Between
                        };
                    }
                }
            }
            TagState::InSingleQuote | TagState::InDoubleQuote => {
                let quote = if state == TagState::InSingleQuote { b'\'' } else { b'"' };
                while !cursor.at_end_of_line() && cursor.current() != quote {
                    cursor.bump();
                }
                if cursor.at_end_of_line() {
                    return state;
                }
                cursor.bump();
                return TagState::Between;
            }
            TagState::Valid | TagState::Invalid => return state,
        }
    }
}
