//! DoS prevention constants.
//!
//! These limits keep a single pass linear on pathological inputs such as
//! hundreds of nested `>` markers on one line.

/// Maximum number of open blocks in the chain, `Root` included.
pub const MAX_BLOCK_NESTING: usize = 32;

/// Maximum digits in an ordered list marker (CommonMark: 9).
pub const MAX_LIST_MARKER_DIGITS: usize = 9;

/// Minimum fence length for a fenced code block.
pub const MIN_FENCE_LEN: usize = 3;

/// Indentation (in columns) that makes a line an indented code block.
pub const CODE_INDENT: usize = 4;

/// Tab stop width used for column accounting.
pub const TAB_STOP: usize = 4;
