//! mdblank: in-place Markdown syntax blanking for spell checkers
//!
//! Markdown syntax (block quote markers, list bullets, heading hashes,
//! code blocks, inline code, bare angle brackets) is overwritten with
//! spaces so a word tokenizer downstream sees only prose. Byte offsets,
//! buffer length and line terminators never change, so reported positions
//! still point into the original document.
//!
//! # Design Principles
//! - No AST: one forward pass per line
//! - No regex: pure byte-level scanning
//! - No allocation per line: the open-block chain lives in a `SmallVec`
//! - Streaming: a document may arrive in several buffers, split at lines
//!
//! HTML tags and comments are recognized but not blanked by default; they
//! are handed to a [`MarkupBlanker`].

pub mod block;
pub mod config;
pub mod cursor;
pub mod filter;
pub mod inline;
pub mod limits;
pub mod markup;
pub mod range;

// Re-export primary types
pub use block::{Block, BlockChain};
pub use config::{ConfigError, OptionMap, OptionSource, Options};
pub use filter::MarkdownFilter;
pub use inline::{PendingSpan, TagState};
pub use markup::{BlankMarkup, MarkupBlanker, Passthrough};
pub use range::Range;

/// Blank Markdown syntax in a single complete buffer with default options.
///
/// # Example
/// ```
/// let mut buf = b"## Intro\n\n- one `two`\n".to_vec();
/// mdblank::blank_markdown(&mut buf);
/// assert_eq!(&buf, b"   Intro\n\n- one      \n");
/// ```
pub fn blank_markdown(buf: &mut [u8]) {
    blank_markdown_with_options(buf, Options::default());
}

/// Blank Markdown syntax in a single complete buffer.
pub fn blank_markdown_with_options(buf: &mut [u8], options: Options) {
    MarkdownFilter::with_options(options).process(buf);
}

/// Blank Markdown syntax in a string, returning the result.
///
/// Multi-byte characters are blanked whole, so the result stays valid UTF-8.
///
/// # Example
/// ```
/// assert_eq!(mdblank::blank_str("> quoted"), "  quoted");
/// ```
pub fn blank_str(input: &str) -> String {
    let mut buf = input.as_bytes().to_vec();
    blank_markdown(&mut buf);
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
