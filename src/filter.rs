//! The filter driver: block phase, then inline phase, for every line.

use crate::block::{Block, BlockChain};
use crate::config::{ConfigError, OptionSource, Options};
use crate::cursor::Cursor;
use crate::inline::{InlineState, PendingSpan};
use crate::markup::{MarkupBlanker, Passthrough};

/// In-place Markdown syntax blanker.
///
/// Buffers of one document are passed to [`process`](Self::process) in
/// order; block nesting and any span left open at the end of a buffer carry
/// over to the next call. Buffers must be split at line boundaries.
///
/// # Example
/// ```
/// use mdblank::MarkdownFilter;
///
/// let mut filter = MarkdownFilter::new();
/// let mut buf = b"> see `code` <b>here</b>\n".to_vec();
/// filter.process(&mut buf);
/// assert_eq!(&buf, b"  see        <b>here</b>\n");
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownFilter<M: MarkupBlanker = Passthrough> {
    options: Options,
    chain: BlockChain,
    inline: InlineState,
    markup: M,
}

impl MarkdownFilter<Passthrough> {
    /// A filter with default options that leaves HTML markup untouched.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self::with_markup(options, Passthrough)
    }
}

impl<M: MarkupBlanker> MarkdownFilter<M> {
    /// Registered filter name.
    pub const NAME: &'static str = "markdown-filter";
    /// Position among the other filters of a pipeline.
    pub const ORDER: f64 = 0.35;

    /// A filter that hands recognized HTML to `markup`.
    pub fn with_markup(options: Options, markup: M) -> Self {
        Self {
            inline: InlineState::new(options.multiline_tags),
            options,
            chain: BlockChain::new(),
            markup,
        }
    }

    /// Read options from `source`. On error the current options are kept.
    pub fn setup<S: OptionSource + ?Sized>(&mut self, source: &S) -> Result<(), ConfigError> {
        let options = Options::from_source(source)?;
        log::debug!(
            "setup: multiline_tags={} raw_start_tags={} block_start_tags={}",
            options.multiline_tags,
            options.raw_start_tags.len(),
            options.block_start_tags.len()
        );
        self.set_options(options);
        Ok(())
    }

    /// Replace the options. A fresh tag parser is installed, so a tag
    /// pending under the old options is dropped.
    pub fn set_options(&mut self, options: Options) {
        self.inline = InlineState::new(options.multiline_tags);
        self.options = options;
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Blocks open after the last processed line, `Root` first.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        self.chain.blocks()
    }

    /// Span left open at the end of the last processed line.
    #[inline]
    pub fn pending_span(&self) -> Option<PendingSpan> {
        self.inline.pending()
    }

    #[inline]
    pub fn markup(&self) -> &M {
        &self.markup
    }

    #[inline]
    pub fn markup_mut(&mut self) -> &mut M {
        &mut self.markup
    }

    pub fn into_markup(self) -> M {
        self.markup
    }

    /// Start a new document.
    pub fn reset(&mut self) {
        log::trace!("reset");
        self.chain.reset();
        self.inline.reset();
        self.markup.reset();
    }

    /// Blank Markdown syntax in `buf`. The length and every line terminator
    /// are preserved; changed bytes become spaces.
    pub fn process(&mut self, buf: &mut [u8]) {
        self.inline.begin_buffer();
        let mut cursor = Cursor::new(buf);
        while !cursor.at_end_of_buffer() {
            if self.inline.is_pending() {
                self.inline.resume(&mut cursor, &mut self.markup);
                self.chain.note_continuation_line();
            } else {
                self.chain.process_line(&mut cursor, self.inline.tag_mut());
            }
            self.inline.scan_line(&mut cursor, &mut self.markup);
            cursor.advance_to_next_line();
        }
    }
}

impl Default for MarkdownFilter<Passthrough> {
    fn default() -> Self {
        Self::new()
    }
}
