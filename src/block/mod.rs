//! Block-level phase of the filter.
//!
//! Line-oriented: every line first re-validates the chain of open
//! containers, then may open new ones. Handles:
//! - Block quotes
//! - List items
//! - Indented and fenced code blocks (contents blanked)
//! - Headings, thematic breaks, setext underlines, link definitions
//! - Raw HTML blocks

mod chain;
mod kind;
mod open;

pub use chain::BlockChain;
pub use kind::{Block, Continuation};
pub use open::open_block;
