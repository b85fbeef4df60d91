//! Filter options and where they come from.
//!
//! [`Options`] can be built directly, or read through an [`OptionSource`]
//! by [`MarkdownFilter::setup`](crate::MarkdownFilter::setup). [`OptionMap`]
//! is an in-memory source keyed by the option names below.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Whether an HTML tag may continue across line breaks.
pub const MULTILINE_TAGS: &str = "f-markdown-multiline-tags";
/// Tags that start raw (unfiltered) content.
pub const RAW_START_TAGS: &str = "f-markdown-raw-start-tags";
/// Tags that start an HTML block.
pub const BLOCK_START_TAGS: &str = "f-markdown-block-start-tags";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("option {key} is not set")]
    MissingOption { key: String },

    #[error("option {key}: {value:?} is not a boolean")]
    InvalidBool { key: String, value: String },

    #[error("option {key}: expected a {expected}")]
    WrongKind { key: String, expected: &'static str },
}

/// Anything that can answer option lookups by key.
pub trait OptionSource {
    fn retrieve_bool(&self, key: &str) -> Result<bool, ConfigError>;
    fn retrieve_list(&self, key: &str) -> Result<Vec<String>, ConfigError>;
}

/// A set of HTML tag names, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    names: FxHashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag name. Returns false if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_ascii_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.names.contains(&name.to_ascii_lowercase())
        } else {
            self.names.contains(name)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Lowercased names, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

/// Filter options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Let HTML tags span line breaks.
    pub multiline_tags: bool,
    /// Stored for HTML-aware consumers; matching does not consult it.
    pub raw_start_tags: TagSet,
    /// Stored for HTML-aware consumers; matching does not consult it.
    pub block_start_tags: TagSet,
}

impl Options {
    /// Read every option from `source`. Fails on the first missing or
    /// mistyped key.
    pub fn from_source<S: OptionSource + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let multiline_tags = source.retrieve_bool(MULTILINE_TAGS)?;
        let raw_start_tags = source.retrieve_list(RAW_START_TAGS)?.into_iter().collect();
        let block_start_tags = source.retrieve_list(BLOCK_START_TAGS)?.into_iter().collect();
        Ok(Self {
            multiline_tags,
            raw_start_tags,
            block_start_tags,
        })
    }
}

/// A stored option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    /// Unparsed text, as read from a command line or config file.
    Str(String),
    List(Vec<String>),
}

/// In-memory [`OptionSource`].
///
/// ```
/// use mdblank::config::{OptionMap, Options, MULTILINE_TAGS};
///
/// let mut map = OptionMap::new();
/// map.set_str(MULTILINE_TAGS, "true");
/// let options = Options::from_source(&map).unwrap();
/// assert!(options.multiline_tags);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMap {
    values: FxHashMap<String, OptionValue>,
}

impl OptionMap {
    /// A map holding the default value of every filter option.
    pub fn new() -> Self {
        let mut map = Self::empty();
        map.set_bool(MULTILINE_TAGS, false);
        map.set_list(RAW_START_TAGS, Vec::<String>::new());
        map.set_list(BLOCK_START_TAGS, Vec::<String>::new());
        map
    }

    /// A map with no options at all.
    pub fn empty() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_owned(), OptionValue::Bool(value));
    }

    pub fn set_str(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), OptionValue::Str(value.to_owned()));
    }

    pub fn set_list<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = values.into_iter().map(Into::into).collect();
        self.values.insert(key.to_owned(), OptionValue::List(list));
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.values.remove(key)
    }

    fn lookup(&self, key: &str) -> Result<&OptionValue, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::MissingOption {
            key: key.to_owned(),
        })
    }
}

impl Default for OptionMap {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionSource for OptionMap {
    fn retrieve_bool(&self, key: &str) -> Result<bool, ConfigError> {
        match self.lookup(key)? {
            OptionValue::Bool(b) => Ok(*b),
            OptionValue::Str(s) => parse_bool(s).ok_or_else(|| ConfigError::InvalidBool {
                key: key.to_owned(),
                value: s.clone(),
            }),
            OptionValue::List(_) => Err(ConfigError::WrongKind {
                key: key.to_owned(),
                expected: "boolean",
            }),
        }
    }

    fn retrieve_list(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        match self.lookup(key)? {
            OptionValue::List(list) => Ok(list.clone()),
            // Comma- or whitespace-separated.
            OptionValue::Str(s) => Ok(s
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect()),
            OptionValue::Bool(_) => Err(ConfigError::WrongKind {
                key: key.to_owned(),
                expected: "list",
            }),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
