//! Identifier grammar of the generated enumeration.
//!
//! A bare identifier starts with an ASCII letter or underscore and continues
//! with ASCII letters, digits or underscores. A lone `_` is the wildcard
//! pattern, not a name, and is rejected. The [`Grammar`] value adds the
//! configurable parts: how a reserved word is escaped, and what to emit when
//! a key folds to nothing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^(?:[A-Za-z][A-Za-z0-9_]*|_[A-Za-z0-9_]+)$").unwrap();
}

/// Identifier substituted for keys that contain no alphanumeric characters.
pub const DEFAULT_EMPTY_KEY_SENTINEL: &str = "emptyKey";

/// Returns `true` if `text` is a legal bare identifier.
///
/// ```rust
/// use xcstrings_enum::grammar::is_identifier;
/// assert!(is_identifier("okButton"));
/// assert!(is_identifier("_9lives"));
/// assert!(!is_identifier("9lives"));
/// assert!(!is_identifier("_"));
/// assert!(!is_identifier("Hello World"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER_REGEX.is_match(text)
}

/// Escaping markup and empty-key policy for the target language.
///
/// The default is Swift: reserved words are wrapped in backticks and keys
/// that fold to nothing become [`DEFAULT_EMPTY_KEY_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    escape_prefix: String,
    escape_suffix: String,
    empty_key_sentinel: Option<String>,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::swift()
    }
}

impl Grammar {
    /// Swift grammar: `` `continue` ``.
    pub fn swift() -> Self {
        Self::new("`", "`")
    }

    /// Creates a grammar with the given escaping markup and the default sentinel.
    pub fn new(escape_prefix: impl Into<String>, escape_suffix: impl Into<String>) -> Self {
        Self {
            escape_prefix: escape_prefix.into(),
            escape_suffix: escape_suffix.into(),
            empty_key_sentinel: Some(DEFAULT_EMPTY_KEY_SENTINEL.to_string()),
        }
    }

    /// Sets the sentinel identifier. `None` makes an empty fold an error.
    pub fn with_empty_key_sentinel(mut self, sentinel: Option<String>) -> Self {
        self.empty_key_sentinel = sentinel;
        self
    }

    pub fn escape_prefix(&self) -> &str {
        &self.escape_prefix
    }

    pub fn escape_suffix(&self) -> &str {
        &self.escape_suffix
    }

    pub fn empty_key_sentinel(&self) -> Option<&str> {
        self.empty_key_sentinel.as_deref()
    }

    /// Wraps `name` in the escaping markup.
    pub fn escape(&self, name: &str) -> String {
        format!("{}{}{}", self.escape_prefix, name, self.escape_suffix)
    }

    /// Strips the escaping markup from `text` if it carries it.
    pub fn unescape<'a>(&self, text: &'a str) -> &'a str {
        text.strip_prefix(self.escape_prefix.as_str())
            .and_then(|rest| rest.strip_suffix(self.escape_suffix.as_str()))
            .unwrap_or(text)
    }

    /// Checks that the markup is usable and the sentinel is a legal identifier.
    ///
    /// Escaped text must never itself look like a bare identifier, otherwise
    /// an escaped keyword could collide with an unescaped key.
    pub fn validate(&self) -> Result<(), Error> {
        if self.escape_prefix.is_empty() && self.escape_suffix.is_empty() {
            return Err(Error::grammar_error("escaping markup must not be empty"));
        }
        if is_identifier(&self.escape("a")) {
            return Err(Error::grammar_error(format!(
                "escaping markup `{}`…`{}` only contains identifier characters",
                self.escape_prefix, self.escape_suffix
            )));
        }
        if let Some(sentinel) = &self.empty_key_sentinel {
            if !is_identifier(sentinel) {
                return Err(Error::grammar_error(format!(
                    "empty-key sentinel `{}` is not a legal identifier",
                    sentinel
                )));
            }
        }
        Ok(())
    }
}
