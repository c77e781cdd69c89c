//! Turns one catalog key into an enum case identifier.
//!
//! A key that already is a legal identifier is used as-is (escaped when it is
//! a reserved word). Anything else is camel-case folded:
//!
//! ```rust
//! use xcstrings_enum::synthesizer::fold_camel_case;
//! assert_eq!(fold_camel_case("Hello World"), "helloWorld");
//! assert_eq!(fold_camel_case("settings.open-URL"), "settingsOpenURL");
//! assert_eq!(fold_camel_case("3 items"), "_3Items");
//! assert_eq!(fold_camel_case("!!!"), "");
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    grammar::{Grammar, is_identifier},
    keywords::KeywordSet,
    types::{CaseEntry, Identifier},
};

lazy_static! {
    static ref SEGMENT_SEPARATOR: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
}

/// Camel-case folds `key` into identifier characters.
///
/// The key is split on runs of anything that is not an ASCII letter or digit.
/// The first segment is lower-cased, every later segment gets an upper-case
/// first letter. A leading digit gets an underscore prefix. Returns an empty
/// string when the key has no ASCII alphanumerics at all.
pub fn fold_camel_case(key: &str) -> String {
    let mut folded = String::with_capacity(key.len());

    let segments = SEGMENT_SEPARATOR
        .split(key)
        .filter(|segment| !segment.is_empty());
    for (i, segment) in segments.enumerate() {
        if i == 0 {
            folded.push_str(&segment.to_ascii_lowercase());
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            folded.push(first.to_ascii_uppercase());
            folded.push_str(chars.as_str());
        }
    }

    if folded.starts_with(|c: char| c.is_ascii_digit()) {
        folded.insert(0, '_');
    }
    folded
}

/// Synthesizes identifiers against a fixed keyword set and grammar.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
    reserved: &'a KeywordSet,
    grammar: &'a Grammar,
}

impl<'a> Synthesizer<'a> {
    pub fn new(reserved: &'a KeywordSet, grammar: &'a Grammar) -> Self {
        Self { reserved, grammar }
    }

    /// Produces the case entry for `key`, without looking at other keys.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyIdentifier`] when the key folds to nothing and the
    /// grammar has no sentinel.
    pub fn synthesize(&self, key: &str) -> Result<CaseEntry, Error> {
        if is_identifier(key) {
            return Ok(CaseEntry {
                key: key.to_string(),
                identifier: self.identifier_for(key.to_string()),
                matches_key: true,
                escaped: self.reserved.contains(key),
                collision_suffix: None,
            });
        }

        let folded = fold_camel_case(key);
        let name = if folded.is_empty() {
            self.grammar
                .empty_key_sentinel()
                .map(str::to_string)
                .ok_or_else(|| Error::EmptyIdentifier(key.to_string()))?
        } else {
            folded
        };

        Ok(CaseEntry {
            key: key.to_string(),
            escaped: self.reserved.contains(&name),
            identifier: self.identifier_for(name),
            matches_key: false,
            collision_suffix: None,
        })
    }

    /// Wraps a legal bare name, escaping it if it is reserved.
    pub(crate) fn identifier_for(&self, name: String) -> Identifier {
        debug_assert!(is_identifier(&name), "`{name}` is not an identifier");
        if self.reserved.contains(&name) {
            Identifier::escaped(name, self.grammar)
        } else {
            Identifier::bare(name)
        }
    }
}

/// Synthesizes the case entry for a single key.
pub fn synthesize(key: &str, reserved: &KeywordSet, grammar: &Grammar) -> Result<CaseEntry, Error> {
    Synthesizer::new(reserved, grammar).synthesize(key)
}
