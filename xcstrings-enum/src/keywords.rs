//! Reserved words of the host language.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::{error::Error, grammar::is_identifier};

/// Swift keywords that need backticks to be used as an enum case name.
///
/// Contextual keywords are included as well; escaping them is harmless.
pub const SWIFT_KEYWORDS: &[&str] = &[
    // Declarations
    "associatedtype",
    "borrowing",
    "class",
    "consuming",
    "deinit",
    "enum",
    "extension",
    "fileprivate",
    "func",
    "import",
    "init",
    "inout",
    "internal",
    "let",
    "nonisolated",
    "open",
    "operator",
    "package",
    "private",
    "precedencegroup",
    "protocol",
    "public",
    "rethrows",
    "static",
    "struct",
    "subscript",
    "typealias",
    "var",
    // Statements
    "break",
    "case",
    "catch",
    "continue",
    "default",
    "defer",
    "do",
    "else",
    "fallthrough",
    "for",
    "guard",
    "if",
    "in",
    "repeat",
    "return",
    "switch",
    "throw",
    "where",
    "while",
    // Expressions and types
    "Any",
    "as",
    "await",
    "false",
    "is",
    "nil",
    "self",
    "Self",
    "super",
    "throws",
    "true",
    "try",
];

lazy_static! {
    static ref SWIFT: KeywordSet = KeywordSet::from_trusted(SWIFT_KEYWORDS);
}

/// An ordered set of reserved identifiers.
///
/// Insertion order is kept for display; lookups go through a hash index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordSet {
    words: Vec<String>,
    index: HashSet<String>,
}

impl KeywordSet {
    /// Builds a keyword set, rejecting words that are not legal identifiers.
    ///
    /// Repeated words are kept once, at their first position.
    pub fn new<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        set.extend(words)?;
        Ok(set)
    }

    /// The process-wide Swift keyword set.
    pub fn swift() -> &'static KeywordSet {
        &SWIFT
    }

    fn from_trusted(words: &[&str]) -> Self {
        let mut set = Self::default();
        for word in words {
            set.insert(word.to_string());
        }
        set
    }

    /// Adds more reserved words, validating each one.
    pub fn extend<I, S>(&mut self, words: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word = word.into();
            if !is_identifier(&word) {
                return Err(Error::grammar_error(format!(
                    "reserved word `{}` is not a legal identifier",
                    word
                )));
            }
            self.insert(word);
        }
        Ok(())
    }

    fn insert(&mut self, word: String) {
        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
