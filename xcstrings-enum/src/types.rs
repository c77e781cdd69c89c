//! Values produced by identifier synthesis and case grouping.

use std::fmt::Display;

use crate::grammar::Grammar;

/// A legal enum case identifier.
///
/// `name` is always a bare identifier. When the name is a reserved word the
/// escaped spelling used in the declaration is kept alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
    escaped: Option<String>,
}

impl Identifier {
    /// An identifier declared as-is.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            escaped: None,
        }
    }

    /// An identifier declared with the grammar's escaping markup.
    pub fn escaped(name: impl Into<String>, grammar: &Grammar) -> Self {
        let name = name.into();
        let escaped = grammar.escape(&name);
        Self {
            name,
            escaped: Some(escaped),
        }
    }

    /// The bare identifier text, without markup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text written in the case declaration.
    pub fn declaration(&self) -> &str {
        self.escaped.as_deref().unwrap_or(&self.name)
    }

    pub fn is_escaped(&self) -> bool {
        self.escaped.is_some()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.declaration())
    }
}

/// The synthesis result for one catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseEntry {
    /// The catalog key, untouched.
    pub key: String,
    /// The final, unique identifier.
    pub identifier: Identifier,
    /// The synthesized identifier equals the key once markup is removed.
    pub matches_key: bool,
    /// The synthesized identifier was a reserved word, before any collision suffix.
    pub escaped: bool,
    /// Numeric suffix appended to resolve a collision with an earlier entry.
    pub collision_suffix: Option<usize>,
}

impl CaseEntry {
    /// Whether the declaration needs an explicit `= "<key>"` raw value.
    ///
    /// Renamed entries always carry one, even when the escaped declaration
    /// happens to spell the key (`` "`default`" ``).
    pub fn needs_raw_value(&self) -> bool {
        !self.matches_key || self.identifier.declaration() != self.key
    }
}

/// Case entries split into keys usable verbatim and keys that were renamed.
///
/// Both groups keep the catalog's input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseGroup {
    pub verbatim: Vec<CaseEntry>,
    pub renamed: Vec<CaseEntry>,
}

impl CaseGroup {
    /// Iterates the verbatim group, then the renamed group.
    pub fn iter(&self) -> impl Iterator<Item = &CaseEntry> {
        self.verbatim.iter().chain(self.renamed.iter())
    }

    pub fn len(&self) -> usize {
        self.verbatim.len() + self.renamed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbatim.is_empty() && self.renamed.is_empty()
    }

    /// Finds the entry generated for `key`.
    pub fn find_by_key(&self, key: &str) -> Option<&CaseEntry> {
        self.iter().find(|entry| entry.key == key)
    }
}
