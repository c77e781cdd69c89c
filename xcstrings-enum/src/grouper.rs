//! Synthesizes every key of a catalog and makes the identifiers unique.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    error::Error,
    grammar::{Grammar, is_identifier},
    keywords::KeywordSet,
    synthesizer::Synthesizer,
    types::{CaseEntry, CaseGroup},
};

/// Groups `keys` into verbatim and renamed case entries.
///
/// Keys are synthesized independently, then collisions are resolved in input
/// order: the first entry keeps the name, later ones get the smallest suffix
/// `2`, `3`, … that no other entry uses or claims.
///
/// # Errors
///
/// - [`Error::DuplicateKey`] when the same key appears twice.
/// - [`Error::EmptyIdentifier`] from synthesis.
///
/// # Example
///
/// ```rust
/// use xcstrings_enum::{Grammar, KeywordSet, group};
///
/// let reserved = KeywordSet::new(["continue", "default"])?;
/// let group = group(&["Hello World", "continue", "okButton"], &reserved, &Grammar::swift())?;
/// assert_eq!(group.verbatim[0].identifier.declaration(), "`continue`");
/// assert_eq!(group.verbatim[1].identifier.declaration(), "okButton");
/// assert_eq!(group.renamed[0].identifier.declaration(), "helloWorld");
/// # Ok::<(), xcstrings_enum::Error>(())
/// ```
pub fn group<S>(keys: &[S], reserved: &KeywordSet, grammar: &Grammar) -> Result<CaseGroup, Error>
where
    S: AsRef<str> + Sync,
{
    group_avoiding(keys, reserved, grammar, &[])
}

/// Like [`group`], but treats `occupied` names as already taken.
///
/// Used for member names the surrounding declaration defines itself (such as
/// `rawValue`): a key synthesizing to one of them is suffixed like any other
/// collision.
pub fn group_avoiding<S>(
    keys: &[S],
    reserved: &KeywordSet,
    grammar: &Grammar,
    occupied: &[&str],
) -> Result<CaseGroup, Error>
where
    S: AsRef<str> + Sync,
{
    ensure_unique_keys(keys)?;

    let synthesizer = Synthesizer::new(reserved, grammar);
    let mut entries = keys
        .par_iter()
        .map(|key| synthesizer.synthesize(key.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    resolve_collisions(&mut entries, &synthesizer, occupied);

    let (verbatim, renamed) = entries.into_iter().partition(|entry| entry.matches_key);
    Ok(CaseGroup { verbatim, renamed })
}

fn ensure_unique_keys<S: AsRef<str>>(keys: &[S]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(keys.len());
    for key in keys {
        let key = key.as_ref();
        if !seen.insert(key) {
            return Err(Error::DuplicateKey(key.to_string()));
        }
    }
    Ok(())
}

fn resolve_collisions(entries: &mut [CaseEntry], synthesizer: &Synthesizer<'_>, occupied: &[&str]) {
    let claimed: HashSet<String> = entries
        .iter()
        .map(|entry| entry.identifier.name().to_string())
        .chain(occupied.iter().map(|name| name.to_string()))
        .collect();
    let mut assigned: HashSet<String> = occupied.iter().map(|name| name.to_string()).collect();

    for entry in entries.iter_mut() {
        let base = entry.identifier.name().to_string();
        if !assigned.contains(&base) {
            assigned.insert(base);
            continue;
        }

        let mut suffix = 2;
        let name = loop {
            let candidate = format!("{}{}", base, suffix);
            if !claimed.contains(&candidate) && !assigned.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        debug_assert!(is_identifier(&name));

        entry.identifier = synthesizer.identifier_for(name.clone());
        entry.collision_suffix = Some(suffix);
        assigned.insert(name);
    }
}
