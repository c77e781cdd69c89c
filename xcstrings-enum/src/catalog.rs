//! Typed decoding of Xcode String Catalogs (`.xcstrings`).
//!
//! Only the parts needed to enumerate keys are modelled; localizations,
//! variations and substitutions are skipped by the decoder.

use std::{
    fmt::Formatter,
    fs::File,
    io::{BufRead, BufReader, Cursor, Read},
    path::Path,
    str::FromStr,
};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use unic_langid::LanguageIdentifier;

use crate::{error::Error, key_options::KeyOptions};

fn default_version() -> String {
    "1.0".to_string()
}

/// A decoded string catalog.
///
/// # Example
///
/// ```rust,no_run
/// use xcstrings_enum::{Catalog, KeyOptions};
///
/// let catalog = Catalog::read_from("Localizable.xcstrings")?;
/// for key in catalog.keys(&KeyOptions::new()) {
///     println!("{}", key);
/// }
/// # Ok::<(), xcstrings_enum::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub source_language: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub strings: Strings,
}

impl FromStr for Catalog {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(Cursor::new(s))
    }
}

impl Catalog {
    /// Parses and validates a catalog from a reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let catalog: Catalog = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a catalog from raw bytes (UTF-8, no BOM).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(bytes))
    }

    /// Reads a catalog file, honouring a UTF-8 or UTF-16 byte order mark.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded)?;

        decoded.parse()
    }

    /// Checks that the source language is a valid language identifier.
    pub fn validate(&self) -> Result<(), Error> {
        self.source_language
            .parse::<LanguageIdentifier>()
            .map(|_| ())
            .map_err(|e| {
                Error::catalog_error(format!(
                    "invalid sourceLanguage `{}`: {}",
                    self.source_language, e
                ))
            })
    }

    /// Returns the keys selected by `options`.
    ///
    /// In catalog order unless `sort_keys` is set. Duplicate keys are passed
    /// through unchanged so the grouper can report them.
    pub fn keys(&self, options: &KeyOptions) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .strings
            .iter()
            .filter(|(_, item)| !(options.skip_stale && item.is_stale()))
            .map(|(key, _)| key.as_str())
            .collect();
        if options.sort_keys {
            keys.sort_unstable();
        }
        keys
    }

    /// Finds the first item stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Item> {
        self.strings.iter().find(|(k, _)| k == key).map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.strings.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.0.is_empty()
    }
}

/// The `strings` object of a catalog, in document order.
///
/// Decoded with a map visitor rather than a hash map so that key order and
/// repeated keys survive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Strings(Vec<(String, Item)>);

impl Strings {
    pub fn iter(&self) -> impl Iterator<Item = &(String, Item)> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Strings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StringsVisitor;

        impl<'de> Visitor<'de> for StringsVisitor {
            type Value = Strings;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of string keys to catalog items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Strings, A::Error> {
                let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, item)) = map.next_entry::<String, Item>()? {
                    items.push((key, item));
                }
                Ok(Strings(items))
            }
        }

        deserializer.deserialize_map(StringsVisitor)
    }
}

/// One entry of the `strings` object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub comment: Option<String>,
    pub extraction_state: Option<ExtractionState>,
    pub should_translate: Option<bool>,
}

impl Item {
    pub fn is_stale(&self) -> bool {
        self.extraction_state == Some(ExtractionState::Stale)
    }
}

/// How Xcode found the key. Values this crate does not know decode as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionState {
    Manual,
    Stale,
    ExtractedWithValue,
    Migrated,
    #[serde(other)]
    Unknown,
}
