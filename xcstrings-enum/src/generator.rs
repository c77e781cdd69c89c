//! Runs the whole pipeline: catalog → keys → case group → Swift source → file.
//!
//! # Example
//!
//! ```rust,no_run
//! use xcstrings_enum::Generator;
//!
//! let generator = Generator::builder()
//!     .enum_name("L10n")
//!     .type_alias(None)
//!     .sort_keys(true)
//!     .build()?;
//! let report = generator.generate_file("Localizable.xcstrings", "Generated/L10n.swift")?;
//! println!("{} cases, {} renamed", report.total, report.renamed);
//! # Ok::<(), xcstrings_enum::Error>(())
//! ```

use std::{ffi::OsString, fs, io, path::Path};

use crate::{
    catalog::Catalog,
    error::Error,
    grammar::Grammar,
    grouper::group_avoiding,
    key_options::KeyOptions,
    keywords::KeywordSet,
    template::{DEFAULT_ENUM_NAME, DEFAULT_TYPE_ALIAS, EnumTemplate, MEMBER_NAMES},
    types::CaseGroup,
};

/// Counts describing one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    pub total: usize,
    pub verbatim: usize,
    pub renamed: usize,
    /// Entries whose synthesized identifier was a reserved word.
    pub escaped: usize,
    /// Entries that received a collision suffix.
    pub suffixed: usize,
}

impl From<&CaseGroup> for Report {
    fn from(group: &CaseGroup) -> Self {
        Report {
            total: group.len(),
            verbatim: group.verbatim.len(),
            renamed: group.renamed.len(),
            escaped: group.iter().filter(|e| e.escaped).count(),
            suffixed: group.iter().filter(|e| e.collision_suffix.is_some()).count(),
        }
    }
}

/// The grouped cases together with the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub group: CaseGroup,
    pub text: String,
}

impl Output {
    pub fn report(&self) -> Report {
        Report::from(&self.group)
    }
}

/// A validated generation configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    reserved: KeywordSet,
    grammar: Grammar,
    template: EnumTemplate,
    table_name: Option<String>,
    key_options: KeyOptions,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            reserved: KeywordSet::swift().clone(),
            grammar: Grammar::swift(),
            template: EnumTemplate::default(),
            table_name: None,
            key_options: KeyOptions::default(),
        }
    }
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn reserved(&self) -> &KeywordSet {
        &self.reserved
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn template(&self) -> &EnumTemplate {
        &self.template
    }

    pub fn key_options(&self) -> &KeyOptions {
        &self.key_options
    }

    /// Reads a catalog file.
    pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Error> {
        Catalog::read_from(path)
    }

    /// Groups an explicit key list with this generator's configuration.
    pub fn group_keys<S: AsRef<str> + Sync>(&self, keys: &[S]) -> Result<CaseGroup, Error> {
        group_avoiding(keys, &self.reserved, &self.grammar, MEMBER_NAMES)
    }

    /// Groups the keys of `catalog` selected by the key options.
    pub fn group_catalog(&self, catalog: &Catalog) -> Result<CaseGroup, Error> {
        self.group_keys(&catalog.keys(&self.key_options))
    }

    /// Generates the Swift source for `catalog`.
    pub fn generate(&self, catalog: &Catalog) -> Result<String, Error> {
        Ok(self.generate_output(catalog, None)?.text)
    }

    /// Generates the Swift source and keeps the case group for reporting.
    ///
    /// `table_name` is used unless the builder fixed one explicitly.
    pub fn generate_output(
        &self,
        catalog: &Catalog,
        table_name: Option<&str>,
    ) -> Result<Output, Error> {
        let group = self.group_catalog(catalog)?;
        let table_name = self
            .table_name
            .clone()
            .or_else(|| table_name.map(str::to_string));
        let text = self
            .template
            .clone()
            .with_table_name(table_name)
            .render(&group);
        Ok(Output { group, text })
    }

    /// Reads `input`, generates, and writes the result to `output`.
    ///
    /// The strings table is taken from the catalog's file name
    /// (`Onboarding.xcstrings` → `Onboarding`).
    pub fn generate_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<Report, Error> {
        let input = input.as_ref();
        let catalog = Self::read_catalog(input)?;
        let generated = self.generate_output(&catalog, table_name_for(input).as_deref())?;
        write_output(output, &generated.text)?;
        Ok(generated.report())
    }
}

/// Derives the strings table name from a catalog path.
pub fn table_name_for<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Writes `text` to `path`, replacing any existing file in one step.
///
/// The text goes to a hidden sibling file first and is then renamed over the
/// destination, so readers never observe a half-written file. Missing parent
/// directories are created.
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path has no file name: {}", path.display()),
        )
    })?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, text)?;
    fs::rename(&tmp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp_path);
    })?;
    Ok(())
}

/// Builder for a [`Generator`].
///
/// Everything defaults to the Swift setup: Swift keywords, backtick
/// escaping, `emptyKey` sentinel, `XcodeStringKey` enum aliased as `XCS`.
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    keywords: Option<KeywordSet>,
    extra_keywords: Vec<String>,
    grammar: Grammar,
    enum_name: String,
    type_alias: Option<String>,
    table_name: Option<String>,
    key_options: KeyOptions,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self {
            keywords: None,
            extra_keywords: Vec::new(),
            grammar: Grammar::swift(),
            enum_name: DEFAULT_ENUM_NAME.to_string(),
            type_alias: Some(DEFAULT_TYPE_ALIAS.to_string()),
            table_name: None,
            key_options: KeyOptions::default(),
        }
    }

    /// Replaces the Swift keyword set.
    pub fn keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Adds reserved words on top of the keyword set. Validated in [`Self::build`].
    pub fn extra_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_keywords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Sets the empty-key sentinel; `None` turns empty folds into errors.
    pub fn empty_key_sentinel(mut self, sentinel: Option<String>) -> Self {
        self.grammar = self.grammar.with_empty_key_sentinel(sentinel);
        self
    }

    pub fn enum_name(mut self, enum_name: impl Into<String>) -> Self {
        self.enum_name = enum_name.into();
        self
    }

    pub fn type_alias(mut self, type_alias: Option<String>) -> Self {
        self.type_alias = type_alias;
        self
    }

    /// Fixes the strings table instead of deriving it from the catalog file name.
    pub fn table_name(mut self, table_name: Option<String>) -> Self {
        self.table_name = table_name;
        self
    }

    pub fn key_options(mut self, key_options: KeyOptions) -> Self {
        self.key_options = key_options;
        self
    }

    pub fn sort_keys(mut self, sort_keys: bool) -> Self {
        self.key_options = self.key_options.with_sort_keys(sort_keys);
        self
    }

    pub fn skip_stale(mut self, skip_stale: bool) -> Self {
        self.key_options = self.key_options.with_skip_stale(skip_stale);
        self
    }

    /// Validates the configuration and builds the generator.
    ///
    /// # Errors
    ///
    /// - [`Error::IllegalGrammarConfig`] for illegal reserved words, markup or sentinel.
    /// - [`Error::InvalidTemplate`] for an illegal enum name, alias or table.
    pub fn build(self) -> Result<Generator, Error> {
        let mut reserved = self
            .keywords
            .unwrap_or_else(|| KeywordSet::swift().clone());
        reserved.extend(self.extra_keywords)?;
        self.grammar.validate()?;

        let template = EnumTemplate::new(self.enum_name).with_type_alias(self.type_alias);
        template.validate(&reserved)?;
        if self.table_name.as_deref() == Some("") {
            return Err(Error::template_error("table name must not be empty"));
        }

        Ok(Generator {
            reserved,
            grammar: self.grammar,
            template,
            table_name: self.table_name,
            key_options: self.key_options,
        })
    }
}
