//! Command-line flags and their merge with the config file.

use clap::Parser;
use xcstrings_enum::{
    Error, Generator, KeywordSet,
    grammar::DEFAULT_EMPTY_KEY_SENTINEL,
    template::{DEFAULT_ENUM_NAME, DEFAULT_TYPE_ALIAS},
};

use crate::config::FileConfig;

/// Generate a Swift enum from the keys of an Xcode String Catalog.
#[derive(Parser, Debug, Default)]
#[command(name = "xcstrings-enum", author, version, about, long_about = None)]
pub struct CliOptions {
    /// Full path and filename of the 'xcstrings' file.
    #[arg(long)]
    pub xcstrings_path: Option<String>,

    /// Full path and filename of the generated Swift file.
    #[arg(long)]
    pub output_filename: Option<String>,

    /// Print the generated Swift source instead of writing a file
    #[arg(long, conflicts_with = "output_filename")]
    pub stdout: bool,

    /// Generated enum name [default: XcodeStringKey]
    #[arg(long)]
    pub enum_name: Option<String>,

    /// A typealias of the generated enum name [default: XCS]
    #[arg(long)]
    pub enum_typealias: Option<String>,

    /// Do not emit a typealias
    #[arg(long, conflicts_with = "enum_typealias")]
    pub no_typealias: bool,

    /// Replace the Swift reserved words with this comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub keywords: Option<Vec<String>>,

    /// Additional reserved words, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub extra_keywords: Vec<String>,

    /// Case name used for keys without any letters or digits [default: emptyKey]
    #[arg(long)]
    pub empty_key_sentinel: Option<String>,

    /// Fail on keys without any letters or digits instead of using a sentinel
    #[arg(long, conflicts_with = "empty_key_sentinel")]
    pub no_sentinel: bool,

    /// Strings table passed to NSLocalizedString [default: catalog file name]
    #[arg(long)]
    pub table_name: Option<String>,

    /// Emit cases in key order instead of catalog order
    #[arg(long)]
    pub sort_keys: bool,

    /// Leave out keys Xcode marked as stale
    #[arg(long)]
    pub skip_stale: bool,

    /// TOML config file; flags override its values
    #[arg(long)]
    pub config: Option<String>,

    /// Print every renamed, escaped or suffixed case
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the generated text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(String),
    Stdout,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub xcstrings_path: String,
    pub output: OutputTarget,
    pub enum_name: String,
    pub enum_typealias: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub extra_keywords: Vec<String>,
    pub empty_key_sentinel: Option<String>,
    pub table_name: Option<String>,
    pub sort_keys: bool,
    pub skip_stale: bool,
    pub verbose: bool,
}

impl Settings {
    /// Merges flags over the config file and fills in defaults.
    pub fn resolve(cli: CliOptions, file: FileConfig) -> Result<Self, String> {
        let xcstrings_path = cli
            .xcstrings_path
            .or(file.xcstrings_path)
            .ok_or_else(|| "Missing --xcstrings-path".to_string())?;

        let output = if cli.stdout {
            OutputTarget::Stdout
        } else {
            cli.output_filename
                .or(file.output_filename)
                .map(OutputTarget::File)
                .ok_or_else(|| "Missing --output-filename (or pass --stdout)".to_string())?
        };

        let enum_typealias = if cli.no_typealias {
            None
        } else if let Some(alias) = cli.enum_typealias {
            Some(alias)
        } else if file.no_typealias.unwrap_or(false) {
            None
        } else {
            Some(
                file.enum_typealias
                    .unwrap_or_else(|| DEFAULT_TYPE_ALIAS.to_string()),
            )
        };

        let empty_key_sentinel = if cli.no_sentinel {
            None
        } else if let Some(sentinel) = cli.empty_key_sentinel {
            Some(sentinel)
        } else if file.no_sentinel.unwrap_or(false) {
            None
        } else {
            Some(
                file.empty_key_sentinel
                    .unwrap_or_else(|| DEFAULT_EMPTY_KEY_SENTINEL.to_string()),
            )
        };

        let mut extra_keywords = file.extra_keywords.unwrap_or_default();
        extra_keywords.extend(cli.extra_keywords);

        Ok(Settings {
            xcstrings_path,
            output,
            enum_name: cli
                .enum_name
                .or(file.enum_name)
                .unwrap_or_else(|| DEFAULT_ENUM_NAME.to_string()),
            enum_typealias,
            keywords: cli.keywords.or(file.keywords),
            extra_keywords,
            empty_key_sentinel,
            table_name: cli.table_name.or(file.table_name),
            sort_keys: cli.sort_keys || file.sort_keys.unwrap_or(false),
            skip_stale: cli.skip_stale || file.skip_stale.unwrap_or(false),
            verbose: cli.verbose,
        })
    }

    /// Builds the generator these settings describe.
    pub fn generator(&self) -> Result<Generator, Error> {
        let mut builder = Generator::builder()
            .enum_name(self.enum_name.clone())
            .type_alias(self.enum_typealias.clone())
            .extra_keywords(self.extra_keywords.iter().cloned())
            .empty_key_sentinel(self.empty_key_sentinel.clone())
            .table_name(self.table_name.clone())
            .sort_keys(self.sort_keys)
            .skip_stale(self.skip_stale);
        if let Some(words) = &self.keywords {
            builder = builder.keywords(KeywordSet::new(words.iter().map(|w| w.trim().to_string()))?);
        }
        builder.build()
    }
}
