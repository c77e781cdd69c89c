#![forbid(unsafe_code)]
//! Generate a type-checked Swift enum from the keys of an Xcode String Catalog.
//!
//! Every catalog key becomes an enum case. Keys that already are legal
//! identifiers are used verbatim (reserved words get backticks); all others
//! are camel-case folded and keep the catalog key as their raw value.
//! Identifiers that end up equal are made unique with numeric suffixes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xcstrings_enum::Generator;
//!
//! Generator::default().generate_file("Localizable.xcstrings", "XcodeStringKey.swift")?;
//! # Ok::<(), xcstrings_enum::Error>(())
//! ```
//!
//! Or drive the core directly:
//!
//! ```rust
//! use xcstrings_enum::{Grammar, KeywordSet, group, render};
//!
//! let group = group(&["Hello World", "continue", "okButton"], KeywordSet::swift(), &Grammar::swift())?;
//! let cases = render(&group);
//! assert!(cases.contains("case helloWorld = \"Hello World\""));
//! # Ok::<(), xcstrings_enum::Error>(())
//! ```

pub mod catalog;
pub mod error;
pub mod generator;
pub mod grammar;
pub mod grouper;
pub mod key_options;
pub mod keywords;
pub mod renderer;
pub mod synthesizer;
pub mod template;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::{Catalog, ExtractionState, Item},
    error::Error,
    generator::{Generator, GeneratorBuilder, Output, Report, write_output},
    grammar::{Grammar, is_identifier},
    grouper::{group, group_avoiding},
    key_options::KeyOptions,
    keywords::KeywordSet,
    renderer::render,
    synthesizer::{Synthesizer, fold_camel_case, synthesize},
    template::EnumTemplate,
    types::{CaseEntry, CaseGroup, Identifier},
};
