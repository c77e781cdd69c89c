//! The Swift source file wrapped around the rendered case list.

use std::fmt::Write;

use indoc::indoc;

use crate::{
    error::Error,
    grammar::is_identifier,
    keywords::KeywordSet,
    renderer::{render, swift_string_literal},
    types::CaseGroup,
};

pub const DEFAULT_ENUM_NAME: &str = "XcodeStringKey";
pub const DEFAULT_TYPE_ALIAS: &str = "XCS";
/// Table name Xcode uses for `Localizable.xcstrings`; never passed explicitly.
pub const DEFAULT_TABLE_NAME: &str = "Localizable";

/// Names the generated enum declares besides its cases.
///
/// A case with one of these names would be a redeclaration, so grouping
/// treats them as taken.
pub const MEMBER_NAMES: &[&str] = &["key", "string", "rawValue", "allCases"];

/// Enum name, alias and table settings for the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTemplate {
    enum_name: String,
    type_alias: Option<String>,
    table_name: Option<String>,
}

impl Default for EnumTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_ENUM_NAME).with_type_alias(Some(DEFAULT_TYPE_ALIAS.to_string()))
    }
}

impl EnumTemplate {
    /// A template for `enum_name`, without alias or table.
    pub fn new(enum_name: impl Into<String>) -> Self {
        Self {
            enum_name: enum_name.into(),
            type_alias: None,
            table_name: None,
        }
    }

    pub fn with_type_alias(mut self, type_alias: Option<String>) -> Self {
        self.type_alias = type_alias;
        self
    }

    /// Sets the strings table. The default `Localizable` table is dropped.
    pub fn with_table_name(mut self, table_name: Option<String>) -> Self {
        self.table_name = table_name.filter(|name| name != DEFAULT_TABLE_NAME);
        self
    }

    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    pub fn type_alias(&self) -> Option<&str> {
        self.type_alias.as_deref()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// Checks that the enum name and alias are usable type names.
    pub fn validate(&self, reserved: &KeywordSet) -> Result<(), Error> {
        check_type_name("enum name", &self.enum_name, reserved)?;
        if let Some(alias) = &self.type_alias {
            check_type_name("type alias", alias, reserved)?;
            if *alias == self.enum_name {
                return Err(Error::template_error(format!(
                    "type alias `{}` is the same as the enum name",
                    alias
                )));
            }
        }
        if self.table_name.as_deref() == Some("") {
            return Err(Error::template_error("table name must not be empty"));
        }
        Ok(())
    }

    /// Renders the complete Swift file for `group`.
    pub fn render(&self, group: &CaseGroup) -> String {
        let mut out = String::from(indoc! {"
            // This file is generated by xcstrings-enum. Please do *NOT* update it manually.
            // As a common practice, SwiftLint is disabled for generated files.
            // swiftlint:disable all

            import SwiftUI

        "});

        let short_name = match &self.type_alias {
            Some(alias) => {
                let _ = writeln!(out, "/// Makes it a bit easier to type.");
                let _ = writeln!(out, "typealias {} = {}", alias, self.enum_name);
                out.push('\n');
                alias.as_str()
            }
            None => self.enum_name.as_str(),
        };

        let _ = writeln!(
            out,
            "/// Generated by xcstrings-enum, this enum contains all existing String Catalog keys."
        );
        let _ = writeln!(out, "enum {}: String, CaseIterable {{", self.enum_name);
        out.push_str(&render(group));
        out.push('\n');

        let _ = writeln!(
            out,
            "    /// Usage: `SwiftUI.Text({}.yourStringCatalogKey.key)`",
            short_name
        );
        let _ = writeln!(
            out,
            "    var key: LocalizedStringKey {{ LocalizedStringKey(rawValue) }}"
        );
        out.push('\n');
        let table = self
            .table_name
            .as_deref()
            .map(|name| format!("tableName: {}, ", swift_string_literal(name)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "    var string: String {{ NSLocalizedString(rawValue, {}comment: \"Generated localization from String Catalog key\") }}",
            table
        );
        out.push_str("}\n");
        out.push_str("// swiftlint:enable all\n");
        out
    }
}

fn check_type_name(what: &str, name: &str, reserved: &KeywordSet) -> Result<(), Error> {
    if !is_identifier(name) {
        return Err(Error::template_error(format!(
            "{} `{}` is not a legal identifier",
            what, name
        )));
    }
    if reserved.contains(name) {
        return Err(Error::template_error(format!(
            "{} `{}` is a reserved word",
            what, name
        )));
    }
    Ok(())
}
