//! Renders grouped case entries as the body of a Swift enum.

use std::fmt::Write;

use crate::types::{CaseEntry, CaseGroup};

/// Separates the verbatim cases from the renamed ones.
pub const RENAMED_CASES_BANNER: &str =
    "    // MARK: - The following cases should be manually replaced in your codebase.";

const INDENT: &str = "    ";

/// Renders the full case list: verbatim cases, the banner, renamed cases.
///
/// ```rust
/// use xcstrings_enum::{Grammar, KeywordSet, group, render};
///
/// let reserved = KeywordSet::new(["continue"])?;
/// let group = group(&["okButton", "continue", "Hello World"], &reserved, &Grammar::swift())?;
/// let text = render(&group);
/// assert!(text.starts_with("    case okButton\n    case `continue` = \"continue\"\n"));
/// assert!(text.ends_with("    case helloWorld = \"Hello World\"\n"));
/// # Ok::<(), xcstrings_enum::Error>(())
/// ```
pub fn render(group: &CaseGroup) -> String {
    let mut out = render_cases(&group.verbatim);
    out.push('\n');
    out.push_str(RENAMED_CASES_BANNER);
    out.push_str("\n\n");
    out.push_str(&render_cases(&group.renamed));
    out
}

/// Renders one `case` line per entry.
pub fn render_cases(entries: &[CaseEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&render_case(entry));
        out.push('\n');
    }
    out
}

/// Renders a single indented `case` declaration, without the trailing newline.
pub fn render_case(entry: &CaseEntry) -> String {
    if entry.needs_raw_value() {
        format!(
            "{}case {} = {}",
            INDENT,
            entry.identifier.declaration(),
            swift_string_literal(&entry.key)
        )
    } else {
        format!("{}case {}", INDENT, entry.identifier.declaration())
    }
}

/// Quotes `value` as a Swift string literal.
pub fn swift_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:X}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grammar::Grammar, grouper::group, keywords::KeywordSet};

    fn reserved() -> KeywordSet {
        KeywordSet::new(["continue", "default"]).unwrap()
    }

    #[test]
    fn test_render_example_catalog() {
        let group = group(
            &["Hello World", "continue", "okButton"],
            &reserved(),
            &Grammar::swift(),
        )
        .unwrap();
        let expected = "    case `continue` = \"continue\"\n\
                        \x20   case okButton\n\
                        \n\
                        \x20   // MARK: - The following cases should be manually replaced in your codebase.\n\
                        \n\
                        \x20   case helloWorld = \"Hello World\"\n";
        assert_eq!(render(&group), expected);
    }

    #[test]
    fn test_render_collision_keeps_catalog_keys() {
        let group = group(&["User Name", "userName"], &reserved(), &Grammar::swift()).unwrap();
        let text = render(&group);
        assert!(text.contains("    case userName2 = \"userName\"\n"));
        assert!(text.contains("    case userName = \"User Name\"\n"));
        let banner = text.find("// MARK").unwrap();
        assert!(text.find("userName2").unwrap() < banner);
        assert!(text.find("\"User Name\"").unwrap() > banner);
    }

    #[test]
    fn test_render_empty_group_still_has_banner() {
        let text = render(&CaseGroup::default());
        assert_eq!(text, format!("\n{}\n\n", RENAMED_CASES_BANNER));
    }

    #[test]
    fn test_render_is_repeatable() {
        let group = group(&["a b", "aB", "default"], &reserved(), &Grammar::swift()).unwrap();
        assert_eq!(render(&group), render(&group.clone()));
    }

    #[test]
    fn test_swift_string_literal_escapes() {
        assert_eq!(swift_string_literal("plain"), "\"plain\"");
        assert_eq!(swift_string_literal("Say \"hi\""), "\"Say \\\"hi\\\"\"");
        assert_eq!(swift_string_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(swift_string_literal("line\nbreak\t"), "\"line\\nbreak\\t\"");
        assert_eq!(swift_string_literal("bell\u{7}"), "\"bell\\u{7}\"");
        assert_eq!(swift_string_literal("Crème"), "\"Crème\"");
    }

    #[test]
    fn test_renamed_key_spelled_like_escaped_declaration_keeps_raw_value() {
        let group = group(&["`default`"], &reserved(), &Grammar::swift()).unwrap();
        assert_eq!(group.renamed.len(), 1);
        assert!(render(&group).ends_with("    case `default` = \"`default`\"\n"));
    }

    #[test]
    fn test_render_quotes_keys() {
        let group = group(&["Say \"hi\""], &reserved(), &Grammar::swift()).unwrap();
        assert!(render(&group).contains("case sayHi = \"Say \\\"hi\\\"\""));
    }
}
