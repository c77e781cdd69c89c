use std::fs;
use std::str::FromStr;
use tempfile::TempDir;
use xcstrings_enum::{Catalog, Error, Generator, KeyOptions, KeywordSet};

const CATALOG: &str = r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "Hello World" : {
      "localizations" : {
        "en" : { "stringUnit" : { "state" : "translated", "value" : "Hello World" } },
        "fr" : { "stringUnit" : { "state" : "translated", "value" : "Bonjour le monde" } }
      }
    },
    "continue" : {
      "comment" : "Primary button"
    },
    "okButton" : { },
    "%lld items" : {
      "localizations" : {
        "en" : {
          "variations" : {
            "plural" : {
              "one" : { "stringUnit" : { "state" : "translated", "value" : "%lld item" } },
              "other" : { "stringUnit" : { "state" : "translated", "value" : "%lld items" } }
            }
          }
        }
      }
    },
    "User Name" : { },
    "userName" : { },
    "!!!" : { }
  },
  "version" : "1.0"
}"#;

fn write_catalog(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_full_output_for_sample_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(&temp_dir, "Localizable.xcstrings", CATALOG.as_bytes());
    let output = temp_dir.path().join("XcodeStringKey.swift");

    let report = Generator::default().generate_file(&input, &output).unwrap();
    assert_eq!(report.total, 7);
    assert_eq!(report.verbatim, 3);
    assert_eq!(report.renamed, 4);
    assert_eq!(report.escaped, 1);
    assert_eq!(report.suffixed, 1);

    let text = fs::read_to_string(&output).unwrap();
    let expected_cases = "\
enum XcodeStringKey: String, CaseIterable {
    case `continue` = \"continue\"
    case okButton
    case userName2 = \"userName\"

    // MARK: - The following cases should be manually replaced in your codebase.

    case helloWorld = \"Hello World\"
    case lldItems = \"%lld items\"
    case userName = \"User Name\"
    case emptyKey = \"!!!\"

    /// Usage: `SwiftUI.Text(XCS.yourStringCatalogKey.key)`
";
    assert!(text.contains(expected_cases), "unexpected output:\n{}", text);
}

#[test]
fn test_utf8_bom_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(CATALOG.as_bytes());
    let input = write_catalog(&temp_dir, "Localizable.xcstrings", &bytes);

    let catalog = Catalog::read_from(&input).unwrap();
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_utf16_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let mut bytes = vec![0xFF, 0xFE];
    for unit in CATALOG.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let input = write_catalog(&temp_dir, "Localizable.xcstrings", &bytes);

    let catalog = Catalog::read_from(&input).unwrap();
    assert_eq!(
        catalog.keys(&KeyOptions::new())[..3],
        ["Hello World", "continue", "okButton"]
    );
}

#[test]
fn test_duplicate_keys_in_file_fail() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(
        &temp_dir,
        "Localizable.xcstrings",
        br#"{"sourceLanguage":"en","strings":{"title":{},"title":{}},"version":"1.0"}"#,
    );
    let output = temp_dir.path().join("Out.swift");

    let err = Generator::default().generate_file(&input, &output).unwrap_err();
    assert!(matches!(err, Error::DuplicateKey(ref key) if key == "title"));
    assert!(!output.exists());
}

#[test]
fn test_missing_catalog_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Generator::default()
        .generate_file(
            temp_dir.path().join("missing.xcstrings"),
            temp_dir.path().join("Out.swift"),
        )
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_not_a_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(&temp_dir, "Localizable.xcstrings", br#"{"hello":"world"}"#);
    let err = Generator::read_catalog(&input).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_two_word_keyword_list() {
    let catalog = Catalog::from_str(CATALOG).unwrap();
    let generator = Generator::builder()
        .keywords(KeywordSet::new(["continue", "default"]).unwrap())
        .enum_name("Strings")
        .type_alias(Some("S".to_string()))
        .sort_keys(true)
        .build()
        .unwrap();

    let text = generator.generate(&catalog).unwrap();
    assert!(text.contains("typealias S = Strings\n"));
    let verbatim_start = text.find("case `continue`").unwrap();
    let ok = text.find("case okButton").unwrap();
    let user = text.find("case userName2 = \"userName\"").unwrap();
    assert!(verbatim_start < ok && ok < user);
}

#[test]
fn test_sorted_order_changes_suffix_assignment() {
    let catalog = Catalog::from_str(CATALOG).unwrap();
    let sorted = Generator::builder().sort_keys(true).build().unwrap();
    let group = sorted.group_catalog(&catalog).unwrap();

    // "User Name" sorts before "userName", so the folded key still wins the name.
    assert_eq!(
        group.find_by_key("User Name").unwrap().identifier.name(),
        "userName"
    );
    assert_eq!(
        group.find_by_key("userName").unwrap().identifier.name(),
        "userName2"
    );
}
