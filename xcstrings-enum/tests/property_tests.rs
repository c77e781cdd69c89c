use proptest::prelude::*;
use std::collections::HashSet;
use xcstrings_enum::{
    Grammar, KeywordSet, group, is_identifier, render,
    renderer::{render_case, swift_string_literal},
    synthesize,
    template::MEMBER_NAMES,
};

fn reserved() -> KeywordSet {
    KeywordSet::new(["continue", "default"]).expect("valid keywords")
}

fn any_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,12}").expect("valid key regex"),
        proptest::string::string_regex("[A-Za-z0-9 _\\-\\.,!\\?%@]{0,20}").expect("valid key regex"),
        Just("continue".to_string()),
        Just("default".to_string()),
        Just("`default`".to_string()),
        proptest::string::string_regex("`?[a-z_ ]{1,8}`?").expect("valid key regex"),
    ]
}

/// Keys drawn from a tiny alphabet so that folds collide often.
fn colliding_keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(
        proptest::string::string_regex("[aAbB][ _\\-]?[aAbB2]?[ !]?").expect("valid key regex"),
        1..12,
    )
    .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn synthesized_identifiers_are_legal(key in any_key_strategy()) {
        let grammar = Grammar::swift();
        let entry = synthesize(&key, &reserved(), &grammar).unwrap();
        prop_assert!(is_identifier(entry.identifier.name()), "{:?}", entry);
        prop_assert_eq!(grammar.unescape(entry.identifier.declaration()), entry.identifier.name());
    }

    #[test]
    fn legal_unreserved_keys_are_verbatim(key in "[A-Za-z_][A-Za-z0-9_]{0,12}") {
        prop_assume!(!reserved().contains(&key));
        prop_assume!(key != "_");
        let entry = synthesize(&key, &reserved(), &Grammar::swift()).unwrap();
        prop_assert_eq!(entry.identifier.declaration(), key.as_str());
        prop_assert!(entry.matches_key);
        prop_assert!(!entry.escaped);
    }

    #[test]
    fn matches_key_iff_name_equals_key(key in any_key_strategy()) {
        let entry = synthesize(&key, &reserved(), &Grammar::swift()).unwrap();
        prop_assert_eq!(entry.matches_key, entry.identifier.name() == key);
        prop_assert_eq!(entry.escaped, reserved().contains(entry.identifier.name()));
    }

    #[test]
    fn grouped_identifiers_are_unique(keys in colliding_keys_strategy()) {
        let group = group(&keys, &reserved(), &Grammar::swift()).unwrap();
        prop_assert_eq!(group.len(), keys.len());

        let mut seen = HashSet::new();
        for entry in group.iter() {
            prop_assert!(is_identifier(entry.identifier.name()));
            prop_assert!(seen.insert(entry.identifier.declaration().to_string()), "duplicate {:?}", entry);
        }
    }

    #[test]
    fn groups_preserve_input_order(keys in colliding_keys_strategy()) {
        let group = group(&keys, &reserved(), &Grammar::swift()).unwrap();
        let position = |key: &str| keys.iter().position(|k| k == key).unwrap();

        for pair in group.verbatim.windows(2) {
            prop_assert!(position(&pair[0].key) < position(&pair[1].key));
        }
        for pair in group.renamed.windows(2) {
            prop_assert!(position(&pair[0].key) < position(&pair[1].key));
        }
    }

    #[test]
    fn grouping_and_rendering_are_deterministic(keys in colliding_keys_strategy()) {
        let first = group(&keys, &reserved(), &Grammar::swift()).unwrap();
        let second = group(&keys, &reserved(), &Grammar::swift()).unwrap();
        prop_assert_eq!(render(&first), render(&second));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn member_names_are_never_emitted(keys in prop::collection::hash_set(
        prop_oneof![Just("key".to_string()), Just("string".to_string()), Just("Raw value".to_string()), Just("all cases".to_string()), "[a-z]{1,3}"],
        1..6,
    )) {
        let keys: Vec<String> = keys.into_iter().collect();
        let group = xcstrings_enum::group_avoiding(&keys, &reserved(), &Grammar::swift(), MEMBER_NAMES).unwrap();
        for entry in group.iter() {
            prop_assert!(!MEMBER_NAMES.contains(&entry.identifier.name()));
        }
    }

    #[test]
    fn renamed_cases_always_carry_their_key(keys in prop::collection::hash_set(any_key_strategy(), 1..8)) {
        let keys: Vec<String> = keys.into_iter().collect();
        let group = group(&keys, &reserved(), &Grammar::swift()).unwrap();
        let text = render(&group);
        for entry in &group.renamed {
            let line = render_case(entry);
            let raw_value = format!(" = {}", swift_string_literal(&entry.key));
            prop_assert!(line.ends_with(&raw_value), "{:?} rendered as {:?}", entry.key, line);
            let line_nl = format!("{}\n", line);
            prop_assert!(text.contains(&line_nl));
        }
    }
}
