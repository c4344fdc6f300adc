//! Property-based tests for names, formats and line bookkeeping.

use std::collections::HashSet;

use ini_lines::{from_str, Format, Section};
use proptest::prelude::*;

fn valid_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_. -]{0,20}[a-zA-Z0-9_]{1}[a-zA-Z0-9_. -]{0,20}"
}

fn option_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

proptest! {
    #[test]
    fn prop_valid_section_name_header(name in valid_name()) {
        let section = Section::new(&name, &[], false).unwrap();
        prop_assert_eq!(section.header(), format!("[{}]", name.trim()));
    }

    #[test]
    fn prop_bracketed_section_name_rejected(
        left in "[a-z ]{0,8}",
        bracket in prop::sample::select(vec!['[', ']']),
        right in "[a-z ]{0,8}",
    ) {
        let name = format!("{left}{bracket}{right}");
        prop_assert!(Section::new(&name, &[], false).unwrap_err().is_invalid_name());
    }

    #[test]
    fn prop_whitespace_section_name_rejected(name in "[ \t]{0,10}") {
        prop_assert!(Section::new(&name, &[], false).unwrap_err().is_invalid_name());
    }

    #[test]
    fn prop_literal_fragments_render_verbatim(
        a in "[^%]{0,6}", b in "[^%]{0,6}", c in "[^%]{0,6}", d in "[^%]{0,6}",
    ) {
        let template = format!("{a}%s{b}%s{c}%s{d}");
        let format = Format::compile(&template).unwrap();
        prop_assert_eq!(format.render("n", "v", '='), format!("{a}n{b}={c}v{d}"));
        prop_assert_eq!(format.to_template(), template);
    }

    #[test]
    fn prop_sanitized_values_are_single_line(value in ".*[\r\n]?.*") {
        let mut section = Section::new("s", &[], false).unwrap();
        section.set_option_value("k", &value).unwrap();
        let stored = section.get_option_value("k");
        prop_assert!(!stored.contains('\n') && !stored.contains('\r'));
        prop_assert_eq!(section.render().lines().count(), 2);
    }

    #[test]
    fn prop_option_names_follow_insertion_order(
        names in prop::collection::vec(option_name(), 0..16),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut section = Section::new("s", &[], true).unwrap();
        let mut expected: Vec<String> = Vec::new();
        for name in &names {
            section.set_option_value(name, "v").unwrap();
            if !expected.contains(name) {
                expected.push(name.clone());
            }
        }
        for index in removals {
            if expected.is_empty() {
                break;
            }
            let removed = expected.remove(index.index(expected.len()));
            prop_assert!(section.remove_option(&removed));
            prop_assert!(!section.has_option(&removed));
        }

        prop_assert_eq!(section.option_names(), expected.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(section.len(), expected.len());
        let unique: HashSet<_> = section.option_names().into_iter().collect();
        prop_assert_eq!(unique.len(), section.len());
    }

    #[test]
    fn prop_parsed_options_round_trip(
        entries in prop::collection::vec(
            (option_name(), "[ \t]{0,2}", prop::sample::select(vec!['=', ':']), "[ \t]{0,2}", "[a-z0-9/.]{0,10}"),
            0..10,
        ),
    ) {
        let mut seen = HashSet::new();
        let body = entries
            .iter()
            .filter(|(name, ..)| seen.insert(name.clone()))
            .map(|(name, before, sep, after, value)| format!("{name}{before}{sep}{after}{value}"))
            .collect::<Vec<_>>()
            .join("\n");

        let section = from_str("s", &body).unwrap();
        prop_assert_eq!(section.len(), seen.len());
        let expected = if body.is_empty() { "[s]".to_string() } else { format!("[s]\n{body}") };
        prop_assert_eq!(section.render(), expected);
    }
}
