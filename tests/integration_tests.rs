use std::sync::Arc;

use ini_lines::{
    from_str, to_string, Error, Format, IniOption, Line, NameKind, Section, SectionOptions,
};

fn section(name: &str) -> Section {
    Section::new(name, &[], false).unwrap()
}

#[test]
fn test_header_is_trimmed_name() {
    let section = section("  my section  ");
    assert_eq!(section.name(), "my section");
    assert_eq!(section.header(), "[my section]");
}

#[test]
fn test_invalid_section_name_error() {
    match Section::new("bad]name", &[], false) {
        Err(Error::InvalidName { kind, name, .. }) => {
            assert_eq!(kind, NameKind::Section);
            assert_eq!(name, "bad]name");
        }
        other => panic!("expected InvalidName, got {other:?}"),
    }
}

#[test]
fn test_default_format_rendering() {
    let format = Format::compile("%s %s %s").unwrap();
    assert_eq!(format.fragments(), &["", " ", " ", ""]);
    assert_eq!(format.render("host", "localhost", '='), "host = localhost");
}

#[test]
fn test_placeholder_count() {
    assert!(Format::compile("%s %s").unwrap_err().is_invalid_format());
    assert!(Format::compile("%s %s %s %s")
        .unwrap_err()
        .is_invalid_format());
    let format = Format::compile("%%%s%s%s").unwrap();
    assert_eq!(format.fragments()[0], "%");
}

#[test]
fn test_idempotent_upsert() {
    let mut section = section("s");
    section.set_option_value("Port", "8080").unwrap();
    let count = section.option_names().len();
    section.set_option_value("Port", "8080").unwrap();
    assert_eq!(section.option_names().len(), count);
    assert_eq!(section.get_option_value("Port"), "8080");
}

#[test]
fn test_case_insensitive_collision() {
    let mut section = section("s");
    section.set_option_value("Port", "1").unwrap();
    section.set_option_value("port", "2").unwrap();
    assert_eq!(section.option_names(), vec!["port"]);
    assert_eq!(section.get_option_value("port"), "2");
}

#[test]
fn test_whitespace_collision() {
    let mut section = Section::new("s", &[], true).unwrap();
    section.set_option_value("key", "1").unwrap();
    section.set_option_value("  key\t", "2").unwrap();
    assert_eq!(section.option_names(), vec!["key"]);
    assert_eq!(section.get_option_value(" key "), "2");
}

#[test]
fn test_order_preserved_after_remove() {
    let mut section = section("s");
    for name in ["a", "b", "c"] {
        section.set_option_value(name, "x").unwrap();
    }
    assert!(section.remove_option("b"));
    assert_eq!(section.option_names(), vec!["a", "c"]);
}

#[test]
fn test_remove_then_has() {
    let mut section = section("s");
    section.set_option_value("name", "v").unwrap();
    assert!(section.remove_option("name"));
    assert!(!section.has_option("name"));
    assert!(!section.remove_option("name"));
}

#[test]
fn test_value_sanitized_through_section() {
    let mut section = section("s");
    section.set_option_value("motd", "line1\nline2").unwrap();
    assert_eq!(section.get_option_value("motd"), "line1line2");
    assert_eq!(to_string(&section), "[s]\nmotd = line1line2");
}

#[test]
fn test_default_delimiter_is_first_configured() {
    let options = SectionOptions::new().with_option_delimiters(vec![':', '=']);
    let mut section = Section::with_options("s", options).unwrap();
    section.set_option_value("a", "1").unwrap();
    assert_eq!(section.option("a").unwrap().separator(), ':');

    let mut section = section_with_defaults();
    section.set_option_value("a", "1").unwrap();
    assert_eq!(section.option("a").unwrap().separator(), '=');
}

fn section_with_defaults() -> Section {
    Section::with_options("s", SectionOptions::default()).unwrap()
}

#[test]
fn test_custom_comment_delimiters() {
    let body = "! note\n; not a comment = here";
    let section = Section::parse("s", body, SectionOptions::new().with_comment_delimiters(vec!['!']))
        .unwrap();
    assert_eq!(section.option_names(), vec!["; not a comment"]);
    assert_eq!(section.get_option_value("; not a comment"), "here");
}

#[test]
fn test_lines_interleave_raw_and_options() {
    let section = from_str("s", "# top\na = 1\n\nb = 2").unwrap();
    let lines: Vec<String> = section
        .lines()
        .map(|line| match line {
            Line::Option(option) => format!("option:{}", option.name()),
            Line::Raw(text) => format!("raw:{text}"),
        })
        .collect();
    assert_eq!(lines, vec!["raw:# top", "option:a", "raw:", "option:b"]);
}

#[test]
fn test_realistic_edit_session() {
    let body = "\
; Database connection
Host = db.internal
Port = 5432

# credentials
User = app";
    let mut section = from_str("database", body).unwrap();

    section.set_option_value("port", "6432").unwrap();
    section.remove_option("user");
    section.set_option_value("Password", "s3cret").unwrap();

    assert_eq!(
        to_string(&section),
        "[database]\n; Database connection\nhost = db.internal\nport = 6432\n\n# credentials\npassword = s3cret"
    );
}

#[test]
fn test_case_sensitive_round_trip_is_exact() {
    let body = "Host\t=\tdb\n  Port: 1";
    let section = Section::parse("s", body, SectionOptions::new().with_case_sensitive(true))
        .unwrap();
    assert_eq!(to_string(&section), format!("[s]\n{body}"));
}

#[test]
fn test_option_created_standalone() {
    let format = Arc::new(Format::compile("  %s%s %s").unwrap());
    let option = IniOption::new("key", "value", ':', format).unwrap();
    assert_eq!(option.render(), "  key: value");
}
