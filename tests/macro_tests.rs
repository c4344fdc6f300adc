use ini_lines::{section, SectionOptions};

#[test]
fn test_empty_section() {
    let section = section!("empty" {}).unwrap();
    assert!(section.is_empty());
    assert_eq!(section.render(), "[empty]");
}

#[test]
fn test_options_in_order() {
    let section = section!("server" {
        "host" => "localhost",
        "port" => 8080,
        "debug" => true,
    })
    .unwrap();

    assert_eq!(section.option_names(), vec!["host", "port", "debug"]);
    assert_eq!(section.get_option_value("port"), "8080");
    assert_eq!(section.get_option_value("debug"), "true");
}

#[test]
fn test_repeated_key_updates() {
    let section = section!("s" { "Key" => 1, "key" => 2 }).unwrap();
    assert_eq!(section.option_names(), vec!["key"]);
    assert_eq!(section.get_option_value("key"), "2");
}

#[test]
fn test_with_options() {
    let options = SectionOptions::new()
        .with_case_sensitive(true)
        .with_option_delimiters(vec![':']);
    let section = section!("s", options; { "Key" => "a", "key" => "b" }).unwrap();
    assert_eq!(section.render(), "[s]\nKey : a\nkey : b");
}

#[test]
fn test_invalid_option_name() {
    let result = section!("s" { "a=b" => 1 });
    assert!(result.unwrap_err().is_invalid_name());
}

#[test]
fn test_invalid_section_name() {
    let result = section!("[s]" { "a" => 1 });
    assert!(result.unwrap_err().is_invalid_name());
}

#[test]
fn test_expression_values() {
    let port = 8000 + 80;
    let section = section!("s" { "port" => port, "name" => format!("svc-{}", 1) }).unwrap();
    assert_eq!(section.get_option_value("port"), "8080");
    assert_eq!(section.get_option_value("name"), "svc-1");
}
