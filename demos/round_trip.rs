//! Parse a section, edit it, and print it back with comments intact.
//!
//! Run with: `cargo run --example round_trip`

use ini_lines::{section, Line, Section, SectionOptions};

fn main() -> ini_lines::Result<()> {
    let body = "\
; Listener settings
host   = 0.0.0.0
port:8080

# Tuning
workers = 2";

    let mut server = Section::parse("server", body, SectionOptions::default())?;
    println!("Original:\n{server}\n");

    server.set_option_value("workers", "8")?;
    server.remove_option("host");
    server.set_format_string("%s%s%s")?;
    server.set_option_value("timeout", "30s")?;
    println!("Edited:\n{server}\n");

    for line in server.lines() {
        match line {
            Line::Option(option) => println!("option {:?} = {:?}", option.name(), option.value()),
            Line::Raw(text) => println!("raw    {text:?}"),
        }
    }

    let logging = section!("logging" { "level" => "info", "color" => false })?;
    println!("\n{logging}");
    Ok(())
}
