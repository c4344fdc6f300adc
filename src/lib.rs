//! # ini_lines
//!
//! Read, edit and write INI sections without losing their layout.
//!
//! ## What it does
//!
//! An INI file is a flat list of `[section]` headers, each followed by
//! `name = value` options, comments and blank lines. This crate models one
//! section at a time:
//!
//! - **Round-trip safe**: comments, blank lines and unparseable lines are kept
//!   verbatim, and parsed options remember the spacing they were written with.
//!   Option names are stored normalized, so a case-insensitive section (the
//!   default) writes `Host = x` back as `host = x`; case-sensitive sections
//!   reproduce every line exactly
//! - **Ordered**: options stay where they were; new ones are appended
//! - **Configurable dialect**: option delimiters, comment delimiters, case
//!   sensitivity and the layout of new option lines are all set per section
//! - **Lenient values**: values are plain strings; line breaks are stripped
//!   instead of rejected
//!
//! Splitting a file into sections and reading or writing it is left to the
//! caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use ini_lines::{Section, SectionOptions};
//!
//! let body = "; where to listen\nhost = 0.0.0.0\nport=80";
//! let mut section = Section::parse("server", body, SectionOptions::default()).unwrap();
//!
//! section.set_option_value("port", "8080").unwrap();
//! section.set_option_value("workers", "4").unwrap();
//!
//! assert_eq!(
//!     section.render(),
//!     "[server]\n; where to listen\nhost = 0.0.0.0\nport=8080\nworkers = 4"
//! );
//! ```
//!
//! ## Option Formats
//!
//! New options are laid out by a [`Format`] compiled from a template with three
//! `%s` placeholders for name, separator and value:
//!
//! ```rust
//! use ini_lines::Section;
//!
//! let mut section = Section::new("paths", &[], false).unwrap();
//! section.set_format_string("%s%s%s").unwrap();
//! section.set_option_value("root", "/srv").unwrap();
//!
//! assert_eq!(section.render(), "[paths]\nroot=/srv");
//! ```
//!
//! Changing the format only affects options created afterwards.
//!
//! ## Line Grammar
//!
//! ```text
//! [name]                 header, name may not contain '[' or ']'
//! ; text   # text        comment, any configured comment delimiter
//! name SEP value         option, SEP is the first option delimiter on the line
//! anything else          kept as a raw line
//! ```

pub mod collections;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod option;
pub mod options;
pub mod section;
pub mod ser;

pub use error::{Error, NameKind, Result};
pub use format::Format;
pub use map::OptionMap;
pub use option::IniOption;
pub use options::SectionOptions;
pub use section::{Line, Section};

/// Parses a section body with the default configuration.
///
/// # Examples
///
/// ```rust
/// let section = ini_lines::from_str("db", "user = admin\n# pass = secret").unwrap();
/// assert_eq!(section.option_names(), vec!["user"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidName`] if `name` is not a valid section name.
pub fn from_str(name: &str, body: &str) -> Result<Section> {
    Section::parse(name, body, SectionOptions::default())
}

/// Renders a section, header included.
#[must_use]
pub fn to_string(section: &Section) -> String {
    section.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_unchanged() {
        let body = "\n# comment\n  a=1\nb : 2 \n\tjunk line\n;c = 3";
        let section = from_str("x", body).unwrap();
        assert_eq!(to_string(&section), format!("[x]\n{body}"));
    }

    #[test]
    fn test_edit_then_render() {
        let mut section = from_str("x", "a=1\n; keep me\nb=2").unwrap();
        section.set_option_value("b", "20").unwrap();
        assert!(section.remove_option("a"));
        section.set_option_value("c", "3").unwrap();
        assert_eq!(to_string(&section), "[x]\n; keep me\nb=20\nc = 3");
    }

    #[test]
    fn test_from_str_rejects_bad_name() {
        assert!(from_str("[x]", "").unwrap_err().is_invalid_name());
    }
}
