//! Configuration for sections.
//!
//! [`SectionOptions`] gathers everything a [`Section`](crate::Section) needs to
//! know about the dialect it reads and writes: which characters separate names
//! from values, which characters start a comment, whether option names are
//! case sensitive, and how newly added options are laid out.
//!
//! ## Examples
//!
//! ```rust
//! use ini_lines::{Section, SectionOptions};
//!
//! let options = SectionOptions::new()
//!     .with_option_delimiters(vec![':'])
//!     .with_format("%s%s %s")
//!     .with_case_sensitive(true);
//!
//! let mut section = Section::with_options("server", options).unwrap();
//! section.set_option_value("Host", "localhost").unwrap();
//! assert_eq!(section.render(), "[server]\nHost: localhost");
//! ```

use serde::{Deserialize, Serialize};

/// Option delimiters used when none are configured.
pub const DEFAULT_OPTION_DELIMITERS: &[char] = &['=', ':'];

/// Comment delimiters used when none are configured.
pub const DEFAULT_COMMENT_DELIMITERS: &[char] = &[';', '#'];

/// Whitespace allowed around names and values on an option line.
pub const DEFAULT_OPTION_WHITESPACE: &[char] = &[' ', '\t'];

/// Longest accepted section or option name, in characters.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 1024;

/// Option names are case insensitive unless configured otherwise.
pub const DEFAULT_CASE_SENSITIVE: bool = false;

pub use crate::format::DEFAULT_OPTION_FORMAT;

/// Configuration applied when constructing a section.
///
/// Empty delimiter lists are replaced by the defaults when the section is
/// built. The first option delimiter is the one used for options added
/// without an explicit separator.
///
/// # Examples
///
/// ```rust
/// use ini_lines::SectionOptions;
///
/// let options = SectionOptions::default();
/// assert_eq!(options.option_delimiters, vec!['=', ':']);
/// assert_eq!(options.comment_delimiters, vec![';', '#']);
/// assert_eq!(options.format, "%s %s %s");
/// assert!(!options.case_sensitive);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOptions {
    pub option_delimiters: Vec<char>,
    pub comment_delimiters: Vec<char>,
    pub case_sensitive: bool,
    pub format: String,
    pub max_name_length: usize,
    pub option_whitespace: Vec<char>,
}

impl Default for SectionOptions {
    fn default() -> Self {
        SectionOptions {
            option_delimiters: DEFAULT_OPTION_DELIMITERS.to_vec(),
            comment_delimiters: DEFAULT_COMMENT_DELIMITERS.to_vec(),
            case_sensitive: DEFAULT_CASE_SENSITIVE,
            format: DEFAULT_OPTION_FORMAT.to_string(),
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            option_whitespace: DEFAULT_OPTION_WHITESPACE.to_vec(),
        }
    }
}

impl SectionOptions {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the characters accepted between an option name and its value.
    ///
    /// Order matters: the first delimiter is the default for new options.
    #[must_use]
    pub fn with_option_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.option_delimiters = delimiters;
        self
    }

    /// Sets the characters that start a comment line.
    #[must_use]
    pub fn with_comment_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.comment_delimiters = delimiters;
        self
    }

    /// Sets whether option names that differ only in case are distinct.
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the format template for newly added options.
    ///
    /// The template is compiled when the section is built, see
    /// [`Format::compile`](crate::Format::compile).
    #[must_use]
    pub fn with_format(mut self, template: &str) -> Self {
        self.format = template.to_string();
        self
    }

    /// Sets the longest accepted name.
    #[must_use]
    pub fn with_max_name_length(mut self, max: usize) -> Self {
        self.max_name_length = max;
        self
    }

    /// Sets the whitespace trimmed around names and values of parsed lines.
    ///
    /// Any other whitespace next to a name keeps the line raw. Whitespace
    /// outside this set next to a value stays part of the value.
    #[must_use]
    pub fn with_option_whitespace(mut self, whitespace: Vec<char>) -> Self {
        self.option_whitespace = whitespace;
        self
    }
}
