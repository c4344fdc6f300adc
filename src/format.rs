//! Option line formats.
//!
//! A [`Format`] is compiled from a template with exactly three `%s`
//! placeholders standing for the option name, the separator and the value, in
//! that order. Everything around the placeholders is kept as literal text:
//!
//! ```text
//! "%s %s %s"    ->  host = localhost
//! "%s%s%s"      ->  host=localhost
//! "  %s: %s%s"  ->    host: :localhost
//! ```
//!
//! `%%` stands for a literal `%`. Any other character after `%` is rejected.
//!
//! ## Examples
//!
//! ```rust
//! use ini_lines::Format;
//!
//! let format = Format::compile("%s %s %s").unwrap();
//! assert_eq!(format.render("host", "localhost", '='), "host = localhost");
//!
//! let percent = Format::compile("%s%s%s %% done").unwrap();
//! assert_eq!(percent.render("progress", "50", '='), "progress=50 % done");
//! ```

use crate::{Error, Result};

/// Marks the start of a placeholder or an escaped `%`.
pub const ESCAPE_CHAR: char = '%';

/// Placeholder letter following [`ESCAPE_CHAR`].
pub const PLACEHOLDER_CHAR: char = 's';

/// Template used when nothing else is configured.
pub const DEFAULT_OPTION_FORMAT: &str = "%s %s %s";

const PLACEHOLDERS: usize = 3;

/// A compiled option line template.
///
/// Holds the four literal fragments surrounding the name, separator and value:
/// `[prefix, between name and separator, between separator and value, suffix]`.
/// A `Format` never changes after construction, so one instance can be shared
/// by any number of options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Format {
    fragments: [String; PLACEHOLDERS + 1],
}

impl Format {
    /// Compiles a template string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the template has fewer or more than
    /// three `%s` placeholders, uses a specifier other than `%s` or `%%`, or
    /// ends with a lone `%`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_lines::Format;
    ///
    /// let format = Format::compile("%s %s %s").unwrap();
    /// assert_eq!(format.fragments(), &["", " ", " ", ""]);
    ///
    /// assert!(Format::compile("%s %s").is_err());
    /// assert!(Format::compile("%s %s %s %s").is_err());
    /// assert!(Format::compile("%s %d %s").is_err());
    /// ```
    pub fn compile(template: &str) -> Result<Self> {
        let mut fragments: [String; PLACEHOLDERS + 1] = Default::default();
        let mut seen = 0;
        let mut current = String::with_capacity(template.len());
        let mut escaped = false;

        for c in template.chars() {
            if !escaped {
                if c == ESCAPE_CHAR {
                    escaped = true;
                } else {
                    current.push(c);
                }
                continue;
            }

            escaped = false;
            match c {
                ESCAPE_CHAR => current.push(ESCAPE_CHAR),
                PLACEHOLDER_CHAR => {
                    if seen == PLACEHOLDERS {
                        return Err(Error::invalid_format(template, "too many placeholders"));
                    }
                    fragments[seen] = std::mem::take(&mut current);
                    seen += 1;
                }
                _ => {
                    return Err(Error::invalid_format(
                        template,
                        "unknown format specifier",
                    ))
                }
            }
        }

        if escaped {
            return Err(Error::invalid_format(
                template,
                "dangling escape character",
            ));
        }
        if seen != PLACEHOLDERS {
            return Err(Error::invalid_format(template, "not enough placeholders"));
        }

        fragments[PLACEHOLDERS] = current;
        Ok(Format { fragments })
    }

    /// Builds a format directly from its four literal fragments.
    ///
    /// Fragments are used verbatim, no escape processing takes place. This is
    /// how a parsed line keeps its original spacing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_lines::Format;
    ///
    /// let format = Format::from_fragments("  ", "", "\t", " ");
    /// assert_eq!(format.render("a", "1", ':'), "  a:\t1 ");
    /// ```
    #[must_use]
    pub fn from_fragments(
        prefix: &str,
        before_separator: &str,
        after_separator: &str,
        suffix: &str,
    ) -> Self {
        Format {
            fragments: [
                prefix.to_string(),
                before_separator.to_string(),
                after_separator.to_string(),
                suffix.to_string(),
            ],
        }
    }

    /// Returns the literal fragments in rendering order.
    #[must_use]
    pub fn fragments(&self) -> &[String; PLACEHOLDERS + 1] {
        &self.fragments
    }

    /// Renders `name`, `separator` and `value` into a single line.
    #[must_use]
    pub fn render(&self, name: &str, value: &str, separator: char) -> String {
        let mut out = String::with_capacity(
            name.len() + value.len() + self.fragments.iter().map(String::len).sum::<usize>() + 4,
        );
        self.render_into(&mut out, name, value, separator);
        out
    }

    /// Appends the rendered line to `out`.
    pub fn render_into(&self, out: &mut String, name: &str, value: &str, separator: char) {
        let [prefix, before, after, suffix] = &self.fragments;
        out.push_str(prefix);
        out.push_str(name);
        out.push_str(before);
        out.push(separator);
        out.push_str(after);
        out.push_str(value);
        out.push_str(suffix);
    }

    /// Reconstructs a template that compiles back to this format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_lines::Format;
    ///
    /// let format = Format::compile("%% %s%s %s").unwrap();
    /// assert_eq!(format.to_template(), "%% %s%s %s");
    /// ```
    #[must_use]
    pub fn to_template(&self) -> String {
        let mut template = String::new();
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                template.push(ESCAPE_CHAR);
                template.push(PLACEHOLDER_CHAR);
            }
            for c in fragment.chars() {
                if c == ESCAPE_CHAR {
                    template.push(ESCAPE_CHAR);
                }
                template.push(c);
            }
        }
        template
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::from_fragments("", " ", " ", "")
    }
}
