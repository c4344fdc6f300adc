//! Single `name SEP value` entries.
//!
//! An [`IniOption`] binds a name and value to the separator it was written
//! with and to the [`Format`] that renders it. The name is validated once, at
//! construction. Values are never rejected: line breaks are stripped so that
//! an option always renders as exactly one line.
//!
//! ## Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use ini_lines::{Format, IniOption};
//!
//! let format = Arc::new(Format::default());
//! let mut option = IniOption::new("host", "localhost", '=', format).unwrap();
//! assert_eq!(option.render(), "host = localhost");
//!
//! option.set_value("example.org\n");
//! assert_eq!(option.value(), "example.org");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::NameKind;
use crate::{Error, Format, Result};

/// Characters removed from every value before it is stored.
pub const ILLEGAL_VALUE_CHARS: &[char] = &['\n', '\r'];

/// A single option line inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniOption {
    name: String,
    value: String,
    separator: char,
    format: Arc<Format>,
}

impl IniOption {
    /// Creates an option after validating its name.
    ///
    /// The name is trimmed. The value is sanitized the same way
    /// [`IniOption::set_value`] does it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the trimmed name is empty, contains
    /// a line break, or contains `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use ini_lines::{Format, IniOption};
    ///
    /// let format = Arc::new(Format::default());
    /// assert!(IniOption::new("  ", "v", '=', format.clone()).is_err());
    /// assert!(IniOption::new("a=b", "v", '=', format.clone()).is_err());
    /// assert!(IniOption::new("a:b", "v", '=', format).is_ok());
    /// ```
    pub fn new(name: &str, value: &str, separator: char, format: Arc<Format>) -> Result<Self> {
        let name = validate_name(name, separator)?;
        Ok(IniOption {
            name: name.to_string(),
            value: sanitize_value(value),
            separator,
            format,
        })
    }

    /// Returns the option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the separator written between name and value.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Returns the format this option renders with.
    #[must_use]
    pub fn format(&self) -> &Arc<Format> {
        &self.format
    }

    /// Replaces the value, dropping any [`ILLEGAL_VALUE_CHARS`].
    pub fn set_value(&mut self, value: &str) {
        self.value = sanitize_value(value);
    }

    /// Rebinds the option to another format.
    pub fn set_format(&mut self, format: Arc<Format>) {
        self.format = format;
    }

    /// Renders the option as one line of text, without a line terminator.
    #[must_use]
    pub fn render(&self) -> String {
        self.format.render(&self.name, &self.value, self.separator)
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        self.format
            .render_into(out, &self.name, &self.value, self.separator);
    }
}

impl fmt::Display for IniOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn validate_name(name: &str, separator: char) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_name(NameKind::Option, name, "name is empty"));
    }
    if trimmed.contains(ILLEGAL_VALUE_CHARS) {
        return Err(Error::invalid_name(
            NameKind::Option,
            name,
            "contains a line break",
        ));
    }
    if trimmed.contains(separator) {
        return Err(Error::invalid_name(
            NameKind::Option,
            name,
            &format!("contains separator {separator:?}"),
        ));
    }
    Ok(trimmed)
}

#[inline]
pub(crate) fn sanitize_value(value: &str) -> String {
    if value.contains(ILLEGAL_VALUE_CHARS) {
        value.replace(ILLEGAL_VALUE_CHARS, "")
    } else {
        value.to_string()
    }
}
