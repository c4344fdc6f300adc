//! Error types for section and option handling.
//!
//! Every failure in this crate is a synchronous validation failure surfaced to
//! the immediate caller:
//!
//! - **Invalid names**: a section or option name is empty after trimming, too
//!   long, or contains a forbidden character
//! - **Invalid formats**: an option format template does not contain exactly
//!   three `%s` placeholders, or uses an unsupported specifier
//!
//! Assigning a value never fails. Illegal characters are stripped instead.
//!
//! ## Examples
//!
//! ```rust
//! use ini_lines::{Error, Format};
//!
//! let err = Format::compile("%s = %s").unwrap_err();
//! assert!(matches!(err, Error::InvalidFormat { .. }));
//! assert!(err.to_string().contains("not enough placeholders"));
//! ```

use std::fmt;
use thiserror::Error;

/// What kind of entity a rejected name belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Section,
    Option,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Section => "section".fmt(f),
            NameKind::Option => "option".fmt(f),
        }
    }
}

/// Represents all possible errors raised while building sections and options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A section or option name failed validation
    #[error("Invalid {kind} name {name:?}: {reason}")]
    InvalidName {
        kind: NameKind,
        name: String,
        reason: String,
    },

    /// An option format template could not be compiled
    #[error("Illegal option format {template:?}: {reason}")]
    InvalidFormat { template: String, reason: String },
}

impl Error {
    /// Creates an invalid name error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_lines::{Error, NameKind};
    ///
    /// let err = Error::invalid_name(NameKind::Section, "[x]", "contains '['");
    /// assert!(err.to_string().contains("section"));
    /// ```
    pub fn invalid_name(kind: NameKind, name: &str, reason: &str) -> Self {
        Error::InvalidName {
            kind,
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid format error for a template that failed to compile.
    pub fn invalid_format(template: &str, reason: &str) -> Self {
        Error::InvalidFormat {
            template: template.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` if this error was raised by name validation.
    #[must_use]
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Error::InvalidName { .. })
    }

    /// Returns `true` if this error was raised by format compilation.
    #[must_use]
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::InvalidFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
