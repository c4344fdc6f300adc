//! Sections: ordered lines plus a name lookup table.
//!
//! A [`Section`] keeps two views of its content in lockstep:
//!
//! - an ordered list of lines, each either an option or a raw line (comment,
//!   blank or unparseable text kept verbatim)
//! - an [`OptionMap`] from normalized option name to [`IniOption`]
//!
//! Every option in the map appears exactly once in the line list and the
//! other way round. Updates keep an option where it was, new options are
//! appended, and removal drops it from both views at once.
//!
//! ## Name normalization
//!
//! Option names are trimmed, and lowercased unless the section is case
//! sensitive. All lookups go through the same normalization, so `Port`,
//! ` port ` and `PORT` name the same option in a case-insensitive section.
//!
//! ## Examples
//!
//! ```rust
//! use ini_lines::Section;
//!
//! let mut section = Section::new("server", &[], false).unwrap();
//! section.set_option_value("Host", "localhost").unwrap();
//! section.set_option_value("port", "8080").unwrap();
//! section.set_option_value("PORT", "9090").unwrap();
//!
//! assert_eq!(section.option_names(), vec!["host", "port"]);
//! assert_eq!(section.get_option_value("Port"), "9090");
//! assert_eq!(section.render(), "[server]\nhost = localhost\nport = 9090");
//! ```

use std::fmt;
use std::sync::Arc;

use log::{debug, trace, warn};

use crate::error::NameKind;
use crate::option::{sanitize_value, ILLEGAL_VALUE_CHARS};
use crate::options::{DEFAULT_COMMENT_DELIMITERS, DEFAULT_OPTION_DELIMITERS};
use crate::{collections, Error, Format, IniOption, OptionMap, Result, SectionOptions};

/// Opens a section header.
pub const HEADER_START: char = '[';

/// Closes a section header.
pub const HEADER_END: char = ']';

/// Characters a section name may not contain.
pub const INVALID_SECTION_NAME_CHARS: &[char] = &[HEADER_START, HEADER_END];

/// A delimiter set kept in configured order and sorted for lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Delimiters {
    ordered: Vec<char>,
    sorted: Vec<char>,
}

impl Delimiters {
    fn new(configured: &[char], defaults: &[char]) -> Self {
        let ordered = if configured.is_empty() {
            defaults.to_vec()
        } else {
            configured.to_vec()
        };
        let mut sorted = ordered.clone();
        sorted.sort_unstable();
        sorted.dedup();
        Delimiters { ordered, sorted }
    }

    #[inline]
    fn contains(&self, c: char) -> bool {
        self.sorted.binary_search(&c).is_ok()
    }

    fn first(&self) -> char {
        self.ordered
            .first()
            .copied()
            .unwrap_or(DEFAULT_OPTION_DELIMITERS[0])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Option(String),
    Raw(String),
}

/// One line of a section body, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Option(&'a IniOption),
    Raw(&'a str),
}

impl<'a> Line<'a> {
    /// Returns the option on this line, if any.
    #[must_use]
    pub fn as_option(&self) -> Option<&'a IniOption> {
        match *self {
            Line::Option(option) => Some(option),
            Line::Raw(_) => None,
        }
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Option(option) => f.write_str(&option.render()),
            Line::Raw(text) => f.write_str(text),
        }
    }
}

/// A named, ordered group of options and preserved raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    lines: Vec<Slot>,
    options: OptionMap,
    option_delimiters: Delimiters,
    comment_delimiters: Delimiters,
    option_whitespace: Vec<char>,
    case_sensitive: bool,
    max_name_length: usize,
    format: Arc<Format>,
}

impl Section {
    /// Creates a section with default option delimiters and format.
    ///
    /// An empty `comment_delimiters` slice selects the defaults (`;` and `#`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the trimmed name is empty, too long,
    /// or contains `[`, `]` or a line break.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_lines::Section;
    ///
    /// let section = Section::new("  database ", &[], false).unwrap();
    /// assert_eq!(section.header(), "[database]");
    ///
    /// assert!(Section::new("", &[], false).is_err());
    /// assert!(Section::new("a]b", &[], false).is_err());
    /// ```
    pub fn new(name: &str, comment_delimiters: &[char], case_sensitive: bool) -> Result<Self> {
        let options = SectionOptions::default()
            .with_comment_delimiters(comment_delimiters.to_vec())
            .with_case_sensitive(case_sensitive);
        Self::with_options(name, options)
    }

    /// Creates a section from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] for a bad section name and
    /// [`Error::InvalidFormat`] if `options.format` does not compile.
    pub fn with_options(name: &str, options: SectionOptions) -> Result<Self> {
        let name = validate_section_name(name, options.max_name_length)?;
        let format = Format::compile(&options.format)?;

        Ok(Section {
            name: name.to_string(),
            lines: Vec::new(),
            options: OptionMap::new(),
            option_delimiters: Delimiters::new(
                &options.option_delimiters,
                DEFAULT_OPTION_DELIMITERS,
            ),
            comment_delimiters: Delimiters::new(
                &options.comment_delimiters,
                DEFAULT_COMMENT_DELIMITERS,
            ),
            option_whitespace: options.option_whitespace,
            case_sensitive: options.case_sensitive,
            max_name_length: options.max_name_length,
            format: Arc::new(format),
        })
    }

    /// Builds a section from the text between its header and the next one.
    ///
    /// Each line goes through [`Section::push_line`].
    ///
    /// # Errors
    ///
    /// Fails only if the section itself cannot be created, see
    /// [`Section::with_options`]. Body lines never cause an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_lines::{Section, SectionOptions};
    ///
    /// let body = "; upstream\nhost=example.org\n\nport : 443";
    /// let section = Section::parse("server", body, SectionOptions::default()).unwrap();
    ///
    /// assert_eq!(section.option_names(), vec!["host", "port"]);
    /// assert_eq!(section.get_option_value("port"), "443");
    /// assert_eq!(section.render(), format!("[server]\n{body}"));
    /// ```
    pub fn parse(name: &str, body: &str, options: SectionOptions) -> Result<Self> {
        let mut section = Self::with_options(name, options)?;
        for line in body.lines() {
            section.push_line(line);
        }
        Ok(section)
    }

    /// Returns the section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the section header, e.g. `[server]`.
    #[must_use]
    pub fn header(&self) -> String {
        format!("{HEADER_START}{}{HEADER_END}", self.name)
    }

    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Option delimiters in configured order.
    #[must_use]
    pub fn option_delimiters(&self) -> &[char] {
        &self.option_delimiters.ordered
    }

    /// Comment delimiters in configured order.
    #[must_use]
    pub fn comment_delimiters(&self) -> &[char] {
        &self.comment_delimiters.ordered
    }

    /// The separator used for options added without an explicit one.
    #[must_use]
    pub fn default_delimiter(&self) -> char {
        self.option_delimiters.first()
    }

    #[must_use]
    pub fn is_option_delimiter(&self, c: char) -> bool {
        self.option_delimiters.contains(c)
    }

    #[must_use]
    pub fn is_comment_delimiter(&self, c: char) -> bool {
        self.comment_delimiters.contains(c)
    }

    /// The format given to options created from now on.
    #[must_use]
    pub fn format(&self) -> &Arc<Format> {
        &self.format
    }

    /// Number of options (raw lines not included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the section holds no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Number of lines, options and raw lines together.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if an option with this name exists.
    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains(&self.normalize(name))
    }

    /// Returns the option with this name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&IniOption> {
        self.options.get(&self.normalize(name))
    }

    /// Returns the value of an option, or `""` if there is no such option.
    ///
    /// Use [`Section::has_option`] to tell a missing option from an empty one.
    #[must_use]
    pub fn get_option_value(&self, name: &str) -> &str {
        self.option(name).map_or("", IniOption::value)
    }

    /// Sets an option value, creating the option with the section's default
    /// delimiter if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty, too long, starts
    /// with a comment delimiter or contains an option delimiter.
    pub fn set_option_value(&mut self, name: &str, value: &str) -> Result<()> {
        let delimiter = self.default_delimiter();
        self.set_option_value_with_delimiter(name, value, delimiter)
    }

    /// Sets an option value, creating the option with `delimiter` if it does
    /// not exist.
    ///
    /// An existing option keeps its position, separator and format; only its
    /// value changes. A new option is appended after the last line and
    /// rendered with the section's current format.
    ///
    /// # Errors
    ///
    /// Same as [`Section::set_option_value`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_lines::Section;
    ///
    /// let mut section = Section::new("paths", &[], true).unwrap();
    /// section.set_option_value_with_delimiter("root", "/srv", ':').unwrap();
    /// section.set_option_value_with_delimiter("root", "/var/www", '=').unwrap();
    ///
    /// assert_eq!(section.option("root").unwrap().render(), "root : /var/www");
    /// ```
    pub fn set_option_value_with_delimiter(
        &mut self,
        name: &str,
        value: &str,
        delimiter: char,
    ) -> Result<()> {
        let key = self.option_key(name)?;

        if let Some(option) = self.options.get_mut(&key) {
            debug!("section [{}]: updating option {key:?}", self.name);
            option.set_value(value);
            return Ok(());
        }

        let option = IniOption::new(&key, value, delimiter, Arc::clone(&self.format))?;
        debug!("section [{}]: adding option {key:?}", self.name);
        self.options.insert(key.clone(), option);
        self.lines.push(Slot::Option(key));
        Ok(())
    }

    /// Removes an option. Returns `false`, changing nothing, if it does not
    /// exist.
    pub fn remove_option(&mut self, name: &str) -> bool {
        let key = self.normalize(name);
        if !self.options.contains(&key) {
            return false;
        }

        debug!("section [{}]: removing option {key:?}", self.name);
        collections::delete_first_by(&mut self.lines, |slot| {
            matches!(slot, Slot::Option(k) if *k == key)
        });
        self.options.remove(&key);
        true
    }

    /// Option names in line order.
    #[must_use]
    pub fn option_names(&self) -> Vec<&str> {
        self.lines()
            .filter_map(|line| line.as_option().map(IniOption::name))
            .collect()
    }

    /// Iterates over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        self.lines.iter().filter_map(move |slot| match slot {
            Slot::Option(key) => self.options.get(key).map(Line::Option),
            Slot::Raw(text) => Some(Line::Raw(text)),
        })
    }

    /// Replaces the format used for options created after this call.
    ///
    /// Existing options keep rendering with the format they were created
    /// with; see [`Section::reformat_options`] to migrate them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_lines::{Format, Section};
    ///
    /// let mut section = Section::new("s", &[], false).unwrap();
    /// section.set_option_value("a", "1").unwrap();
    /// section.set_format(Format::compile("%s%s%s").unwrap());
    /// section.set_option_value("b", "2").unwrap();
    ///
    /// assert_eq!(section.render(), "[s]\na = 1\nb=2");
    /// ```
    pub fn set_format(&mut self, format: impl Into<Arc<Format>>) {
        self.format = format.into();
        debug!(
            "section [{}]: option format set to {:?}",
            self.name,
            self.format.to_template()
        );
    }

    /// Compiles `template` and makes it the format for new options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the template does not compile; the
    /// current format is kept in that case.
    pub fn set_format_string(&mut self, template: &str) -> Result<()> {
        let format = Format::compile(template)?;
        self.set_format(format);
        Ok(())
    }

    /// Rebinds every existing option to the section's current format.
    pub fn reformat_options(&mut self) {
        for slot in &self.lines {
            if let Slot::Option(key) = slot {
                if let Some(option) = self.options.get_mut(key) {
                    option.set_format(Arc::clone(&self.format));
                }
            }
        }
    }

    /// Appends a line verbatim, without trying to read an option from it.
    ///
    /// Line breaks inside `text` are removed.
    pub fn push_raw(&mut self, text: &str) {
        self.lines.push(Slot::Raw(sanitize_value(text)));
    }

    /// Classifies a body line and appends it.
    ///
    /// Blank lines, comments, lines without an option delimiter, lines whose
    /// name is invalid or surrounded by whitespace outside the configured
    /// option whitespace, and repeated option names are kept as raw lines.
    /// Anything else becomes an option that renders back to the same text,
    /// with the original spacing around its name, separator and value.
    pub fn push_line(&mut self, text: &str) {
        let text = sanitize_value(text);
        match self.classify(&text) {
            Some(option) => {
                let key = option.name().to_string();
                trace!("section [{}]: option line {text:?}", self.name);
                self.options.insert(key.clone(), option);
                self.lines.push(Slot::Option(key));
            }
            None => {
                trace!("section [{}]: raw line {text:?}", self.name);
                self.lines.push(Slot::Raw(text));
            }
        }
    }

    /// Renders the header followed by every line, joined by `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.header();
        for slot in &self.lines {
            out.push('\n');
            match slot {
                Slot::Option(key) => {
                    if let Some(option) = self.options.get(key) {
                        option.render_into(&mut out);
                    }
                }
                Slot::Raw(text) => out.push_str(text),
            }
        }
        out
    }

    fn classify(&self, text: &str) -> Option<IniOption> {
        let first = text.trim_start().chars().next()?;
        if self.is_comment_delimiter(first) {
            return None;
        }

        let (at, separator) = text
            .char_indices()
            .find(|&(_, c)| self.is_option_delimiter(c))?;
        let left = &text[..at];
        let right = &text[at + separator.len_utf8()..];

        let ws = self.option_whitespace.as_slice();
        let name_start = left.len() - left.trim_start_matches(ws).len();
        let (prefix, name_part) = left.split_at(name_start);
        let name = name_part.trim_end_matches(ws);
        let before = &name_part[name.len()..];

        let value_part = right.trim_start_matches(ws);
        let after = &right[..right.len() - value_part.len()];
        let value = value_part.trim_end_matches(ws);
        let suffix = &value_part[value.len()..];

        if name != name.trim() {
            trace!(
                "section [{}]: name {name:?} has untrimmed whitespace, kept as raw line",
                self.name
            );
            return None;
        }
        let key = match self.option_key(name) {
            Ok(key) => key,
            Err(err) => {
                trace!("section [{}]: {err}", self.name);
                return None;
            }
        };
        if self.options.contains(&key) {
            warn!(
                "section [{}]: duplicate option {key:?} kept as raw line",
                self.name
            );
            return None;
        }

        let parsed = Format::from_fragments(prefix, before, after, suffix);
        let format = if parsed == *self.format {
            Arc::clone(&self.format)
        } else {
            Arc::new(parsed)
        };
        IniOption::new(&key, value, separator, format).ok()
    }

    fn normalize(&self, name: &str) -> String {
        if self.case_sensitive {
            name.trim().to_string()
        } else {
            name.trim().to_lowercase()
        }
    }

    fn option_key(&self, name: &str) -> Result<String> {
        let key = self.normalize(name);
        let reason = if key.is_empty() {
            "name is empty".to_string()
        } else if key.chars().count() > self.max_name_length {
            format!("name is longer than {} characters", self.max_name_length)
        } else if key.contains(ILLEGAL_VALUE_CHARS) {
            "contains a line break".to_string()
        } else if let Some(c) = key.chars().find(|&c| self.is_option_delimiter(c)) {
            format!("contains option delimiter {c:?}")
        } else if key.starts_with(|c| self.is_comment_delimiter(c)) {
            "starts with a comment delimiter".to_string()
        } else {
            return Ok(key);
        };
        Err(Error::invalid_name(NameKind::Option, name, &reason))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn validate_section_name(name: &str, max_length: usize) -> Result<&str> {
    let trimmed = name.trim();
    let reason = if trimmed.is_empty() {
        "name is empty".to_string()
    } else if trimmed.chars().count() > max_length {
        format!("name is longer than {max_length} characters")
    } else if trimmed.contains(ILLEGAL_VALUE_CHARS) {
        "contains a line break".to_string()
    } else if let Some(c) = trimmed.chars().find(|c| INVALID_SECTION_NAME_CHARS.contains(c)) {
        format!("contains {c:?}")
    } else {
        return Ok(trimmed);
    };
    Err(Error::invalid_name(NameKind::Section, name, &reason))
}
