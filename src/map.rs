//! Name lookup table for a section's options.
//!
//! [`OptionMap`] is a thin wrapper around [`IndexMap`] keyed by the
//! normalized option name. A [`Section`](crate::Section) keeps it next to its
//! ordered line list; the map answers "is there an option called X" in
//! constant time while the line list decides where the option is written.
//!
//! Keys are stored exactly as given: normalizing them (trimming, lowercasing
//! in case-insensitive sections) is the section's job.

use indexmap::IndexMap;

use crate::collections;
use crate::IniOption;

/// An insertion-ordered map from normalized option names to options.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use ini_lines::{Format, IniOption, OptionMap};
///
/// let format = Arc::new(Format::default());
/// let mut map = OptionMap::new();
/// map.insert("port".to_string(), IniOption::new("port", "80", '=', format).unwrap());
///
/// assert!(map.contains("port"));
/// assert_eq!(map.get("port").map(|o| o.value()), Some("80"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap(IndexMap<String, IniOption>);

impl OptionMap {
    /// Creates an empty `OptionMap`.
    #[must_use]
    pub fn new() -> Self {
        OptionMap(IndexMap::new())
    }

    /// Inserts an option under `key`, returning the option it replaced.
    pub fn insert(&mut self, key: String, option: IniOption) -> Option<IniOption> {
        self.0.insert(key, option)
    }

    /// Returns the option stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&IniOption> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the option stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut IniOption> {
        self.0.get_mut(key)
    }

    /// Returns `true` if an option is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        collections::contains(&self.0, key)
    }

    /// Removes the option stored under `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> bool {
        collections::delete(&mut self.0, key)
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map holds no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, IniOption> {
        self.0.keys()
    }

    /// Returns an iterator over the key-option pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, IniOption> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a OptionMap {
    type Item = (&'a String, &'a IniOption);
    type IntoIter = indexmap::map::Iter<'a, String, IniOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
