//! Serde support.
//!
//! A [`Section`] serializes as a map from option name to value, in line
//! order. Raw lines, the header and layout are not part of the output, which
//! makes this the natural bridge to formats like JSON:
//!
//! ```rust
//! use ini_lines::section;
//!
//! let section = section!("server" {
//!     "host" => "localhost",
//!     "port" => "8080",
//! })
//! .unwrap();
//!
//! let json = serde_json::to_string(&section).unwrap();
//! assert_eq!(json, r#"{"host":"localhost","port":"8080"}"#);
//! ```
//!
//! An [`IniOption`] serializes as a struct with `name`, `value` and
//! `separator` fields.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::{IniOption, Section};

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for option in self.lines().filter_map(|line| line.as_option()) {
            map.serialize_entry(option.name(), option.value())?;
        }
        map.end()
    }
}

impl Serialize for IniOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("IniOption", 3)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("value", self.value())?;
        state.serialize_field("separator", &self.separator())?;
        state.end()
    }
}
