//! Delete-by-value and containment helpers.
//!
//! [`Container`] gives ordered sequences and maps one vocabulary for "is this
//! item present" and "remove this item". For a `Vec` the item is an element
//! compared with `==`; for a map it is a key. Removal always keeps the
//! relative order of the remaining entries.
//!
//! ## Examples
//!
//! ```rust
//! use indexmap::IndexMap;
//! use ini_lines::collections::{delete, contains};
//!
//! let mut names = vec!["a", "b", "c"];
//! assert!(delete(&mut names, &"b"));
//! assert_eq!(names, ["a", "c"]);
//!
//! let mut map: IndexMap<String, u32> = IndexMap::new();
//! map.insert("a".to_string(), 1);
//! assert!(contains(&map, "a"));
//! assert!(delete(&mut map, "a"));
//! assert!(!delete(&mut map, "a"));
//! ```

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// A collection that can test for and remove an item identified by `Q`.
pub trait Container<Q: ?Sized> {
    /// Returns `true` if the item is present.
    fn contains_item(&self, item: &Q) -> bool;

    /// Removes the first occurrence of the item. Returns `false` and leaves
    /// the collection untouched when it is absent.
    fn delete_item(&mut self, item: &Q) -> bool;
}

impl<T, Q> Container<Q> for Vec<T>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    fn contains_item(&self, item: &Q) -> bool {
        self.iter().any(|t| t == item)
    }

    fn delete_item(&mut self, item: &Q) -> bool {
        delete_first_by(self, |t| t == item).is_some()
    }
}

impl<K, V, Q, S> Container<Q> for IndexMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    fn contains_item(&self, item: &Q) -> bool {
        self.contains_key(item)
    }

    fn delete_item(&mut self, item: &Q) -> bool {
        self.shift_remove(item).is_some()
    }
}

impl<K, V, Q, S> Container<Q> for HashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    fn contains_item(&self, item: &Q) -> bool {
        self.contains_key(item)
    }

    fn delete_item(&mut self, item: &Q) -> bool {
        self.remove(item).is_some()
    }
}

/// Removes `item` from `collection`, returning whether anything was removed.
pub fn delete<C, Q>(collection: &mut C, item: &Q) -> bool
where
    C: Container<Q> + ?Sized,
    Q: ?Sized,
{
    collection.delete_item(item)
}

/// Returns `true` if `collection` holds `item`.
pub fn contains<C, Q>(collection: &C, item: &Q) -> bool
where
    C: Container<Q> + ?Sized,
    Q: ?Sized,
{
    collection.contains_item(item)
}

/// Removes and returns the first element matching `pred`, shifting the rest
/// down to keep their order.
pub fn delete_first_by<T, F>(items: &mut Vec<T>, pred: F) -> Option<T>
where
    F: FnMut(&T) -> bool,
{
    let index = items.iter().position(pred)?;
    Some(items.remove(index))
}
