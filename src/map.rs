//! Ordered map type for encoded entries.
//!
//! This module provides [`EnvMap`], a wrapper around [`IndexMap`] that holds
//! the flattened `KEY=VALUE` entries produced by one encoding pass, in the
//! order they were written.
//!
//! ## Why IndexMap?
//!
//! A shell sourcing the file does not care about line order, but diffs and
//! version control do. `IndexMap` keeps insertion order, so encoding the
//! same record always produces the same text, with lines following field
//! declaration order.
//!
//! Inserting under an existing key replaces the previous value. Two fields
//! whose paths flatten to the same key therefore resolve last-write-wins;
//! the encoder does not detect this.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dotenv::EnvMap;
//!
//! let mut map = EnvMap::new();
//! map.insert("EDITOR".to_string(), "vim".to_string());
//! map.insert("MAKE_JOBS".to_string(), "8".to_string());
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.to_text(), "EDITOR=vim\nMAKE_JOBS=8");
//! ```

use indexmap::IndexMap;

/// An ordered map of flattened keys to rendered values.
///
/// # Examples
///
/// ```rust
/// use serde_dotenv::EnvMap;
///
/// let mut map = EnvMap::new();
/// map.insert("first".to_string(), "1".to_string());
/// map.insert("second".to_string(), "2".to_string());
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvMap(IndexMap<String, String>);

impl EnvMap {
    /// Creates an empty `EnvMap`.
    #[must_use]
    pub fn new() -> Self {
        EnvMap(IndexMap::new())
    }

    /// Creates an empty `EnvMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        EnvMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// replaced in place (last-write-wins).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dotenv::EnvMap;
    ///
    /// let mut map = EnvMap::new();
    /// assert!(map.insert("key".to_string(), "a".to_string()).is_none());
    /// assert_eq!(map.insert("key".to_string(), "b".to_string()).as_deref(), Some("a"));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Renders the map as dotenv text: one `KEY=VALUE` line per entry,
    /// joined with `\n`, no trailing newline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dotenv::EnvMap;
    ///
    /// let mut map = EnvMap::new();
    /// map.insert("A".to_string(), "1".to_string());
    /// map.insert("B".to_string(), String::new());
    /// assert_eq!(map.to_text(), "A=1\nB=");
    ///
    /// assert_eq!(EnvMap::new().to_text(), "");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut capacity = 0;
        for (key, value) in &self.0 {
            capacity += key.len() + value.len() + 2;
        }

        let mut out = String::with_capacity(capacity);
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

impl Default for EnvMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a EnvMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for EnvMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, String)> for EnvMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        EnvMap(IndexMap::from_iter(iter))
    }
}
