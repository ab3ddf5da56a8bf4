// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Action argument dictionaries.
//!
//! Arguments arrive as a named mapping of Haystack values in which a key can
//! be declared yet carry a null value. Presence (`has`/`missing`) is
//! therefore distinct from plain lookup. There is deliberately no `len` on
//! this type: the row-shaped sources callers feed in can report a non-zero
//! count while iterating empty, so presence is always answered by iteration.

use serde::{Deserialize, Serialize};

use crate::types::HaystackValue;

/// An insertion-ordered mapping from argument name to nullable value.
///
/// # Examples
///
/// ```
/// use haymap_lib::dict::ArgDict;
/// use haymap_lib::types::HaystackValue;
///
/// let args = ArgDict::new()
///     .with("value", HaystackValue::str("enumTag0"))
///     .with("duration", HaystackValue::num_with_unit(1.0, "min"))
///     .with_null("note");
///
/// assert!(args.has("value"));
/// assert!(args.missing("note"));
/// assert!(args.contains_key("note"));
/// assert_eq!(args.iter().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArgDict {
    entries: Vec<(String, Option<HaystackValue>)>,
}

impl ArgDict {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named value, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, val: HaystackValue) -> Self {
        self.insert(key, val);
        self
    }

    /// Adds a declared-but-null key, builder style.
    #[must_use]
    pub fn with_null(mut self, key: impl Into<String>) -> Self {
        self.insert_null(key);
        self
    }

    /// Inserts a named value, replacing any previous entry for the key.
    pub fn insert(&mut self, key: impl Into<String>, val: HaystackValue) {
        self.put(key.into(), Some(val));
    }

    /// Declares a key with a null value, replacing any previous entry.
    pub fn insert_null(&mut self, key: impl Into<String>) {
        self.put(key.into(), None);
    }

    fn put(&mut self, key: String, val: Option<HaystackValue>) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = val;
        } else {
            self.entries.push((key, val));
        }
    }

    /// Looks up the non-null value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&HaystackValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Returns true if the key is declared, even with a null value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns true if the key is declared with a non-null value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if the key is absent or declared null.
    #[must_use]
    pub fn missing(&self, key: &str) -> bool {
        !self.has(key)
    }

    /// Iterates non-null entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HaystackValue)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }

    /// Returns the first non-null entry in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<(&str, &HaystackValue)> {
        self.iter().next()
    }
}
