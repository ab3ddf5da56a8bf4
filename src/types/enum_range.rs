// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enum ranges: closed bidirectional mappings between ordinals and tags.
//!
//! Writable enum points and override actions declare an enum range in their
//! facets; argument resolution validates candidate values against it by tag
//! or by ordinal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single bound enum value: an ordinal and its tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumValue {
    /// The ordinal within the declaring range.
    pub ordinal: i32,
    /// The tag name within the declaring range.
    pub tag: String,
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// A closed bidirectional mapping between ordinal integers and tag strings.
///
/// Entry order is the declaration order and is preserved by iteration and
/// by the canonical encoding.
///
/// # Examples
///
/// ```
/// use haymap_lib::types::EnumRange;
///
/// let range = EnumRange::from_tags(&["off", "low", "high"]);
/// assert!(range.is_tag("low"));
/// assert!(range.is_ordinal(2));
/// assert_eq!(range.by_tag("high").unwrap().ordinal, 2);
/// assert_eq!(range.by_ordinal(0).unwrap().tag, "off");
/// assert_eq!(range.encode(), "{off=0,low=1,high=2}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumRange {
    entries: Vec<(i32, String)>,
}

impl EnumRange {
    /// Creates a range from tags, assigning ordinals in declaration order
    /// starting at zero.
    #[must_use]
    pub fn from_tags(tags: &[&str]) -> Self {
        Self {
            entries: tags
                .iter()
                .enumerate()
                .map(|(i, tag)| (i32::try_from(i).unwrap_or(i32::MAX), (*tag).to_string()))
                .collect(),
        }
    }

    /// Creates a range from explicit (ordinal, tag) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i32, String)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Returns true if the tag is declared in this range.
    #[must_use]
    pub fn is_tag(&self, tag: &str) -> bool {
        self.entries.iter().any(|(_, t)| t == tag)
    }

    /// Returns true if the ordinal is declared in this range.
    #[must_use]
    pub fn is_ordinal(&self, ordinal: i32) -> bool {
        self.entries.iter().any(|(o, _)| *o == ordinal)
    }

    /// Looks up a bound value by tag.
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> Option<EnumValue> {
        self.entries
            .iter()
            .find(|(_, t)| t == tag)
            .map(|(o, t)| EnumValue {
                ordinal: *o,
                tag: t.clone(),
            })
    }

    /// Looks up a bound value by ordinal.
    #[must_use]
    pub fn by_ordinal(&self, ordinal: i32) -> Option<EnumValue> {
        self.entries
            .iter()
            .find(|(o, _)| *o == ordinal)
            .map(|(o, t)| EnumValue {
                ordinal: *o,
                tag: t.clone(),
            })
    }

    /// Returns the number of declared entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the range declares no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates (ordinal, tag) entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> {
        self.entries.iter().map(|(o, t)| (*o, t.as_str()))
    }

    /// Canonical `{tag=ordinal,...}` encoding, used in error messages.
    #[must_use]
    pub fn encode(&self) -> String {
        let body = self
            .entries
            .iter()
            .map(|(o, t)| format!("{t}={o}"))
            .collect::<Vec<_>>()
            .join(",");
        format!("{{{body}}}")
    }
}

impl fmt::Display for EnumRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
