// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Framework-side simple values.
//!
//! The automation object model works with a closed set of primitive kinds.
//! Conversions from the Haystack side always land on one of these variants;
//! anything else is a programming error surfaced as an unsupported-kind
//! failure rather than a silent coercion.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EnumValue, RelTime};

/// A primitive value native to the automation object model.
///
/// # Examples
///
/// ```
/// use haymap_lib::types::{RelTime, SimpleKind, SimpleValue};
///
/// let v = SimpleValue::Duration(RelTime::from_secs(30));
/// assert_eq!(v.kind(), SimpleKind::Duration);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimpleValue {
    /// A text value.
    Text(String),
    /// A generic numeric value.
    Number(f64),
    /// A millisecond-precision time span.
    Duration(RelTime),
    /// A boolean value.
    Boolean(bool),
    /// The marker singleton.
    Marker,
    /// An enum value bound to an ordinal and tag.
    Enum(EnumValue),
}

impl SimpleValue {
    /// Creates a text value.
    pub fn text(val: impl Into<String>) -> Self {
        Self::Text(val.into())
    }

    /// Returns the discriminant of this value.
    #[must_use]
    pub const fn kind(&self) -> SimpleKind {
        match self {
            Self::Text(_) => SimpleKind::Text,
            Self::Number(_) => SimpleKind::Number,
            Self::Duration(_) => SimpleKind::Duration,
            Self::Boolean(_) => SimpleKind::Boolean,
            Self::Marker => SimpleKind::Marker,
            Self::Enum(_) => SimpleKind::Enum,
        }
    }
}

impl fmt::Display for SimpleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Duration(d) => write!(f, "{d}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Marker => write!(f, "M"),
            Self::Enum(e) => write!(f, "{e}"),
        }
    }
}

/// Discriminant for [`SimpleValue`], used as a declared parameter kind.
///
/// Action parameter shapes carry a `SimpleKind` instead of a default value,
/// so resolution checks a data-driven descriptor rather than inspecting a
/// runtime value holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimpleKind {
    /// Text.
    Text,
    /// Generic number.
    Number,
    /// Time span.
    Duration,
    /// Boolean.
    Boolean,
    /// Marker.
    Marker,
    /// Enum.
    Enum,
}

impl SimpleKind {
    /// Returns the lowercase kind name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Duration => "duration",
            Self::Boolean => "boolean",
            Self::Marker => "marker",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for SimpleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_of_each_variant() {
        assert_eq!(SimpleValue::text("x").kind(), SimpleKind::Text);
        assert_eq!(SimpleValue::Number(1.0).kind(), SimpleKind::Number);
        assert_eq!(
            SimpleValue::Duration(RelTime::ZERO).kind(),
            SimpleKind::Duration
        );
        assert_eq!(SimpleValue::Boolean(false).kind(), SimpleKind::Boolean);
        assert_eq!(SimpleValue::Marker.kind(), SimpleKind::Marker);
        assert_eq!(
            SimpleValue::Enum(EnumValue {
                ordinal: 0,
                tag: "off".to_string()
            })
            .kind(),
            SimpleKind::Enum
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(SimpleKind::Duration.to_string(), "duration");
        assert_eq!(SimpleKind::Enum.to_string(), "enum");
    }

    #[test]
    fn value_display() {
        assert_eq!(SimpleValue::text("fan").to_string(), "fan");
        assert_eq!(SimpleValue::Number(5.5).to_string(), "5.5");
        assert_eq!(
            SimpleValue::Duration(RelTime::from_secs(60)).to_string(),
            "60s"
        );
    }
}
