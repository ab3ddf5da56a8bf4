// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Haystack-side scalar values.
//!
//! This module provides the closed set of tagged values the protocol layer
//! exchanges with the station: strings, numbers with an optional unit symbol,
//! booleans, the marker singleton, and geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar value in the Haystack data model.
///
/// # Examples
///
/// ```
/// use haymap_lib::types::HaystackValue;
///
/// let temp = HaystackValue::num_with_unit(21.5, "°C");
/// let label = HaystackValue::str("discharge");
///
/// assert_eq!(temp.kind_name(), "Num");
/// assert_eq!(label.to_string(), "discharge");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HaystackValue {
    /// A text value.
    Str(String),
    /// A numeric value with an optional unit symbol.
    Num {
        /// The numeric payload.
        val: f64,
        /// Unit symbol, resolved against the unit table when present.
        unit: Option<String>,
    },
    /// A boolean value.
    Bool(bool),
    /// The marker singleton, used as a presence tag.
    Marker,
    /// A geographic coordinate.
    Coord(Coord),
}

impl HaystackValue {
    /// Creates a text value.
    pub fn str(val: impl Into<String>) -> Self {
        Self::Str(val.into())
    }

    /// Creates a unit-less numeric value.
    #[must_use]
    pub const fn num(val: f64) -> Self {
        Self::Num { val, unit: None }
    }

    /// Creates a numeric value tagged with a unit symbol.
    pub fn num_with_unit(val: f64, unit: impl Into<String>) -> Self {
        Self::Num {
            val,
            unit: Some(unit.into()),
        }
    }

    /// Returns the variant name, used in conversion error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "Str",
            Self::Num { .. } => "Num",
            Self::Bool(_) => "Bool",
            Self::Marker => "Marker",
            Self::Coord(_) => "Coord",
        }
    }
}

impl fmt::Display for HaystackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Num { val, unit: None } => write!(f, "{val}"),
            Self::Num {
                val,
                unit: Some(unit),
            } => write!(f, "{val} {unit}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Marker => write!(f, "M"),
            Self::Coord(c) => write!(f, "{c}"),
        }
    }
}

impl From<bool> for HaystackValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for HaystackValue {
    fn from(value: f64) -> Self {
        Self::num(value)
    }
}

impl From<&str> for HaystackValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// A geographic coordinate in decimal degrees.
///
/// The canonical rendering is `C(lat,lng)` with one to six decimal places,
/// trailing zeros trimmed, matching the Haystack coordinate literal form.
///
/// # Examples
///
/// ```
/// use haymap_lib::types::Coord;
///
/// let c = Coord::new(37.545826, -77.449188);
/// assert_eq!(c.to_string(), "C(37.545826,-77.449188)");
///
/// let whole = Coord::new(37.0, -77.0);
/// assert_eq!(whole.to_string(), "C(37.0,-77.0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Coord {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Formats one coordinate component with six decimals, trimming trailing
/// zeros but always keeping at least one fractional digit.
fn fmt_degrees(deg: f64) -> String {
    let s = format!("{deg:.6}");
    let trimmed = s.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C({},{})", fmt_degrees(self.lat), fmt_degrees(self.lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_constructors() {
        assert_eq!(
            HaystackValue::num(5.5),
            HaystackValue::Num {
                val: 5.5,
                unit: None
            }
        );
        assert_eq!(
            HaystackValue::num_with_unit(1.0, "min"),
            HaystackValue::Num {
                val: 1.0,
                unit: Some("min".to_string())
            }
        );
    }

    #[test]
    fn display_forms() {
        assert_eq!(HaystackValue::str("fan").to_string(), "fan");
        assert_eq!(HaystackValue::num(2.5).to_string(), "2.5");
        assert_eq!(HaystackValue::num_with_unit(12.0, "kW").to_string(), "12 kW");
        assert_eq!(HaystackValue::Bool(true).to_string(), "true");
        assert_eq!(HaystackValue::Marker.to_string(), "M");
    }

    #[test]
    fn kind_names() {
        assert_eq!(HaystackValue::Marker.kind_name(), "Marker");
        assert_eq!(HaystackValue::num(1.0).kind_name(), "Num");
        assert_eq!(
            HaystackValue::Coord(Coord::new(0.0, 0.0)).kind_name(),
            "Coord"
        );
    }

    #[test]
    fn coord_canonical_rendering() {
        assert_eq!(
            Coord::new(37.545826, -77.449188).to_string(),
            "C(37.545826,-77.449188)"
        );
        assert_eq!(Coord::new(37.5, -77.45).to_string(), "C(37.5,-77.45)");
        // Whole degrees keep one fractional digit.
        assert_eq!(Coord::new(0.0, 0.0).to_string(), "C(0.0,0.0)");
        assert_eq!(Coord::new(37.0, -77.0).to_string(), "C(37.0,-77.0)");
    }

    #[test]
    fn from_impls() {
        assert_eq!(HaystackValue::from(true), HaystackValue::Bool(true));
        assert_eq!(HaystackValue::from(1.5), HaystackValue::num(1.5));
        assert_eq!(HaystackValue::from("x"), HaystackValue::str("x"));
    }
}
