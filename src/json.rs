// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Haystack JSON scalar encoding.
//!
//! The protocol server interchanges scalars in the Haystack JSON form:
//! booleans and unit-less numbers as native JSON, everything else as a
//! prefixed string (`"s:..."`, `"n:val unit"`, `"m:"`, `"c:lat,lng"`).
//! Bare strings without a recognized prefix decode leniently as text, which
//! is what servers in the wild emit.

use serde_json::Value;

use crate::error::ConvertError;
use crate::types::{Coord, HaystackValue};

impl HaystackValue {
    /// Encodes this value as a Haystack JSON scalar.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Str(s) => Value::String(format!("s:{s}")),
            Self::Num { val, unit: None } => serde_json::Number::from_f64(*val)
                .map_or_else(|| Value::String(format!("n:{val}")), Value::Number),
            Self::Num {
                val,
                unit: Some(unit),
            } => Value::String(format!("n:{val} {unit}")),
            Self::Bool(b) => Value::Bool(*b),
            Self::Marker => Value::String("m:".to_string()),
            Self::Coord(c) => Value::String(format!("c:{},{}", c.lat, c.lng)),
        }
    }

    /// Decodes a Haystack JSON scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidEncoding`] for JSON nulls, arrays,
    /// objects, and malformed prefixed strings.
    pub fn from_json(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => n
                .as_f64()
                .map(Self::num)
                .ok_or_else(|| ConvertError::InvalidEncoding(n.to_string())),
            Value::String(s) => Self::from_json_str(s),
            other => Err(ConvertError::InvalidEncoding(other.to_string())),
        }
    }

    fn from_json_str(s: &str) -> Result<Self, ConvertError> {
        if let Some(rest) = s.strip_prefix("s:") {
            return Ok(Self::str(rest));
        }
        if s == "m:" {
            return Ok(Self::Marker);
        }
        if let Some(rest) = s.strip_prefix("n:") {
            return parse_num(rest)
                .ok_or_else(|| ConvertError::InvalidEncoding(s.to_string()));
        }
        if let Some(rest) = s.strip_prefix("c:") {
            return parse_coord(rest)
                .map(Self::Coord)
                .ok_or_else(|| ConvertError::InvalidEncoding(s.to_string()));
        }
        // Lenient: unprefixed strings are text.
        Ok(Self::str(s))
    }
}

fn parse_num(body: &str) -> Option<HaystackValue> {
    match body.split_once(' ') {
        Some((val, unit)) => {
            let val = val.parse::<f64>().ok()?;
            Some(HaystackValue::num_with_unit(val, unit))
        }
        None => body.parse::<f64>().ok().map(HaystackValue::num),
    }
}

fn parse_coord(body: &str) -> Option<Coord> {
    let (lat, lng) = body.split_once(',')?;
    Some(Coord::new(lat.parse().ok()?, lng.parse().ok()?))
}
