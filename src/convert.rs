// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value conversion between the Haystack and framework value models.
//!
//! [`TypeConverter`] owns the variant-to-variant mapping in both directions
//! plus the auxiliary status and timezone lookups. Every function is a pure
//! mapping over its arguments and the read-only unit table, so a converter
//! can be shared freely across threads.
//!
//! The two directions are deliberately asymmetric: a time-unit number
//! converts to a framework duration on the way in, but a duration converts
//! to a unit-less number (its total milliseconds) on the way out. The
//! round trip is lossy for durations and exact for everything else.

use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::ConvertError;
use crate::tags::EnumTagCodec;
use crate::types::{DataValue, HaystackValue, RelTime, SimpleValue, Status};
use crate::units::UnitTable;

/// Maps values between the Haystack and framework type systems.
///
/// Borrows the unit table and enum-tag codec collaborators; both are
/// initialized once at startup and read-only thereafter.
///
/// # Examples
///
/// ```
/// use haymap_lib::convert::TypeConverter;
/// use haymap_lib::tags::Identity;
/// use haymap_lib::types::{HaystackValue, RelTime, SimpleValue};
/// use haymap_lib::units::UnitTable;
///
/// let units = UnitTable::with_defaults();
/// let converter = TypeConverter::new(&units, &Identity);
///
/// let simple = converter
///     .to_simple(&HaystackValue::num_with_unit(2000.0, "s"))
///     .unwrap();
/// assert_eq!(simple, SimpleValue::Duration(RelTime::from_secs(2000)));
/// ```
pub struct TypeConverter<'a> {
    units: &'a UnitTable,
    tags: &'a dyn EnumTagCodec,
}

impl<'a> TypeConverter<'a> {
    /// Creates a converter over the given collaborators.
    pub fn new(units: &'a UnitTable, tags: &'a dyn EnumTagCodec) -> Self {
        Self { units, tags }
    }

    /// The enum-tag codec this converter translates with.
    #[must_use]
    pub fn tag_codec(&self) -> &dyn EnumTagCodec {
        self.tags
    }

    /// Converts a Haystack value to a framework simple value.
    ///
    /// Numbers with a time-quantity unit become durations via the fixed
    /// scaling table; numbers with any other unit drop the unit and convert
    /// as plain numbers. Coordinates become text in their canonical
    /// `C(lat,lng)` form, since the framework has no coordinate primitive.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::UnknownUnit`] if a carried unit symbol does not
    ///   resolve in the unit table.
    /// - [`ConvertError::UnrecognizedDurationUnit`] if a time-quantity unit
    ///   is outside the duration scaling table.
    pub fn to_simple(&self, val: &HaystackValue) -> Result<SimpleValue, ConvertError> {
        match val {
            HaystackValue::Str(s) => Ok(SimpleValue::Text(s.clone())),
            HaystackValue::Num { val, unit: None } => Ok(SimpleValue::Number(*val)),
            HaystackValue::Num {
                val,
                unit: Some(symbol),
            } => {
                let unit = self.units.resolve(symbol)?;
                if unit.is_time() {
                    Ok(SimpleValue::Duration(make_reltime(*val, &unit.name)?))
                } else {
                    Ok(SimpleValue::Number(*val))
                }
            }
            HaystackValue::Bool(b) => Ok(SimpleValue::Boolean(*b)),
            HaystackValue::Marker => Ok(SimpleValue::Marker),
            HaystackValue::Coord(c) => Ok(SimpleValue::Text(c.to_string())),
        }
    }

    /// Converts a framework simple value to a Haystack value.
    ///
    /// Enum tags pass through the tag codec when `translate` is set and are
    /// emitted verbatim otherwise. Durations convert to a unit-less number
    /// of total milliseconds; the unit annotation does not survive this
    /// direction.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedValueKind`] for markers, which
    /// have no place on the write path.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_simple(
        &self,
        val: &SimpleValue,
        translate: bool,
    ) -> Result<HaystackValue, ConvertError> {
        match val {
            SimpleValue::Text(s) => Ok(HaystackValue::str(s.clone())),
            SimpleValue::Number(n) => Ok(HaystackValue::num(*n)),
            SimpleValue::Duration(d) => Ok(HaystackValue::num(d.as_millis() as f64)),
            SimpleValue::Boolean(b) => Ok(HaystackValue::Bool(*b)),
            SimpleValue::Enum(e) => {
                let tag = if translate {
                    self.tags.encode(&e.tag)
                } else {
                    e.tag.clone()
                };
                Ok(HaystackValue::Str(tag))
            }
            SimpleValue::Marker => Err(ConvertError::UnsupportedValueKind {
                kind: "Marker",
                value: val.to_string(),
            }),
        }
    }

    /// Converts a read-path data value to a Haystack value.
    ///
    /// A null unit descriptor yields `Ok(None)`: the projection simply has
    /// no value to emit for it.
    ///
    /// # Errors
    ///
    /// This path handles every [`DataValue`] variant today; the error return
    /// is kept for parity with the write path as new variants appear.
    pub fn from_data_value(
        &self,
        val: &DataValue,
    ) -> Result<Option<HaystackValue>, ConvertError> {
        match val {
            DataValue::Text(s) => Ok(Some(HaystackValue::str(s.clone()))),
            DataValue::Number(n) => Ok(Some(HaystackValue::num(*n))),
            DataValue::Boolean(b) => Ok(Some(HaystackValue::Bool(*b))),
            DataValue::Marker => Ok(Some(HaystackValue::Marker)),
            DataValue::Unit(Some(symbol)) => Ok(Some(HaystackValue::str(symbol.clone()))),
            DataValue::Unit(None) => Ok(None),
        }
    }

    /// Maps a protocol status string to a framework status code.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnrecognizedStatus`] outside the fixed set
    /// `ok`, `fault`, `down`, `disabled`, `unknown`.
    pub fn to_status(status: &str) -> Result<Status, ConvertError> {
        status.parse()
    }

    /// Looks up a framework timezone by IANA identifier.
    ///
    /// The lookup is a passthrough to the timezone database; no local
    /// validation happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownTimeZone`] when the database rejects
    /// the identifier.
    pub fn to_timezone(id: &str) -> Result<Tz, ConvertError> {
        Tz::from_str(id).map_err(|_| ConvertError::UnknownTimeZone(id.to_string()))
    }
}

/// Scales a numeric value with a time-quantity unit to a framework duration.
///
/// Fractional inputs truncate toward zero exactly where the table says they
/// do; nothing rounds.
#[allow(clippy::cast_possible_truncation)]
fn make_reltime(val: f64, unit_name: &str) -> Result<RelTime, ConvertError> {
    match unit_name {
        "nanosecond" => Ok(RelTime::from_millis((val / 1_000.0 / 1_000.0) as i64)),
        "microsecond" => Ok(RelTime::from_millis((val / 1_000.0) as i64)),
        "millisecond" => Ok(RelTime::from_millis(val as i64)),
        "hundredths_second" => Ok(RelTime::from_millis((val * 10.0) as i64)),
        "tenths_second" => Ok(RelTime::from_millis((val * 100.0) as i64)),
        "second" => Ok(RelTime::from_secs(val as i64)),
        "minute" => Ok(RelTime::from_mins(val as i64)),
        "hour" => Ok(RelTime::from_hours(val as i64)),
        "day" => Ok(RelTime::from_hours((val * 24.0) as i64)),
        _ => Err(ConvertError::UnrecognizedDurationUnit {
            unit: unit_name.to_string(),
            value: val,
        }),
    }
}
