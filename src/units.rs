// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit metadata lookup.
//!
//! Numbers on the protocol side may carry a unit symbol. The converter only
//! cares about two things: whether the symbol resolves at all, and whether
//! the resolved unit's quantity is `time` (in which case the value becomes a
//! framework duration). The table is built once at startup and read-only
//! afterwards.

use std::collections::HashMap;

use crate::error::ConvertError;

/// Quantity name used by the duration conversion path.
pub const QUANTITY_TIME: &str = "time";

/// Resolved metadata for a unit symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Canonical unit name, e.g. `second`.
    pub name: String,
    /// Quantity category, e.g. `time` or `length`.
    pub quantity: String,
}

impl Unit {
    /// Creates unit metadata.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    /// Returns true if this unit measures time.
    #[must_use]
    pub fn is_time(&self) -> bool {
        self.quantity == QUANTITY_TIME
    }
}

/// Symbol-keyed unit metadata table.
///
/// # Examples
///
/// ```
/// use haymap_lib::units::UnitTable;
///
/// let units = UnitTable::with_defaults();
/// assert!(units.resolve("min").unwrap().is_time());
/// assert!(!units.resolve("cm").unwrap().is_time());
/// assert!(units.resolve("furlong").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnitTable {
    by_symbol: HashMap<String, Unit>,
}

impl UnitTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table seeded with the time units the duration scaling
    /// table understands, plus a few common non-time units.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut table = Self::new();

        // Time units, under their Haystack symbols.
        table.insert("ns", Unit::new("nanosecond", QUANTITY_TIME));
        table.insert("us", Unit::new("microsecond", QUANTITY_TIME));
        table.insert("ms", Unit::new("millisecond", QUANTITY_TIME));
        table.insert("cs", Unit::new("hundredths_second", QUANTITY_TIME));
        table.insert("ds", Unit::new("tenths_second", QUANTITY_TIME));
        table.insert("s", Unit::new("second", QUANTITY_TIME));
        table.insert("sec", Unit::new("second", QUANTITY_TIME));
        table.insert("min", Unit::new("minute", QUANTITY_TIME));
        table.insert("h", Unit::new("hour", QUANTITY_TIME));
        table.insert("hr", Unit::new("hour", QUANTITY_TIME));
        table.insert("day", Unit::new("day", QUANTITY_TIME));
        table.insert("wk", Unit::new("week", QUANTITY_TIME));

        // Non-time units seen on typical points.
        table.insert("cm", Unit::new("centimeter", "length"));
        table.insert("m", Unit::new("meter", "length"));
        table.insert("°C", Unit::new("celsius", "temperature"));
        table.insert("°F", Unit::new("fahrenheit", "temperature"));
        table.insert("kW", Unit::new("kilowatt", "power"));
        table.insert("kWh", Unit::new("kilowatt_hour", "energy"));
        table.insert("%", Unit::new("percent", "dimensionless"));

        table
    }

    /// Registers a unit under a symbol, replacing any previous entry.
    pub fn insert(&mut self, symbol: impl Into<String>, unit: Unit) {
        self.by_symbol.insert(symbol.into(), unit);
    }

    /// Resolves a symbol to its unit metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownUnit`] for a symbol the table does not
    /// know; an unresolved unit on a number is a hard error, never ignored.
    pub fn resolve(&self, symbol: &str) -> Result<&Unit, ConvertError> {
        self.by_symbol
            .get(symbol)
            .ok_or_else(|| ConvertError::UnknownUnit(symbol.to_string()))
    }
}
