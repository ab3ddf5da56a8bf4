// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-path data values.
//!
//! Status and history projections surface a narrower value set than the
//! writable object model: the simple scalars plus a unit descriptor whose
//! symbol may be unset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value read from a status or history projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    /// A text value.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Boolean(bool),
    /// The marker singleton.
    Marker,
    /// A unit descriptor; `None` is the null unit.
    Unit(Option<String>),
}

impl DataValue {
    /// Creates a text value.
    pub fn text(val: impl Into<String>) -> Self {
        Self::Text(val.into())
    }

    /// Creates a unit descriptor from a symbol.
    pub fn unit(symbol: impl Into<String>) -> Self {
        Self::Unit(Some(symbol.into()))
    }

    /// The null unit descriptor.
    #[must_use]
    pub const fn null_unit() -> Self {
        Self::Unit(None)
    }

    /// Returns the variant name, used in conversion error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Number(_) => "Number",
            Self::Boolean(_) => "Boolean",
            Self::Marker => "Marker",
            Self::Unit(_) => "Unit",
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Marker => write!(f, "M"),
            Self::Unit(Some(symbol)) => write!(f, "{symbol}"),
            Self::Unit(None) => write!(f, "null"),
        }
    }
}
