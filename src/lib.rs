// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HayMap` Lib - map Project Haystack values onto building automation
//! framework types.
//!
//! This library sits between a station's strongly-typed object model and a
//! Haystack-speaking protocol layer. It converts scalar values in both
//! directions, resolves inbound action arguments against an action's
//! declared parameter shape, and answers the small auxiliary lookups the
//! integration needs (status codes, timezones, permission checks).
//!
//! # What it does
//!
//! - **Value conversion**: Haystack strings, numbers, booleans, markers and
//!   coordinates to framework primitives and back, with unit-aware duration
//!   scaling on the way in
//! - **Action arguments**: simple, override-structure and composite
//!   parameter shapes, validated field by field
//! - **Auxiliary lookups**: point status strings, IANA timezones, and
//!   operator/admin permission checks including history-backed objects
//!
//! # Quick Start
//!
//! ```
//! use haymap_lib::convert::TypeConverter;
//! use haymap_lib::tags::Identity;
//! use haymap_lib::types::{HaystackValue, RelTime, SimpleValue};
//! use haymap_lib::units::UnitTable;
//!
//! let units = UnitTable::with_defaults();
//! let converter = TypeConverter::new(&units, &Identity);
//!
//! // A number tagged with a time unit becomes a framework duration.
//! let simple = converter
//!     .to_simple(&HaystackValue::num_with_unit(2.0, "min"))
//!     .unwrap();
//! assert_eq!(simple, SimpleValue::Duration(RelTime::from_mins(2)));
//!
//! // Everything else converts shape-for-shape.
//! let text = converter.to_simple(&HaystackValue::str("discharge")).unwrap();
//! assert_eq!(text, SimpleValue::text("discharge"));
//! ```
//!
//! # Resolving action arguments
//!
//! ```
//! use haymap_lib::component::{ActionParameterShape, ActionSpec, ActionTarget, Facets};
//! use haymap_lib::convert::TypeConverter;
//! use haymap_lib::dict::ArgDict;
//! use haymap_lib::resolve::ActionArgument;
//! use haymap_lib::tags::Identity;
//! use haymap_lib::types::{HaystackValue, SimpleKind, SimpleValue};
//! use haymap_lib::units::UnitTable;
//!
//! struct Point;
//!
//! impl ActionTarget for Point {
//!     fn action_facets(&self, _action: &str) -> Option<&Facets> {
//!         None
//!     }
//! }
//!
//! let units = UnitTable::with_defaults();
//! let converter = TypeConverter::new(&units, &Identity);
//!
//! let action = ActionSpec::new("set", ActionParameterShape::Simple(SimpleKind::Number));
//! let args = ArgDict::new().with("arg", HaystackValue::num(72.0));
//!
//! let resolved = converter.resolve_action_args(&args, &Point, &action).unwrap();
//! assert_eq!(resolved, ActionArgument::Simple(SimpleValue::Number(72.0)));
//! ```

pub mod component;
pub mod convert;
pub mod dict;
pub mod error;
mod json;
pub mod resolve;
pub mod security;
pub mod tags;
pub mod types;
pub mod units;

pub use component::{
    ActionParameterShape, ActionSpec, ActionTarget, CompositeValue, Context, FacetValue, Facets,
};
pub use convert::TypeConverter;
pub use dict::ArgDict;
pub use error::{ConvertError, Error, HistoryError, ResolveError, Result, SlotError};
pub use resolve::{ActionArgument, EnumOverride};
pub use security::{
    HistoryConnection, HistoryDatabase, HistoryId, HistoryRecord, Permissions, Secured, can_invoke,
    can_read, can_write, resolve_permissions,
};
pub use tags::{EnumTagCodec, Identity};
pub use types::{
    Coord, DataValue, EnumRange, EnumValue, HaystackValue, RelTime, SimpleKind, SimpleValue, Status,
};
pub use units::{Unit, UnitTable};
