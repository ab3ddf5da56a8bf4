// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for both sides of the mapping.
//!
//! All types here are transient values constructed per call; nothing is
//! cached or shared, so they are freely usable across threads.
//!
//! # Types
//!
//! - [`HaystackValue`] / [`Coord`] - protocol-side scalars
//! - [`SimpleValue`] / [`SimpleKind`] - framework-side primitives
//! - [`DataValue`] - read-path projection values
//! - [`RelTime`] - millisecond-precision time spans
//! - [`Status`] - the five-value point status set
//! - [`EnumRange`] / [`EnumValue`] - ordinal/tag mappings

mod data;
mod enum_range;
mod haystack;
mod reltime;
mod simple;
mod status;

pub use data::DataValue;
pub use enum_range::{EnumRange, EnumValue};
pub use haystack::{Coord, HaystackValue};
pub use reltime::RelTime;
pub use simple::{SimpleKind, SimpleValue};
pub use status::Status;
