// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `haymap` library.
//!
//! This module provides the error hierarchy for the two failure surfaces of
//! the library: value conversion between the Haystack and framework value
//! models, and action-argument resolution against a declared parameter shape.
//! Collaborator failures (object-model slot writes, history database access)
//! keep their own types and are passed through unchanged.

use thiserror::Error;

use crate::types::SimpleKind;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while converting a value between type systems.
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Error occurred while resolving action arguments.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Error raised by the object model while writing a field.
    #[error("slot error: {0}")]
    Slot(#[from] SlotError),

    /// Error raised by the history database collaborator.
    #[error("history error: {0}")]
    History(#[from] HistoryError),
}

/// Errors raised by the value conversion functions.
///
/// Every conversion is total over a closed set of source variants; these
/// errors cover inputs outside that set and unit symbols the conversion
/// tables cannot place.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    /// The input variant is not one of the kinds the conversion handles.
    #[error("cannot convert {kind} value: {value}")]
    UnsupportedValueKind {
        /// Name of the offending variant.
        kind: &'static str,
        /// Rendered form of the offending value.
        value: String,
    },

    /// A unit symbol did not resolve in the unit table.
    #[error("unknown unit symbol: {0}")]
    UnknownUnit(String),

    /// A time-quantity unit is not in the duration scaling table.
    #[error("cannot convert {value} {unit} to a duration")]
    UnrecognizedDurationUnit {
        /// The canonical unit name that failed to scale.
        unit: String,
        /// The numeric value carried by the input.
        value: f64,
    },

    /// A status string is outside the fixed five-value set.
    #[error("unrecognized status: {0}")]
    UnrecognizedStatus(String),

    /// A timezone identifier was rejected by the timezone database.
    #[error("unknown timezone: {0}")]
    UnknownTimeZone(String),

    /// A JSON token does not encode a Haystack scalar.
    #[error("invalid Haystack JSON encoding: {0}")]
    InvalidEncoding(String),
}

/// Errors raised while resolving action arguments against a parameter shape.
///
/// Each validation failure is a distinct variant so callers can branch on
/// the failure mode. Conversion and object-model failures encountered along
/// the way pass through transparently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    /// A simple parameter was expected but the argument dict iterated empty.
    #[error("no argument entries supplied for a simple parameter")]
    EmptyArgs,

    /// The resolved value's kind is not the action's declared parameter kind.
    #[error("type mismatch: {actual} is not {expected}")]
    ParameterTypeMismatch {
        /// The kind the action declares.
        expected: SimpleKind,
        /// The kind that was actually resolved.
        actual: SimpleKind,
    },

    /// The target component has no facets for the named action.
    #[error("component does not have facets that are needed for action {action}")]
    MissingFacets {
        /// The action whose facets were looked up.
        action: String,
    },

    /// The range facet of the named action is not an enum range.
    #[error("range facet of action {action} must be an enum range")]
    InvalidFacetType {
        /// The action whose facets were looked up.
        action: String,
    },

    /// A required argument key is absent or carries a null value.
    #[error("action args must have a non-null value for key '{key}'")]
    MissingRequiredArgument {
        /// The key that was required.
        key: &'static str,
    },

    /// An override value is neither a known tag nor a known ordinal.
    #[error("value {value} is not ordinal nor tag of {range}")]
    UnresolvableEnumValue {
        /// Rendered form of the offending value.
        value: String,
        /// Canonical encoding of the range it was checked against.
        range: String,
    },

    /// An argument that must be a time span resolved to something else.
    #[error("{field}: {value} is not a time value")]
    NotADuration {
        /// The argument key that failed.
        field: &'static str,
        /// Rendered form of the offending value.
        value: String,
    },

    /// A conversion failed while resolving an argument.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The object model rejected a composite field write.
    #[error(transparent)]
    Slot(#[from] SlotError),
}

/// Errors raised by the object model when writing named fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// The target structure declares no field with this name.
    #[error("no such field: {field}")]
    NoSuchField {
        /// The field name that was written.
        field: String,
    },
}

/// Errors raised by the history database collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// The history database could not be reached.
    #[error("history database unavailable: {0}")]
    Unavailable(String),

    /// A history lookup failed inside an open connection.
    #[error("history query failed: {0}")]
    Query(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
