// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collaborator surface of the station object model.
//!
//! The converter never walks the station's component tree itself. Targets of
//! action invocations implement [`ActionTarget`], exposing just the metadata
//! resolution needs: per-action facets and, for writable enum points, the
//! declared enum range. Parameter shapes are resolved once per action and
//! passed in as data rather than rediscovered through reflection.

use serde::{Deserialize, Serialize};

use crate::error::SlotError;
use crate::types::{EnumRange, SimpleKind, SimpleValue};

/// Caller identity threaded through permission checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    user: Option<String>,
}

impl Context {
    /// An anonymous context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context for a named user.
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    /// The user this context acts for, if any.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

/// A single facet value attached to an action or property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FacetValue {
    /// A text facet.
    Str(String),
    /// A numeric facet.
    Num(f64),
    /// A boolean facet.
    Bool(bool),
    /// An enum range facet.
    Range(EnumRange),
}

/// Keyed facet metadata declared on an action or property.
///
/// # Examples
///
/// ```
/// use haymap_lib::component::{FacetValue, Facets};
/// use haymap_lib::types::EnumRange;
///
/// let facets = Facets::new().with(
///     Facets::RANGE,
///     FacetValue::Range(EnumRange::from_tags(&["off", "on"])),
/// );
/// assert!(facets.enum_range().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Facets {
    slots: Vec<(String, FacetValue)>,
}

impl Facets {
    /// The well-known key under which an enum range is declared.
    pub const RANGE: &'static str = "range";

    /// Creates empty facets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a keyed facet, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: FacetValue) -> Self {
        self.slots.push((key.into(), value));
        self
    }

    /// Looks up a facet by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FacetValue> {
        self.slots.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the enum range declared under the `range` key, if the facet
    /// exists and actually is a range.
    #[must_use]
    pub fn enum_range(&self) -> Option<&EnumRange> {
        match self.get(Self::RANGE) {
            Some(FacetValue::Range(range)) => Some(range),
            _ => None,
        }
    }
}

/// What an invocable action expects as its argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionParameterShape {
    /// The action takes no argument.
    None,
    /// A single simple value of the declared kind.
    Simple(SimpleKind),
    /// An override structure: enum value, duration, optional max duration.
    Override,
    /// A flat composite structure with the declared field names.
    Composite(Vec<String>),
}

/// An action's name and resolved parameter shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// The action's slot name on the target component.
    pub name: String,
    /// The declared parameter shape.
    pub shape: ActionParameterShape,
}

impl ActionSpec {
    /// Creates an action spec.
    pub fn new(name: impl Into<String>, shape: ActionParameterShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// Metadata the resolver reads off the target of an action invocation.
pub trait ActionTarget {
    /// Facets declared on the named action slot.
    fn action_facets(&self, action: &str) -> Option<&Facets>;

    /// The declared enum range of a writable enum point.
    ///
    /// Returns `None` for every other component kind, which routes simple
    /// argument resolution through generic conversion instead of tag lookup.
    fn writable_enum_range(&self) -> Option<&EnumRange> {
        None
    }
}

/// A flat named-field structure built during composite argument resolution.
///
/// Fields are declared up front; writing an undeclared field fails with
/// [`SlotError::NoSuchField`]. Field values are themselves simple, so nested
/// composites are unrepresentable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompositeValue {
    fields: Vec<(String, Option<SimpleValue>)>,
}

impl CompositeValue {
    /// Creates a composite with the declared field names, all unset.
    #[must_use]
    pub fn with_fields(names: &[String]) -> Self {
        Self {
            fields: names.iter().map(|n| (n.clone(), None)).collect(),
        }
    }

    /// Writes a declared field.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::NoSuchField`] if the field is not declared.
    pub fn set(&mut self, field: &str, value: SimpleValue) -> Result<(), SlotError> {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some(entry) => {
                entry.1 = Some(value);
                Ok(())
            }
            None => Err(SlotError::NoSuchField {
                field: field.to_string(),
            }),
        }
    }

    /// Reads a field's value, if it has been set.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&SimpleValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Iterates declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}
