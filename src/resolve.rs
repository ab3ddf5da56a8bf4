// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Action-argument resolution.
//!
//! Inbound protocol actions carry a dictionary of named values; the target
//! action declares one of four parameter shapes. Resolution turns the dict
//! into the single argument the invocation needs, validating along the way.
//! Results are built locally and handed back whole: a validation failure
//! never leaves a partially-populated argument behind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::component::{ActionParameterShape, ActionSpec, ActionTarget, CompositeValue};
use crate::convert::TypeConverter;
use crate::dict::ArgDict;
use crate::error::ResolveError;
use crate::types::{EnumRange, EnumValue, HaystackValue, RelTime, SimpleKind, SimpleValue};

/// The resolved argument of an action invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionArgument {
    /// The action takes no argument.
    None,
    /// A single simple value.
    Simple(SimpleValue),
    /// A fully-validated override structure.
    Override(EnumOverride),
    /// A flat composite structure.
    Composite(CompositeValue),
}

/// A temporary enum override: the value to hold, how long to hold it, and an
/// optional cap on the hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumOverride {
    /// The enum value to override to, bound against the action's range.
    pub value: EnumValue,
    /// How long the override lasts.
    pub duration: RelTime,
    /// Upper bound on the override duration, when the caller supplies one.
    pub max_override_duration: Option<RelTime>,
}

impl fmt::Display for EnumOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.value, self.duration)
    }
}

impl TypeConverter<'_> {
    /// Resolves an argument dictionary into the action's invocation argument.
    ///
    /// # Errors
    ///
    /// Every validation failure is a distinct [`ResolveError`] variant;
    /// conversion and object-model failures pass through unchanged. See the
    /// shape-specific helpers for the full taxonomy.
    pub fn resolve_action_args(
        &self,
        args: &ArgDict,
        target: &dyn ActionTarget,
        action: &ActionSpec,
    ) -> Result<ActionArgument, ResolveError> {
        match &action.shape {
            ActionParameterShape::None => Ok(ActionArgument::None),
            ActionParameterShape::Simple(kind) => self.resolve_simple(args, target, *kind),
            ActionParameterShape::Override => self.resolve_override(args, target, &action.name),
            ActionParameterShape::Composite(fields) => self.resolve_composite(args, fields),
        }
    }

    /// Resolves a single simple argument.
    ///
    /// The dict's entry count is unreliable for row-shaped sources, so the
    /// one expected entry is taken by iteration. Writable enum targets
    /// resolve the value by decoded-tag lookup in their declared range;
    /// everything else converts generically. The resolved kind must match
    /// the declared kind.
    fn resolve_simple(
        &self,
        args: &ArgDict,
        target: &dyn ActionTarget,
        expected: SimpleKind,
    ) -> Result<ActionArgument, ResolveError> {
        let (_, val) = args.first().ok_or(ResolveError::EmptyArgs)?;

        let simple = if let Some(range) = target.writable_enum_range() {
            SimpleValue::Enum(self.resolve_writable_enum(val, range)?)
        } else {
            self.to_simple(val)?
        };

        if simple.kind() != expected {
            return Err(ResolveError::ParameterTypeMismatch {
                expected,
                actual: simple.kind(),
            });
        }
        Ok(ActionArgument::Simple(simple))
    }

    fn resolve_writable_enum(
        &self,
        val: &HaystackValue,
        range: &EnumRange,
    ) -> Result<EnumValue, ResolveError> {
        let unresolvable = |rendered: String| ResolveError::UnresolvableEnumValue {
            value: rendered,
            range: range.encode(),
        };
        match val {
            HaystackValue::Str(s) => {
                let tag = self.tag_codec().decode(s);
                range.by_tag(&tag).ok_or_else(|| unresolvable(s.clone()))
            }
            other => Err(unresolvable(other.to_string())),
        }
    }

    /// Resolves an override-structure argument.
    ///
    /// Requires the target action to declare an enum range facet and the
    /// dict to carry non-null `value` and `duration` keys; an optional
    /// `maxOverrideDuration` is validated when present. All other keys are
    /// ignored.
    fn resolve_override(
        &self,
        args: &ArgDict,
        target: &dyn ActionTarget,
        action: &str,
    ) -> Result<ActionArgument, ResolveError> {
        let facets = target
            .action_facets(action)
            .ok_or_else(|| ResolveError::MissingFacets {
                action: action.to_string(),
            })?;
        let range = facets
            .enum_range()
            .ok_or_else(|| ResolveError::InvalidFacetType {
                action: action.to_string(),
            })?;

        let raw_value = args
            .get("value")
            .ok_or(ResolveError::MissingRequiredArgument { key: "value" })?;
        let raw_duration = args
            .get("duration")
            .ok_or(ResolveError::MissingRequiredArgument { key: "duration" })?;

        let value = self.resolve_range_member(raw_value, range)?;
        let duration = self.resolve_duration(raw_duration, "duration")?;

        // Presence is a `has` check: a declared-but-null max is absent.
        let max_override_duration = match args.get("maxOverrideDuration") {
            Some(raw) => Some(self.resolve_duration(raw, "maxOverrideDuration")?),
            None => None,
        };

        let result = EnumOverride {
            value,
            duration,
            max_override_duration,
        };
        tracing::debug!(action = %action, argument = %result, "Resolved override argument");
        Ok(ActionArgument::Override(result))
    }

    /// Binds an override `value` argument against the action's enum range,
    /// by tag for text and by truncated ordinal for numbers.
    #[allow(clippy::cast_possible_truncation)]
    fn resolve_range_member(
        &self,
        raw: &HaystackValue,
        range: &EnumRange,
    ) -> Result<EnumValue, ResolveError> {
        let converted = self.to_simple(raw)?;
        let member = match &converted {
            SimpleValue::Text(s) => range.by_tag(s),
            SimpleValue::Number(n) => range.by_ordinal(*n as i32),
            _ => None,
        };
        member.ok_or_else(|| ResolveError::UnresolvableEnumValue {
            value: converted.to_string(),
            range: range.encode(),
        })
    }

    fn resolve_duration(
        &self,
        raw: &HaystackValue,
        field: &'static str,
    ) -> Result<RelTime, ResolveError> {
        match self.to_simple(raw)? {
            SimpleValue::Duration(d) => Ok(d),
            other => Err(ResolveError::NotADuration {
                field,
                value: other.to_string(),
            }),
        }
    }

    /// Resolves a flat composite argument.
    ///
    /// Every iterated entry converts to a simple value and is written to the
    /// same-named field. Keys are not validated against the declared fields
    /// here; an undeclared key surfaces the object model's own slot error,
    /// unwrapped. The structure is returned only once every write succeeded.
    fn resolve_composite(
        &self,
        args: &ArgDict,
        fields: &[String],
    ) -> Result<ActionArgument, ResolveError> {
        let mut cpx = CompositeValue::with_fields(fields);
        for (key, val) in args.iter() {
            let simple = self.to_simple(val)?;
            cpx.set(key, simple)?;
        }
        Ok(ActionArgument::Composite(cpx))
    }
}
