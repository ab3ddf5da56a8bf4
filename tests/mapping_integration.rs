// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end mapping behavior across the public API.

use haymap_lib::component::{
    ActionParameterShape, ActionSpec, ActionTarget, FacetValue, Facets,
};
use haymap_lib::convert::TypeConverter;
use haymap_lib::dict::ArgDict;
use haymap_lib::resolve::ActionArgument;
use haymap_lib::tags::{EnumTagCodec, Identity};
use haymap_lib::types::{
    Coord, EnumRange, HaystackValue, RelTime, SimpleKind, SimpleValue, Status,
};
use haymap_lib::units::UnitTable;
use haymap_lib::{ConvertError, ResolveError};

struct StationPoint {
    facets: Option<Facets>,
    range: Option<EnumRange>,
}

impl StationPoint {
    fn plain() -> Self {
        Self {
            facets: None,
            range: None,
        }
    }

    fn override_point(range: EnumRange) -> Self {
        Self {
            facets: Some(Facets::new().with(Facets::RANGE, FacetValue::Range(range))),
            range: None,
        }
    }

    fn enum_writable(range: EnumRange) -> Self {
        Self {
            facets: None,
            range: Some(range),
        }
    }
}

impl ActionTarget for StationPoint {
    fn action_facets(&self, _action: &str) -> Option<&Facets> {
        self.facets.as_ref()
    }

    fn writable_enum_range(&self) -> Option<&EnumRange> {
        self.range.as_ref()
    }
}

/// A codec in the style stations actually use: protocol tags carry a prefix.
struct PrefixCodec;

impl EnumTagCodec for PrefixCodec {
    fn encode(&self, tag: &str) -> String {
        format!("hs~{tag}")
    }

    fn decode(&self, tag: &str) -> String {
        tag.strip_prefix("hs~").unwrap_or(tag).to_string()
    }
}

#[test]
fn text_values_round_trip_exactly() {
    let units = UnitTable::with_defaults();
    let conv = TypeConverter::new(&units, &Identity);

    for text in ["discharge", "", "zone 4 / north", "enumTag0"] {
        let first = conv.to_simple(&HaystackValue::str(text)).unwrap();
        let back = conv.from_simple(&first, false).unwrap();
        let second = conv.to_simple(&back).unwrap();
        assert_eq!(first, second);
        assert_eq!(second, SimpleValue::text(text));
    }
}

#[test]
fn unitless_numbers_keep_their_float_payload() {
    let units = UnitTable::with_defaults();
    let conv = TypeConverter::new(&units, &Identity);

    for val in [0.0, 5.5, -273.15, 1.0e9] {
        let simple = conv.to_simple(&HaystackValue::num(val)).unwrap();
        assert_eq!(simple, SimpleValue::Number(val));
        let back = conv.from_simple(&simple, false).unwrap();
        assert_eq!(back, HaystackValue::num(val));
    }
}

#[test]
fn one_of_each_duration_unit_scales_per_table() {
    let units = UnitTable::with_defaults();
    let conv = TypeConverter::new(&units, &Identity);

    let expectations = [
        ("ns", RelTime::from_millis(0)),
        ("us", RelTime::from_millis(0)),
        ("ms", RelTime::from_millis(1)),
        ("cs", RelTime::from_millis(10)),
        ("ds", RelTime::from_millis(100)),
        ("s", RelTime::from_secs(1)),
        ("min", RelTime::from_secs(60)),
        ("h", RelTime::from_secs(3600)),
        ("day", RelTime::from_hours(24)),
    ];
    for (symbol, expect) in expectations {
        let simple = conv
            .to_simple(&HaystackValue::num_with_unit(1.0, symbol))
            .unwrap();
        assert_eq!(simple, SimpleValue::Duration(expect), "unit {symbol}");
    }

    let two_thousand_secs = conv
        .to_simple(&HaystackValue::num_with_unit(2000.0, "s"))
        .unwrap();
    assert_eq!(
        two_thousand_secs,
        SimpleValue::Duration(RelTime::from_secs(2000))
    );
}

#[test]
fn booleans_and_markers_round_trip() {
    let units = UnitTable::with_defaults();
    let conv = TypeConverter::new(&units, &Identity);

    for flag in [true, false] {
        let simple = conv.to_simple(&HaystackValue::Bool(flag)).unwrap();
        assert_eq!(
            conv.from_simple(&simple, false).unwrap(),
            HaystackValue::Bool(flag)
        );
    }

    // Markers round-trip through the read path, not the write path.
    let simple = conv.to_simple(&HaystackValue::Marker).unwrap();
    assert_eq!(simple, SimpleValue::Marker);
    assert!(conv.from_simple(&simple, false).is_err());
}

#[test]
fn coords_flatten_to_canonical_text_one_way() {
    let units = UnitTable::with_defaults();
    let conv = TypeConverter::new(&units, &Identity);

    let coord = Coord::new(37.545826, -77.449188);
    let simple = conv.to_simple(&HaystackValue::Coord(coord)).unwrap();
    assert_eq!(simple, SimpleValue::text("C(37.545826,-77.449188)"));

    // The reverse direction hands back plain text, not a coordinate.
    let back = conv.from_simple(&simple, false).unwrap();
    assert_eq!(back, HaystackValue::str("C(37.545826,-77.449188)"));
}

#[test]
fn enum_tags_translate_through_the_codec() {
    let units = UnitTable::with_defaults();
    let conv = TypeConverter::new(&units, &PrefixCodec);

    // Outbound: framework tag picks up the protocol prefix when enabled.
    let range = EnumRange::from_tags(&["fanLow", "fanHigh"]);
    let member = range.by_tag("fanHigh").unwrap();
    let out = conv.from_simple(&SimpleValue::Enum(member.clone()), true).unwrap();
    assert_eq!(out, HaystackValue::str("hs~fanHigh"));
    let verbatim = conv.from_simple(&SimpleValue::Enum(member), false).unwrap();
    assert_eq!(verbatim, HaystackValue::str("fanHigh"));

    // Inbound: an enum-writable point decodes the prefix before tag lookup.
    let target = StationPoint::enum_writable(range);
    let action = ActionSpec::new("set", ActionParameterShape::Simple(SimpleKind::Enum));
    let args = ArgDict::new().with("arg", HaystackValue::str("hs~fanLow"));
    let resolved = conv.resolve_action_args(&args, &target, &action).unwrap();
    let ActionArgument::Simple(SimpleValue::Enum(e)) = resolved else {
        panic!("expected an enum argument");
    };
    assert_eq!(e.tag, "fanLow");
    assert_eq!(e.ordinal, 0);
}

#[test]
fn null_shape_never_throws() {
    let units = UnitTable::with_defaults();
    let conv = TypeConverter::new(&units, &Identity);
    let action = ActionSpec::new("auto", ActionParameterShape::None);
    let res = conv
        .resolve_action_args(&ArgDict::new(), &StationPoint::plain(), &action)
        .unwrap();
    assert_eq!(res, ActionArgument::None);
}

#[test]
fn override_resolution_error_taxonomy_is_distinguishable() {
    let units = UnitTable::with_defaults();
    let conv = TypeConverter::new(&units, &Identity);
    let range = EnumRange::from_tags(&["enumTag0", "enumTag1", "enumTag2"]);
    let action = ActionSpec::new("override", ActionParameterShape::Override);
    let good = StationPoint::override_point(range.clone());

    let base = || {
        ArgDict::new()
            .with("value", HaystackValue::str("enumTag0"))
            .with("duration", HaystackValue::num_with_unit(1.0, "min"))
    };

    // Happy path binds ordinal 0 and exactly 60 seconds.
    let res = conv.resolve_action_args(&base(), &good, &action).unwrap();
    let ActionArgument::Override(result) = res else {
        panic!("expected an override argument");
    };
    assert_eq!(result.value.ordinal, 0);
    assert_eq!(result.duration.as_secs(), 60);

    // Numeric ordinal binds the matching tag.
    let args = ArgDict::new()
        .with("value", HaystackValue::num(1.0))
        .with("duration", HaystackValue::num_with_unit(1.0, "min"));
    let res = conv.resolve_action_args(&args, &good, &action).unwrap();
    let ActionArgument::Override(result) = res else {
        panic!("expected an override argument");
    };
    assert_eq!(result.value.tag, "enumTag1");

    // Each failure mode is its own variant.
    let err = conv
        .resolve_action_args(&base(), &StationPoint::plain(), &action)
        .unwrap_err();
    assert!(matches!(err, ResolveError::MissingFacets { .. }));

    let bad_facets = StationPoint {
        facets: Some(Facets::new().with(Facets::RANGE, FacetValue::Bool(true))),
        range: None,
    };
    let err = conv
        .resolve_action_args(&base(), &bad_facets, &action)
        .unwrap_err();
    assert!(matches!(err, ResolveError::InvalidFacetType { .. }));

    let err = conv
        .resolve_action_args(
            &ArgDict::new().with("duration", HaystackValue::num_with_unit(1.0, "min")),
            &good,
            &action,
        )
        .unwrap_err();
    assert_eq!(err, ResolveError::MissingRequiredArgument { key: "value" });

    let args = base().with("duration", HaystackValue::num_with_unit(1.0, "cm"));
    let err = conv.resolve_action_args(&args, &good, &action).unwrap_err();
    assert!(matches!(err, ResolveError::NotADuration { .. }));

    let args = ArgDict::new()
        .with("value", HaystackValue::str("unknownTag"))
        .with("duration", HaystackValue::num_with_unit(1.0, "min"));
    let err = conv.resolve_action_args(&args, &good, &action).unwrap_err();
    assert!(matches!(err, ResolveError::UnresolvableEnumValue { .. }));
}

#[test]
fn status_strings_map_to_the_fixed_set() {
    assert_eq!(TypeConverter::to_status("ok").unwrap(), Status::Ok);
    assert_eq!(TypeConverter::to_status("fault").unwrap(), Status::Fault);
    assert_eq!(TypeConverter::to_status("down").unwrap(), Status::Down);
    assert_eq!(
        TypeConverter::to_status("disabled").unwrap(),
        Status::Disabled
    );
    assert_eq!(TypeConverter::to_status("unknown").unwrap(), Status::Null);
    assert!(matches!(
        TypeConverter::to_status("overridden").unwrap_err(),
        ConvertError::UnrecognizedStatus(_)
    ));
}

#[test]
fn json_scalars_feed_the_converter() {
    let units = UnitTable::with_defaults();
    let conv = TypeConverter::new(&units, &Identity);

    let val = HaystackValue::from_json(&serde_json::json!("n:2 min")).unwrap();
    assert_eq!(
        conv.to_simple(&val).unwrap(),
        SimpleValue::Duration(RelTime::from_mins(2))
    );
}
