use approx::assert_abs_diff_eq;
use lineanim_core::{
    CompositeSchema, FieldRule, InterpError, Interpolator, Value, ValueKind, CAMERA_TAG, POINT_TAG,
};

fn scalar_field(value: &Value, name: &str) -> f64 {
    match value {
        Value::Composite { fields, .. } => match fields.get(name) {
            Some(Value::Scalar(v)) => *v,
            other => panic!("field '{name}' is not a scalar: {other:?}"),
        },
        other => panic!("not a composite: {other:?}"),
    }
}

fn point(x: f64, y: f64, z: f64) -> Value {
    Value::composite(
        POINT_TAG,
        [
            ("x", Value::scalar(x)),
            ("y", Value::scalar(y)),
            ("z", Value::scalar(z)),
        ],
    )
}

fn camera(heading: f64, tilt: f64, position: Value) -> Value {
    Value::composite(
        CAMERA_TAG,
        [
            ("heading", Value::scalar(heading)),
            ("tilt", Value::scalar(tilt)),
            ("position", position),
        ],
    )
}

#[test]
fn scalar_boundaries_are_exact() {
    let interp = Interpolator::new();
    let a = Value::scalar(0.1);
    let b = Value::scalar(0.3);
    assert_eq!(interp.interpolate(&a, &b, 0.0, 2.0, None).unwrap(), a);
    assert_eq!(interp.interpolate(&a, &b, 2.0, 2.0, None).unwrap(), b);
}

#[test]
fn scalar_identity_for_equal_operands() {
    let interp = Interpolator::new();
    let a = Value::scalar(-17.25);
    for t in [-1.0, 0.0, 0.3, 1.0, 7.5] {
        assert_eq!(interp.interpolate(&a, &a, t, 1.0, None).unwrap(), a);
        // Identity must also survive a modulus.
        assert_eq!(interp.interpolate(&a, &a, t, 1.0, Some(360.0)).unwrap(), a);
    }
}

#[test]
fn scalar_midpoint() {
    let interp = Interpolator::new();
    let out = interp.lerp(&Value::scalar(0.0), &Value::scalar(10.0), 0.5);
    assert_eq!(out.unwrap(), Value::Scalar(5.0));
}

#[test]
fn scalar_respects_normalization_total() {
    let interp = Interpolator::new();
    let out = interp
        .interpolate(&Value::scalar(0.0), &Value::scalar(10.0), 5.0, 20.0, None)
        .unwrap();
    assert_eq!(out, Value::Scalar(2.5));
}

#[test]
fn modulus_takes_the_shorter_arc() {
    let interp = Interpolator::new();

    // 350 -> 10 is a 20 degree arc through north, midpoint 0 (not 180).
    let out = interp
        .interpolate(&Value::scalar(350.0), &Value::scalar(10.0), 0.5, 1.0, Some(360.0))
        .unwrap();
    match out {
        Value::Scalar(v) => assert_abs_diff_eq!(v, 0.0, epsilon = 1e-9),
        other => panic!("expected scalar, got {other:?}"),
    }

    // And the reverse direction walks back through north as well.
    let out = interp
        .interpolate(&Value::scalar(10.0), &Value::scalar(350.0), 0.5, 1.0, Some(360.0))
        .unwrap();
    match out {
        Value::Scalar(v) => assert_abs_diff_eq!(v, 0.0, epsilon = 1e-9),
        other => panic!("expected scalar, got {other:?}"),
    }
}

#[test]
fn modulus_boundaries_land_on_operands() {
    let interp = Interpolator::new();
    let a = Value::scalar(350.0);
    let b = Value::scalar(10.0);
    assert_eq!(interp.interpolate(&a, &b, 0.0, 1.0, Some(360.0)).unwrap(), a);
    assert_eq!(interp.interpolate(&a, &b, 1.0, 1.0, Some(360.0)).unwrap(), b);
}

#[test]
fn vector_blends_element_wise() {
    let interp = Interpolator::new();
    let a = Value::vector([0.0, 100.0, -4.0]);
    let b = Value::vector([10.0, 0.0, 4.0]);
    let out = interp.lerp(&a, &b, 0.25).unwrap();
    assert_eq!(out, Value::Vector(vec![2.5, 75.0, -2.0]));
}

#[test]
fn vector_applies_modulus_uniformly() {
    let interp = Interpolator::new();
    let a = Value::vector([350.0, 90.0]);
    let b = Value::vector([10.0, 270.0]);
    let out = interp
        .interpolate(&a, &b, 0.5, 1.0, Some(360.0))
        .unwrap();
    match out {
        Value::Vector(v) => {
            assert_abs_diff_eq!(v[0], 0.0, epsilon = 1e-9);
            // 90 -> 270 is exactly half the circle; the positive arc is taken.
            assert_abs_diff_eq!(v[1], 180.0, epsilon = 1e-9);
        }
        other => panic!("expected vector, got {other:?}"),
    }
}

#[test]
fn vector_length_mismatch_is_an_error() {
    let interp = Interpolator::new();
    let err = interp
        .lerp(&Value::vector([0.0, 1.0]), &Value::vector([0.0, 1.0, 2.0]), 0.5)
        .unwrap_err();
    assert_eq!(err, InterpError::VectorLengthMismatch { left: 2, right: 3 });
}

#[test]
fn kind_mismatch_is_an_error() {
    let interp = Interpolator::new();
    let err = interp
        .lerp(&Value::scalar(1.0), &Value::vector([1.0]), 0.5)
        .unwrap_err();
    assert_eq!(
        err,
        InterpError::TypeMismatch {
            left: ValueKind::Scalar,
            right: ValueKind::Vector,
        }
    );
}

#[test]
fn zero_total_is_an_error() {
    let interp = Interpolator::new();
    let err = interp
        .interpolate(&Value::scalar(0.0), &Value::scalar(1.0), 0.5, 0.0, None)
        .unwrap_err();
    assert_eq!(err, InterpError::DegenerateNormalization);
}

#[test]
fn timestamp_blends_on_epoch_millis() {
    let interp = Interpolator::new();
    let a = Value::timestamp(1_600_000_000_000);
    let b = Value::timestamp(1_600_000_060_000);
    let out = interp.lerp(&a, &b, 0.5).unwrap();
    assert_eq!(out, Value::Timestamp(1_600_000_030_000));
    assert_eq!(interp.lerp(&a, &b, 0.0).unwrap(), a);
    assert_eq!(interp.lerp(&a, &b, 1.0).unwrap(), b);
}

#[test]
fn camera_pose_blends_heading_circularly() {
    let interp = Interpolator::new();
    let a = camera(350.0, 0.0, point(0.0, 0.0, 0.0));
    let b = camera(10.0, 90.0, point(100.0, 200.0, 50.0));
    let out = interp.lerp(&a, &b, 0.5).unwrap();

    assert_abs_diff_eq!(scalar_field(&out, "heading"), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scalar_field(&out, "tilt"), 45.0, epsilon = 1e-9);

    // Nested point composite interpolates field-wise with no wraparound.
    match &out {
        Value::Composite { fields, .. } => {
            let pos = fields.get("position").expect("position field");
            assert_eq!(scalar_field(pos, "x"), 50.0);
            assert_eq!(scalar_field(pos, "y"), 100.0);
            assert_eq!(scalar_field(pos, "z"), 25.0);
        }
        other => panic!("expected composite, got {other:?}"),
    }
}

#[test]
fn composite_tag_mismatch_is_an_error() {
    let interp = Interpolator::new();
    let err = interp
        .lerp(&point(0.0, 0.0, 0.0), &camera(0.0, 0.0, point(0.0, 0.0, 0.0)), 0.5)
        .unwrap_err();
    assert_eq!(
        err,
        InterpError::CompositeTagMismatch {
            left: POINT_TAG.to_string(),
            right: CAMERA_TAG.to_string(),
        }
    );
}

#[test]
fn unregistered_tag_is_an_error() {
    let interp = Interpolator::new();
    let a = Value::composite("ufo", [("altitude", Value::scalar(1.0))]);
    let err = interp.lerp(&a, &a.clone(), 0.5).unwrap_err();
    assert_eq!(err, InterpError::UnknownComposite { tag: "ufo".into() });
}

#[test]
fn missing_field_is_an_error() {
    let interp = Interpolator::new();
    let a = Value::composite(POINT_TAG, [("x", Value::scalar(0.0)), ("y", Value::scalar(0.0))]);
    let err = interp.lerp(&a, &a.clone(), 0.5).unwrap_err();
    assert_eq!(
        err,
        InterpError::MissingField {
            tag: POINT_TAG.into(),
            field: "z".into(),
        }
    );
}

#[test]
fn field_kind_mismatch_is_an_error() {
    let interp = Interpolator::new();
    let a = Value::composite(
        POINT_TAG,
        [
            ("x", Value::vector([0.0])),
            ("y", Value::scalar(0.0)),
            ("z", Value::scalar(0.0)),
        ],
    );
    let err = interp.lerp(&a, &a.clone(), 0.5).unwrap_err();
    assert_eq!(
        err,
        InterpError::FieldKindMismatch {
            tag: POINT_TAG.into(),
            field: "x".into(),
            declared: ValueKind::Scalar,
        }
    );
}

/// it should make adding a composite type a data-only change
#[test]
fn custom_schema_registration() {
    let mut interp = Interpolator::new();
    interp.schemas_mut().register(CompositeSchema::from_rules(
        "pose",
        [
            FieldRule::circular("heading", 360.0),
            FieldRule::plain("tilt", ValueKind::Scalar),
        ],
    ));

    let a = Value::composite(
        "pose",
        [("heading", Value::scalar(350.0)), ("tilt", Value::scalar(0.0))],
    );
    let b = Value::composite(
        "pose",
        [("heading", Value::scalar(10.0)), ("tilt", Value::scalar(90.0))],
    );
    let out = interp.lerp(&a, &b, 0.5).unwrap();
    assert_abs_diff_eq!(scalar_field(&out, "heading"), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scalar_field(&out, "tilt"), 45.0, epsilon = 1e-9);
}

#[test]
fn value_json_round_trip() {
    let v = camera(123.0, 45.0, point(1.5, -2.5, 0.0));
    let json = serde_json::to_string(&v).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);

    let s = serde_json::to_value(Value::scalar(2.0)).unwrap();
    assert_eq!(s, serde_json::json!({ "type": "Scalar", "data": 2.0 }));
}
