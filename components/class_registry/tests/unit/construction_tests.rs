//! Construction protocol: params copy, ids, initialize

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use class_registry::{initialize, Class, Instance, Members};
use core_types::{ClassError, Value};

fn point() -> Class {
    initialize("Game", false)
        .define_class("Point", Members::new().with("x:number", 0).with("y:number", 0))
        .unwrap()
}

#[test]
fn test_ids_are_sequential() {
    let class = point();
    for i in 1..=5 {
        let instance = class.create().unwrap();
        assert_eq!(instance.id(), format!("Point_{}", i));
    }
    assert_eq!(class.instance_count(), 5);
}

#[test]
fn test_ids_not_reused_after_drop() {
    let class = point();
    {
        let _first = class.create().unwrap();
        let _second = class.create().unwrap();
    }
    assert_eq!(class.create().unwrap().id(), "Point_3");
}

#[test]
fn test_params_become_own_fields() {
    let class = point();
    let p = class
        .instantiate(Value::object([
            ("x", Value::from(5)),
            ("label", Value::from("origin")),
        ]))
        .unwrap();

    assert_eq!(p.get("x"), Value::from(5));
    assert_eq!(p.get("y"), Value::from(0));
    assert_eq!(p.get("label"), Value::from("origin"));
    assert_eq!(p.own_keys(), vec!["x", "label"]);
}

#[test]
fn test_falsy_params_are_ignored() {
    let class = point();
    for params in [Value::Undefined, Value::Null, Value::from(false), Value::from(0)] {
        let p = class.instantiate(params).unwrap();
        assert!(p.own_keys().is_empty());
    }
}

#[test]
fn test_primitive_params_copy_nothing() {
    let class = point();
    for params in [Value::from("ab"), Value::from(7), Value::from(true)] {
        let p = class.instantiate(params).unwrap();
        assert!(p.own_keys().is_empty());
        assert_eq!(p.get("0"), Value::Undefined);
        assert_eq!(p.get("x"), Value::from(0));
    }
    assert_eq!(class.instance_count(), 3);
}

#[test]
fn test_failed_construction_leaves_counter_untouched() {
    let class = point();
    let err = class
        .instantiate(Value::object([
            ("x", Value::from(1)),
            ("y", Value::from("2")),
        ]))
        .unwrap_err();
    assert!(matches!(err, ClassError::TypeMismatch { ref property, .. } if property == "y"));
    assert_eq!(class.instance_count(), 0);

    // The params object is assigned key by key, so "x" was accepted before
    // "y" failed. Nothing of that partial instance is reachable.
    let next = class.instantiate(Value::object([("x", Value::from(1))])).unwrap();
    assert_eq!(next.id(), "Point_1");
}

#[test]
fn test_initialize_receives_all_arguments() {
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_in_init = seen.clone();
    let class = initialize("Game", false)
        .define_class(
            "Sprite",
            Members::new()
                .with("image", Value::Null)
                .method("initialize", move |this, args| {
                    seen_in_init.store(args.len(), Ordering::SeqCst);
                    this.set("ready", Value::from(true))?;
                    Ok(Value::Undefined)
                }),
        )
        .unwrap();

    let sprite = class
        .construct(&[
            Value::object([("image", Value::from("bunny.png"))]),
            Value::from("extra"),
        ])
        .unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(sprite.get("ready"), Value::from(true));
    assert_eq!(sprite.get("image"), Value::from("bunny.png"));
}

#[test]
fn test_initialize_sees_assigned_id() {
    let class = initialize("Game", false)
        .define_class(
            "Tagged",
            Members::new().method("initialize", |this, _| {
                let id = this.get("getId").call(this, &[])?;
                this.set("tag", id)?;
                Ok(Value::Undefined)
            }),
        )
        .unwrap();

    let tagged = class.create().unwrap();
    assert_eq!(tagged.get("tag"), Value::from("Tagged_1"));
}

#[test]
fn test_initialize_error_aborts_construction() {
    let class = initialize("Game", false)
        .define_class(
            "Broken",
            Members::new().method("initialize", |_, _| Err(ClassError::thrown("no image"))),
        )
        .unwrap();

    assert_eq!(class.create().unwrap_err(), ClassError::Thrown("no image".into()));
}

#[test]
fn test_non_function_initialize_is_not_callable() {
    let class = initialize("Game", false)
        .define_class("Odd", Members::new().with("initialize", 1))
        .unwrap();
    assert!(matches!(class.create(), Err(ClassError::NotCallable(_))));
}

#[test]
fn test_methods_see_instance_fields() {
    let class = initialize("Game", false)
        .define_class(
            "Rect",
            Members::new()
                .with("w:number", 1)
                .with("h:number", 1)
                .method("area", |this, _| {
                    let w = this.get("w").as_number().unwrap_or(0.0);
                    let h = this.get("h").as_number().unwrap_or(0.0);
                    Ok(Value::from(w * h))
                }),
        )
        .unwrap();

    let rect = class
        .instantiate(Value::object([("w", Value::from(3)), ("h", Value::from(4))]))
        .unwrap();
    assert_eq!(rect.call("area", &[]).unwrap(), Value::from(12));
}

#[test]
fn test_identity_helpers() {
    let p = point().create().unwrap();
    assert_eq!(p.get_id().unwrap(), Value::from("Point_1"));
    assert_eq!(p.call("getInstanceId", &[]).unwrap(), Value::from("Point_1"));
    assert_eq!(p.get("className"), Value::from("Point"));
    assert_eq!(p.to_display_string().unwrap(), "<Game.Point_1 instance>");
}

#[test]
fn test_instance_value_round_trip() {
    let p = point().create().unwrap();
    let value = p.to_value();
    assert_eq!(value.to_string(), "<Game.Point_1 instance>");
    assert_eq!(Instance::from_value(&value).unwrap().id(), "Point_1");
    assert!(Instance::from_value(&Value::empty_object()).is_none());
}
