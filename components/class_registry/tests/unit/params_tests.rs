//! Required-parameter templates on construction

use class_registry::{initialize, Members, ParamTemplate};
use core_types::{ClassError, ErrorKind, Value};

#[test]
fn test_required_params_checked_before_copy() {
    let scope = initialize("App", false);
    let sprite = scope
        .define_class("Sprite", Members::new().with("x:number", 0))
        .unwrap()
        .require_params(ParamTemplate::new().require("image", "String"));

    let err = sprite
        .instantiate(Value::object([("x", Value::from(1))]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredParameter);

    let err = sprite
        .instantiate(Value::object([("image", Value::from(7))]))
        .unwrap_err();
    assert_eq!(
        err,
        ClassError::WrongParameterType {
            name: "image".into(),
            expected: "String".into(),
            actual: "Number".into(),
        }
    );
    assert_eq!(sprite.instance_count(), 0);

    let ok = sprite
        .instantiate(Value::object([("image", Value::from("bunny.png"))]))
        .unwrap();
    assert_eq!(ok.id(), "Sprite_1");
}

#[test]
fn test_missing_params_object() {
    let class = initialize("App", false)
        .define_class("Needy", Members::new())
        .unwrap()
        .require_params(ParamTemplate::new().require("a", "Number"));
    assert!(matches!(
        class.create(),
        Err(ClassError::MissingRequiredParameter { .. })
    ));
}

#[test]
fn test_instance_parameters() {
    let scope = initialize("App", false);
    let texture = scope.define_class("Texture", Members::new()).unwrap();
    let other = scope.define_class("Sound", Members::new()).unwrap();
    let sprite = scope
        .define_class("Sprite", Members::new())
        .unwrap()
        .require_params(ParamTemplate::new().require_instance_of("texture", &texture));

    let good = Value::object([("texture", texture.create().unwrap().to_value())]);
    assert!(sprite.instantiate(good).is_ok());

    let bad = Value::object([("texture", other.create().unwrap().to_value())]);
    let err = sprite.instantiate(bad).unwrap_err();
    assert!(matches!(err, ClassError::WrongParameterType { ref actual, .. } if actual == "Sound"));
}

#[test]
fn test_template_replaced_by_later_call() {
    let class = initialize("App", false)
        .define_class("Loose", Members::new())
        .unwrap()
        .require_params(ParamTemplate::new().require("a", "Number"))
        .require_params(ParamTemplate::new());
    assert!(class.create().is_ok());
}
