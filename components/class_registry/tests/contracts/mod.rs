//! Contract tests for class_registry component
//!
//! These tests pin the public surface: initialize, define_class,
//! add_static, construction, get_id/to_string and define_namespace.

use class_registry::{initialize, Class, ClassLibrary, Instance, LibraryConfig, Members, Scope};
use core_types::{ClassError, ClassResult, ErrorKind, PrimitiveType, Value};

mod initialize_contract {
    use super::*;

    #[test]
    fn initialize_returns_scope_for_prefix() {
        let scope: Scope = initialize("MyPrefix", false);
        assert_eq!(scope.prefix(), "MyPrefix");
        assert!(scope.config().type_checking);
    }

    #[test]
    fn initialize_disable_flag_turns_checking_off() {
        let library = ClassLibrary::new();
        let scope = library.initialize("MyPrefix", true);
        assert_eq!(scope.config(), LibraryConfig::unchecked());
    }

    #[test]
    fn library_scopes_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClassLibrary>();
        assert_send_sync::<Scope>();
        assert_send_sync::<Class>();
        assert_send_sync::<Instance>();
        assert_send_sync::<Value>();
    }
}

mod define_class_contract {
    use super::*;

    #[test]
    fn define_class_returns_class_and_registers_it() {
        let scope = initialize("P", false);
        let class: Class = scope.define_class("Point", Members::new()).unwrap();
        assert_eq!(class.name(), "Point");
        assert_eq!(class.instance_count(), 0);
        assert_eq!(scope.class("Point"), Some(class));
    }

    #[test]
    fn define_class_rejects_empty_name() {
        let scope = initialize("P", false);
        let result: ClassResult<Class> = scope.define_class("", Members::new());
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn point_scenario() {
        let scope = initialize("P", false);
        let point = scope
            .define_class("Point", Members::new().with("x:number", 0).with("y:number", 0))
            .unwrap();

        let err = point
            .instantiate(Value::object([("x", Value::from("5"))]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        let p = point
            .instantiate(Value::object([("x", Value::from(5)), ("y", Value::from(10))]))
            .unwrap();
        assert_eq!(p.id(), "Point_1");
        assert_eq!(p.get("x"), Value::from(5));
    }
}

mod add_static_contract {
    use super::*;

    #[test]
    fn add_static_returns_same_class() {
        let scope = initialize("P", false);
        let class = scope.define_class("Math", Members::new()).unwrap();
        let returned = class.add_static(Members::new().with("ONE", 1));
        assert_eq!(returned, class);
        assert_eq!(scope.class("Math").unwrap().get_static("ONE"), Value::from(1));
    }

    #[test]
    fn static_members_absent_from_instances() {
        let scope = initialize("P", false);
        let class = scope
            .define_class("Math", Members::new().with("shared", 1))
            .unwrap()
            .add_static(Members::new().with("only_static", 2).with("shared", 3));
        let instance = class.create().unwrap();
        assert_eq!(instance.get("only_static"), Value::Undefined);
        assert_eq!(instance.get("shared"), Value::from(1));
    }
}

mod instance_contract {
    use super::*;

    #[test]
    fn get_id_and_to_string() {
        let scope = initialize("Game", false);
        let class = scope.define_class("Sprite", Members::new()).unwrap();
        let sprite = class.create().unwrap();
        assert_eq!(sprite.get_id().unwrap(), Value::from("Sprite_1"));
        assert_eq!(sprite.to_display_string().unwrap(), "<Game.Sprite_1 instance>");
    }

    #[test]
    fn class_value_reflects_as_function() {
        let scope = initialize("Game", false);
        let class = scope.define_class("Sprite", Members::new()).unwrap();
        assert_eq!(class.to_value().type_of(), PrimitiveType::Function);
        assert_eq!(class.create().unwrap().to_value().type_of(), PrimitiveType::Object);
    }
}

mod define_namespace_contract {
    use super::*;

    #[test]
    fn define_namespace_returns_unit() {
        let scope = initialize("P", false);
        let result: ClassResult<()> = scope.define_namespace("a.b.c");
        assert!(result.is_ok());
    }

    #[test]
    fn define_namespace_rejects_empty_segments() {
        let scope = initialize("P", false);
        assert_eq!(
            scope.define_namespace("a..c"),
            Err(ClassError::InvalidNamespacePath("a..c".to_string()))
        );
    }
}
