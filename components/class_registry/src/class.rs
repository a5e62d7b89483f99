//! Class definition and the construction protocol.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use core_types::{ClassError, ClassResult, HostObject, NativeFunction, PlainObject, PrimitiveType, Value};
use log::{debug, trace};
use parking_lot::RwLock;

use crate::instance::{instance_label, Instance, InstanceFields};
use crate::scope::ScopeSettings;
use crate::typed::{TypedProperty, TypedSlot};
use crate::{Members, ParamTemplate};

/// A named, constructible class.
///
/// Cloning shares the class; two handles compare equal when they refer to
/// the same definition.
///
/// # Examples
///
/// ```
/// use class_registry::{initialize, Members};
/// use core_types::Value;
///
/// let scope = initialize("Game", false);
/// let point = scope
///     .define_class("Point", Members::new().with("x:number", 0).with("y:number", 0))
///     .unwrap();
///
/// let p = point
///     .instantiate(Value::object([("x", Value::from(5)), ("y", Value::from(10))]))
///     .unwrap();
/// assert_eq!(p.id(), "Point_1");
/// assert_eq!(p.get("x"), Value::from(5));
/// assert!(point.instantiate(Value::object([("x", Value::from("5"))])).is_err());
/// ```
#[derive(Clone)]
pub struct Class {
    inner: Arc<ClassInner>,
}

pub(crate) struct ClassInner {
    this: Weak<ClassInner>,
    name: String,
    prefix: String,
    instance_count: AtomicU64,
    /// Plain prototype members, built-ins included
    prototype: HashMap<String, Value>,
    /// Typed prototype members holding their checked defaults
    typed: HashMap<String, TypedSlot>,
    statics: PlainObject,
    template: RwLock<Option<ParamTemplate>>,
}

impl Class {
    pub(crate) fn define(settings: &ScopeSettings, name: &str, members: &Members) -> ClassResult<Class> {
        if name.is_empty() {
            return Err(ClassError::EmptyClassName);
        }

        let mut prototype: HashMap<String, Value> = HashMap::new();
        let mut typed: HashMap<String, TypedSlot> = HashMap::new();
        for decl in members.declarations()? {
            match decl.ty {
                Some(ty) if settings.config.type_checking => {
                    // Defaults go through the checked setter too.
                    let mut slot = TypedSlot::new(Arc::new(TypedProperty::new(decl.name.clone(), ty)));
                    slot.set(decl.value)?;
                    prototype.remove(&decl.name);
                    typed.insert(decl.name, slot);
                }
                _ => match typed.get_mut(&decl.name) {
                    Some(slot) => slot.set(decl.value)?,
                    None => {
                        prototype.insert(decl.name, decl.value);
                    }
                },
            }
        }

        // A typed declaration of a built-in keeps its slot and checks the value.
        for (key, value) in builtin_members(name, &settings.prefix) {
            match typed.get_mut(key) {
                Some(slot) => slot.set(value)?,
                None => {
                    prototype.insert(key.to_string(), value);
                }
            }
        }

        debug!(
            "defined class {}.{} ({} members, {} typed)",
            settings.prefix,
            name,
            prototype.len() + typed.len(),
            typed.len()
        );

        let inner = Arc::new_cyclic(|this| ClassInner {
            this: this.clone(),
            name: name.to_string(),
            prefix: settings.prefix.clone(),
            instance_count: AtomicU64::new(0),
            prototype,
            typed,
            statics: PlainObject::new(),
            template: RwLock::new(None),
        });
        Ok(Class { inner })
    }

    /// The class name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Prefix of the scope the class was defined in
    pub fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    /// Number of instances constructed so far
    pub fn instance_count(&self) -> u64 {
        self.inner.instance_count.load(Ordering::SeqCst)
    }

    /// Look up a prototype member, typed defaults included
    pub fn prototype_member(&self, name: &str) -> Option<Value> {
        self.inner.prototype_member(name)
    }

    /// The typed property declared under `name`, if any
    pub fn typed_property(&self, name: &str) -> Option<Arc<TypedProperty>> {
        self.inner.typed.get(name).map(|slot| slot.property().clone())
    }

    /// Names of all typed properties, sorted
    pub fn typed_properties(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.typed.keys().cloned().collect();
        names.sort();
        names
    }

    /// Attach class-level members.
    ///
    /// Entries are copied onto the class itself, not its prototype; keys
    /// are taken verbatim. Later calls overwrite earlier entries of the
    /// same name. Returns the class for chaining.
    pub fn add_static(&self, members: Members) -> Class {
        for (key, value) in members.iter() {
            self.inner.statics.insert(key, value.clone());
        }
        trace!("added {} static members to {}", members.len(), self.inner.name);
        self.clone()
    }

    /// Read a static member
    pub fn get_static(&self, name: &str) -> Value {
        self.inner.statics.get(name)
    }

    /// Names of static members in insertion order
    pub fn static_keys(&self) -> Vec<String> {
        self.inner.statics.keys()
    }

    /// Call a static function with the class as receiver
    pub fn call_static(&self, name: &str, args: &[Value]) -> ClassResult<Value> {
        self.get_static(name).call(&self.to_value(), args)
    }

    /// Require constructor parameters to match `template`.
    ///
    /// The check runs before any parameter is copied onto the new instance.
    pub fn require_params(&self, template: ParamTemplate) -> Class {
        *self.inner.template.write() = Some(template);
        self.clone()
    }

    /// Construct an instance.
    ///
    /// A truthy first argument is the parameter mapping; each of its own
    /// keys is copied onto the instance in order, typed keys through their
    /// checked setter. Then the instance counter is bumped, the id assigned
    /// and `initialize` called with all of `args`.
    ///
    /// A failed copy aborts construction: no instance is returned and the
    /// counter is left untouched.
    pub fn construct(&self, args: &[Value]) -> ClassResult<Instance> {
        let params = args.first().filter(|params| params.is_truthy());

        let template = self.inner.template.read().clone();
        if let Some(template) = template {
            template.validate(params.unwrap_or(&Value::Undefined))?;
        }

        let mut fields = InstanceFields::default();
        if let Some(params) = params {
            for key in params.own_keys() {
                fields.assign(self, &key, params.get(&key))?;
            }
        }

        let ordinal = self.inner.instance_count.fetch_add(1, Ordering::SeqCst) + 1;
        let instance = Instance::new(self.clone(), format!("{}_{}", self.inner.name, ordinal), fields);
        trace!("constructed {}", instance.id());

        let initialize = instance.get("initialize");
        if initialize.is_truthy() {
            initialize.call(&instance.to_value(), args)?;
        }
        Ok(instance)
    }

    /// Construct with a single parameter mapping
    pub fn instantiate(&self, params: Value) -> ClassResult<Instance> {
        self.construct(&[params])
    }

    /// Construct without arguments
    pub fn create(&self) -> ClassResult<Instance> {
        self.construct(&[])
    }

    /// This class as a value (reflects as `function`)
    pub fn to_value(&self) -> Value {
        Value::Object(self.inner.clone())
    }

    /// Recover a class from a value produced by [`Class::to_value`]
    pub fn from_value(value: &Value) -> Option<Class> {
        let inner = value.as_object()?.clone().into_any().downcast::<ClassInner>().ok()?;
        Some(Class { inner })
    }
}

impl ClassInner {
    fn prototype_member(&self, name: &str) -> Option<Value> {
        match self.typed.get(name) {
            Some(slot) => slot.get().cloned(),
            None => self.prototype.get(name).cloned(),
        }
    }
}

/// Prototype members every class gets, installed after user members.
fn builtin_members(name: &str, prefix: &str) -> [(&'static str, Value); 4] {
    let get_id = NativeFunction::new("getId", |this, _| {
        Ok(Instance::from_value(this)
            .map(|instance| Value::from(instance.id()))
            .unwrap_or(Value::Undefined))
    });

    let prefix = prefix.to_string();
    let to_string = NativeFunction::new("toString", move |this, _| {
        let id = Instance::from_value(this)
            .map(|instance| instance.id().to_string())
            .unwrap_or_else(|| "undefined".to_string());
        Ok(Value::from(instance_label(&prefix, &id)))
    });

    [
        ("className", Value::from(name)),
        ("getId", Value::from(get_id.clone())),
        ("getInstanceId", Value::from(get_id)),
        ("toString", Value::from(to_string)),
    ]
}

impl HostObject for ClassInner {
    fn get(&self, key: &str) -> Value {
        self.statics.get(key)
    }

    fn set(&self, key: &str, value: Value) -> ClassResult<()> {
        self.statics.insert(key, value);
        Ok(())
    }

    fn own_keys(&self) -> Vec<String> {
        self.statics.keys()
    }

    fn type_of(&self) -> PrimitiveType {
        PrimitiveType::Function
    }

    fn constructor_name(&self) -> String {
        "Function".to_string()
    }

    fn display(&self) -> String {
        format!("[class {}.{}]", self.prefix, self.name)
    }

    /// Calling a class constructs an instance; the receiver is ignored.
    fn call(&self, _this: &Value, args: &[Value]) -> ClassResult<Value> {
        let inner = self
            .this
            .upgrade()
            .ok_or_else(|| ClassError::NotCallable(self.display()))?;
        let instance = Class { inner }.construct(args)?;
        Ok(instance.to_value())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("prefix", &self.inner.prefix)
            .field("name", &self.inner.name)
            .field("instance_count", &self.instance_count())
            .finish()
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
