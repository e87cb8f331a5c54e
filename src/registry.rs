//! Class registry — a name→class table plus inheritance-aware method
//! lookup. The registry is built once during bootstrap (built-ins, then
//! user classes) and never mutated afterward; it is threaded through the
//! evaluator as an explicit argument rather than hidden behind a singleton,
//! so every evaluation entry point below takes `&ClassRegistry` explicitly.

use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::Block;
use crate::environment::Env;
use crate::error::SolError;
use crate::value::Value;

/// A handle to an immutable, registered `Class`. Cheap to clone; classes
/// never change after `ClassRegistry::register` accepts them.
pub type ClassRef = Rc<Class>;

/// One method entry: either a user-defined block, or a native procedure
/// installed by `crate::builtins`.
#[derive(Clone)]
pub enum Method {
    User(Block),
    /// Native methods close over nothing but the registry passed to them at
    /// call time; re-entrant ones (`whileTrue:`) call back into
    /// `crate::eval` to invoke a `Block` argument.
    Native(NativeMethod),
}

/// `(receiver, evaluated_args, current_env, runtime) -> result`.
///
/// Taking the runtime context and environment explicitly — rather than
/// capturing process-global state — is what lets a native method re-enter
/// the evaluator (e.g. `Block#whileTrue:` invoking its receiver and its
/// argument in a loop) without reaching for a singleton.
pub type NativeMethod =
    Rc<dyn Fn(&Value, &[Value], &Env, &crate::runtime::Runtime) -> Result<Value, SolError>>;

/// A class: a name, an optional parent, and its own selector table.
/// Immutable once registered.
pub struct Class {
    pub name: String,
    pub parent_name: Option<String>,
    methods: HashMap<String, Method>,
}

impl Class {
    pub fn new(name: String, parent_name: Option<String>) -> Self {
        Class {
            name,
            parent_name,
            methods: HashMap::new(),
        }
    }

    pub fn new_ref(name: String, parent_name: Option<String>) -> ClassRef {
        Rc::new(Class::new(name, parent_name))
    }

    pub fn with_method(mut self, selector: impl Into<String>, method: Method) -> Self {
        self.methods.insert(selector.into(), method);
        self
    }

    pub fn own_method(&self, selector: &str) -> Option<&Method> {
        self.methods.get(selector)
    }
}

/// Name→class table with inheritance-aware lookup.
pub struct ClassRegistry {
    classes: HashMap<String, ClassRef>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        ClassRegistry {
            classes: HashMap::new(),
        }
    }

    /// Fails if a class with the same name is already registered — covers
    /// both duplicate built-ins and a user class shadowing a built-in name.
    pub fn register(&mut self, class: ClassRef) -> Result<(), SolError> {
        if self.classes.contains_key(&class.name) {
            return Err(SolError::UndefinedClass(format!(
                "class '{}' is already defined",
                class.name
            )));
        }
        self.classes.insert(class.name.clone(), class);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<ClassRef, SolError> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| SolError::UndefinedClass(format!("undefined class '{name}'")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// All registered class names, in no particular order — used by
    /// `crate::driver` to validate the whole inheritance graph once at
    /// bootstrap rather than per-lookup.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// True iff `class` or any ancestor defines `selector`.
    pub fn has_method(&self, class: &ClassRef, selector: &str) -> bool {
        self.find_method(class, selector).is_ok()
    }

    /// Walks the parent chain, returning the first class that owns
    /// `selector` directly, along with the method itself. The walk
    /// terminates because the registry only ever admits an acyclic,
    /// single-rooted tree (enforced at merge time in `crate::driver`).
    pub fn find_method(&self, class: &ClassRef, selector: &str) -> Result<Method, SolError> {
        let mut current = class.clone();
        loop {
            if let Some(method) = current.own_method(selector) {
                return Ok(method.clone());
            }
            match &current.parent_name {
                Some(parent_name) => {
                    current = self.find(parent_name)?;
                }
                None => {
                    return Err(SolError::DoesNotUnderstand(format!(
                        "{} does not understand '{selector}'",
                        class.name
                    )));
                }
            }
        }
    }

    /// Reflexive: every class is a subclass of itself.
    pub fn is_subclass(&self, class: &ClassRef, ancestor_name: &str) -> bool {
        let mut current = class.clone();
        loop {
            if current.name == ancestor_name {
                return true;
            }
            match &current.parent_name {
                Some(parent_name) => match self.find(parent_name) {
                    Ok(parent) => current = parent,
                    Err(_) => return false,
                },
                None => return false,
            }
        }
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}
