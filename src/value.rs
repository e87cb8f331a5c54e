//! Runtime object model: every runtime value as a handle to a shared record.
//!
//! Every value that flows through the evaluator is a `Value`: a cheap,
//! `Rc`-cloneable handle to a shared object record. Cloning a `Value` never
//! copies the attribute map or payload — it bumps a refcount. Assigning a
//! `Value` into an attribute map or environment frame is a share, not a deep
//! copy, and two clones of the same `Value` are `identicalTo:` each other.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::Block;
use crate::environment::Env;
use crate::registry::ClassRef;

/// The internal payload a built-in class's instances carry. User-defined
/// classes, and `True`/`False`/`Nil`, have no payload.
#[derive(Clone)]
pub enum Payload {
    Integer(i64),
    Str(String),
    /// A reified block: the parsed `Block` paired with the environment that
    /// was current when the block literal was evaluated — the closure.
    Block { block: Block, captured_env: Env },
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Integer(n) => write!(f, "Integer({n})"),
            Payload::Str(s) => write!(f, "String({s:?})"),
            Payload::Block { block, .. } => {
                write!(f, "Block(arity={})", block.arity())
            }
        }
    }
}

struct ValueData {
    class: ClassRef,
    attrs: RefCell<HashMap<String, Value>>,
    payload: Option<Payload>,
}

/// A handle to a runtime object. Cheap to clone (`Rc` bump); two clones are
/// the same object for `identicalTo:` purposes.
#[derive(Clone)]
pub struct Value(Rc<ValueData>);

impl Value {
    /// Constructs a fresh value of `class` with no payload and no attributes
    /// — the `new` primitive.
    pub fn new(class: ClassRef) -> Self {
        Value(Rc::new(ValueData {
            class,
            attrs: RefCell::new(HashMap::new()),
            payload: None,
        }))
    }

    /// Constructs a fresh value of `class` carrying `payload`.
    pub fn with_payload(class: ClassRef, payload: Payload) -> Self {
        Value(Rc::new(ValueData {
            class,
            attrs: RefCell::new(HashMap::new()),
            payload: Some(payload),
        }))
    }

    pub fn class(&self) -> ClassRef {
        self.0.class.clone()
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.0.payload.as_ref()
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.payload() {
            Some(Payload::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.payload() {
            Some(Payload::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<(&Block, &Env)> {
        match self.payload() {
            Some(Payload::Block { block, captured_env }) => Some((block, captured_env)),
            _ => None,
        }
    }

    /// Attribute read. `True`/`False`/`Nil` never hold attributes in
    /// practice because `crate::builtins` never installs an attribute-write
    /// path for them and no user code can subclass them to add one.
    pub fn get_attr(&self, name: &str) -> Option<Value> {
        self.0.attrs.borrow().get(name).cloned()
    }

    pub fn set_attr(&self, name: String, value: Value) {
        self.0.attrs.borrow_mut().insert(name, value);
    }

    /// Object identity — the same underlying record, not merely an
    /// equal-by-value one (`identicalTo:`).
    pub fn is_identical(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn has_payload(&self) -> bool {
        self.0.payload.is_some()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({}, {:?})", self.class().name, self.0.payload)
    }
}
