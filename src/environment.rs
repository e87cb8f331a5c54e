//! Lexical environment: a singly linked chain of frames, each a name→value
//! map with a link to its parent. `self` is bound in a frame like any other
//! name.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

struct Frame {
    values: HashMap<String, Value>,
    parent: Option<Env>,
}

/// A cheap, `Rc`-cloneable handle to one environment frame. Closures capture
/// an `Env` by cloning the handle, not by copying the frame, so a `Block`'s
/// captured environment and the environment a later statement writes into
/// can be the very same frame — a `Block` couples its AST with its
/// *defining* environment, which is what makes it a closure.
#[derive(Clone)]
pub struct Env(Rc<RefCell<Frame>>);

impl Env {
    pub fn root() -> Self {
        Env(Rc::new(RefCell::new(Frame {
            values: HashMap::new(),
            parent: None,
        })))
    }

    /// A new frame linked to `parent`.
    pub fn child(parent: &Env) -> Self {
        Env(Rc::new(RefCell::new(Frame {
            values: HashMap::new(),
            parent: Some(parent.clone()),
        })))
    }

    /// Writes into the *current* frame — never rebinds an outer frame. A
    /// statement's target name is always a local of the block or method
    /// currently executing.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().values.insert(name.into(), value);
    }

    /// Resolves `name` in the current frame, then walks parents outward.
    /// Returns `None` (distinct from a present `Nil` `Value`) when nothing
    /// binds the name anywhere in the chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        let frame = self.0.borrow();
        if let Some(value) = frame.values.get(name) {
            return Some(value.clone());
        }
        match &frame.parent {
            Some(parent) => parent.get(name),
            None => None,
        }
    }

    /// True iff this handle and `other` point at the exact same frame —
    /// used only by tests and debugging; evaluation never needs frame
    /// identity, only name resolution.
    pub fn is_same_frame(&self, other: &Env) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
