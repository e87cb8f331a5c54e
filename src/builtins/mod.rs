//! Built-in library: the seven classes every program starts with, wired up
//! as ordinary `Class` values carrying native methods.

pub mod block;
pub mod boolean;
pub mod integer;
pub mod nil;
pub mod object;
pub mod string;

use std::rc::Rc;

use crate::error::SolError;
use crate::registry::{Class, ClassRef, ClassRegistry, Method};
use crate::value::Value;

/// The canonical classes and singleton values every evaluation needs to
/// reach for directly, rather than by name lookup through the registry.
pub struct Builtins {
    pub object_class: ClassRef,
    pub integer_class: ClassRef,
    pub string_class: ClassRef,
    pub true_class: ClassRef,
    pub false_class: ClassRef,
    pub nil_class: ClassRef,
    pub block_class: ClassRef,

    pub true_value: Value,
    pub false_value: Value,
    pub nil_value: Value,
}

impl Builtins {
    pub fn bool_value(&self, b: bool) -> Value {
        if b {
            self.true_value.clone()
        } else {
            self.false_value.clone()
        }
    }

    /// True iff `class` is one of the seven classes installed here, as
    /// opposed to a class a program defined itself. `crate::eval::dispatch`
    /// uses this to decide whether an unresolved selector may fall back to
    /// attribute access — see DESIGN.md for why the fallback is scoped to
    /// the receiver's class rather than to self-identity.
    pub fn is_builtin_class(&self, class: &ClassRef) -> bool {
        [
            &self.object_class,
            &self.integer_class,
            &self.string_class,
            &self.true_class,
            &self.false_class,
            &self.nil_class,
            &self.block_class,
        ]
        .into_iter()
        .any(|builtin| Rc::ptr_eq(builtin, class))
    }
}

/// Registers the seven built-in classes (Object, Integer, String, True,
/// False, Nil, Block) and returns the handles to them.
pub fn install(registry: &mut ClassRegistry) -> Result<Builtins, SolError> {
    let object_class = Class::new_ref("Object".to_string(), None)
        .with_method("new", Method::Native(object::new_()))
        .with_method("from:", Method::Native(object::from_()))
        .with_method("identicalTo:", Method::Native(object::identical_to()))
        .with_method("equalTo:", Method::Native(object::equal_to()))
        .with_method("asString", Method::Native(object::as_string()))
        .with_method("isNumber", Method::Native(object::always(false)))
        .with_method("isString", Method::Native(object::always(false)))
        .with_method("isBlock", Method::Native(object::always(false)))
        .with_method("isNil", Method::Native(object::always(false)));
    registry.register(object_class.clone())?;

    let integer_class = Class::new_ref("Integer".to_string(), Some("Object".to_string()))
        .with_method("plus:", Method::Native(integer::plus()))
        .with_method("minus:", Method::Native(integer::minus()))
        .with_method("multiplyBy:", Method::Native(integer::multiply_by()))
        .with_method("divBy:", Method::Native(integer::divide()))
        .with_method("greaterThan:", Method::Native(integer::greater_than()))
        .with_method("asString", Method::Native(integer::as_string()))
        .with_method("isNumber", Method::Native(integer::is_number()));
    registry.register(integer_class.clone())?;

    let string_class = Class::new_ref("String".to_string(), Some("Object".to_string()))
        .with_method("concatenateWith:", Method::Native(string::concatenate_with()))
        .with_method("print", Method::Native(string::print()))
        .with_method("read", Method::Native(string::read()))
        .with_method("asInteger", Method::Native(string::as_integer()))
        .with_method(
            "startsWith:endsBefore:",
            Method::Native(string::starts_with_ends_before()),
        )
        .with_method("isString", Method::Native(string::is_string()));
    registry.register(string_class.clone())?;

    let true_class = Class::new_ref("True".to_string(), Some("Object".to_string()))
        .with_method("not", Method::Native(boolean::true_not()))
        .with_method("and:", Method::Native(boolean::true_and()))
        .with_method("or:", Method::Native(boolean::true_or()))
        .with_method("ifTrue:ifFalse:", Method::Native(boolean::true_if_true_if_false()));
    registry.register(true_class.clone())?;

    let false_class = Class::new_ref("False".to_string(), Some("Object".to_string()))
        .with_method("not", Method::Native(boolean::false_not()))
        .with_method("and:", Method::Native(boolean::false_and()))
        .with_method("or:", Method::Native(boolean::false_or()))
        .with_method(
            "ifTrue:ifFalse:",
            Method::Native(boolean::false_if_true_if_false()),
        );
    registry.register(false_class.clone())?;

    let nil_class = Class::new_ref("Nil".to_string(), Some("Object".to_string()))
        .with_method("isNil", Method::Native(nil::is_nil()));
    registry.register(nil_class.clone())?;

    let block_class = Class::new_ref("Block".to_string(), Some("Object".to_string()))
        .with_method("value", Method::Native(block::value()))
        .with_method("value:", Method::Native(block::value_()))
        .with_method("value:value:", Method::Native(block::value_value()))
        .with_method("whileTrue:", Method::Native(block::while_true()))
        .with_method("isBlock", Method::Native(block::is_block()));
    registry.register(block_class.clone())?;

    let true_value = Value::new(true_class.clone());
    let false_value = Value::new(false_class.clone());
    let nil_value = Value::new(nil_class.clone());

    Ok(Builtins {
        object_class,
        integer_class,
        string_class,
        true_class,
        false_class,
        nil_class,
        block_class,
        true_value,
        false_value,
        nil_value,
    })
}
