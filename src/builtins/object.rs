//! Native methods inherited by every class.

use crate::environment::Env;
use crate::error::SolError;
use crate::registry::NativeMethod;
use crate::runtime::Runtime;
use crate::value::{Payload, Value};

use std::rc::Rc;

pub fn new_() -> NativeMethod {
    Rc::new(|receiver: &Value, _args: &[Value], _env: &Env, _runtime: &Runtime| {
        Ok(Value::new(receiver.class()))
    })
}

pub fn from_() -> NativeMethod {
    Rc::new(|receiver: &Value, args: &[Value], _env: &Env, _runtime: &Runtime| {
        let source = args
            .first()
            .ok_or_else(|| SolError::TypeMismatch("'from:' expects one argument".to_string()))?;
        match source.payload() {
            Some(payload) => Ok(Value::with_payload(receiver.class(), payload.clone())),
            None => Ok(Value::new(receiver.class())),
        }
    })
}

pub fn identical_to() -> NativeMethod {
    Rc::new(|receiver: &Value, args: &[Value], _env: &Env, runtime: &Runtime| {
        let other = args.first().ok_or_else(|| {
            SolError::TypeMismatch("'identicalTo:' expects one argument".to_string())
        })?;
        Ok(runtime.builtins.bool_value(receiver.is_identical(other)))
    })
}

pub fn equal_to() -> NativeMethod {
    Rc::new(|receiver: &Value, args: &[Value], _env: &Env, runtime: &Runtime| {
        let other = args
            .first()
            .ok_or_else(|| SolError::TypeMismatch("'equalTo:' expects one argument".to_string()))?;

        // If both payloads are absent, degenerates to identicalTo:; else
        // compares payloads by value.
        let equal = match (receiver.payload(), other.payload()) {
            (None, None) => receiver.is_identical(other),
            (Some(a), Some(b)) => payload_eq(a, b),
            _ => false,
        };
        Ok(runtime.builtins.bool_value(equal))
    })
}

fn payload_eq(a: &Payload, b: &Payload) -> bool {
    match (a, b) {
        (Payload::Integer(x), Payload::Integer(y)) => x == y,
        (Payload::Str(x), Payload::Str(y)) => x == y,
        // Blocks have no defined value-equality; two closures are equal only
        // when they are the same object, which the (None, None) / identity
        // branch above never reaches for payload-bearing values, so fall
        // back to false rather than guessing at structural equality.
        _ => false,
    }
}

pub fn as_string() -> NativeMethod {
    Rc::new(|_receiver: &Value, _args: &[Value], _env: &Env, runtime: &Runtime| {
        Ok(Value::with_payload(
            runtime.builtins.string_class.clone(),
            Payload::Str(String::new()),
        ))
    })
}

pub fn always(result: bool) -> NativeMethod {
    Rc::new(move |_receiver: &Value, _args: &[Value], _env: &Env, runtime: &Runtime| {
        Ok(runtime.builtins.bool_value(result))
    })
}
