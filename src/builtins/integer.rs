//! Native methods on `Integer`.
//!
//! `equalTo:` is not overridden here: `Object`'s generic payload comparison
//! already compares two `Integer` payloads by value, which is exactly what
//! this class needs.

use std::rc::Rc;

use crate::environment::Env;
use crate::error::SolError;
use crate::registry::NativeMethod;
use crate::runtime::Runtime;
use crate::value::{Payload, Value};

fn operand(receiver: &Value, args: &[Value], selector: &str) -> Result<(i64, i64), SolError> {
    let lhs = receiver
        .as_integer()
        .ok_or_else(|| SolError::TypeMismatch(format!("'{selector}' receiver is not an Integer")))?;
    let rhs = args
        .first()
        .and_then(Value::as_integer)
        .ok_or_else(|| SolError::TypeMismatch(format!("'{selector}' expects an Integer argument")))?;
    Ok((lhs, rhs))
}

fn int_value(runtime: &Runtime, n: i64) -> Value {
    Value::with_payload(runtime.builtins.integer_class.clone(), Payload::Integer(n))
}

pub fn plus() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| {
        let (a, b) = operand(receiver, args, "plus:")?;
        Ok(int_value(runtime, a.wrapping_add(b)))
    })
}

pub fn minus() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| {
        let (a, b) = operand(receiver, args, "minus:")?;
        Ok(int_value(runtime, a.wrapping_sub(b)))
    })
}

pub fn multiply_by() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| {
        let (a, b) = operand(receiver, args, "multiplyBy:")?;
        Ok(int_value(runtime, a.wrapping_mul(b)))
    })
}

pub fn divide() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| {
        let (a, b) = operand(receiver, args, "divBy:")?;
        if b == 0 {
            return Err(SolError::ValueError("division by zero".to_string()));
        }
        // Truncation toward zero, including for a negative dividend —
        // Rust's `/` already does this.
        Ok(int_value(runtime, a / b))
    })
}

pub fn greater_than() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| {
        let (a, b) = operand(receiver, args, "greaterThan:")?;
        Ok(runtime.builtins.bool_value(a > b))
    })
}

pub fn as_string() -> NativeMethod {
    Rc::new(|receiver, _args, _env: &Env, runtime: &Runtime| {
        let n = receiver
            .as_integer()
            .ok_or_else(|| SolError::TypeMismatch("'asString' receiver is not an Integer".to_string()))?;
        Ok(Value::with_payload(
            runtime.builtins.string_class.clone(),
            Payload::Str(n.to_string()),
        ))
    })
}

pub fn is_number() -> NativeMethod {
    Rc::new(|_receiver, _args, _env: &Env, runtime: &Runtime| Ok(runtime.builtins.bool_value(true)))
}
