//! Native methods on `String`.
//!
//! `concatenateWith:`, `asInteger`, and `startsWith:endsBefore:` use an
//! explicit Nil-on-bad-argument convention: a mismatched argument is a
//! normal `Nil` return, not a raised error. `equalTo:` is not overridden
//! here — `Object`'s generic payload comparison already compares two
//! `String` payloads by their bytes.

use std::rc::Rc;

use regex::Regex;

use crate::environment::Env;
use crate::error::SolError;
use crate::registry::NativeMethod;
use crate::runtime::Runtime;
use crate::value::{Payload, Value};

fn text<'a>(receiver: &'a Value, selector: &str) -> Result<&'a str, SolError> {
    receiver
        .as_str()
        .ok_or_else(|| SolError::TypeMismatch(format!("'{selector}' receiver is not a String")))
}

fn str_value(runtime: &Runtime, s: String) -> Value {
    Value::with_payload(runtime.builtins.string_class.clone(), Payload::Str(s))
}

pub fn concatenate_with() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| {
        let lhs = text(receiver, "concatenateWith:")?;
        match args.first().and_then(Value::as_str) {
            Some(rhs) => Ok(str_value(runtime, format!("{lhs}{rhs}"))),
            None => Ok(runtime.builtins.nil_value.clone()),
        }
    })
}

pub fn print() -> NativeMethod {
    Rc::new(|receiver, _args, _env: &Env, _runtime: &Runtime| {
        let s = text(receiver, "print")?;
        print!("{s}");
        Ok(receiver.clone())
    })
}

pub fn read() -> NativeMethod {
    Rc::new(|_receiver, _args, _env: &Env, runtime: &Runtime| {
        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .map_err(|e| SolError::ValueError(format!("failed to read a line from standard input: {e}")))?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(str_value(runtime, line))
    })
}

pub fn as_integer() -> NativeMethod {
    Rc::new(|receiver, _args, _env: &Env, runtime: &Runtime| {
        let s = text(receiver, "asInteger")?;
        let strict_decimal = Regex::new(r"^-?[0-9]+$").unwrap();
        if !strict_decimal.is_match(s) {
            return Ok(runtime.builtins.nil_value.clone());
        }
        match s.parse::<i64>() {
            Ok(n) => Ok(Value::with_payload(
                runtime.builtins.integer_class.clone(),
                Payload::Integer(n),
            )),
            Err(_) => Ok(runtime.builtins.nil_value.clone()),
        }
    })
}

/// 1-based, half-open substring extraction: both arguments must be
/// positive, non-zero integers, or the result is `Nil`; an empty span
/// (`end - start <= 0`) yields an empty string even when the arguments are
/// otherwise well-formed.
pub fn starts_with_ends_before() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| {
        let s = text(receiver, "startsWith:endsBefore:")?;

        let start = args.first().and_then(Value::as_integer);
        let end = args.get(1).and_then(Value::as_integer);
        let (start, end) = match (start, end) {
            (Some(a), Some(b)) => (a, b),
            _ => return Ok(runtime.builtins.nil_value.clone()),
        };

        if start <= 0 || end <= 0 {
            return Ok(runtime.builtins.nil_value.clone());
        }
        if end - start <= 0 {
            return Ok(str_value(runtime, String::new()));
        }

        let chars: Vec<char> = s.chars().collect();
        let start_idx = (start - 1) as usize;
        let end_idx = (end - 1) as usize;
        if start_idx >= chars.len() || end_idx > chars.len() {
            return Ok(runtime.builtins.nil_value.clone());
        }

        Ok(str_value(runtime, chars[start_idx..end_idx].iter().collect()))
    })
}

pub fn is_string() -> NativeMethod {
    Rc::new(|_receiver, _args, _env: &Env, runtime: &Runtime| Ok(runtime.builtins.bool_value(true)))
}
