//! Native methods on `Nil`.

use std::rc::Rc;

use crate::environment::Env;
use crate::registry::NativeMethod;
use crate::runtime::Runtime;
use crate::value::Value;

pub fn is_nil() -> NativeMethod {
    Rc::new(|_receiver, _args, _env: &Env, runtime: &Runtime| Ok(runtime.builtins.bool_value(true)))
}
