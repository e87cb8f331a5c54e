//! Native methods on `True` and `False`.

use std::rc::Rc;

use crate::environment::Env;
use crate::error::SolError;
use crate::registry::NativeMethod;
use crate::runtime::Runtime;
use crate::value::Value;

fn invoke_branch(arg: &Value, selector: &str, runtime: &Runtime) -> Result<Value, SolError> {
    let (block, captured_env) = arg
        .as_block()
        .ok_or_else(|| SolError::TypeMismatch(format!("'{selector}' expects a Block argument")))?;
    crate::eval::invoke_block(block, &[], captured_env, runtime)
}

/// `and:`/`or:` always yield a Boolean: a block result whose class isn't
/// `True` is normalized to `False` rather than forwarded verbatim.
fn invoke_branch_as_bool(arg: &Value, selector: &str, runtime: &Runtime) -> Result<Value, SolError> {
    let result = invoke_branch(arg, selector, runtime)?;
    if Rc::ptr_eq(&result.class(), &runtime.builtins.true_class) {
        Ok(result)
    } else {
        Ok(runtime.builtins.false_value.clone())
    }
}

pub fn true_not() -> NativeMethod {
    Rc::new(|_receiver, _args, _env: &Env, runtime: &Runtime| Ok(runtime.builtins.bool_value(false)))
}

pub fn false_not() -> NativeMethod {
    Rc::new(|_receiver, _args, _env: &Env, runtime: &Runtime| Ok(runtime.builtins.bool_value(true)))
}

pub fn true_and() -> NativeMethod {
    Rc::new(|_receiver, args, _env: &Env, runtime: &Runtime| {
        let other = args
            .first()
            .ok_or_else(|| SolError::TypeMismatch("'and:' expects one argument".to_string()))?;
        invoke_branch_as_bool(other, "and:", runtime)
    })
}

pub fn false_and() -> NativeMethod {
    Rc::new(|receiver, _args, _env: &Env, _runtime: &Runtime| Ok(receiver.clone()))
}

pub fn true_or() -> NativeMethod {
    Rc::new(|receiver, _args, _env: &Env, _runtime: &Runtime| Ok(receiver.clone()))
}

pub fn false_or() -> NativeMethod {
    Rc::new(|_receiver, args, _env: &Env, runtime: &Runtime| {
        let other = args
            .first()
            .ok_or_else(|| SolError::TypeMismatch("'or:' expects one argument".to_string()))?;
        invoke_branch_as_bool(other, "or:", runtime)
    })
}

pub fn true_if_true_if_false() -> NativeMethod {
    Rc::new(|_receiver, args, _env: &Env, runtime: &Runtime| {
        let branch = args
            .first()
            .ok_or_else(|| SolError::TypeMismatch("'ifTrue:ifFalse:' expects two arguments".to_string()))?;
        invoke_branch(branch, "ifTrue:ifFalse:", runtime)
    })
}

pub fn false_if_true_if_false() -> NativeMethod {
    Rc::new(|_receiver, args, _env: &Env, runtime: &Runtime| {
        let branch = args
            .get(1)
            .ok_or_else(|| SolError::TypeMismatch("'ifTrue:ifFalse:' expects two arguments".to_string()))?;
        invoke_branch(branch, "ifTrue:ifFalse:", runtime)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Expr, Statement};
    use crate::builtins;
    use crate::registry::ClassRegistry;
    use crate::value::Payload;

    fn test_runtime() -> Runtime {
        let mut registry = ClassRegistry::new();
        let builtins = builtins::install(&mut registry).unwrap();
        let global_env = Env::root();
        Runtime { registry, builtins, global_env }
    }

    fn block_literal(runtime: &Runtime, class_name: &str, raw_value: &str, env: &Env) -> Value {
        Value::with_payload(
            runtime.builtins.block_class.clone(),
            Payload::Block {
                block: Block::new(
                    vec![],
                    vec![Statement {
                        target: "result".to_string(),
                        expr: Expr::Literal { class_name: class_name.to_string(), raw_value: raw_value.to_string() },
                    }],
                ),
                captured_env: env.clone(),
            },
        )
    }

    #[test]
    fn true_and_true_block_yields_true() {
        let runtime = test_runtime();
        let env = Env::root();
        let block = block_literal(&runtime, "True", "", &env);
        let and = true_and();
        let result = and(&runtime.builtins.true_value, &[block], &Env::root(), &runtime).unwrap();
        assert!(Rc::ptr_eq(&result.class(), &runtime.builtins.true_class));
    }

    /// The bug this guards against: a block whose result is some non-Boolean
    /// value (here an Integer) must be coerced to `False`, not forwarded.
    #[test]
    fn true_and_non_true_block_result_yields_false() {
        let runtime = test_runtime();
        let env = Env::root();
        let block = block_literal(&runtime, "Integer", "5", &env);
        let and = true_and();
        let result = and(&runtime.builtins.true_value, &[block], &Env::root(), &runtime).unwrap();
        assert!(Rc::ptr_eq(&result.class(), &runtime.builtins.false_class));
    }

    #[test]
    fn false_and_short_circuits_without_invoking_block() {
        let runtime = test_runtime();
        let env = Env::root();
        // This block, if invoked, would set "touched" in `env`; `false and:` must never call it.
        let block = Value::with_payload(
            runtime.builtins.block_class.clone(),
            Payload::Block {
                block: Block::new(
                    vec![],
                    vec![Statement {
                        target: "touched".to_string(),
                        expr: Expr::Literal { class_name: "Integer".to_string(), raw_value: "1".to_string() },
                    }],
                ),
                captured_env: env.clone(),
            },
        );
        let and = false_and();
        let result = and(&runtime.builtins.false_value, &[block], &Env::root(), &runtime).unwrap();
        assert!(Rc::ptr_eq(&result.class(), &runtime.builtins.false_class));
        assert!(env.get("touched").is_none());
    }

    #[test]
    fn true_or_short_circuits_without_invoking_block() {
        let runtime = test_runtime();
        let env = Env::root();
        let block = Value::with_payload(
            runtime.builtins.block_class.clone(),
            Payload::Block {
                block: Block::new(
                    vec![],
                    vec![Statement {
                        target: "touched".to_string(),
                        expr: Expr::Literal { class_name: "Integer".to_string(), raw_value: "1".to_string() },
                    }],
                ),
                captured_env: env.clone(),
            },
        );
        let or = true_or();
        let result = or(&runtime.builtins.true_value, &[block], &Env::root(), &runtime).unwrap();
        assert!(Rc::ptr_eq(&result.class(), &runtime.builtins.true_class));
        assert!(env.get("touched").is_none());
    }

    #[test]
    fn false_or_true_block_yields_true() {
        let runtime = test_runtime();
        let env = Env::root();
        let block = block_literal(&runtime, "True", "", &env);
        let or = false_or();
        let result = or(&runtime.builtins.false_value, &[block], &Env::root(), &runtime).unwrap();
        assert!(Rc::ptr_eq(&result.class(), &runtime.builtins.true_class));
    }

    #[test]
    fn false_or_non_true_block_result_yields_false() {
        let runtime = test_runtime();
        let env = Env::root();
        let block = block_literal(&runtime, "Integer", "7", &env);
        let or = false_or();
        let result = or(&runtime.builtins.false_value, &[block], &Env::root(), &runtime).unwrap();
        assert!(Rc::ptr_eq(&result.class(), &runtime.builtins.false_class));
    }

    #[test]
    fn not_flips_both_singletons() {
        let runtime = test_runtime();
        let not_true = true_not();
        let not_false = false_not();
        let result = not_true(&runtime.builtins.true_value, &[], &Env::root(), &runtime).unwrap();
        assert!(Rc::ptr_eq(&result.class(), &runtime.builtins.false_class));
        let result = not_false(&runtime.builtins.false_value, &[], &Env::root(), &runtime).unwrap();
        assert!(Rc::ptr_eq(&result.class(), &runtime.builtins.true_class));
    }
}
