//! Native methods on `Block`.

use std::rc::Rc;

use crate::environment::Env;
use crate::error::SolError;
use crate::registry::NativeMethod;
use crate::runtime::Runtime;
use crate::value::Value;

fn is_true(value: &Value, runtime: &Runtime) -> bool {
    Rc::ptr_eq(&value.class(), &runtime.builtins.true_class)
}

fn call(receiver: &Value, args: &[Value], selector: &str, runtime: &Runtime) -> Result<Value, SolError> {
    let (block, captured_env) = receiver
        .as_block()
        .ok_or_else(|| SolError::TypeMismatch(format!("'{selector}' receiver is not a Block")))?;
    crate::eval::invoke_block(block, args, captured_env, runtime)
}

pub fn value() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| call(receiver, args, "value", runtime))
}

pub fn value_() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| call(receiver, args, "value:", runtime))
}

pub fn value_value() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| call(receiver, args, "value:value:", runtime))
}

pub fn is_block() -> NativeMethod {
    Rc::new(|_receiver, _args, _env: &Env, runtime: &Runtime| Ok(runtime.builtins.bool_value(true)))
}

/// Repeats `body` for as long as `receiver` evaluates to `True`, returning
/// `Nil`. Any non-`True` result — not only `False` — stops the loop, so a
/// stray `Nil` or `Integer` condition ends it quietly rather than raising.
///
/// The check is against the condition's *class*, not against the cached
/// `true_value` singleton: `ClassName new`/`from:` proxy values and ordinary
/// `Object>>new`/`from:` can both mint additional True-classed values
/// distinct from that singleton, and those must still count as true.
pub fn while_true() -> NativeMethod {
    Rc::new(|receiver, args, _env: &Env, runtime: &Runtime| {
        let body = args
            .first()
            .ok_or_else(|| SolError::TypeMismatch("'whileTrue:' expects a Block argument".to_string()))?;

        loop {
            let condition = call(receiver, &[], "whileTrue:", runtime)?;
            if !is_true(&condition, runtime) {
                break;
            }
            call(body, &[], "whileTrue:", runtime)?;
        }

        Ok(runtime.builtins.nil_value.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Expr, Statement};
    use crate::builtins;
    use crate::environment::Env;
    use crate::registry::ClassRegistry;
    use crate::value::Payload;

    fn test_runtime() -> Runtime {
        let mut registry = ClassRegistry::new();
        let builtins = builtins::install(&mut registry).unwrap();
        let global_env = Env::root();
        Runtime { registry, builtins, global_env }
    }

    fn int_literal(n: i64) -> Expr {
        Expr::Literal { class_name: "Integer".to_string(), raw_value: n.to_string() }
    }

    /// `i := 0. [(i greaterThan: 3) not] whileTrue: [i := i plus: 1]` — each
    /// iteration mutates `i` in the frame the loop condition also reads, so
    /// the loop runs until `i` reaches 4.
    #[test]
    fn while_true_loops_while_condition_holds_and_mutates_shared_state() {
        let runtime = test_runtime();
        let loop_env = Env::root();
        loop_env.set(
            "i",
            Value::with_payload(runtime.builtins.integer_class.clone(), Payload::Integer(0)),
        );

        let body = Value::with_payload(
            runtime.builtins.block_class.clone(),
            Payload::Block {
                block: Block::new(
                    vec![],
                    vec![Statement {
                        target: "i".to_string(),
                        expr: Expr::Send {
                            receiver: Box::new(Expr::Variable("i".to_string())),
                            selector: "plus:".to_string(),
                            args: vec![int_literal(1)],
                        },
                    }],
                ),
                captured_env: loop_env.clone(),
            },
        );

        // Loop "while NOT (i > 3)", i.e. while i <= 3, so it runs until i == 4.
        let negated_condition = Value::with_payload(
            runtime.builtins.block_class.clone(),
            Payload::Block {
                block: Block::new(
                    vec![],
                    vec![Statement {
                        target: "cond".to_string(),
                        expr: Expr::Send {
                            receiver: Box::new(Expr::Send {
                                receiver: Box::new(Expr::Variable("i".to_string())),
                                selector: "greaterThan:".to_string(),
                                args: vec![int_literal(3)],
                            }),
                            selector: "not".to_string(),
                            args: vec![],
                        },
                    }],
                ),
                captured_env: loop_env.clone(),
            },
        );

        let while_true = while_true();
        while_true(&negated_condition, &[body], &Env::root(), &runtime).unwrap();

        let final_i = loop_env.get("i").unwrap();
        assert_eq!(final_i.as_integer(), Some(4));
    }

    /// A condition Value whose class is `True` but which is not the cached
    /// singleton (as `ClassName new`/`Object>>new` can produce) must still
    /// be treated as true, not stop the loop.
    #[test]
    fn while_true_treats_any_true_classed_value_as_true() {
        let runtime = test_runtime();
        let distinct_true = Value::new(runtime.builtins.true_class.clone());
        assert!(!distinct_true.is_identical(&runtime.builtins.true_value));
        assert!(is_true(&distinct_true, &runtime));
    }

    #[test]
    fn while_true_stops_on_non_true_condition() {
        let runtime = test_runtime();
        let env = Env::root();
        let nil_condition = Value::with_payload(
            runtime.builtins.block_class.clone(),
            Payload::Block {
                block: Block::new(
                    vec![],
                    vec![Statement { target: "cond".to_string(), expr: Expr::Literal { class_name: "Nil".to_string(), raw_value: String::new() } }],
                ),
                captured_env: env.clone(),
            },
        );
        let never_run = Value::with_payload(
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

        let while_true = while_true();
        let result = while_true(&nil_condition, &[never_run], &Env::root(), &runtime).unwrap();
        assert!(Rc::ptr_eq(&result.class(), &runtime.builtins.nil_class));
        assert!(env.get("touched").is_none());
    }
}
