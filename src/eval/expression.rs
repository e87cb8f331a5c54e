use crate::ast::Expr;
use crate::environment::Env;
use crate::error::SolError;
use crate::runtime::Runtime;
use crate::value::{Payload, Value};

use super::dispatch::send;

/// Case analysis over the four expression shapes: a closed tagged union,
/// explicit case match, not virtual dispatch.
pub fn eval_expression(expr: &Expr, env: &Env, runtime: &Runtime) -> Result<Value, SolError> {
    match expr {
        Expr::Literal { class_name, raw_value } => eval_literal(class_name, raw_value, runtime),

        Expr::Variable(name) => env.get(name).ok_or_else(|| {
            SolError::UndefinedClass(format!("undefined variable '{name}'"))
        }),

        // Reified as a closure over the *current* environment — not the
        // environment of whatever later invokes it.
        Expr::BlockLiteral(block) => Ok(Value::with_payload(
            runtime.builtins.block_class.clone(),
            Payload::Block {
                block: block.clone(),
                captured_env: env.clone(),
            },
        )),

        Expr::Send { receiver, selector, args } => {
            let receiver_value = eval_expression(receiver, env, runtime)?;

            // Strict, left-to-right argument evaluation.
            let mut arg_values = Vec::with_capacity(args.len());
            for arg in args {
                arg_values.push(eval_expression(arg, env, runtime)?);
            }

            send(&receiver_value, selector, &arg_values, env, runtime)
        }
    }
}

fn eval_literal(class_name: &str, raw_value: &str, runtime: &Runtime) -> Result<Value, SolError> {
    match class_name {
        "Integer" => {
            let n: i64 = raw_value.parse().map_err(|_| {
                SolError::Structure(format!("malformed integer literal '{raw_value}'"))
            })?;
            Ok(Value::with_payload(
                runtime.builtins.integer_class.clone(),
                Payload::Integer(n),
            ))
        }
        "String" => Ok(Value::with_payload(
            runtime.builtins.string_class.clone(),
            Payload::Str(raw_value.to_string()),
        )),
        "True" => Ok(runtime.builtins.true_value.clone()),
        "False" => Ok(runtime.builtins.false_value.clone()),
        "Nil" => Ok(runtime.builtins.nil_value.clone()),
        other => Err(SolError::Structure(format!(
            "literal of unsupported class '{other}'"
        ))),
    }
}
