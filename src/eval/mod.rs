//! The evaluator: a recursive expression/statement/block interpreter and
//! the message-dispatch core everything else runs through.
//!
//! Block invocation splits into two call shapes because they disagree on
//! what `self` means: a **method** invocation rebinds `self` to the
//! receiver the message was sent to; a **block** invocation (`value`,
//! `whileTrue:`, `ifTrue:ifFalse:`, ...) is a closure and must leave `self`
//! exactly as it resolves in the block's *defining* environment. Giving
//! both the same signature would force one of them to fake the other's
//! behavior.

pub mod dispatch;
pub mod expression;
pub mod statement;

use crate::ast::Block;
use crate::environment::Env;
use crate::error::SolError;
use crate::runtime::Runtime;
use crate::value::Value;

fn check_arity(block: &Block, arguments: &[Value]) -> Result<(), SolError> {
    if block.arity() != arguments.len() {
        return Err(SolError::TypeMismatch(format!(
            "block expects {} argument(s), got {}",
            block.arity(),
            arguments.len()
        )));
    }
    Ok(())
}

fn run_statements(block: &Block, frame: &Env, runtime: &Runtime) -> Result<Value, SolError> {
    let mut result = None;
    for stmt in block.statements.iter() {
        result = Some(statement::eval_statement(stmt, frame, runtime)?);
    }
    match result {
        Some(value) => Ok(value),
        // Empty block body returns Nil.
        None => Ok(runtime.builtins.nil_value.clone()),
    }
}

/// Invokes a user method's block: a fresh frame parented to the *global*
/// scope, so a method never captures the caller's locals, with `self`
/// rebound to `receiver`.
pub fn invoke_method(
    block: &Block,
    receiver: &Value,
    arguments: &[Value],
    runtime: &Runtime,
) -> Result<Value, SolError> {
    check_arity(block, arguments)?;

    let frame = Env::child(&runtime.global_env);
    for (param, arg) in block.params.iter().zip(arguments) {
        frame.set(param.clone(), arg.clone());
    }
    frame.set("self", receiver.clone());

    run_statements(block, &frame, runtime)
}

/// Invokes a reified `Block` value as a closure: `self` is never rebound,
/// it is whatever `captured_env`'s chain already resolves it to.
///
/// A zero-parameter block reuses `captured_env` itself as its execution
/// frame rather than allocating a child: with no parameters to isolate, this
/// is the only way a loop body passed to `whileTrue:` can mutate a variable
/// the loop condition (and the code after the loop) also sees — needed for
/// a counter shared across loop iterations. A block with parameters still
/// gets its own frame, so repeated `value:`/`value:value:` calls don't bleed
/// arguments into each other or into the enclosing scope.
pub fn invoke_block(
    block: &Block,
    arguments: &[Value],
    captured_env: &Env,
    runtime: &Runtime,
) -> Result<Value, SolError> {
    check_arity(block, arguments)?;

    if block.params.is_empty() {
        return run_statements(block, captured_env, runtime);
    }

    let frame = Env::child(captured_env);
    for (param, arg) in block.params.iter().zip(arguments) {
        frame.set(param.clone(), arg.clone());
    }
    run_statements(block, &frame, runtime)
}
