use crate::ast::Statement;
use crate::environment::Env;
use crate::error::SolError;
use crate::runtime::Runtime;
use crate::value::Value;

use super::expression::eval_expression;

/// Evaluates the statement's expression, writes the result under its target
/// name into `env`'s current frame, and returns that value — also the
/// result of the block whose last statement this is.
pub fn eval_statement(
    stmt: &Statement,
    env: &Env,
    runtime: &Runtime,
) -> Result<Value, SolError> {
    let value = eval_expression(&stmt.expr, env, runtime)?;
    env.set(stmt.target.clone(), value.clone());
    Ok(value)
}
