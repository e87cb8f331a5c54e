use super::expr::Expr;

/// A `<assign><var name="..."/><expr>...</expr></assign>` pair: evaluate the
/// expression and bind the result to `target` in the enclosing environment
/// frame.
#[derive(Debug, Clone)]
pub struct Statement {
    pub target: String,
    pub expr: Expr,
}
