use std::rc::Rc;

use super::stmt::Statement;

/// An ordered parameter list plus an ordered statement list. Blocks are
/// immutable AST nodes; they only become callable runtime
/// values once wrapped in a `Value` of class `Block` together with a captured
/// environment (see `crate::value::Payload::Block`).
///
/// Wrapped in `Rc` everywhere it's carried by a `Value` or `Method::User`, so
/// that closures and methods can cheaply share one parsed block without
/// cloning its statement list on every invocation.
#[derive(Debug, Clone)]
pub struct Block {
    pub params: Rc<Vec<String>>,
    pub statements: Rc<Vec<Statement>>,
}

impl Block {
    pub fn new(params: Vec<String>, statements: Vec<Statement>) -> Self {
        Block {
            params: Rc::new(params),
            statements: Rc::new(statements),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
