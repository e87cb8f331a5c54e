use super::class::ClassDef;

/// The root `<program language="SOL25">` element: zero or more user-defined
/// classes, in document order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub classes: Vec<ClassDef>,
}
