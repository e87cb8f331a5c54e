use super::block::Block;

/// `<method selector="..."><block>...</block></method>` — every user method
/// in the AST is just a selector paired with the block that implements it.
/// The native-method variant of `crate::registry::Method` has no AST
/// counterpart; it is constructed directly by `crate::builtins` during
/// bootstrap.
#[derive(Debug, Clone)]
pub struct MethodDef {
    pub selector: String,
    pub block: Block,
}
