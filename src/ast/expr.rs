use super::block::Block;

/// A single SOL25 expression, as carried by the XML `<expr>` element.
///
/// Exactly four shapes; evaluation is a closed case match over this enum,
/// never virtual dispatch.
#[derive(Debug, Clone)]
pub enum Expr {
    /// `<literal class="..." value="...">` — the raw text is kept verbatim
    /// and only parsed into a payload at evaluation time.
    Literal { class_name: String, raw_value: String },

    /// `<var name="...">` — resolved against the current environment.
    Variable(String),

    /// `<block>` — reified into a `Block` runtime Value at evaluation time,
    /// capturing whatever environment is current when the literal is reached.
    BlockLiteral(Block),

    /// `<send selector="..."><expr>receiver</expr><arg><expr>...</expr></arg>*</send>`
    Send {
        receiver: Box<Expr>,
        selector: String,
        args: Vec<Expr>,
    },
}
