use super::method::MethodDef;

/// `<class name="..." parent="..."><method>...</method>*</class>` — one
/// user-defined class as parsed from the AST, before it has been merged into
/// the runtime `ClassRegistry`.
#[derive(Debug, Clone)]
pub struct ClassDef {
    pub name: String,
    pub parent_name: Option<String>,
    pub methods: Vec<MethodDef>,
}
