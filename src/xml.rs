//! XML→AST front end.
//!
//! Structural only: this module never resolves a class name, checks an
//! arity, or validates a selector against the built-in list — it only
//! checks that the document has the expected element shape, failing with
//! `SolError::Structure` the moment it doesn't.

use roxmltree::{Document, Node};

use crate::ast::{Block, ClassDef, Expr, MethodDef, Program, Statement};
use crate::error::SolError;

pub fn load_program(source: &str) -> Result<Program, SolError> {
    let doc = Document::parse(source)
        .map_err(|e| SolError::Structure(format!("invalid XML: {e}")))?;

    let root = doc.root_element();
    if root.tag_name().name() != "program" {
        return Err(SolError::Structure(format!(
            "expected root element 'program', found '{}'",
            root.tag_name().name()
        )));
    }
    match root.attribute("language") {
        Some("SOL25") => {}
        Some(other) => {
            return Err(SolError::Structure(format!(
                "unsupported program language '{other}'"
            )))
        }
        None => return Err(SolError::Structure("'program' is missing a 'language' attribute".to_string())),
    }

    let mut classes = Vec::new();
    for child in element_children(root) {
        if child.tag_name().name() != "class" {
            return Err(SolError::Structure(format!(
                "unexpected element '{}' inside 'program'",
                child.tag_name().name()
            )));
        }
        classes.push(load_class(child)?);
    }

    Ok(Program { classes })
}

fn load_class(node: Node) -> Result<ClassDef, SolError> {
    let name = required_attr(node, "name")?.to_string();
    let parent_name = node.attribute("parent").map(str::to_string);

    let mut methods = Vec::new();
    for child in element_children(node) {
        if child.tag_name().name() != "method" {
            return Err(SolError::Structure(format!(
                "unexpected element '{}' inside 'class'",
                child.tag_name().name()
            )));
        }
        methods.push(load_method(child)?);
    }

    Ok(ClassDef { name, parent_name, methods })
}

fn load_method(node: Node) -> Result<MethodDef, SolError> {
    let selector = required_attr(node, "selector")?.to_string();

    let mut blocks = element_children(node).filter(|n| n.tag_name().name() == "block");
    let block_node = blocks
        .next()
        .ok_or_else(|| SolError::Structure(format!("method '{selector}' is missing its 'block'")))?;
    if blocks.next().is_some() {
        return Err(SolError::Structure(format!(
            "method '{selector}' has more than one 'block'"
        )));
    }

    let block = load_block(block_node)?;
    Ok(MethodDef { selector, block })
}

fn load_block(node: Node) -> Result<Block, SolError> {
    let mut params = Vec::new();
    let mut statements = Vec::new();
    let mut seen_assign = false;

    for child in element_children(node) {
        match child.tag_name().name() {
            "parameter" => {
                if seen_assign {
                    return Err(SolError::Structure(
                        "'parameter' must come before every 'assign' in a 'block'".to_string(),
                    ));
                }
                params.push(required_attr(child, "name")?.to_string());
            }
            "assign" => {
                seen_assign = true;
                statements.push(load_assign(child)?);
            }
            other => {
                return Err(SolError::Structure(format!(
                    "unexpected element '{other}' inside 'block'"
                )))
            }
        }
    }

    Ok(Block::new(params, statements))
}

fn load_assign(node: Node) -> Result<Statement, SolError> {
    let mut var_node = None;
    let mut expr_node = None;

    for child in element_children(node) {
        match child.tag_name().name() {
            "var" if var_node.is_none() => var_node = Some(child),
            "expr" if expr_node.is_none() => expr_node = Some(child),
            other => {
                return Err(SolError::Structure(format!(
                    "unexpected element '{other}' inside 'assign'"
                )))
            }
        }
    }

    let var_node = var_node.ok_or_else(|| SolError::Structure("'assign' is missing its 'var'".to_string()))?;
    let expr_node = expr_node.ok_or_else(|| SolError::Structure("'assign' is missing its 'expr'".to_string()))?;

    let target = required_attr(var_node, "name")?.to_string();
    let expr = load_expr(expr_node)?;
    Ok(Statement { target, expr })
}

fn load_expr(node: Node) -> Result<Expr, SolError> {
    let mut children = element_children(node);
    let inner = children
        .next()
        .ok_or_else(|| SolError::Structure("'expr' has no child element".to_string()))?;
    if children.next().is_some() {
        return Err(SolError::Structure("'expr' has more than one child element".to_string()));
    }

    match inner.tag_name().name() {
        "literal" => {
            let class_name = required_attr(inner, "class")?.to_string();
            let raw_value = inner.attribute("value").unwrap_or("").to_string();
            Ok(Expr::Literal { class_name, raw_value })
        }
        "var" => Ok(Expr::Variable(required_attr(inner, "name")?.to_string())),
        "block" => Ok(Expr::BlockLiteral(load_block(inner)?)),
        "send" => load_send(inner),
        other => Err(SolError::Structure(format!(
            "unexpected element '{other}' inside 'expr'"
        ))),
    }
}

fn load_send(node: Node) -> Result<Expr, SolError> {
    let selector = required_attr(node, "selector")?.to_string();

    let mut receiver = None;
    let mut args = Vec::new();
    for child in element_children(node) {
        match child.tag_name().name() {
            "expr" if receiver.is_none() => receiver = Some(load_expr(child)?),
            "arg" => {
                let mut arg_children = element_children(child);
                let arg_expr = arg_children
                    .next()
                    .ok_or_else(|| SolError::Structure("'arg' has no child 'expr'".to_string()))?;
                if arg_children.next().is_some() {
                    return Err(SolError::Structure("'arg' has more than one child element".to_string()));
                }
                if arg_expr.tag_name().name() != "expr" {
                    return Err(SolError::Structure(format!(
                        "expected 'expr' inside 'arg', found '{}'",
                        arg_expr.tag_name().name()
                    )));
                }
                args.push(load_expr(arg_expr)?);
            }
            other => {
                return Err(SolError::Structure(format!(
                    "unexpected element '{other}' inside 'send'"
                )))
            }
        }
    }

    let receiver = receiver.ok_or_else(|| SolError::Structure(format!("send '{selector}' is missing its receiver")))?;
    Ok(Expr::Send { receiver: Box::new(receiver), selector, args })
}

fn required_attr<'a>(node: Node<'a, 'a>, name: &str) -> Result<&'a str, SolError> {
    node.attribute(name).ok_or_else(|| {
        SolError::Structure(format!("'{}' is missing a '{name}' attribute", node.tag_name().name()))
    })
}

fn element_children(node: Node) -> impl Iterator<Item = Node> {
    node.children().filter(Node::is_element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_root_tag() {
        let err = load_program("<notprogram/>").unwrap_err();
        assert!(matches!(err, SolError::Structure(_)));
    }

    #[test]
    fn rejects_missing_language_attribute() {
        let err = load_program("<program/>").unwrap_err();
        assert!(matches!(err, SolError::Structure(_)));
    }

    #[test]
    fn loads_a_minimal_main_class() {
        let xml = r#"
            <program language="SOL25">
              <class name="Main" parent="Object">
                <method selector="run">
                  <block>
                    <assign>
                      <var name="x"/>
                      <expr><literal class="Integer" value="1"/></expr>
                    </assign>
                  </block>
                </method>
              </class>
            </program>
        "#;
        let program = load_program(xml).unwrap();
        assert_eq!(program.classes.len(), 1);
        assert_eq!(program.classes[0].name, "Main");
        assert_eq!(program.classes[0].methods[0].selector, "run");
        assert_eq!(program.classes[0].methods[0].block.statements.len(), 1);
    }

    #[test]
    fn rejects_expr_with_two_children() {
        let xml = r#"
            <program language="SOL25">
              <class name="Main" parent="Object">
                <method selector="run">
                  <block>
                    <assign>
                      <var name="x"/>
                      <expr>
                        <literal class="Integer" value="1"/>
                        <literal class="Integer" value="2"/>
                      </expr>
                    </assign>
                  </block>
                </method>
              </class>
            </program>
        "#;
        let err = load_program(xml).unwrap_err();
        assert!(matches!(err, SolError::Structure(_)));
    }

    #[test]
    fn loads_a_send_with_args() {
        let xml = r#"
            <program language="SOL25">
              <class name="Main" parent="Object">
                <method selector="run">
                  <block>
                    <assign>
                      <var name="x"/>
                      <expr>
                        <send selector="plus:">
                          <expr><literal class="Integer" value="1"/></expr>
                          <arg><expr><literal class="Integer" value="2"/></expr></arg>
                        </send>
                      </expr>
                    </assign>
                  </block>
                </method>
              </class>
            </program>
        "#;
        let program = load_program(xml).unwrap();
        match &program.classes[0].methods[0].block.statements[0].expr {
            Expr::Send { selector, args, .. } => {
                assert_eq!(selector, "plus:");
                assert_eq!(args.len(), 1);
            }
            other => panic!("expected Send, got {other:?}"),
        }
    }
}
