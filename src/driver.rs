//! Driver: bootstrap, merge, resolve `Main`, run.
//!
//! `run` takes an already-loaded `ast::Program` — turning a file or stdin
//! into that `Program` is `crate::xml`'s job, one layer up — and drives it
//! through bootstrap, merge, and entry-point resolution in order, stopping
//! at the first failing step with the matching error category.

use std::collections::HashSet;

use crate::ast::Program;
use crate::builtins;
use crate::environment::Env;
use crate::error::SolError;
use crate::eval;
use crate::registry::{Class, ClassRegistry, Method};
use crate::runtime::Runtime;
use crate::value::Value;

/// Runs a program to completion, returning `Ok(())` on a clean exit or the
/// `SolError` that ended it.
pub fn run(program: &Program) -> Result<(), SolError> {
    let mut registry = ClassRegistry::new();
    let builtins = builtins::install(&mut registry)?;

    merge_user_classes(&mut registry, program)?;
    validate_inheritance_graph(&registry)?;

    let main_class = registry.find("Main")?;
    let run_block = match registry.find_method(&main_class, "run") {
        Ok(Method::User(block)) => block,
        Ok(Method::Native(_)) => {
            return Err(SolError::UndefinedClass(
                "'Main' does not define a user-level 'run' method".to_string(),
            ))
        }
        Err(_) => {
            return Err(SolError::UndefinedClass(
                "'Main' does not define 'run'".to_string(),
            ))
        }
    };
    if run_block.arity() != 0 {
        return Err(SolError::UndefinedClass(
            "'Main#run' must take no parameters".to_string(),
        ));
    }

    let main_instance = Value::new(main_class);
    let global_env = Env::root();
    for name in registry.names().map(str::to_string).collect::<Vec<_>>() {
        let class = registry.find(&name)?;
        global_env.set(name, Value::new(class));
    }
    global_env.set("self", main_instance.clone());

    let runtime = Runtime { registry, builtins, global_env };
    eval::invoke_method(&run_block, &main_instance, &[], &runtime)?;
    Ok(())
}

fn merge_user_classes(registry: &mut ClassRegistry, program: &Program) -> Result<(), SolError> {
    for class_def in &program.classes {
        let parent_name = class_def.parent_name.clone().ok_or_else(|| {
            SolError::Structure(format!(
                "class '{}' has no parent (only the built-in 'Object' may omit one)",
                class_def.name
            ))
        })?;

        let mut class = Class::new(class_def.name.clone(), Some(parent_name));
        for method in &class_def.methods {
            class = class.with_method(method.selector.clone(), Method::User(method.block.clone()));
        }
        registry.register(std::rc::Rc::new(class))?;
    }
    Ok(())
}

/// Confirms every parent name resolves and the graph is acyclic and
/// single-rooted. Built-in classes are correct by construction; this walk
/// still includes them since it is cheap and uniform, and a user class can
/// chain onto another user class that in turn chains onto a built-in.
fn validate_inheritance_graph(registry: &ClassRegistry) -> Result<(), SolError> {
    for name in registry.names() {
        let mut seen = HashSet::new();
        let mut current = registry.find(name)?;
        loop {
            if !seen.insert(current.name.clone()) {
                return Err(SolError::Structure(format!(
                    "inheritance cycle detected at class '{}'",
                    current.name
                )));
            }
            match &current.parent_name {
                Some(parent_name) => current = registry.find(parent_name)?,
                None => break,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ClassDef, MethodDef};

    fn main_with_run(statements: Vec<crate::ast::Statement>, params: Vec<String>) -> Program {
        Program {
            classes: vec![ClassDef {
                name: "Main".to_string(),
                parent_name: Some("Object".to_string()),
                methods: vec![MethodDef {
                    selector: "run".to_string(),
                    block: crate::ast::Block::new(params, statements),
                }],
            }],
        }
    }

    #[test]
    fn missing_main_is_undefined_class() {
        let program = Program { classes: vec![] };
        let err = run(&program).unwrap_err();
        assert!(matches!(err, SolError::UndefinedClass(_)));
    }

    #[test]
    fn main_run_with_parameters_is_rejected() {
        let program = main_with_run(vec![], vec!["x".to_string()]);
        let err = run(&program).unwrap_err();
        assert!(matches!(err, SolError::UndefinedClass(_)));
    }

    #[test]
    fn class_without_parent_is_structural_error() {
        let mut program = main_with_run(vec![], vec![]);
        program.classes.push(ClassDef {
            name: "Orphan".to_string(),
            parent_name: None,
            methods: vec![],
        });
        let err = run(&program).unwrap_err();
        assert!(matches!(err, SolError::Structure(_)));
    }

    #[test]
    fn empty_main_run_succeeds() {
        let program = main_with_run(vec![], vec![]);
        assert!(run(&program).is_ok());
    }
}
