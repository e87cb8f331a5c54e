use crate::environment::Env;
use crate::error::SolError;
use crate::registry::Method;
use crate::runtime::Runtime;
use crate::value::Value;

/// The dispatch rule for a send `receiver <selector> args`.
///
/// The attribute-access fallback is gated on the receiver's *class*, not on
/// whether the receiver happens to be the currently executing `self`: any
/// instance of a program-defined class gets implicit attribute access for a
/// selector none of its ancestors define, from any call site, while the
/// seven built-in classes never do (an unresolved selector on an `Integer`
/// or `String` is always `DoesNotUnderstand`). See DESIGN.md's Open
/// Questions for the full reasoning.
pub fn send(
    receiver: &Value,
    selector: &str,
    args: &[Value],
    env: &Env,
    runtime: &Runtime,
) -> Result<Value, SolError> {
    let class = receiver.class();

    if !runtime.builtins.is_builtin_class(&class) && !runtime.registry.has_method(&class, selector) {
        return attribute_send(receiver, selector, args);
    }

    let method = runtime.registry.find_method(&class, selector)?;
    match method {
        Method::Native(native) => native(receiver, args, env, runtime),
        Method::User(block) => crate::eval::invoke_method(&block, receiver, args, runtime),
    }
}

fn attribute_send(receiver: &Value, selector: &str, args: &[Value]) -> Result<Value, SolError> {
    if let Some(attr_name) = selector.strip_suffix(':') {
        if args.len() == 1 {
            receiver.set_attr(attr_name.to_string(), args[0].clone());
            return Ok(receiver.clone());
        }
    }

    receiver.get_attr(selector).ok_or_else(|| {
        SolError::DoesNotUnderstand(format!(
            "{} does not understand '{selector}'",
            receiver.class().name
        ))
    })
}
