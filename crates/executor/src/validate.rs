//! Signature validation: the gate every invocation passes before a command
//! body runs.
//!
//! The checks are purely data-driven against the [`Signature`] captured at
//! registration time, in a fixed order: keyword names, keyword types,
//! positional filling in declaration order, arity. Only when every check
//! passes is the handler invoked, so a rejected call has no side effects.

use std::collections::BTreeMap;

use switchboard_core::{Error, Result, Value};

use crate::command::CommandEntry;
use crate::output::{Args, Reply};

/// Validate `(positionals, keywords)` against the entry's signature and
/// invoke the handler.
///
/// Failure kinds, each an ordinary `Err` the shell renders as text:
/// - an undeclared keyword name → [`Error::UnexpectedArgument`]
/// - a value violating its parameter's declared type → [`Error::TypeMismatch`]
/// - positionals exhausted with a required parameter unfilled →
///   [`Error::MissingArgument`] naming the first one
/// - positionals left over once every parameter is filled →
///   [`Error::TooManyArguments`]
/// - a handler reporting nothing → [`Error::NoCompletionInfo`]
///
/// Parameters are filled positionally in declaration order, skipping any
/// already supplied by keyword. An optional parameter consumes a positional
/// when one remains and is silently omitted when they have run out.
pub fn invoke(
    entry: &CommandEntry,
    positionals: &[Value],
    keywords: &BTreeMap<String, Value>,
) -> Result<Reply> {
    let command = entry.name();
    let signature = entry.signature();

    let mut bound: BTreeMap<String, Value> = BTreeMap::new();
    for (name, value) in keywords {
        let param = signature.param(name).ok_or_else(|| Error::UnexpectedArgument {
            command: command.to_string(),
            argument: name.clone(),
        })?;
        if !value.matches(param.ty) {
            return Err(Error::TypeMismatch {
                command: command.to_string(),
                parameter: name.clone(),
                expected: param.ty,
                actual: value.type_name().to_string(),
            });
        }
        bound.insert(name.clone(), value.clone());
    }

    let mut cursor = 0;
    for param in signature.params() {
        if bound.contains_key(&param.name) {
            continue;
        }
        let Some(value) = positionals.get(cursor) else {
            if param.optional {
                continue;
            }
            return Err(Error::MissingArgument {
                command: command.to_string(),
                parameter: param.name.clone(),
            });
        };
        if !value.matches(param.ty) {
            return Err(Error::TypeMismatch {
                command: command.to_string(),
                parameter: param.name.clone(),
                expected: param.ty,
                actual: value.type_name().to_string(),
            });
        }
        bound.insert(param.name.clone(), value.clone());
        cursor += 1;
    }

    if cursor < positionals.len() {
        return Err(Error::TooManyArguments {
            command: command.to_string(),
        });
    }

    let reply = (entry.handler())(&Args::from_values(bound))?;
    if let Reply::Message(text) = &reply {
        if text.is_empty() {
            return Err(Error::NoCompletionInfo {
                command: command.to_string(),
            });
        }
    }
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::command::CommandRegistry;

    fn add_registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry
            .register("add", "a:int b:int -> str", "Add two integers", |args| {
                Ok(Reply::Message(format!("{}", args.int("a")? + args.int("b")?)))
            })
            .unwrap();
        registry
    }

    fn invoke_add(
        registry: &CommandRegistry,
        positionals: Vec<Value>,
        keywords: Vec<(&str, Value)>,
    ) -> Result<Reply> {
        let entry = registry.get("add").unwrap();
        let keywords = keywords
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        invoke(&entry, &positionals, &keywords)
    }

    #[test]
    fn positional_fill_in_declaration_order() {
        let registry = add_registry();
        let reply = invoke_add(&registry, vec![Value::Int(3), Value::Int(4)], vec![]).unwrap();
        assert_eq!(reply, Reply::Message("7".into()));
    }

    #[test]
    fn keyword_fill_releases_the_slot_for_positionals() {
        let registry = add_registry();
        let reply =
            invoke_add(&registry, vec![Value::Int(4)], vec![("a", Value::Int(3))]).unwrap();
        assert_eq!(reply, Reply::Message("7".into()));
    }

    #[test]
    fn missing_argument_names_the_first_unfilled_parameter() {
        let registry = add_registry();
        let err = invoke_add(&registry, vec![Value::Int(3)], vec![]).unwrap_err();
        assert_eq!(err.to_string(), "add, missing argument b");

        let err = invoke_add(&registry, vec![], vec![]).unwrap_err();
        assert_eq!(err.to_string(), "add, missing argument a");
    }

    #[test]
    fn leftover_positionals_are_rejected() {
        let registry = add_registry();
        let err = invoke_add(
            &registry,
            vec![Value::Int(1), Value::Int(2), Value::Int(3)],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "add, too many arguments were given");
    }

    #[test]
    fn positional_type_mismatch_names_the_parameter() {
        let registry = add_registry();
        let err = invoke_add(
            &registry,
            vec![Value::Int(3), Value::String("x".into())],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "add b must be a int, not a str");
    }

    #[test]
    fn keyword_type_mismatch_names_the_parameter() {
        let registry = add_registry();
        let err = invoke_add(
            &registry,
            vec![Value::Int(4)],
            vec![("a", Value::Bool(true))],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "add a must be a int, not a bool");
    }

    #[test]
    fn unexpected_keyword_never_invokes_the_handler() {
        let invoked = Rc::new(Cell::new(false));
        let seen = Rc::clone(&invoked);
        let mut registry = CommandRegistry::new();
        registry
            .register("probe", "a:int -> str", "Record that the body ran", move |_| {
                seen.set(true);
                Ok(Reply::message("ran"))
            })
            .unwrap();

        let entry = registry.get("probe").unwrap();
        let keywords = BTreeMap::from([("x".to_string(), Value::Int(4))]);
        let err = invoke(&entry, &[Value::Int(3)], &keywords).unwrap_err();
        assert_eq!(err.to_string(), "probe got an unexpected argument x");
        assert!(!invoked.get());
    }

    #[test]
    fn optional_parameter_fills_when_a_positional_remains() {
        let mut registry = CommandRegistry::new();
        registry
            .register("greet", "name:str? -> str", "Greet someone", |args| {
                Ok(Reply::Message(match args.opt_str("name") {
                    Some(name) => format!("hello {name}"),
                    None => "hello".to_string(),
                }))
            })
            .unwrap();
        let entry = registry.get("greet").unwrap();

        let reply = invoke(&entry, &[Value::String("ada".into())], &BTreeMap::new()).unwrap();
        assert_eq!(reply, Reply::Message("hello ada".into()));

        let reply = invoke(&entry, &[], &BTreeMap::new()).unwrap();
        assert_eq!(reply, Reply::Message("hello".into()));
    }

    #[test]
    fn empty_report_is_an_error() {
        let mut registry = CommandRegistry::new();
        registry
            .register("mute", "-> str", "Report nothing", |_| Ok(Reply::message("")))
            .unwrap();
        let entry = registry.get("mute").unwrap();
        let err = invoke(&entry, &[], &BTreeMap::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "inner command mute should return a completion information"
        );
    }

    #[test]
    fn list_typed_parameter_accepts_coerced_lists() {
        let mut registry = CommandRegistry::new();
        registry
            .register("sum", "items:[int] -> str", "Sum a list", |args| {
                Ok(Reply::Message(
                    args.int_list("items")?.iter().sum::<i64>().to_string(),
                ))
            })
            .unwrap();
        let entry = registry.get("sum").unwrap();
        let items = Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        let reply = invoke(&entry, &[items], &BTreeMap::new()).unwrap();
        assert_eq!(reply, Reply::Message("6".into()));
    }
}
