//! Dispatch scenarios: whole lines through parsing, validation, and
//! invocation.

use std::cell::RefCell;
use std::rc::Rc;

use switchboard::{
    dispatch_shared, parse_line, register_builtins, CommandRegistry, Error, Reply, Result,
};

fn calculator() -> Rc<RefCell<CommandRegistry>> {
    let registry = Rc::new(RefCell::new(CommandRegistry::new()));
    register_builtins(&registry).unwrap();
    registry
        .borrow_mut()
        .register("add", "a:int b:int -> str", "Add two integers", |args| {
            Ok(Reply::Message(format!("{}", args.int("a")? + args.int("b")?)))
        })
        .unwrap();
    registry
}

fn run(registry: &Rc<RefCell<CommandRegistry>>, line: &str) -> Result<Reply> {
    let parsed = parse_line(line);
    dispatch_shared(registry, &parsed.invocation.expect("line names a command"))
}

#[test]
fn add_two_positionals() {
    let registry = calculator();
    assert_eq!(run(&registry, "add 3 4").unwrap(), Reply::Message("7".into()));
}

#[test]
fn command_names_are_case_insensitive() {
    let registry = calculator();
    assert_eq!(run(&registry, "ADD 3 4").unwrap(), Reply::Message("7".into()));
}

#[test]
fn undeclared_keyword_marker_is_rejected_before_invocation() {
    let registry = calculator();
    let err = run(&registry, "add 3 _x 4").unwrap_err();
    assert_eq!(err.to_string(), "add got an unexpected argument x");
}

#[test]
fn declared_keyword_marker_fills_its_parameter() {
    let registry = calculator();
    assert_eq!(
        run(&registry, "add 4 3 _a").unwrap(),
        Reply::Message("7".into())
    );
}

#[test]
fn too_few_arguments_name_the_first_missing_parameter() {
    let registry = calculator();
    let err = run(&registry, "add 3").unwrap_err();
    assert_eq!(err.to_string(), "add, missing argument b");
}

#[test]
fn too_many_arguments_are_rejected() {
    let registry = calculator();
    let err = run(&registry, "add 1 2 3").unwrap_err();
    assert_eq!(err.to_string(), "add, too many arguments were given");
}

#[test]
fn wrong_argument_type_names_the_parameter() {
    let registry = calculator();
    let err = run(&registry, "add 3 four").unwrap_err();
    assert_eq!(err.to_string(), "add b must be a int, not a str");
}

#[test]
fn unknown_command_is_reported_by_name() {
    let registry = calculator();
    let err = run(&registry, "frobnicate 1").unwrap_err();
    assert!(matches!(err, Error::UnknownCommand { ref name } if name == "frobnicate"));
    assert_eq!(err.to_string(), "frobnicate is not a defined command");
}

#[test]
fn help_with_unknown_name_prints_the_availability_message() {
    let registry = calculator();
    let reply = run(&registry, "help bogus").unwrap();
    assert_eq!(
        reply.text(),
        "bogus is not an available command, type list to see the list of available commands"
    );
}

#[test]
fn list_twice_is_identical() {
    let registry = calculator();
    assert_eq!(run(&registry, "list").unwrap(), run(&registry, "list").unwrap());
}

#[test]
fn list_names_every_registered_command() {
    let registry = calculator();
    let reply = run(&registry, "list").unwrap();
    for name in ["list", "help", "exit", "clear", "add"] {
        assert!(reply.text().contains(name), "list output should name {name}");
    }
}

#[test]
fn exit_produces_a_terminate_reply() {
    let registry = calculator();
    assert_eq!(
        run(&registry, "exit").unwrap(),
        Reply::Terminate("Process terminated".into())
    );
}

#[test]
fn marker_without_value_reports_and_the_rest_still_runs() {
    let registry = calculator();
    let parsed = parse_line("_z add 3 4");
    assert_eq!(parsed.diagnostics, vec!["_z value not found.".to_string()]);
    let reply = dispatch_shared(&registry, &parsed.invocation.unwrap()).unwrap();
    assert_eq!(reply, Reply::Message("7".into()));
}

#[test]
fn registry_usable_without_shared_ownership() {
    let mut registry = CommandRegistry::new();
    registry
        .register("double", "n:int -> str", "Double an integer", |args| {
            Ok(Reply::Message((args.int("n")? * 2).to_string()))
        })
        .unwrap();
    let parsed = parse_line("double 21");
    let reply = registry.dispatch(&parsed.invocation.unwrap()).unwrap();
    assert_eq!(reply, Reply::Message("42".into()));
}
