//! Shell housekeeping commands: `list`, `help`, `exit`, `clear`.
//!
//! These are ordinary registry entries — validated like anything else —
//! whose bodies read the registry they live in. They hold a weak handle so
//! the registry does not own a strong reference back to itself.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use switchboard_core::{Error, Result};

use crate::command::{CommandEntry, CommandRegistry};
use crate::output::Reply;

/// ANSI clear-screen sequence; printing the reply does the clearing.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

const HELP_HINT: &str = "Type help [command_name] to get more info about specific command";

/// Register the housekeeping commands into `registry`.
pub fn register_builtins(registry: &Rc<RefCell<CommandRegistry>>) -> Result<()> {
    let weak = Rc::downgrade(registry);
    registry.borrow_mut().register(
        "list",
        "-> str",
        "Generate the list of available commands",
        move |_args| {
            let registry = upgrade(&weak)?;
            let registry = registry.borrow();
            let mut lines = vec!["Available commands:".to_string()];
            for (name, description) in registry.list() {
                lines.push(format!("\t+ {name:<20} -> {description}"));
            }
            lines.push(HELP_HINT.to_string());
            Ok(Reply::Message(lines.join("\n")))
        },
    )?;

    let weak = Rc::downgrade(registry);
    registry.borrow_mut().register(
        "help",
        "command:str? -> str",
        "Show documentation of the chosen command",
        move |args| {
            let Some(name) = args.opt_str("command") else {
                return Ok(Reply::message(HELP_HINT));
            };
            let registry = upgrade(&weak)?;
            let entry = registry.borrow().get(name);
            match entry {
                Some(entry) => Ok(Reply::Message(usage_text(&entry))),
                None => Ok(Reply::Message(format!(
                    "{name} is not an available command, type list to see the list of available commands"
                ))),
            }
        },
    )?;

    registry.borrow_mut().register(
        "exit",
        "-> str",
        "Terminate the process",
        |_args| Ok(Reply::Terminate("Process terminated".into())),
    )?;

    registry.borrow_mut().register(
        "clear",
        "-> str",
        "Clear the screen",
        |_args| Ok(Reply::Message(CLEAR_SCREEN.to_string())),
    )?;

    Ok(())
}

fn upgrade(weak: &Weak<RefCell<CommandRegistry>>) -> Result<Rc<RefCell<CommandRegistry>>> {
    weak.upgrade().ok_or_else(|| Error::Internal {
        reason: "command registry dropped while a builtin was running".into(),
    })
}

/// Full usage text for `help <name>`.
fn usage_text(entry: &CommandEntry) -> String {
    let mut text = format!(
        "{} command\nUsage: command params separated with single space\n{}",
        entry.name(),
        entry.description()
    );
    let params = entry.signature().params();
    if !params.is_empty() {
        text.push_str("\nParameters:");
        for param in params {
            let optional = if param.optional { " (optional)" } else { "" };
            text.push_str(&format!("\n\t+ {:<10} -> {}{}", param.name, param.ty, optional));
        }
    }
    text
}
