//! Switchboard shell — dispatch loop over the command registry.
//!
//! Two modes:
//! - **REPL mode**: `switchboard` — interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "add 3 4" | switchboard` — line-by-line from stdin
//!
//! Startup is the registration phase: codecs, builtins, and the demo data
//! commands go into the registries, which are read-only once the loop
//! starts.

mod data;
mod progress;
mod repl;

use std::cell::RefCell;
use std::io::{self, IsTerminal};
use std::process;
use std::rc::Rc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use switchboard_executor::{register_builtins, CodecRegistry, CommandRegistry, Settings, Value};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let codecs = Rc::new(CodecRegistry::with_builtins());

    let mut settings = Settings::new("settings.json");
    if !settings.load() {
        settings.define(
            "source",
            Value::String("data.json".into()),
            "Path the data commands read from",
        );
        settings.define(
            "target",
            Value::String("results.json".into()),
            "Path the data commands persist results to",
        );
        settings.save(None);
    }

    let registry = Rc::new(RefCell::new(CommandRegistry::new()));
    register_builtins(&registry).context("registering builtin commands")?;
    data::register_data_commands(&registry, codecs, &settings)
        .context("registering data commands")?;
    tracing::debug!(commands = registry.borrow().len(), "registration complete");

    if io::stdin().is_terminal() {
        println!("Type list to show available commands");
        repl::run_repl(&registry);
        Ok(())
    } else {
        let code = repl::run_pipe(&registry);
        if code != 0 {
            process::exit(code);
        }
        Ok(())
    }
}
