//! Switchboard — an extensible command-dispatch framework for line-oriented
//! interactive shells.
//!
//! External code registers named commands (typed, signature-validated) and
//! named data codecs (readers/writers keyed by file extension) into shared
//! registries; the framework tokenizes free-text input lines, coerces tokens
//! into typed values, validates them against the command's declared
//! signature, and invokes the command — or reports a precise diagnostic
//! instead of invoking it.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use switchboard::{parse_line, CommandRegistry, Reply, Value};
//!
//! let mut registry = CommandRegistry::new();
//! registry.register("add", "a:int b:int -> str", "Add two integers", |args| {
//!     Ok(Reply::Message(format!("{}", args.int("a")? + args.int("b")?)))
//! })?;
//!
//! let parsed = parse_line("add 3 4");
//! let reply = registry.dispatch(&parsed.invocation.unwrap())?;
//! ```
//!
//! # Architecture
//!
//! The engine lives in `switchboard-executor`: the command and codec
//! registries, the signature validator, the codec-mediated file I/O wrapper,
//! and the input-line parser. `switchboard-core` holds the value model,
//! token coercion, and signature descriptors they share. The `switchboard`
//! binary (crates/cli) wires the registries into an interactive prompt.

// Re-export the public API of the engine and its core types.
pub use switchboard_core::*;
pub use switchboard_executor::*;
