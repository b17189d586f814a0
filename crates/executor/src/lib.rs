//! Dispatch engine for Switchboard.
//!
//! The engine is three registries and two wrappers around them:
//! - [`CommandRegistry`]: name → typed command entry, insertion-ordered
//! - [`CodecRegistry`]: file extension → reader / writer behaviors
//! - [`validate`]: checks positional/keyword arguments against a command's
//!   declared signature before the command body runs
//! - [`iofiles`]: lets a command operate on file-resident data through the
//!   codec registry instead of literal arguments
//! - [`parse`]: input-line tokenization, keyword-marker extraction, and
//!   token coercion
//!
//! Both registries are populated during a startup registration phase and
//! read-only once the shell starts reading lines; they are passed by
//! reference into whatever drives them, never reached through ambient
//! state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtins;
pub mod codec;
pub mod command;
pub mod iofiles;
pub mod output;
pub mod parse;
pub mod settings;
pub mod validate;

pub use builtins::register_builtins;
pub use codec::{extension_of, CodecRegistry, ReaderFn, WriterFn};
pub use command::{dispatch_shared, CommandEntry, CommandFn, CommandRegistry};
pub use iofiles::{file_backed, IoCommandFn};
pub use output::{Args, Reply};
pub use parse::{parse_line, Invocation, ParsedLine};
pub use settings::Settings;

// Re-export the core types alongside the engine for convenience.
pub use switchboard_core::{coerce, Error, Param, Result, Signature, TypeTag, Value};
