//! Error types for the dispatch engine.
//!
//! All failures across the engine are represented by the [`Error`] enum.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Two classes of variant exist by design:
//! - **Recoverable** — malformed input, unknown command, argument problems,
//!   unsupported codec for a request-time path. The shell renders these as
//!   text and keeps reading lines.
//! - **Configuration** — a command registered with an unusable signature, a
//!   wrapper configured with an extensionless path. These abort the setup
//!   path that produced them instead of being downgraded to printed text.

use std::io;
use thiserror::Error;

use crate::value::TypeTag;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by registration, validation, dispatch, and codec I/O.
#[derive(Debug, Error)]
pub enum Error {
    // ==================== Argument validation ====================
    /// A supplied keyword argument is not a declared parameter.
    #[error("{command} got an unexpected argument {argument}")]
    UnexpectedArgument {
        /// Command being invoked.
        command: String,
        /// The undeclared keyword name.
        argument: String,
    },

    /// A supplied value does not match the parameter's declared type.
    #[error("{command} {parameter} must be a {expected}, not a {actual}")]
    TypeMismatch {
        /// Command being invoked.
        command: String,
        /// Parameter whose declared type was violated.
        parameter: String,
        /// The declared type.
        expected: TypeTag,
        /// Name of the type actually supplied.
        actual: String,
    },

    /// Positional arguments ran out before every required parameter was
    /// filled.
    #[error("{command}, missing argument {parameter}")]
    MissingArgument {
        /// Command being invoked.
        command: String,
        /// First parameter left unfilled.
        parameter: String,
    },

    /// Positional arguments remained after every parameter was filled.
    #[error("{command}, too many arguments were given")]
    TooManyArguments {
        /// Command being invoked.
        command: String,
    },

    /// The command body produced nothing to report.
    #[error("inner command {command} should return a completion information")]
    NoCompletionInfo {
        /// Command that returned an empty report.
        command: String,
    },

    // ==================== Registry ====================
    /// Lookup of a name with no registered command.
    #[error("{name} is not a defined command")]
    UnknownCommand {
        /// The name as typed (case-folded).
        name: String,
    },

    /// Registration under a name that is already taken.
    #[error("duplicate command {name}")]
    DuplicateCommand {
        /// The contested name.
        name: String,
    },

    /// A command was registered with an incomplete or unparsable signature.
    #[error("{command}: {reason}")]
    MissingAnnotation {
        /// Command being registered.
        command: String,
        /// What was missing or malformed.
        reason: String,
    },

    // ==================== Codecs ====================
    /// A path with no trailing dot-plus-letters suffix.
    #[error("file without extension: {path}")]
    MissingExtension {
        /// The offending path.
        path: String,
    },

    /// An extension with no registered reader/writer.
    #[error("{extension} extension is not available")]
    UnsupportedFormat {
        /// The extension, including the leading dot.
        extension: String,
    },

    // ==================== System ====================
    /// I/O error (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Codec-reported reason.
        reason: String,
    },

    /// Internal error (bug or invariant violation).
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong.
        reason: String,
    },
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}
