//! Command execution results and bound arguments.

use std::collections::BTreeMap;

use switchboard_core::{Error, Result, Value};

/// What a command invocation hands back to the dispatch loop.
///
/// Every command reports its outcome as text; there is no silent success.
/// `Terminate` is produced only by the exit command and tells the loop to
/// stop reading lines after printing the announcement.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A completion report to print, followed by a blank line.
    Message(String),
    /// A final announcement to print before leaving the loop.
    Terminate(String),
}

impl Reply {
    /// Build a completion report.
    pub fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }

    /// The text carried by either variant.
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Terminate(text) => text,
        }
    }
}

/// Arguments bound to a command's declared parameters.
///
/// Built by the validator after every check has passed: each entry maps a
/// declared parameter name to a value already known to match the declared
/// type. Omitted optional parameters are simply absent.
#[derive(Debug, Clone, Default)]
pub struct Args {
    values: BTreeMap<String, Value>,
}

impl Args {
    /// Wrap a set of already-validated bindings.
    pub fn from_values(values: BTreeMap<String, Value>) -> Self {
        Args { values }
    }

    /// The bound value for a parameter, if it was filled.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// A required integer parameter.
    ///
    /// Errors as an internal defect: after validation, a required parameter
    /// of the right type is always bound, so a miss here means the handler
    /// disagrees with its registered signature.
    pub fn int(&self, name: &str) -> Result<i64> {
        self.get(name)
            .and_then(Value::as_int)
            .ok_or_else(|| unbound(name))
    }

    /// A required string parameter.
    pub fn str(&self, name: &str) -> Result<&str> {
        self.get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| unbound(name))
    }

    /// A required boolean parameter.
    pub fn bool(&self, name: &str) -> Result<bool> {
        self.get(name)
            .and_then(Value::as_bool)
            .ok_or_else(|| unbound(name))
    }

    /// A required list-of-integers parameter.
    pub fn int_list(&self, name: &str) -> Result<Vec<i64>> {
        self.get(name)
            .and_then(Value::as_int_list)
            .ok_or_else(|| unbound(name))
    }

    /// An optional string parameter; `None` when omitted.
    pub fn opt_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// An optional integer parameter; `None` when omitted.
    pub fn opt_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }
}

fn unbound(name: &str) -> Error {
    Error::Internal {
        reason: format!("parameter {name} is not bound to a value of its declared type"),
    }
}
