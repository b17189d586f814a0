//! Value types for Switchboard.
//!
//! This module defines:
//! - [`Value`]: unified enum for every runtime value the shell can carry
//! - [`TypeTag`]: the parameter types a command may declare
//!
//! Coercion of input tokens only ever produces four of the variants (Bool,
//! Int, String, and Array-of-Int), but codecs decode arbitrary structured
//! documents, so the enum also carries Null, Float, and Object.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unified value type for arguments, codec payloads, and settings.
///
/// Different variants are never equal, even when they contain the same
/// "value": `Int(1) != Float(1.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Object with string keys
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "str",
            Value::Array(items) if items.iter().all(Value::is_int) => "[int]",
            Value::Array(_) => "list",
            Value::Object(_) => "object",
        }
    }

    /// The parameter type this value satisfies, if any.
    ///
    /// Only values a command parameter can be declared over have a tag; an
    /// array qualifies when every element is an integer (the empty array
    /// included).
    pub fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Value::Bool(_) => Some(TypeTag::Bool),
            Value::Int(_) => Some(TypeTag::Int),
            Value::String(_) => Some(TypeTag::Str),
            Value::Array(items) if items.iter().all(Value::is_int) => Some(TypeTag::IntList),
            _ => None,
        }
    }

    /// Whether this value satisfies the declared parameter type.
    pub fn matches(&self, tag: TypeTag) -> bool {
        self.type_tag() == Some(tag)
    }

    /// Check if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Get as bool if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as &str if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[Value] if this is an Array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Collect the integer elements if this is an all-integer array.
    pub fn as_int_list(&self) -> Option<Vec<i64>> {
        match self {
            Value::Array(items) => items.iter().map(Value::as_int).collect(),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

// ============================================================================
// JSON bridging
// ============================================================================
//
// `Value` serializes externally tagged so the binary codec can frame it;
// JSON documents go through these explicit conversions instead so that
// `Int(5)` reads and writes as `5`, not `{"Int":5}`.

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Parameter types a command may declare.
///
/// The set deliberately mirrors what token coercion can produce: a token
/// never coerces to a float, null, or nested structure, so parameters cannot
/// be declared over those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeTag {
    /// `bool` — the literals `True` / `False`
    Bool,
    /// `int` — a run of ASCII digits
    Int,
    /// `[int]` — a bracketed comma-separated run of digit groups
    IntList,
    /// `str` — any other token
    Str,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::IntList => "[int]",
            TypeTag::Str => "str",
        };
        f.write_str(name)
    }
}

impl FromStr for TypeTag {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "bool" => Ok(TypeTag::Bool),
            "int" => Ok(TypeTag::Int),
            "[int]" => Ok(TypeTag::IntList),
            "str" => Ok(TypeTag::Str),
            _ => Err(()),
        }
    }
}
