//! Parameter descriptors attached to a command at registration time.
//!
//! A command declares its parameters as a signature literal, e.g.
//!
//! ```text
//! "a:int b:int -> str"        two required integers
//! "command:str? -> str"       one omittable string
//! "-> str"                    no parameters
//! ```
//!
//! [`Signature::parse`] turns the literal into an ordered list of
//! [`Param`] descriptors plus a declared return type. The validator is
//! driven entirely by this data; nothing is derived from the callable
//! itself. An unannotated or unparsable parameter is a registration-time
//! defect, not something to accept and under-validate.

use crate::error::{Error, Result};
use crate::value::TypeTag;

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, unique within the signature.
    pub name: String,
    /// Declared type.
    pub ty: TypeTag,
    /// Whether the parameter may be omitted (`?` suffix in the literal).
    pub optional: bool,
}

/// Ordered parameter descriptors plus the declared return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    params: Vec<Param>,
    returns: TypeTag,
}

impl Signature {
    /// Parse a signature literal for the named command.
    ///
    /// Errors with [`Error::MissingAnnotation`] when a parameter lacks a
    /// `:type` annotation, a type name is unknown, a name repeats, or the
    /// `->` return marker is absent.
    pub fn parse(command: &str, literal: &str) -> Result<Self> {
        let annotation_error = |reason: String| Error::MissingAnnotation {
            command: command.to_string(),
            reason,
        };

        let (left, right) = literal
            .split_once("->")
            .ok_or_else(|| annotation_error("signature has no return annotation".into()))?;

        let returns = right
            .trim()
            .parse::<TypeTag>()
            .map_err(|()| annotation_error(format!("unknown return type {:?}", right.trim())))?;

        let mut params: Vec<Param> = Vec::new();
        for decl in left.split_whitespace() {
            let (name, ty) = decl
                .split_once(':')
                .ok_or_else(|| annotation_error(format!("parameter {decl} has no type annotation")))?;
            if name.is_empty() {
                return Err(annotation_error(format!("parameter {decl} has no name")));
            }
            if params.iter().any(|p| p.name == name) {
                return Err(annotation_error(format!("parameter {name} is declared twice")));
            }
            let (ty, optional) = match ty.strip_suffix('?') {
                Some(required_part) => (required_part, true),
                None => (ty, false),
            };
            let ty = ty
                .parse::<TypeTag>()
                .map_err(|()| annotation_error(format!("parameter {name} has unknown type {ty:?}")))?;
            params.push(Param {
                name: name.to_string(),
                ty,
                optional,
            });
        }

        Ok(Signature { params, returns })
    }

    /// The declared parameters, in declaration order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Look up a declared parameter by name.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    /// The declared return type.
    pub fn returns(&self) -> TypeTag {
        self.returns
    }

    /// Render the parameter list the way it was declared, for usage text.
    pub fn render(&self) -> String {
        self.params
            .iter()
            .map(|p| {
                if p.optional {
                    format!("{}:{}?", p.name, p.ty)
                } else {
                    format!("{}:{}", p.name, p.ty)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
