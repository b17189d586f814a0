//! Core types for the Switchboard dispatch engine.
//!
//! This crate defines the foundational types shared by the registries, the
//! validator, and the shell:
//! - Value: unified enum for every runtime value the shell can carry
//! - TypeTag: discriminates the parameter types a command may declare
//! - coerce: text token → typed value conversion
//! - Signature / Param: parameter descriptors attached at registration time
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coerce;
pub mod error;
pub mod signature;
pub mod value;

pub use coerce::coerce;
pub use error::{Error, Result};
pub use signature::{Param, Signature};
pub use value::{TypeTag, Value};
