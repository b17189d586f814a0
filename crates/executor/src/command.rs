//! Command registry: name → typed command entry.
//!
//! Names are case-insensitive and stored folded; entries are immutable once
//! registered and nothing is ever removed. Listing follows insertion order
//! so that help output is reproducible.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use switchboard_core::{Error, Result, Signature};

use crate::output::{Args, Reply};
use crate::parse::Invocation;
use crate::validate;

/// The executable behavior of a command.
///
/// Handlers receive only arguments the validator has already bound and
/// type-checked against the registered signature.
pub type CommandFn = Box<dyn Fn(&Args) -> Result<Reply>>;

/// A registered command: identity, declared signature, description, and
/// behavior.
pub struct CommandEntry {
    name: String,
    signature: Signature,
    description: String,
    handler: CommandFn,
}

impl CommandEntry {
    /// Registered (case-folded) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter descriptors and return type.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Full human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// First line of the description, for listings.
    pub fn short_description(&self) -> &str {
        self.description.lines().next().unwrap_or_default()
    }

    pub(crate) fn handler(&self) -> &CommandFn {
        &self.handler
    }
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered mapping from command name to [`CommandEntry`].
#[derive(Debug, Default)]
pub struct CommandRegistry {
    order: Vec<Rc<CommandEntry>>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under `name`.
    ///
    /// `signature` is a literal like `"a:int b:int -> str"`; it is parsed
    /// here so an unusable declaration is rejected at registration time
    /// rather than surfacing as a half-validated call later. Names fold to
    /// lowercase; re-registering a taken name is an error.
    pub fn register<F>(
        &mut self,
        name: &str,
        signature: &str,
        description: &str,
        handler: F,
    ) -> Result<()>
    where
        F: Fn(&Args) -> Result<Reply> + 'static,
    {
        let folded = name.to_lowercase();
        if self.index.contains_key(&folded) {
            return Err(Error::DuplicateCommand { name: folded });
        }
        let signature = Signature::parse(&folded, signature)?;
        tracing::debug!(command = %folded, params = signature.params().len(), "registered command");
        self.index.insert(folded.clone(), self.order.len());
        self.order.push(Rc::new(CommandEntry {
            name: folded,
            signature,
            description: description.to_string(),
            handler: Box::new(handler),
        }));
        Ok(())
    }

    /// Look up a command by (case-insensitive) name.
    pub fn get(&self, name: &str) -> Option<Rc<CommandEntry>> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| Rc::clone(&self.order[i]))
    }

    /// `(name, first description line)` for every command, in insertion
    /// order.
    pub fn list(&self) -> Vec<(String, String)> {
        self.order
            .iter()
            .map(|e| (e.name().to_string(), e.short_description().to_string()))
            .collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up an invocation's command and run it through the validator.
    pub fn dispatch(&self, invocation: &Invocation) -> Result<Reply> {
        let entry = self.get(&invocation.command).ok_or_else(|| Error::UnknownCommand {
            name: invocation.command.clone(),
        })?;
        validate::invoke(&entry, &invocation.positionals, &invocation.keywords)
    }
}

/// Dispatch against a registry behind shared ownership.
///
/// Commands like `help` read the registry they live in, so the borrow taken
/// for the lookup must end before the handler runs. This helper clones the
/// entry handle out of a short-lived borrow and only then invokes it.
pub fn dispatch_shared(
    registry: &Rc<RefCell<CommandRegistry>>,
    invocation: &Invocation,
) -> Result<Reply> {
    let entry = registry
        .borrow()
        .get(&invocation.command)
        .ok_or_else(|| Error::UnknownCommand {
            name: invocation.command.clone(),
        })?;
    validate::invoke(&entry, &invocation.positionals, &invocation.keywords)
}
