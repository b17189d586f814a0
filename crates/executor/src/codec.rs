//! Codec registry: file extension → reader / writer behaviors.
//!
//! Readers and writers are registered independently under an extension key
//! that includes the leading dot (`".json"`). A path's extension is its
//! trailing dot-plus-letters suffix; a path without one is an input error,
//! and an extension nobody registered is unsupported — operations fail,
//! they never silently no-op.
//!
//! Two codecs ship built in:
//! - `".json"`: human-readable structured documents via `serde_json`
//! - `".pkl"`: opaque binary serialization of arbitrary values via `bincode`

use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use switchboard_core::{Error, Result, Value};

/// Decodes the file at `path` into a value.
pub type ReaderFn = Box<dyn Fn(&Path) -> Result<Value>>;

/// Encodes `value` into the file at `path`.
pub type WriterFn = Box<dyn Fn(&Value, &Path) -> Result<()>>;

/// Extract a path's extension, including the leading dot.
///
/// Only a trailing dot-plus-ASCII-letters suffix qualifies; anything else
/// is [`Error::MissingExtension`].
pub fn extension_of(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|e| format!(".{e}"))
        .ok_or_else(|| Error::MissingExtension {
            path: path.display().to_string(),
        })
}

/// Independent mappings from extension to reader and to writer.
#[derive(Default)]
pub struct CodecRegistry {
    readers: HashMap<String, ReaderFn>,
    writers: HashMap<String, WriterFn>,
}

impl CodecRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in `.json` and `.pkl` codecs.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_reader(".json", Box::new(json_read));
        registry.register_writer(".json", Box::new(json_write));
        registry.register_reader(".pkl", Box::new(binary_read));
        registry.register_writer(".pkl", Box::new(binary_write));
        registry
    }

    /// Register a reader under `extension` (leading dot included).
    pub fn register_reader(&mut self, extension: &str, reader: ReaderFn) {
        tracing::debug!(extension, "registered reader");
        self.readers.insert(extension.to_string(), reader);
    }

    /// Register a writer under `extension` (leading dot included).
    pub fn register_writer(&mut self, extension: &str, writer: WriterFn) {
        tracing::debug!(extension, "registered writer");
        self.writers.insert(extension.to_string(), writer);
    }

    /// The reader registered for `extension`, if any.
    pub fn reader(&self, extension: &str) -> Option<&ReaderFn> {
        self.readers.get(extension)
    }

    /// The writer registered for `extension`, if any.
    pub fn writer(&self, extension: &str) -> Option<&WriterFn> {
        self.writers.get(extension)
    }

    /// Resolve the reader for a path via its extension.
    pub fn reader_for(&self, path: &Path) -> Result<&ReaderFn> {
        let extension = extension_of(path)?;
        self.readers
            .get(&extension)
            .ok_or(Error::UnsupportedFormat { extension })
    }

    /// Resolve the writer for a path via its extension.
    pub fn writer_for(&self, path: &Path) -> Result<&WriterFn> {
        let extension = extension_of(path)?;
        self.writers
            .get(&extension)
            .ok_or(Error::UnsupportedFormat { extension })
    }

    /// Decode the file at `path` with the reader its extension selects.
    pub fn read(&self, path: &Path) -> Result<Value> {
        tracing::debug!(path = %path.display(), "decoding");
        (self.reader_for(path)?)(path)
    }

    /// Encode `value` into `path` with the writer its extension selects.
    pub fn write(&self, value: &Value, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "encoding");
        (self.writer_for(path)?)(value, path)
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("readers", &self.readers.keys().collect::<Vec<_>>())
            .field("writers", &self.writers.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn json_read(path: &Path) -> Result<Value> {
    let file = fs::File::open(path)?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    Ok(Value::from(json))
}

fn json_write(value: &Value, path: &Path) -> Result<()> {
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &serde_json::Value::from(value))?;
    Ok(())
}

fn binary_read(path: &Path) -> Result<Value> {
    let bytes = fs::read(path)?;
    Ok(bincode::deserialize(&bytes)?)
}

fn binary_write(value: &Value, path: &Path) -> Result<()> {
    let bytes = bincode::serialize(value)?;
    fs::write(path, bytes)?;
    Ok(())
}
