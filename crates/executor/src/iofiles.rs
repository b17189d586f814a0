//! Codec-mediated file I/O for commands.
//!
//! [`file_backed`] turns a command that works on decoded data into an
//! ordinary registry handler: the wrapper decodes the configured source
//! path through the codec registry, hands the decoded value plus a fresh
//! result buffer to the inner command, and — when a target path is
//! configured — persists whatever the inner command left in the buffer.
//!
//! The configured paths are resolved against the registry when the wrapper
//! is built: an extensionless or unsupported source/target is a defect in
//! how the shell was assembled, and it aborts the registration path instead
//! of turning into a printed message later.

use std::path::PathBuf;
use std::rc::Rc;

use switchboard_core::{Result, Value};

use crate::codec::CodecRegistry;
use crate::command::CommandFn;
use crate::output::{Args, Reply};

/// A command body that consumes decoded source data and fills a result
/// buffer.
pub type IoCommandFn = Box<dyn Fn(&Value, &mut Vec<Value>, &Args) -> Result<Reply>>;

/// Printed when the source file has not been produced yet.
pub const DATA_NOT_FOUND: &str = "Generate or enter the data first.";

/// Wrap `inner` so it runs against file-resident data.
///
/// At call time, a missing source file yields a plain
/// [`DATA_NOT_FOUND`] report without invoking `inner`; decode and encode
/// failures propagate. The buffer is written to `target` as a single
/// array value, only when a target is configured.
pub fn file_backed(
    codecs: Rc<CodecRegistry>,
    source: impl Into<PathBuf>,
    target: Option<PathBuf>,
    inner: IoCommandFn,
) -> Result<CommandFn> {
    let source = source.into();
    codecs.reader_for(&source)?;
    if let Some(target) = &target {
        codecs.writer_for(target)?;
    }

    Ok(Box::new(move |args| {
        if !source.is_file() {
            return Ok(Reply::message(DATA_NOT_FOUND));
        }
        let data = codecs.read(&source)?;
        let mut buffer = Vec::new();
        let reply = inner(&data, &mut buffer, args)?;
        if let Some(target) = &target {
            codecs.write(&Value::Array(buffer), target)?;
        }
        Ok(reply)
    }))
}
