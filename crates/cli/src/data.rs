//! Demo data-pipeline commands.
//!
//! A small consumer of the framework: `generate` fills the configured
//! source file through the codec registry, `total` and `head` run against
//! it through the file-backed wrapper and persist their result buffers to
//! the configured target file. Paths come from the settings store.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use switchboard_executor::{
    file_backed, CodecRegistry, CommandRegistry, Error, Reply, Result, Settings, Value,
};

use crate::progress::Progress;

/// Register `generate`, `total`, and `head` using the `source`/`target`
/// paths from `settings`.
pub fn register_data_commands(
    registry: &Rc<RefCell<CommandRegistry>>,
    codecs: Rc<CodecRegistry>,
    settings: &Settings,
) -> Result<()> {
    let source = path_setting(settings, "source")?;
    let target = path_setting(settings, "target")?;

    let generate_codecs = Rc::clone(&codecs);
    let generate_path = source.clone();
    registry.borrow_mut().register(
        "generate",
        "count:int -> str",
        "Generate a dataset of square numbers under the configured source path",
        move |args| {
            let count = args.int("count")?.max(0);
            let bar = Progress::new(count as u64, "Generating");
            let mut items = Vec::with_capacity(count as usize);
            for i in 1..=count {
                items.push(Value::Int(i * i));
                bar.advance(1);
            }
            bar.finish();
            generate_codecs.write(&Value::Array(items), &generate_path)?;
            Ok(Reply::Message(format!(
                "Generated {count} values into {}",
                generate_path.display()
            )))
        },
    )?;

    let total = file_backed(
        Rc::clone(&codecs),
        source.clone(),
        Some(target.clone()),
        Box::new(|data, buffer, _args| {
            let items = data.as_int_list().ok_or_else(|| Error::Serialization {
                reason: "source data is not a list of integers".into(),
            })?;
            let sum: i64 = items.iter().sum();
            buffer.push(Value::Int(sum));
            Ok(Reply::Message(format!(
                "Total of {} values is {sum}",
                items.len()
            )))
        }),
    )?;
    registry.borrow_mut().register(
        "total",
        "-> str",
        "Sum the stored dataset and persist the total",
        total,
    )?;

    let head = file_backed(
        codecs,
        source,
        Some(target),
        Box::new(|data, buffer, args| {
            let count = args.int("count")?.max(0) as usize;
            let items = data.as_array().ok_or_else(|| Error::Serialization {
                reason: "source data is not a list".into(),
            })?;
            buffer.extend(items.iter().take(count).cloned());
            Ok(Reply::Message(format!(
                "Kept the first {} of {} values",
                buffer.len(),
                items.len()
            )))
        }),
    )?;
    registry.borrow_mut().register(
        "head",
        "count:int -> str",
        "Copy the first count values into the result file",
        head,
    )?;

    Ok(())
}

fn path_setting(settings: &Settings, name: &str) -> Result<PathBuf> {
    settings
        .get(name)
        .and_then(Value::as_str)
        .map(PathBuf::from)
        .ok_or_else(|| Error::Internal {
            reason: format!("setting {name} is not configured to a path"),
        })
}
