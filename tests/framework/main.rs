//! End-to-end tests for the dispatch engine: input line → tokens → coerced
//! values → validated call → printed text.

mod codecs;
mod dispatch;
mod settings_store;
