//! Dump sinks: pluggable consumers for debug output.
//!
//! The cursor never prints anything itself; dump operations hand the
//! exported value to a [`DumpSink`] and move on. Writing, buffering, and
//! formatting are entirely the sink's business.

mod buffered;
mod debug;
mod echo;
mod tree;

use serde_json::Value;

pub use buffered::BufferedSink;
pub use debug::DebugSink;
pub use echo::EchoSink;
pub use tree::{TreeConvert, TreeSink};

/// Consumer of dumped values.
pub trait DumpSink {
    fn dump(&mut self, data: &Value);
}

/// Text form used by [`EchoSink`]: strings raw, everything else as compact
/// JSON.
pub(crate) fn text_form(data: &Value) -> String {
    match data {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
