use std::io::{self, Write};

use serde_json::Value;

use super::DumpSink;

/// Writes the language-native structural dump (`{:#?}`) of the value.
pub struct DebugSink<W: Write = io::Stdout> {
    out: W,
}

impl DebugSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> DebugSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DumpSink for DebugSink<W> {
    fn dump(&mut self, data: &Value) {
        writeln!(self.out, "{data:#?}").ok();
    }
}
