use std::io::{self, Write};

use serde_json::Value;

use super::{text_form, DumpSink};

/// Writes the value's text form to the writer with no added formatting.
pub struct EchoSink<W: Write = io::Stdout> {
    out: W,
}

impl EchoSink<io::Stdout> {
    /// Echo to the process's standard output stream.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> EchoSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DumpSink for EchoSink<W> {
    fn dump(&mut self, data: &Value) {
        write!(self.out, "{}", text_form(data)).ok();
    }
}
