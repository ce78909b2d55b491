use serde_json::Value;

use super::DumpSink;

/// Retains the last dumped value for later inspection by the test.
#[derive(Debug, Default)]
pub struct BufferedSink {
    data: Option<Value>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value passed to `dump`; `None` before the first call.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

impl DumpSink for BufferedSink {
    fn dump(&mut self, data: &Value) {
        self.data = Some(data.clone());
    }
}
