//! Owned JSON documents as cursor sources.
//!
//! Cursors borrow the tree they walk, so something has to own the value a
//! raw response parses into. A [`Document`] holds it and lends out root
//! cursors for as long as it lives.

use serde_json::Value;

use crate::cursor::Cursor;
use crate::errors::WalkResult;

/// A parsed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    value: Value,
}

impl Document {
    /// Parse raw response bytes as JSON. Fails with `Parse` on malformed
    /// input.
    pub fn from_json_text(bytes: &[u8]) -> WalkResult<Self> {
        Ok(Self {
            value: serde_json::from_slice(bytes)?,
        })
    }

    /// Parse a JSON string.
    pub fn from_json_str(text: &str) -> WalkResult<Self> {
        Ok(Self {
            value: serde_json::from_str(text)?,
        })
    }

    /// The parsed tree.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Root cursor over the document. Fails with `TypeMismatch` when the
    /// top-level value is a scalar.
    pub fn root(&self) -> WalkResult<Cursor<'_>> {
        Cursor::from_tree(&self.value)
    }
}
