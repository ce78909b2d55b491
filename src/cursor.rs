//! Immutable traversal positions over a JSON tree.
//!
//! A [`Cursor`] is a snapshot of one position: the container it points at,
//! the key it was reached under, and a shared link to the position it was
//! entered from. Navigation consumes the cursor and returns a new one, so a
//! cloned cursor doubles as a checkpoint for independent branches.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use tracing::instrument;

use crate::errors::{WalkError, WalkResult};
use crate::export::{export, Depth};
use crate::output::DumpSink;

/// Key under which a cursor position was reached.
///
/// `Index` keys come from list-element navigation and permit moving to the
/// next sibling; `Name` keys come from mapping navigation and do not. The
/// root carries the name "root", but root-ness is decided by the missing
/// parent link, never by the key text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKey {
    Name(String),
    Index(usize),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Name(name) => write!(f, "{name}"),
            NodeKey::Index(index) => write!(f, "{index}"),
        }
    }
}

fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Human-readable kind of a JSON value, used in error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// One position in a traversal of a JSON tree.
///
/// The cursor borrows the tree and never mutates it; the parent chain is
/// shared through `Rc`, so several branches may hang off the same ancestor
/// without copying anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor<'a> {
    key: NodeKey,
    data: &'a Value,
    parent: Option<Rc<Cursor<'a>>>,
}

impl<'a> Cursor<'a> {
    /// Wrap a pre-parsed tree as the root position.
    ///
    /// Fails with `TypeMismatch` when the value is a scalar: only lists and
    /// mappings are navigable.
    pub fn from_tree(data: &'a Value) -> WalkResult<Self> {
        if !is_container(data) {
            return Err(WalkError::TypeMismatch {
                key: NodeKey::Name("root".to_string()),
                found: kind_name(data),
            });
        }
        Ok(Self {
            key: NodeKey::Name("root".to_string()),
            data,
            parent: None,
        })
    }

    /// Key this position was reached under.
    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    /// The container at this position.
    pub fn data(&self) -> &'a Value {
        self.data
    }

    /// Unified child lookup over both container kinds. Numeric navigation
    /// against a mapping falls back to the decimal string key, so
    /// numerically keyed mappings behave like lists.
    fn child(&self, key: &NodeKey) -> Option<&'a Value> {
        match (self.data, key) {
            (Value::Object(map), NodeKey::Name(name)) => map.get(name),
            (Value::Object(map), NodeKey::Index(index)) => map.get(&index.to_string()),
            (Value::Array(items), NodeKey::Index(index)) => items.get(*index),
            _ => None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn enter(self, key: NodeKey) -> WalkResult<Self> {
        let child = self.child(&key).ok_or_else(|| WalkError::MissingKey {
            key: key.clone(),
            node: self.key.clone(),
        })?;
        if !is_container(child) {
            return Err(WalkError::TypeMismatch {
                key,
                found: kind_name(child),
            });
        }
        Ok(Self {
            key,
            data: child,
            parent: Some(Rc::new(self)),
        })
    }

    /// Step into the container stored under `key` in the current mapping.
    pub fn enter_mapping(self, key: &str) -> WalkResult<Self> {
        self.enter(NodeKey::Name(key.to_string()))
    }

    /// Same contract as [`enter_mapping`](Self::enter_mapping); reads better
    /// when the target field conventionally holds a list.
    pub fn enter_list(self, key: &str) -> WalkResult<Self> {
        self.enter(NodeKey::Name(key.to_string()))
    }

    /// Shortcut for the ubiquitous `data` envelope field.
    pub fn enter_data_field(self) -> WalkResult<Self> {
        self.enter_mapping("data")
    }

    /// Step into the element at `index` of the current list.
    pub fn enter_list_element(self, index: usize) -> WalkResult<Self> {
        self.enter(NodeKey::Index(index))
    }

    /// Step back to the position this cursor was entered from.
    #[instrument(level = "trace", skip(self))]
    pub fn exit_node(self) -> WalkResult<Self> {
        let parent = self.parent.ok_or(WalkError::AtRoot)?;
        Ok(Rc::try_unwrap(parent).unwrap_or_else(|shared| (*shared).clone()))
    }

    /// Move to the element after this one in the parent list.
    ///
    /// Implemented as exit + re-enter at `index + 1`, so sibling moves share
    /// the entry validation and always check against the live parent
    /// container.
    #[instrument(level = "trace", skip(self))]
    pub fn next_sibling(self) -> WalkResult<Self> {
        let index = match self.key {
            NodeKey::Index(index) => index,
            NodeKey::Name(_) => {
                return Err(WalkError::InvalidOperation(
                    "cannot move to next sibling when current node is keyed by name".to_string(),
                ))
            }
        };
        self.exit_node()?.enter_list_element(index + 1)
    }

    /// Dotted path from the root to this position, root first.
    pub fn path(&self) -> String {
        self.render_path(String::new())
    }

    fn render_path(&self, suffix: String) -> String {
        match &self.parent {
            None => format!("root{suffix}"),
            Some(parent) => parent.render_path(format!(".{}{}", self.key, suffix)),
        }
    }

    /// Dump the current subtree, truncated at `max_depth`, into `sink`.
    pub fn dump(self, max_depth: Depth, sink: &mut dyn DumpSink) -> Self {
        sink.dump(&export(self.data, max_depth));
        self
    }

    /// Dump the dotted traversal path into `sink`.
    pub fn dump_path(self, sink: &mut dyn DumpSink) -> Self {
        sink.dump(&Value::String(self.path()));
        self
    }

    /// Dump the keys of the current container into `sink`: mapping keys as
    /// strings, list indices as numbers.
    pub fn dump_keys(self, sink: &mut dyn DumpSink) -> Self {
        let keys: Vec<Value> = match self.data {
            Value::Object(map) => map.keys().map(|key| Value::String(key.clone())).collect(),
            Value::Array(items) => (0..items.len()).map(Value::from).collect(),
            _ => Vec::new(),
        };
        sink.dump(&Value::Array(keys));
        self
    }
}
