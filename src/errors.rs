use thiserror::Error;

use crate::cursor::NodeKey;

/// Errors surfaced by cursor navigation, assertions, and JSON parsing.
///
/// Every failure is terminal for the fluent chain: the first broken call
/// returns the error and no later call runs.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("key \"{key}\" not found in node \"{node}\"")]
    MissingKey { key: NodeKey, node: NodeKey },

    #[error("value at \"{key}\" is not a container: found {found}")]
    TypeMismatch { key: NodeKey, found: &'static str },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("no parent node exists, exiting is not possible; use dump to show data")]
    AtRoot,

    #[error("assertion failed: {0}")]
    AssertionFailed(String),

    #[error("malformed json input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for cursor operations.
pub type WalkResult<T> = Result<T, WalkError>;
