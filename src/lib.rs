//! Fluent traversal and assertion cursor for nested JSON structures.
//!
//! Test code walks into a parsed API response one container at a time,
//! asserts properties of the current node, steps back out, and moves
//! between list siblings. Every navigation call consumes the cursor and
//! returns a fresh immutable one; failures surface as [`WalkError`] values
//! that halt the chain at the first broken expectation. Dump operations
//! hand depth-truncated copies of the current subtree to a pluggable
//! [`DumpSink`] for diagnostics.
//!
//! ```
//! use serde_json::json;
//! use structwalk::Cursor;
//!
//! # fn main() -> structwalk::WalkResult<()> {
//! let tree = json!({ "array": [ {"id": 1}, {"id": 2}, {"id": 3} ] });
//!
//! Cursor::from_tree(&tree)?
//!     .enter_list("array")?
//!     .assert_count(3)?
//!     .enter_list_element(0)?
//!     .assert_identical("id", 1)?
//!     .next_sibling()?
//!     .assert_identical("id", 2)?
//!     .next_sibling()?
//!     .assert_identical("id", 3)?;
//! # Ok(())
//! # }
//! ```

pub mod constraint;
pub mod cursor;
pub mod document;
pub mod errors;
pub mod export;
pub mod output;
pub mod util;

pub use constraint::Constraint;
pub use cursor::{Cursor, NodeKey};
pub use document::Document;
pub use errors::{WalkError, WalkResult};
pub use export::{export, Depth, DEFAULT_DUMP_DEPTH};
pub use output::{BufferedSink, DebugSink, DumpSink, EchoSink, TreeSink};
