/*
Workaround for E0116: serde_json::Value is a foreign type, so the tree
conversion lives on a local trait implemented for it.
 */
use std::io::{self, Write};

use serde_json::Value;
use termtree::Tree;

use super::DumpSink;

pub trait TreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeConvert for Value {
    fn to_tree_string(&self) -> Tree<String> {
        branch(".".to_string(), self)
    }
}

fn branch(label: String, value: &Value) -> Tree<String> {
    match value {
        Value::Object(map) => Tree::new(label)
            .with_leaves(map.iter().map(|(key, child)| branch(key.clone(), child))),
        Value::Array(items) => Tree::new(label).with_leaves(
            items
                .iter()
                .enumerate()
                .map(|(index, child)| branch(index.to_string(), child)),
        ),
        scalar => Tree::new(format!("{label}: {scalar}")),
    }
}

/// Renders dumped containers as an ASCII tree, one entry per line.
pub struct TreeSink<W: Write = io::Stdout> {
    out: W,
}

impl TreeSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TreeSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DumpSink for TreeSink<W> {
    fn dump(&mut self, data: &Value) {
        writeln!(self.out, "{}", data.to_tree_string()).ok();
    }
}
