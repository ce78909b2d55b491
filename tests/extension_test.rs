//! Domain-specific assertion helpers composed around the core cursor.
//!
//! The cursor type is not meant to be subclassed; extension happens by
//! wrapping it and returning the wrapper's own type from every helper, which
//! keeps fluent chains in the caller's vocabulary.

use serde_json::{json, Value};

use structwalk::{Cursor, WalkResult};

struct PayloadAssertion<'a> {
    cursor: Cursor<'a>,
}

impl<'a> PayloadAssertion<'a> {
    fn from_tree(tree: &'a Value) -> WalkResult<Self> {
        Ok(Self {
            cursor: Cursor::from_tree(tree)?,
        })
    }

    /// The `data` envelope carries a disabled flag under `property`.
    fn assert_disabled(self, property: &str) -> WalkResult<Self> {
        let cursor = self.cursor.enter_data_field()?.assert_is_false(property)?;
        Ok(Self { cursor })
    }

    /// Every element of the `data.items` list carries the expected ids, in
    /// order.
    fn assert_item_ids(self, expected: &[i64]) -> WalkResult<Self> {
        let mut cursor = self
            .cursor
            .enter_data_field()?
            .enter_list("items")?
            .assert_count(expected.len())?
            .enter_list_element(0)?;
        for (position, id) in expected.iter().enumerate() {
            if position > 0 {
                cursor = cursor.next_sibling()?;
            }
            cursor = cursor.assert_identical("id", *id)?;
        }
        let cursor = cursor.exit_node()?.exit_node()?.exit_node()?;
        Ok(Self { cursor })
    }
}

#[test]
fn test_wrapper_keeps_its_own_fluent_type() {
    let tree = json!({ "data": { "id": false } });

    PayloadAssertion::from_tree(&tree)
        .unwrap()
        .assert_disabled("id")
        .unwrap();
}

#[test]
fn test_wrapper_helpers_chain_like_core_operations() {
    let tree = json!({
        "data": {
            "id": false,
            "items": [ {"id": 1}, {"id": 2}, {"id": 3} ]
        }
    });

    PayloadAssertion::from_tree(&tree)
        .unwrap()
        .assert_item_ids(&[1, 2, 3])
        .unwrap()
        .assert_disabled("id")
        .unwrap();
}
