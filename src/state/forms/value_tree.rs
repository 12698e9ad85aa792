//! Nested form value tree helpers
//!
//! The form value tree is a plain `serde_json::Value` object. These helpers
//! translate between dotted field paths and nested object keys.

use super::path::FieldPath;
use serde_json::{Map, Value};

/// Read the value stored at `path`, descending through nested objects
pub fn get_at<'a>(tree: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    path.segments()
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Write `value` at `path`, creating intermediate objects as needed.
///
/// A non-object node in the way is replaced by an object.
pub fn insert_at(tree: &mut Map<String, Value>, path: &FieldPath, value: Value) {
    let segments: Vec<&str> = path.segments().collect();
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };

    let mut node = tree;
    for segment in parents {
        let entry = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        node = match entry {
            Value::Object(map) => map,
            _ => return,
        };
    }
    node.insert(leaf.to_string(), value);
}

/// Text form of a leaf, or `None` when the node is not a leaf
pub fn leaf_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Dotted paths of every leaf in the tree
pub fn leaf_paths(tree: &Value) -> Vec<String> {
    fn walk(prefix: &str, node: &Value, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    walk(&path, child, out);
                }
            }
            _ if !prefix.is_empty() => out.push(prefix.to_string()),
            _ => {}
        }
    }

    let mut out = Vec::new();
    walk("", tree, &mut out);
    out
}
