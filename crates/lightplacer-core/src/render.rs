//! Rendering merged entries as the output document.
//!
//! Entries go through a `serde_json::Value` tree, whose object maps keep keys
//! sorted, and are then pretty-printed with two-space indentation. Absent
//! fields are dropped by the model's serde attributes, and flags are written
//! as one `|`-joined string.

use serde::Serialize;
use serde_json::Value;

use crate::entry::Entry;

/// Build the sorted-key tree for any serializable value.
pub fn to_tree<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Value> {
    serde_json::to_value(value)
}

/// Render the final document: an array of entry objects.
pub fn render(entries: &[Entry]) -> serde_json::Result<String> {
    let tree = to_tree(entries)?;
    serde_json::to_string_pretty(&tree)
}
