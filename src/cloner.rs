//! Deep copy by round trip through the writer and the parser
//!
//! Rather than walking and copying nodes structurally, a clone is produced by
//! serializing the tree into an in-memory buffer and re-parsing that buffer.
//! The unicode-escaped form is used so that raw UTF-16 units - lone surrogate
//! halves included - survive the trip exactly.

use crate::parser::Parser;
use crate::value::JsonValue;
use crate::writer::{to_vec, WriteOptions};

/// Produce a structurally independent deep copy of a tree.
///
/// Const values are not copied: the same singleton comes back without a round
/// trip. Vacant array slots serialize as `null` and therefore clone as the
/// null constant. A `None` result mirrors the parser's silent failure policy
/// and does not occur for trees built through this crate's own API.
pub fn deep_clone(value: &JsonValue) -> Option<JsonValue> {
    if let JsonValue::Const(constant) = value {
        return Some(JsonValue::Const(*constant));
    }
    let bytes = to_vec(value, WriteOptions::ESCAPE_UNICODE);
    Parser::new().parse_bytes_with(&bytes, |_| {})
}
