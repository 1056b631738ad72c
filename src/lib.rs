//! A JSON text ⇄ tree codec with automatic Unicode encoding detection.
//!
//! JSON bytes of unknown encoding (UTF-8, UTF-16 or UTF-32 in either
//! endianness, no byte-order mark required) are normalized by the [encoding]
//! layer, parsed by a recursive descent [parser] into a [JsonValue] tree, and
//! serialized back to bytes by the [writer] under configurable formatting.
//! Object fields are backed by an open-addressing [hash] table; trees are
//! traversed through the visitor contract for serialization, and by matching
//! for [cloner] round-trip copies, [killer] deep destruction and [lookup]
//! path descent.
//!
//! ```
//! use gimlet_json::{json_path, lookup, Parser, WriteOptions};
//!
//! let value = Parser::new()
//!     .parse_str(r#"{"main":{"width":800}}"#)
//!     .unwrap();
//! let width = lookup(&value, &json_path!["main", "width"]).unwrap();
//! assert_eq!(width.as_number().unwrap().to_int(), 800);
//! assert_eq!(
//!     gimlet_json::to_text(&value, WriteOptions::COMPACT),
//!     r#"{"main":{"width":800}}"#
//! );
//! ```

pub mod array;
pub mod cloner;
pub mod coords;
pub mod encoding;
pub mod errors;
pub mod hash;
pub mod killer;
pub mod lookup;
pub mod number;
pub mod object;
pub mod parser;
pub mod string;
pub mod value;
pub mod writer;
#[cfg(test)]
mod test_macros;

pub use array::JsonArray;
pub use cloner::deep_clone;
pub use coords::Coords;
pub use encoding::{DecodingStream, Encoding, InputStream};
pub use errors::{Details, ParserError, ParserResult, Stage};
pub use hash::{HashTable, KeySet, StringKeys};
pub use killer::kill;
pub use lookup::{lookup, Path, PathComponent};
pub use number::JsonNumber;
pub use object::JsonObject;
pub use parser::Parser;
pub use string::JsonString;
pub use value::{JsonConst, JsonValue, Visitor};
pub use writer::{to_text, to_vec, write_to, WriteOptions, Writer};
