//! Deep destruction of value trees
//!
//! Children are released before their parents: objects are emptied field by
//! field, arrays back to front. Const values are singletons and are never
//! freed.

use crate::value::JsonValue;

/// Recursively dismantle a tree
pub fn kill(value: JsonValue) {
    match value {
        JsonValue::Object(mut object) => loop {
            let key = match object.field_at(0) {
                Some((key, _)) => key.to_owned(),
                None => break,
            };
            if let Some(child) = object.del(&key) {
                kill(child);
            }
        },
        JsonValue::Array(mut array) => {
            for index in (0..array.count()).rev() {
                if let Some(child) = array.del(index) {
                    kill(child);
                }
            }
        }
        // leaf nodes are released here; consts are no-ops
        JsonValue::String(_) | JsonValue::Number(_) | JsonValue::Const(_) => (),
    }
}

#[cfg(test)]
mod tests {
    use super::kill;
    use crate::parser::Parser;
    use crate::value::{JsonConst, JsonValue};

    #[test]
    fn should_dismantle_a_nested_tree() {
        let value = Parser::new()
            .parse_str("{\"a\": [1, {\"b\": \"text\"}], \"c\": null}")
            .unwrap();
        kill(value);
    }

    #[test]
    fn should_accept_const_singletons() {
        kill(JsonValue::Const(JsonConst::True));
    }

    #[test]
    fn should_handle_deeply_nested_arrays() {
        let mut source = String::new();
        for _ in 0..64 {
            source.push('[');
        }
        source.push('1');
        for _ in 0..64 {
            source.push(']');
        }
        let value = Parser::new().parse_str(&source).unwrap();
        kill(value);
    }
}
