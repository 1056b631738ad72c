//! JSON object value, backed by the open-addressing hash table

use crate::hash::HashTable;
use crate::value::JsonValue;

/// An unordered mapping from unique UTF-8 keys to child values.
///
/// Enumeration order is the hash table's storage-slot order, which is not the
/// insertion order and can change as the table grows or shrinks.
#[derive(Debug, Default, PartialEq)]
pub struct JsonObject {
    fields: HashTable<JsonValue>,
}

impl JsonObject {
    pub fn new() -> Self {
        JsonObject {
            fields: HashTable::new(),
        }
    }

    /// The number of fields
    pub fn count(&self) -> usize {
        self.fields.count()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keys in enumeration order
    pub fn keys(&self) -> Vec<&str> {
        self.fields.keys()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        self.fields.get_mut(key)
    }

    /// Bind `key` to `value`; last write wins. Returns the value previously
    /// bound to the key, if any.
    pub fn set(&mut self, key: &str, value: JsonValue) -> Option<JsonValue> {
        self.fields.set(key, value)
    }

    /// Remove `key`, returning the value it was bound to
    pub fn del(&mut self, key: &str) -> Option<JsonValue> {
        self.fields.del(key)
    }

    /// The field at dense position `index` in enumeration order
    pub fn field_at(&self, index: usize) -> Option<(&str, &JsonValue)> {
        self.fields.entry_at(index)
    }

    /// Fields in enumeration order with their dense index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &JsonValue)> {
        self.fields.iter()
    }
}
