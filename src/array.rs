//! JSON array value

use crate::value::JsonValue;

/// An ordered, growable sequence of child values.
///
/// Indices run contiguously from 0 to `count() - 1`. Writing past the end
/// with [JsonArray::set] extends the array, leaving the intervening slots
/// vacant; vacant slots read as [None] and serialize as `null`.
#[derive(Debug, Default, PartialEq)]
pub struct JsonArray {
    items: Vec<Option<JsonValue>>,
}

impl JsonArray {
    pub fn new() -> Self {
        JsonArray { items: Vec::new() }
    }

    /// The number of slots, vacant ones included
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&JsonValue> {
        self.items.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
        self.items.get_mut(index).and_then(Option::as_mut)
    }

    /// Place `value` at `index`, extending the array if needed. Returns the
    /// value previously held by the slot.
    pub fn set(&mut self, index: usize, value: JsonValue) -> Option<JsonValue> {
        if index >= self.items.len() {
            self.items.resize_with(index, || None);
            self.items.push(Some(value));
            None
        } else {
            self.items[index].replace(value)
        }
    }

    /// Insert `value` at `index`, shifting the tail right. Out-of-range
    /// indices behave like [JsonArray::set].
    pub fn ins(&mut self, index: usize, value: JsonValue) {
        if index >= self.items.len() {
            self.set(index, value);
        } else {
            self.items.insert(index, Some(value));
        }
    }

    /// Append `value`
    pub fn add(&mut self, value: JsonValue) {
        self.items.push(Some(value));
    }

    /// Remove the slot at `index`, shifting the tail left. Returns the value
    /// the slot held, or [None] for a vacant or out-of-range slot.
    pub fn del(&mut self, index: usize) -> Option<JsonValue> {
        if index < self.items.len() {
            self.items.remove(index)
        } else {
            None
        }
    }
}
