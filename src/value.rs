//! The value model: a closed sum over the five JSON variants
//!
//! Traversals that only observe a tree (the writer) implement [Visitor] and
//! are dispatched through [JsonValue::accept]; traversals that need ownership
//! or a return value (destruction, cloning, lookup) match on the enum
//! directly.

use std::fmt::{Display, Formatter};

use crate::array::JsonArray;
use crate::number::JsonNumber;
use crate::object::JsonObject;
use crate::string::JsonString;

/// The three JSON literal constants. A `Copy` unit enum: the values are
/// process-wide singletons by construction and are never allocated or freed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JsonConst {
    True,
    False,
    Null,
}

impl JsonConst {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonConst::True => Some(true),
            JsonConst::False => Some(false),
            JsonConst::Null => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonConst::True => "true",
            JsonConst::False => "false",
            JsonConst::Null => "null",
        }
    }
}

impl Display for JsonConst {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operation bundle with one entry point per value variant
pub trait Visitor {
    fn visit_object(&mut self, object: &JsonObject);
    fn visit_array(&mut self, array: &JsonArray);
    fn visit_string(&mut self, string: &JsonString);
    fn visit_number(&mut self, number: &JsonNumber);
    fn visit_const(&mut self, constant: &JsonConst);
}

/// A node in a JSON value tree. Each node exclusively owns its children.
#[derive(Debug, PartialEq)]
pub enum JsonValue {
    Object(JsonObject),
    Array(JsonArray),
    String(JsonString),
    Number(JsonNumber),
    Const(JsonConst),
}

impl JsonValue {
    /// Double-dispatch into the visitor operation matching this variant
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            JsonValue::Object(object) => visitor.visit_object(object),
            JsonValue::Array(array) => visitor.visit_array(array),
            JsonValue::String(string) => visitor.visit_string(string),
            JsonValue::Number(number) => visitor.visit_number(number),
            JsonValue::Const(constant) => visitor.visit_const(constant),
        }
    }

    pub fn new_object() -> Self {
        JsonValue::Object(JsonObject::new())
    }

    pub fn new_array() -> Self {
        JsonValue::Array(JsonArray::new())
    }

    pub fn new_string() -> Self {
        JsonValue::String(JsonString::new())
    }

    pub fn new_number() -> Self {
        JsonValue::Number(JsonNumber::new())
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            JsonValue::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&JsonString> {
        match self {
            JsonValue::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&JsonNumber> {
        match self {
            JsonValue::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn as_const(&self) -> Option<&JsonConst> {
        match self {
            JsonValue::Const(constant) => Some(constant),
            _ => None,
        }
    }
}

impl From<JsonObject> for JsonValue {
    fn from(object: JsonObject) -> Self {
        JsonValue::Object(object)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(array: JsonArray) -> Self {
        JsonValue::Array(array)
    }
}

impl From<JsonString> for JsonValue {
    fn from(string: JsonString) -> Self {
        JsonValue::String(string)
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(number: JsonNumber) -> Self {
        JsonValue::Number(number)
    }
}

impl From<JsonConst> for JsonValue {
    fn from(constant: JsonConst) -> Self {
        JsonValue::Const(constant)
    }
}

impl From<&str> for JsonValue {
    fn from(text: &str) -> Self {
        JsonValue::String(JsonString::from(text))
    }
}
