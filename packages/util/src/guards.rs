//! Runtime type guards

use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::fmt;

/// Whether `value` is a `T`
pub fn is<T: Any>(value: &dyn Any) -> bool {
    value.is::<T>()
}

/// Borrow `value` as a `T` if it is one
pub fn narrow<T: Any>(value: &dyn Any) -> Option<&T> {
    value.downcast_ref::<T>()
}

/// Whether an option holds a value; handy in `filter`
pub fn is_present<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Whether `s` is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Shape of a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Any JSON number
    Number,
    /// A string
    String,
    /// An array
    Array,
    /// An object
    Object,
}

impl JsonKind {
    /// Lowercase name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a JSON value
pub fn json_kind(value: &Value) -> JsonKind {
    match value {
        Value::Null => JsonKind::Null,
        Value::Bool(_) => JsonKind::Bool,
        Value::Number(_) => JsonKind::Number,
        Value::String(_) => JsonKind::String,
        Value::Array(_) => JsonKind::Array,
        Value::Object(_) => JsonKind::Object,
    }
}
