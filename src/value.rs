//! # Raw Request Values
//!
//! The hydrator never sees wire formats. Host applications decode their request (JSON body,
//! query string, form data) into a [`Request`], a map of string keys to [`Value`]s, and hand
//! that over. `Value` is a closed sum so the coercer can dispatch with a plain `match`.
//!
//! `Value` implements `Deserialize` untagged, so anything serde can decode lands here directly:
//!
//! ```rust
//! use input_hydrator::{Request, Value};
//!
//! let request: Request = serde_json::from_str(r#"{"limit": "25", "score": 0.9}"#).unwrap();
//! assert_eq!(request["limit"], Value::from("25"));
//! assert_eq!(request["score"], Value::Float(0.9));
//! ```

use serde::Deserialize;
use std::collections::HashMap;

/// Decoded request data: string keys to untyped values.
pub type Request = HashMap<String, Value>;

/// One untyped value of a [`Request`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Request),
}

impl Value {
    /// Name of the value's runtime type, as reported in bad-input messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Null or the empty string, the two values a nullable field reads as "no value".
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Request> for Value {
    fn from(value: Request) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
