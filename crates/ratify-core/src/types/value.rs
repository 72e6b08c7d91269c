//! Runtime value types for Ratify records
//!
//! The `Value` enum represents any field value that can appear in a
//! policy/rating record, similar to JSON values but with additional
//! type safety. Objects use `BTreeMap` so that iteration order (and
//! therefore serialized output and trace text) is deterministic.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A top-level data record: the input to (and output of) an evaluation.
pub type Record = BTreeMap<String, Value>;

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Object (ordered key-value map)
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Name of this value's type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// True for `Null` (a missing field reads as `Null`, so the two are
    /// indistinguishable here)
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Coerce this value to a number.
    ///
    /// Numbers pass through; strings that parse cleanly as f64 are
    /// accepted. Everything else is a type mismatch.
    pub fn coerce_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::String(s) => s.trim().parse::<f64>().map_err(|_| CoreError::TypeMismatch {
                expected: "number",
                actual: "string",
            }),
            other => Err(CoreError::TypeMismatch {
                expected: "number",
                actual: other.type_name(),
            }),
        }
    }

    /// Numeric comparison after coercion.
    ///
    /// Returns `None` when either side is not numeric-coercible (or the
    /// comparison is undefined, e.g. NaN). Relational operators treat
    /// `None` as a type mismatch.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        let a = self.coerce_number().ok()?;
        let b = other.coerce_number().ok()?;
        a.partial_cmp(&b)
    }

    /// Emptiness check for strings, arrays and objects.
    ///
    /// `Null` counts as empty (a missing field reads as `Null`).
    /// Numbers and booleans have no emptiness and fail with a type
    /// mismatch.
    pub fn is_empty(&self) -> Result<bool> {
        match self {
            Value::Null => Ok(true),
            Value::String(s) => Ok(s.is_empty()),
            Value::Array(items) => Ok(items.is_empty()),
            Value::Object(map) => Ok(map.is_empty()),
            other => Err(CoreError::TypeMismatch {
                expected: "string, array or object",
                actual: other.type_name(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => {
                // Render whole numbers without the trailing ".0"
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
