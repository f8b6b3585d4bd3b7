//! Loosely typed values held by the toolbelt collections.

use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::hash::Hash;

/// A dynamically typed value.
///
/// `Undefined` and `Null` are distinct: `Undefined` marks an entry with no
/// value at all (a bare `key` in a query string), while `Null` is an
/// explicit empty value (`key=`).
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Hash(Hash),
}

impl Value {
    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Hash(_) => "Hash",
        }
    }

    /// The "interpret as string" form used by query-string serialization:
    /// `Null` and `Undefined` become the empty string, everything else its
    /// natural string form.
    pub fn interpret(&self) -> String {
        match self {
            Value::Undefined | Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Debug-oriented rendering: strings are single-quoted and escaped,
    /// arrays and hashes render their elements recursively.
    pub fn inspect(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => inspect_str(s),
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().map(Value::inspect).collect();
                format!("[{}]", parts.join(", "))
            }
            Value::Hash(hash) => hash.inspect(),
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }
}

/// Single-quoted string rendering with `\` and `'` escaped.
pub(crate) fn inspect_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            // Int and Float are both "number"; compare numerically
            (Value::Int(a), Value::Float(b)) => (*a as f64) == *b,
            (Value::Float(a), Value::Int(b)) => *a == (*b as f64),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, val) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            Value::Hash(hash) => write!(f, "{}", hash),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Undefined has no JSON form; inside arrays it becomes null,
            // inside hashes the whole entry is skipped (see Hash).
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Hash(hash) => hash.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
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

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Hash> for Value {
    fn from(hash: Hash) -> Self {
        Value::Hash(hash)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_interpret() {
        assert_eq!(Value::Null.interpret(), "");
        assert_eq!(Value::Undefined.interpret(), "");
        assert_eq!(Value::Int(42).interpret(), "42");
        assert_eq!(Value::from("hi").interpret(), "hi");
        assert_eq!(Value::Bool(false).interpret(), "false");
    }

    #[test]
    fn test_inspect_quotes_strings() {
        assert_eq!(Value::from("it's").inspect(), r"'it\'s'");
        assert_eq!(Value::from(r"a\b").inspect(), r"'a\\b'");
        assert_eq!(Value::Null.inspect(), "null");
        assert_eq!(Value::Undefined.inspect(), "undefined");
    }

    #[test]
    fn test_inspect_array() {
        let arr = Value::Array(vec![Value::Int(1), Value::from("x")]);
        assert_eq!(arr.inspect(), "[1, 'x']");
    }

    #[test]
    fn test_numeric_equality_across_variants() {
        assert_eq!(Value::Int(2), Value::Float(2.0));
        assert_ne!(Value::Int(2), Value::Float(2.5));
        assert_ne!(Value::Int(1), Value::from("1"));
        assert_ne!(Value::Null, Value::Undefined);
    }

    #[test]
    fn test_serialize_undefined_in_array_as_null() {
        let arr = Value::Array(vec![Value::Int(1), Value::Undefined]);
        let json = serde_json::to_string(&arr).unwrap();
        assert_eq!(json, "[1,null]");
    }
}
