//! Constant values.
//!
//! A reference `@(name)` never survives parsing: it is replaced by a copy of
//! the value already bound to `name`, so only two shapes exist at runtime.

use crate::lexer;
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// A positive integer of any size, held as its decimal digits.
///
/// The digits always satisfy the integer literal rule: no sign, no leading
/// zero, not `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer(String);

impl Integer {
    /// Accepts exactly the text of an integer literal.
    pub fn parse(text: &str) -> Option<Integer> {
        lexer::is_integer_literal(text).then(|| Integer(text.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as `u64`, when it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<NonZeroU64> for Integer {
    fn from(n: NonZeroU64) -> Self {
        Integer(n.to_string())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Written as a bare JSON number, whatever its width.
impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::from_str::<serde_json::Number>(&self.0)
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Positive integer literal (no leading zeros, never `0`).
    Int(Integer),
    /// Ordered list; elements may themselves be lists.
    List(Vec<Value>),
}

impl Value {
    #[cfg(test)]
    pub(crate) fn int(n: u64) -> Value {
        Value::Int(Integer(n.to_string()))
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Value::Int(n) => Some(n),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            Value::Int(_) => None,
        }
    }

    /// Deepest list nesting inside this value. Integers have depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Value::Int(_) => 0,
            Value::List(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
        }
    }
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Value::Int(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = String;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Number(n) => {
                let digits = n.to_string();
                Integer::parse(&digits)
                    .map(Value::Int)
                    .ok_or_else(|| format!("invalid integer {}", digits))
            }
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            other => Err(format!("expected an integer or a list, got {}", other)),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::try_from(json).map_err(de::Error::custom)
    }
}

/// Renders in source syntax: `5`, `{1.2.3}`, `{}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::List(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("}")
            }
        }
    }
}
