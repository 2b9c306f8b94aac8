//! JSON rendering of a symbol table.
//!
//! Output is an object keyed by constant name in declaration order,
//! pretty-printed with two-space indentation and no trailing newline.
//! [`from_json_str`] reads the same shape back.

use crate::lexer;
use crate::symbols::SymbolTable;
use crate::value::Value;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SymbolTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = SymbolTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping constant names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SymbolTable, A::Error> {
        let mut table = SymbolTable::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            if !lexer::is_identifier(&name) {
                return Err(de::Error::custom(format!("invalid constant name '{}'", name)));
            }
            if let Err(existing) = table.declare(name, value, None) {
                return Err(de::Error::custom(format!(
                    "duplicate constant '{}'",
                    existing.name
                )));
            }
        }
        Ok(table)
    }
}

/// Render a table as pretty JSON.
pub fn to_json_string(table: &SymbolTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}

/// Load a table from JSON produced by [`to_json_string`].
pub fn from_json_str(text: &str) -> Result<SymbolTable, serde_json::Error> {
    serde_json::from_str(text)
}
