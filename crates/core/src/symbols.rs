//! The constant symbol table: declared names mapped to resolved values,
//! kept in declaration order.

use crate::value::Value;
use std::collections::HashMap;

/// One declared constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub value: Value,
    /// Source line of the declaration. `None` for tables loaded from JSON.
    pub line: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<Constant>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.constant(name).map(|c| &c.value)
    }

    pub fn constant(&self, name: &str) -> Option<&Constant> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Line on which `name` was declared, if it was declared from source.
    pub fn declared_at(&self, name: &str) -> Option<u32> {
        self.constant(name).and_then(|c| c.line)
    }

    /// Bind a new constant. Returns the existing entry unchanged when `name`
    /// is already bound; the table is not modified in that case.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        value: Value,
        line: Option<u32>,
    ) -> Result<&Constant, &Constant> {
        let name = name.into();
        if let Some(&i) = self.index.get(&name) {
            return Err(&self.entries[i]);
        }
        Ok(self.bind(name, value, line))
    }

    /// Append a constant whose name the caller has checked is unbound.
    pub(crate) fn bind(&mut self, name: String, value: Value, line: Option<u32>) -> &Constant {
        debug_assert!(!self.index.contains_key(&name), "rebinding '{}'", name);
        let i = self.entries.len();
        self.index.insert(name.clone(), i);
        self.entries.push(Constant { name, value, line });
        &self.entries[i]
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|c| (c.name.as_str(), &c.value))
    }

    pub fn constants(&self) -> &[Constant] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name.as_str())
    }
}

/// Two tables are equal when they bind the same names to the same values in
/// the same order. Declaration lines are not compared.
impl PartialEq for SymbolTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for SymbolTable {}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Constant;
    type IntoIter = std::slice::Iter<'a, Constant>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_preserves_order() {
        let mut table = SymbolTable::new();
        table.declare("zeta", Value::int(1), Some(1)).unwrap();
        table.declare("alpha", Value::int(2), Some(2)).unwrap();
        table.declare("mid", Value::List(vec![]), Some(4)).unwrap();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(table.declared_at("mid"), Some(4));
    }

    #[test]
    fn redeclaration_leaves_first_binding() {
        let mut table = SymbolTable::new();
        table.declare("a", Value::int(5), Some(1)).unwrap();
        let existing = table.declare("a", Value::int(6), Some(2)).unwrap_err();
        assert_eq!(existing.line, Some(1));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a"), Some(&Value::int(5)));
    }

    #[test]
    fn equality_ignores_lines_but_not_order() {
        let mut a = SymbolTable::new();
        a.declare("x", Value::int(1), Some(3)).unwrap();
        a.declare("y", Value::int(2), Some(9)).unwrap();

        let mut b = SymbolTable::new();
        b.declare("x", Value::int(1), None).unwrap();
        b.declare("y", Value::int(2), None).unwrap();
        assert_eq!(a, b);

        let mut c = SymbolTable::new();
        c.declare("y", Value::int(2), None).unwrap();
        c.declare("x", Value::int(1), None).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn missing_names_are_absent() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert!(!table.contains("x"));
        assert_eq!(table.get("x"), None);
        assert_eq!(table.declared_at("x"), None);
    }
}
