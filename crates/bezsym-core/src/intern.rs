//! Symbol name interning.

use hashbrown::HashMap;

use crate::handle::SymbolId;

/// Maps symbol names to dense identifiers and back.
///
/// Identifiers are handed out in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    ids: HashMap<String, SymbolId>,
    names: Vec<String>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name, returning its identifier.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` symbols are interned.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let index = u32::try_from(self.names.len()).expect("symbol table capacity exceeded");
        let id = SymbolId::new(index);
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Looks up a name without interning it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.ids.get(name).copied()
    }

    /// Returns the name of an identifier.
    #[must_use]
    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id.index() as usize).map(String::as_str)
    }

    /// Returns true if the name has been interned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Returns the number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table() {
        let mut table = SymbolTable::new();

        let x = table.intern("x");
        let y = table.intern("y");
        let x_again = table.intern("x");

        assert_eq!(x, x_again);
        assert_ne!(x, y);
        assert_eq!(table.name(y), Some("y"));
        assert_eq!(table.lookup("z"), None);
        assert!(table.contains("x"));
        assert_eq!(table.len(), 2);
    }
}
