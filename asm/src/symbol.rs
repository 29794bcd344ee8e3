use arch::reg::{predefined, MAX_ADDR, VAR_BASE};
use indexmap::IndexMap;

use crate::error::Error;

/// Where a symbol got its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Predefined,
    /// `(name)` declared at this source line
    Label(usize),
    /// First used as `@name` at this source line
    Variable(usize),
}

/// Name -> address map of a single assembly run.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: IndexMap<String, (Origin, u16)>,
    next_var: u16,
}

impl SymbolTable {
    /// Table holding only the predefined names.
    pub fn new() -> Self {
        let mut symbols = IndexMap::new();
        for (name, addr) in predefined() {
            symbols.insert(name, (Origin::Predefined, addr));
        }
        SymbolTable {
            symbols,
            next_var: VAR_BASE,
        }
    }

    /// Last write wins. Returns the binding that was replaced.
    pub fn bind_label(&mut self, name: &str, addr: u16, line_idx: usize) -> Option<(Origin, u16)> {
        self.symbols
            .insert(name.to_string(), (Origin::Label(line_idx), addr))
    }

    /// Address of `name`, binding it to the next free RAM address on first use.
    pub fn resolve_or_allocate(&mut self, name: &str, line_idx: usize) -> Result<u16, Error> {
        if let Some(addr) = self.get(name) {
            return Ok(addr);
        }
        if self.next_var > MAX_ADDR {
            return Err(Error::AddressSpaceExhausted(name.to_string()));
        }
        let addr = self.next_var;
        self.symbols
            .insert(name.to_string(), (Origin::Variable(line_idx), addr));
        self.next_var += 1;
        Ok(addr)
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).map(|(_, addr)| *addr)
    }

    pub fn origin(&self, name: &str) -> Option<Origin> {
        self.symbols.get(name).map(|(origin, _)| *origin)
    }

    /// Address the next new variable would receive.
    pub fn next_free(&self) -> u16 {
        self.next_var
    }

    /// In insertion order: predefined names, labels, then variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Origin, u16)> {
        self.symbols
            .iter()
            .map(|(name, (origin, addr))| (name.as_str(), *origin, *addr))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_names() {
        let table = SymbolTable::new();
        assert_eq!(table.len(), 23);
        assert_eq!(table.get("R0"), Some(0));
        assert_eq!(table.get("R13"), Some(13));
        assert_eq!(table.get("SP"), Some(0));
        assert_eq!(table.get("LCL"), Some(1));
        assert_eq!(table.get("ARG"), Some(2));
        assert_eq!(table.get("THIS"), Some(3));
        assert_eq!(table.get("THAT"), Some(4));
        assert_eq!(table.get("SCREEN"), Some(16384));
        assert_eq!(table.get("KBD"), Some(24576));
        assert_eq!(table.get("r0"), None);
        assert_eq!(table.origin("KBD"), Some(Origin::Predefined));
    }

    #[test]
    fn label_last_write_wins() {
        let mut table = SymbolTable::new();
        assert_eq!(table.bind_label("LOOP", 4, 10), None);
        assert_eq!(table.bind_label("LOOP", 9, 20), Some((Origin::Label(10), 4)));
        assert_eq!(table.get("LOOP"), Some(9));
        assert_eq!(
            table.bind_label("R1", 7, 30),
            Some((Origin::Predefined, 1))
        );
        assert_eq!(table.get("R1"), Some(7));
    }

    #[test]
    fn variables() {
        let mut table = SymbolTable::new();
        assert_eq!(table.resolve_or_allocate("i", 0).unwrap(), 16);
        assert_eq!(table.resolve_or_allocate("sum", 1).unwrap(), 17);
        assert_eq!(table.resolve_or_allocate("i", 2).unwrap(), 16);
        assert_eq!(table.resolve_or_allocate("R5", 3).unwrap(), 5);
        assert_eq!(table.next_free(), 18);
        assert_eq!(table.origin("sum"), Some(Origin::Variable(1)));
    }

    #[test]
    fn labels_are_not_allocated() {
        let mut table = SymbolTable::new();
        table.bind_label("END", 42, 0);
        assert_eq!(table.resolve_or_allocate("END", 5).unwrap(), 42);
        assert_eq!(table.next_free(), 16);
    }

    #[test]
    fn exhausted() {
        let mut table = SymbolTable::new();
        for i in 16..=MAX_ADDR {
            assert_eq!(table.resolve_or_allocate(&format!("v{i}"), 0).unwrap(), i);
        }
        assert!(matches!(
            table.resolve_or_allocate("one_more", 1),
            Err(Error::AddressSpaceExhausted(name)) if name == "one_more"
        ));
        assert_eq!(table.resolve_or_allocate("v16", 2).unwrap(), 16);
    }
}
