//! Process-wide name bindings produced by a blanket merge of a module's table.

use std::collections::BTreeMap;
use std::collections::btree_map;

use glide_loader::{Symbol, SymbolTable};

/// Flat name → symbol bindings. Later merges overwrite earlier bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalScope {
    bindings: BTreeMap<String, Symbol>,
}

impl GlobalScope {
    pub fn new() -> Self { Self::default() }

    pub fn bind(&mut self, name: impl Into<String>, symbol: Symbol) -> Option<Symbol> {
        self.bindings.insert(name.into(), symbol)
    }

    /// Copy every entry of `table` in, returning the names whose previous
    /// binding was replaced by a different value.
    pub fn merge(&mut self, table: &SymbolTable) -> Vec<String> {
        let mut overwritten = Vec::new();
        for (name, symbol) in table {
            if let Some(previous) = self.bindings.insert(name.clone(), *symbol)
                && previous != *symbol
            {
                overwritten.push(name.clone());
            }
        }
        overwritten
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> { self.bindings.get(name) }

    pub fn contains(&self, name: &str) -> bool { self.bindings.contains_key(name) }

    pub fn len(&self) -> usize { self.bindings.len() }

    pub fn is_empty(&self) -> bool { self.bindings.is_empty() }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Symbol> { self.bindings.iter() }
}
