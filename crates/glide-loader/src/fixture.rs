//! In-memory module source for tests and embedders without real artifacts.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{LoadError, Result};
use crate::name::ModuleName;
use crate::source::ModuleSource;
use crate::symbol::{Symbol, SymbolKind, SymbolTable};

/// Serves fabricated symbol tables keyed by full module name or by variant
/// key. A full-name match wins over a variant match.
#[derive(Debug, Default)]
pub struct FixtureSource {
    modules:  HashMap<String, SymbolTable>,
    variants: HashMap<String, SymbolTable>,
    attempts: RefCell<Vec<String>>,
}

impl FixtureSource {
    pub fn new() -> Self { Self::default() }

    /// Serve `table` for exactly this module name, e.g. `@valkey/valkey-glide-linux-x64`.
    pub fn with_module(mut self, name: impl Into<String>, table: SymbolTable) -> Self {
        self.modules.insert(name.into(), table);
        self
    }

    /// Serve `table` for this variant under any scope.
    pub fn with_variant(mut self, variant: impl Into<String>, table: SymbolTable) -> Self {
        self.variants.insert(variant.into(), table);
        self
    }

    /// Module names requested so far, in order.
    pub fn attempts(&self) -> Vec<String> { self.attempts.borrow().clone() }
}

impl ModuleSource for FixtureSource {
    fn open(&self, name: &ModuleName) -> Result<SymbolTable> {
        let full = name.to_string();
        self.attempts.borrow_mut().push(full.clone());

        self.modules
            .get(&full)
            .or_else(|| self.variants.get(name.variant().as_str()))
            .cloned()
            .ok_or(LoadError::NotFound {
                module: full,
                reason: "no fixture registered".to_string(),
            })
    }
}

/// Build a table with one placeholder symbol per name.
pub fn fabricate<I, S>(names: I) -> SymbolTable
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name, Symbol::new(SymbolKind::Other, 0x1000 + i * 0x10)))
        .collect()
}
