use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::sync::Arc;

use libloading::Library;

/// What an exported symbol is, as declared by the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SymbolKind {
    Other = 0,
    Class = 1,
    Function = 2,
    Enum = 3,
    Error = 4,
    Options = 5,
    Constant = 6,
}

impl SymbolKind {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Class,
            2 => Self::Function,
            3 => Self::Enum,
            4 => Self::Error,
            5 => Self::Options,
            6 => Self::Constant,
            _ => Self::Other,
        }
    }
}

/// One exported value. Opaque to the loader: only its kind and address
/// are known.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    kind: SymbolKind,
    addr: usize,
}

impl Symbol {
    pub fn new(kind: SymbolKind, addr: usize) -> Self { Self { kind, addr } }

    pub fn kind(&self) -> SymbolKind { self.kind }

    pub fn addr(&self) -> usize { self.addr }

    /// Reinterpret the address as a pointer.
    ///
    /// # Safety
    /// The caller must know the real type behind the symbol, and the
    /// [`SymbolTable`] it came from (which owns the library) must outlive
    /// every use of the pointer.
    pub unsafe fn as_ptr<T>(&self) -> *const T { self.addr as *const T }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbol")
            .field("kind", &self.kind)
            .field("addr", &format_args!("{:#x}", self.addr))
            .finish()
    }
}

/// Named values exported by a loaded module.
///
/// Holds the library handle, if any, so symbol addresses stay valid while
/// any clone of the table is alive.
#[derive(Clone, Default)]
pub struct SymbolTable {
    entries:  BTreeMap<String, Symbol>,
    _library: Option<Arc<Library>>,
}

impl SymbolTable {
    pub fn new() -> Self { Self::default() }

    pub(crate) fn with_library(mut self, library: Arc<Library>) -> Self {
        self._library = Some(library);
        self
    }

    /// Insert a symbol, returning the previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, symbol: Symbol) -> Option<Symbol> {
        self.entries.insert(name.into(), symbol)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> { self.entries.get(name) }

    pub fn contains(&self, name: &str) -> bool { self.entries.contains_key(name) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Symbol> { self.entries.iter() }

    pub fn names(&self) -> impl Iterator<Item = &str> { self.entries.keys().map(String::as_str) }

    /// Whether the table is backed by a dynamically loaded library.
    pub fn is_dynamic(&self) -> bool { self._library.is_some() }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = (&'a String, &'a Symbol);
    type IntoIter = btree_map::Iter<'a, String, Symbol>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

impl<S: Into<String>> FromIterator<(S, Symbol)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (S, Symbol)>>(iter: I) -> Self {
        Self {
            entries:  iter.into_iter().map(|(name, symbol)| (name.into(), symbol)).collect(),
            _library: None,
        }
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("entries", &self.entries)
            .field("dynamic", &self.is_dynamic())
            .finish()
    }
}
