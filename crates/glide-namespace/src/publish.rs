use std::collections::BTreeMap;

use glide_loader::{Symbol, SymbolTable};
use serde::Deserialize;

use crate::error::{Result, ValidationError};
use crate::global::GlobalScope;
use crate::surface::ExpectedSymbolSet;

/// How to treat expected names the module does not export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublishPolicy {
    /// Publish them as absent and record them in
    /// [`PublishedNamespace::missing`].
    #[default]
    Lenient,
    /// Refuse to publish.
    Strict,
}

/// The validated, stable surface of a loaded native module.
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PublishedNamespace {
    version: u32,
    exports: BTreeMap<&'static str, Option<Symbol>>,
    globals: GlobalScope,
    missing: Vec<&'static str>,
    _table:  SymbolTable,
}

impl PublishedNamespace {
    /// Export `name`. `None` both for names outside the surface and for
    /// surface names the module did not provide.
    pub fn get(&self, name: &str) -> Option<Symbol> { self.exports.get(name).copied().flatten() }

    /// Every surface name with the value the module provided for it.
    pub fn exports(&self) -> &BTreeMap<&'static str, Option<Symbol>> { &self.exports }

    /// Blanket bindings from the whole table, surface or not.
    pub fn globals(&self) -> &GlobalScope { &self.globals }

    /// Surface names the module did not export.
    pub fn missing(&self) -> &[&'static str] { &self.missing }

    pub fn is_complete(&self) -> bool { self.missing.is_empty() }

    pub fn surface_version(&self) -> u32 { self.version }
}

/// Publish `table` against `expected` into a fresh global scope.
pub fn publish(table: SymbolTable, expected: &ExpectedSymbolSet, policy: PublishPolicy) -> Result<PublishedNamespace> {
    publish_into(table, expected, policy, GlobalScope::new())
}

/// Publish `table` against `expected`, merging every entry of the table into
/// `globals` over any existing bindings.
pub fn publish_into(
    table: SymbolTable,
    expected: &ExpectedSymbolSet,
    policy: PublishPolicy,
    mut globals: GlobalScope,
) -> Result<PublishedNamespace> {
    let mut exports = BTreeMap::new();
    let mut missing = Vec::new();

    for &name in expected.names() {
        let value = table.get(name).copied();
        if value.is_none() {
            missing.push(name);
        }
        exports.insert(name, value);
    }

    if !missing.is_empty() {
        match policy {
            PublishPolicy::Strict => {
                return Err(ValidationError::MissingSymbols {
                    version: expected.version(),
                    missing: missing.iter().map(|name| name.to_string()).collect(),
                });
            }
            PublishPolicy::Lenient => {
                tracing::warn!(
                    count = missing.len(),
                    missing = ?missing,
                    "native module does not export every surface symbol"
                );
            }
        }
    }

    let overwritten = globals.merge(&table);
    if !overwritten.is_empty() {
        tracing::warn!(names = ?overwritten, "native module overwrote existing global bindings");
    }

    tracing::debug!(
        exports = exports.len(),
        globals = globals.len(),
        surface = expected.version(),
        "published native namespace"
    );

    Ok(PublishedNamespace {
        version: expected.version(),
        exports,
        globals,
        missing,
        _table: table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_loader::{SymbolKind, fabricate};

    const SMALL: ExpectedSymbolSet = ExpectedSymbolSet::new(3, &["GlideClient", "Logger", "TimeoutError"]);

    #[test]
    fn test_complete_table() {
        let table = fabricate(["GlideClient", "Logger", "TimeoutError", "InternalHelper"]);
        let ns = publish(table.clone(), &SMALL, PublishPolicy::Strict).unwrap();

        assert!(ns.is_complete());
        assert_eq!(ns.surface_version(), 3);
        assert_eq!(ns.exports().len(), 3);
        assert_eq!(ns.get("Logger"), table.get("Logger").copied());
        assert_eq!(ns.get("InternalHelper"), None);
        assert!(ns.globals().contains("InternalHelper"));
        assert_eq!(ns.globals().len(), 4);
    }

    #[test]
    fn test_lenient_passes_missing_through() {
        let table = fabricate(["GlideClient"]);
        let ns = publish(table, &SMALL, PublishPolicy::Lenient).unwrap();

        assert!(!ns.is_complete());
        assert_eq!(ns.missing(), ["Logger", "TimeoutError"]);
        assert_eq!(ns.exports().get("Logger"), Some(&None));
        assert!(ns.get("GlideClient").is_some());
    }

    #[test]
    fn test_strict_rejects_missing() {
        let err = publish(fabricate(["Logger"]), &SMALL, PublishPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingSymbols {
                version: 3,
                missing: vec!["GlideClient".to_string(), "TimeoutError".to_string()],
            }
        );
        assert!(err.to_string().contains("GlideClient, TimeoutError"));
    }

    #[test]
    fn test_values_not_substituted() {
        let mut table = SymbolTable::new();
        table.insert("GlideClient", Symbol::new(SymbolKind::Class, 0));
        let ns = publish(table, &SMALL, PublishPolicy::Lenient).unwrap();

        assert_eq!(ns.get("GlideClient"), Some(Symbol::new(SymbolKind::Class, 0)));
    }

    #[test]
    fn test_publish_into_overwrites_globals() {
        let mut globals = GlobalScope::new();
        globals.bind("Logger", Symbol::new(SymbolKind::Other, 0xdead));
        globals.bind("process", Symbol::new(SymbolKind::Other, 0xbeef));

        let table = fabricate(["GlideClient", "Logger", "TimeoutError"]);
        let ns = publish_into(table.clone(), &SMALL, PublishPolicy::Strict, globals).unwrap();

        assert_eq!(ns.globals().get("Logger"), table.get("Logger"));
        assert!(ns.globals().contains("process"));
    }
}
