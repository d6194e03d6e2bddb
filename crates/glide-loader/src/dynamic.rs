//! Module source backed by the host dynamic loader.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use libloading::Library;

use crate::abi::{self, DecodeError, ENTRY_SYMBOL, EntryFn};
use crate::error::{LoadError, Result};
use crate::name::ModuleName;
use crate::source::ModuleSource;
use crate::symbol::SymbolTable;

/// Path list searched before the system loader paths.
pub const MODULE_PATH_ENV: &str = "GLIDE_MODULE_PATH";

/// Opens native modules with the platform dynamic loader.
///
/// Each search root is probed for `root/<relative path>`; the first existing
/// file is opened. When no root has it and system search is enabled,
/// [`ModuleName::system_file_name`] is handed to the system loader, which
/// applies its own search rules (`LD_LIBRARY_PATH`, `DYLD_LIBRARY_PATH`,
/// `PATH`, ...).
#[derive(Debug, Clone)]
pub struct DynamicSource {
    search_paths:  Vec<PathBuf>,
    system_search: bool,
}

impl Default for DynamicSource {
    fn default() -> Self { Self::new() }
}

impl DynamicSource {
    /// A source with no search roots that falls back to the system loader.
    pub fn new() -> Self {
        Self {
            search_paths:  Vec::new(),
            system_search: true,
        }
    }

    /// Roots from [`MODULE_PATH_ENV`], then `node_modules`, then the
    /// directory of the running executable.
    pub fn with_default_paths() -> Self {
        let mut source = Self::new();
        for path in default_search_paths() {
            source = source.search_path(path);
        }
        source
    }

    pub fn search_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !self.search_paths.contains(&path) {
            self.search_paths.push(path);
        }
        self
    }

    pub fn system_search(mut self, enabled: bool) -> Self {
        self.system_search = enabled;
        self
    }

    pub fn search_paths(&self) -> &[PathBuf] { &self.search_paths }

    /// Every on-disk path probed for `name`, in order.
    pub fn candidates(&self, name: &ModuleName) -> Vec<PathBuf> {
        let relative = name.relative_path();
        self.search_paths.iter().map(|root| root.join(&relative)).collect()
    }

    fn open_path(&self, name: &ModuleName, path: &Path) -> Result<SymbolTable> {
        let not_found = |reason: String| LoadError::NotFound {
            module: name.to_string(),
            reason,
        };

        // SAFETY: opening a library runs its initialisers. Native binding
        // artifacts are trusted inputs selected by name.
        let library = unsafe { Library::new(path) }
            .map_err(|e| not_found(format!("{}: {e}", path.display())))?;

        let decoded = {
            // SAFETY: the entry point signature is fixed by the binding ABI.
            let entry = unsafe { library.get::<EntryFn>(ENTRY_SYMBOL) }
                .map_err(|e| not_found(format!("missing entry point: {e}")))?;
            // SAFETY: the returned table is static data inside `library`,
            // which is kept alive by the resulting `SymbolTable`.
            unsafe { abi::decode(entry()) }
        };

        let table = decoded.map_err(|e| match e {
            DecodeError::AbiMismatch { found } => LoadError::AbiMismatch {
                module: name.to_string(),
                expected: abi::ABI_VERSION,
                found,
            },
            DecodeError::NullEntries { len } => {
                not_found(format!("symbol table declares {len} entries but has none"))
            }
            DecodeError::InvalidName { index } => {
                not_found(format!("symbol #{index} has an invalid name"))
            }
        })?;

        tracing::debug!(module = %name, path = %path.display(), "opened native library");
        Ok(table.with_library(Arc::new(library)))
    }
}

impl ModuleSource for DynamicSource {
    fn open(&self, name: &ModuleName) -> Result<SymbolTable> {
        for candidate in self.candidates(name) {
            if candidate.is_file() {
                return self.open_path(name, &candidate);
            }
            tracing::trace!(module = %name, candidate = %candidate.display(), "no artifact");
        }

        if self.system_search {
            let file = name.system_file_name();
            tracing::debug!(module = %name, file = ?file, "falling back to system library search");
            return self.open_path(name, Path::new(&file));
        }

        Err(LoadError::NotFound {
            module: name.to_string(),
            reason: format!("not present in {} search path(s)", self.search_paths.len()),
        })
    }
}

fn default_search_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = env::var_os(MODULE_PATH_ENV)
        .map(|value| env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()).collect())
        .unwrap_or_default();

    paths.push(PathBuf::from("node_modules"));

    if let Some(dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        paths.push(dir);
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::{BASE_NAME, Scope};
    use glide_variant::VariantKey;

    fn name() -> ModuleName {
        ModuleName::new(Scope::default(), BASE_NAME, VariantKey::from("linux-x64"))
    }

    #[test]
    fn test_search_paths_deduplicated() {
        let source = DynamicSource::new().search_path("/a").search_path("/b").search_path("/a");
        assert_eq!(source.search_paths(), [PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_candidates_follow_roots() {
        let source = DynamicSource::new().search_path("/opt/glide").search_path("node_modules");
        let candidates = source.candidates(&name());
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].starts_with("/opt/glide/@valkey"));
        assert!(candidates[1].starts_with("node_modules/@valkey"));
    }

    #[test]
    fn test_default_paths_include_node_modules() {
        let source = DynamicSource::with_default_paths();
        assert!(source.search_paths().contains(&PathBuf::from("node_modules")));
    }

    #[test]
    fn test_system_search_keeps_scope() {
        let official = ModuleName::new(Scope::default(), BASE_NAME, VariantKey::from("linux-x64"));
        let fork = ModuleName::new(Scope::new("@corp/"), BASE_NAME, VariantKey::from("linux-x64"));

        let reason = |name: &ModuleName| match DynamicSource::new().open(name) {
            Err(LoadError::NotFound { reason, .. }) => reason,
            other => panic!("unexpected result: {other:?}"),
        };

        let fork_file = fork.system_file_name().to_string_lossy().into_owned();
        let official_file = official.system_file_name().to_string_lossy().into_owned();
        assert!(reason(&fork).starts_with(&fork_file));
        assert!(reason(&official).starts_with(&official_file));
        assert_ne!(fork_file, official_file);
    }

    #[test]
    fn test_without_system_search_reports_roots() {
        let source = DynamicSource::new().system_search(false).search_path("/nonexistent-glide-root");
        let err = source.open(&name()).unwrap_err();
        assert_eq!(
            err,
            LoadError::NotFound {
                module: "@valkey/valkey-glide-linux-x64".to_string(),
                reason: "not present in 1 search path(s)".to_string(),
            }
        );
    }
}
