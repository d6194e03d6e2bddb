use glide_variant::VariantKey;

use crate::error::{LoadError, Result};
use crate::name::{ModuleName, Scope};
use crate::symbol::SymbolTable;

/// Something that can turn a module name into a symbol table.
///
/// The loader only decides *which* name to ask for; a source decides how
/// the name is found and opened.
pub trait ModuleSource {
    fn open(&self, name: &ModuleName) -> Result<SymbolTable>;
}

impl<S: ModuleSource + ?Sized> ModuleSource for &S {
    fn open(&self, name: &ModuleName) -> Result<SymbolTable> { (**self).open(name) }
}

impl<S: ModuleSource + ?Sized> ModuleSource for Box<S> {
    fn open(&self, name: &ModuleName) -> Result<SymbolTable> { (**self).open(name) }
}

/// Load the `base` module built for `variant`, published under `scope`.
pub fn load<S>(source: &S, scope: &Scope, base: &str, variant: &VariantKey) -> Result<SymbolTable>
where
    S: ModuleSource + ?Sized,
{
    let name = ModuleName::new(scope.clone(), base, variant.clone());
    load_module(source, &name)
}

/// Open `name` through `source`, rejecting tables with no symbols.
///
/// The table is returned untouched otherwise; checking its contents is the
/// publisher's job.
pub fn load_module<S>(source: &S, name: &ModuleName) -> Result<SymbolTable>
where
    S: ModuleSource + ?Sized,
{
    tracing::debug!(module = %name, "loading native module");

    let table = source.open(name)?;
    if table.is_empty() {
        return Err(LoadError::EmptyModule {
            module: name.to_string(),
        });
    }

    tracing::info!(module = %name, symbols = table.len(), "loaded native module");
    Ok(table)
}
