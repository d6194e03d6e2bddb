//! Binary contract between the loader and a native module.
//!
//! A module exports one entry point, [`ENTRY_SYMBOL`], returning a pointer
//! to a static [`RawSymbolTable`]. Every name and value it references must
//! live as long as the library stays loaded.

use std::ffi::c_void;

use crate::symbol::{Symbol, SymbolKind, SymbolTable};

/// Version of the table layout below.
pub const ABI_VERSION: u32 = 1;

/// Null-terminated name of the entry point.
pub const ENTRY_SYMBOL: &[u8] = b"glide_symbol_table\0";

/// Signature of the entry point.
pub type EntryFn = unsafe extern "C" fn() -> *const RawSymbolTable;

#[repr(C)]
pub struct RawSymbol {
    /// UTF-8 name, not necessarily null-terminated.
    pub name:     *const u8,
    pub name_len: usize,
    /// [`SymbolKind`] discriminant.
    pub kind:     u32,
    pub value:    *const c_void,
}

#[repr(C)]
pub struct RawSymbolTable {
    pub abi_version: u32,
    pub entries:     *const RawSymbol,
    pub len:         usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    AbiMismatch { found: u32 },
    NullEntries { len: usize },
    InvalidName { index: usize },
}

/// Copy a raw table into an owned [`SymbolTable`].
///
/// A null table decodes to an empty one.
///
/// # Safety
/// `raw` must be null or point to a valid [`RawSymbolTable`] whose `entries`
/// array holds `len` valid [`RawSymbol`]s, each naming `name_len` readable
/// bytes.
pub unsafe fn decode(raw: *const RawSymbolTable) -> Result<SymbolTable, DecodeError> {
    // SAFETY: null-checked here; validity otherwise guaranteed by the caller.
    let Some(raw) = (unsafe { raw.as_ref() }) else {
        return Ok(SymbolTable::new());
    };

    if raw.abi_version != ABI_VERSION {
        return Err(DecodeError::AbiMismatch { found: raw.abi_version });
    }
    if raw.len == 0 {
        return Ok(SymbolTable::new());
    }
    if raw.entries.is_null() {
        return Err(DecodeError::NullEntries { len: raw.len });
    }

    // SAFETY: non-null, `len` entries per the caller's contract.
    let entries = unsafe { std::slice::from_raw_parts(raw.entries, raw.len) };

    let mut table = SymbolTable::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.name.is_null() || entry.name_len == 0 {
            return Err(DecodeError::InvalidName { index });
        }
        // SAFETY: non-null, `name_len` readable bytes per the caller's contract.
        let bytes = unsafe { std::slice::from_raw_parts(entry.name, entry.name_len) };
        let name = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidName { index })?;

        table.insert(
            name,
            Symbol::new(SymbolKind::from_raw(entry.kind), entry.value as usize),
        );
    }

    Ok(table)
}
