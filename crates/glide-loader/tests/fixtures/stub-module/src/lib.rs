//! Minimal native module speaking the glide symbol-table ABI.

use std::ffi::c_void;
use std::ptr;

#[repr(C)]
pub struct RawSymbol {
    name:     *const u8,
    name_len: usize,
    kind:     u32,
    value:    *const c_void,
}

#[repr(C)]
pub struct RawSymbolTable {
    abi_version: u32,
    entries:     *const RawSymbol,
    len:         usize,
}

// SAFETY: both only point at immutable statics.
unsafe impl Sync for RawSymbol {}
unsafe impl Sync for RawSymbolTable {}

const CLASS: u32 = 1;
const FUNCTION: u32 = 2;
const ENUM: u32 = 3;

const fn symbol(name: &'static str, kind: u32) -> RawSymbol {
    RawSymbol {
        name: name.as_ptr(),
        name_len: name.len(),
        kind,
        value: ptr::null(),
    }
}

static ENTRIES: [RawSymbol; 3] = [
    symbol("GlideClient", CLASS),
    symbol("createLeakedString", FUNCTION),
    symbol("Level", ENUM),
];

static TABLE: RawSymbolTable = RawSymbolTable {
    abi_version: if cfg!(feature = "abi-mismatch") { 99 } else { 1 },
    entries:     ENTRIES.as_ptr(),
    len:         ENTRIES.len(),
};

#[unsafe(no_mangle)]
pub extern "C" fn glide_symbol_table() -> *const RawSymbolTable {
    if cfg!(feature = "empty") { ptr::null() } else { &TABLE }
}
