//!
//! Engine Handles
//!
//! Thin, non-owning views over SQLite's raw handles. The statement,
//! function context and value pointers belong to the connection that
//! created them; nothing here prepares, steps, finalizes or frees.
//!
//! - `StatementHandle` / `Slot` - parameter binding
//! - `RowCursor` / `Column` - reading the current row
//! - `FunctionContext` / `ResultSink` - user-defined function results
//! - `ValueHandle` / `Arguments` - user-defined function arguments
//!

mod function;
mod row;
mod statement;

pub use function::{Arguments, FunctionContext, ResultSink, ValueHandle};
pub use row::{Column, RowCursor};
pub use statement::{Slot, StatementHandle};

use std::ffi::{c_int, c_void};
use std::slice;

use rusqlite::ffi;

use crate::sink::Buffer;

static EMPTY_TEXT: [u8; 1] = [0];
static EMPTY_TEXT16: [u16; 1] = [0];

/// Pointer, byte length and destructor for one text or blob transfer.
pub(crate) struct RawBytes {
    pub ptr: *const c_void,
    pub len: c_int,
    pub destructor: ffi::sqlite3_destructor_type,
}

/// Engine indexes are `c_int`; anything wider saturates and is rejected
/// by the engine as out of range.
pub(crate) fn c_index(index: usize) -> c_int {
    c_int::try_from(index).unwrap_or(c_int::MAX)
}

/// `None` when the buffer exceeds what the engine can address.
pub(crate) fn raw_bytes(buffer: Buffer<'_>) -> Option<RawBytes> {
    let bytes = buffer.bytes();
    let len = c_int::try_from(bytes.len()).ok()?;
    if bytes.is_empty() {
        return Some(RawBytes {
            ptr: EMPTY_TEXT.as_ptr().cast(),
            len: 0,
            destructor: ffi::SQLITE_STATIC(),
        });
    }
    let destructor = match buffer {
        Buffer::Transient(_) => ffi::SQLITE_TRANSIENT(),
        Buffer::Static(_) => ffi::SQLITE_STATIC(),
    };
    Some(RawBytes {
        ptr: bytes.as_ptr().cast(),
        len,
        destructor,
    })
}

pub(crate) fn raw_units(units: &[u16]) -> Option<RawBytes> {
    let len = units
        .len()
        .checked_mul(2)
        .and_then(|bytes| c_int::try_from(bytes).ok())?;
    if units.is_empty() {
        return Some(RawBytes {
            ptr: EMPTY_TEXT16.as_ptr().cast(),
            len: 0,
            destructor: ffi::SQLITE_STATIC(),
        });
    }
    Some(RawBytes {
        ptr: units.as_ptr().cast(),
        len,
        destructor: ffi::SQLITE_TRANSIENT(),
    })
}

/// Borrow `len` bytes returned by a column or value accessor.
///
/// # Safety
/// `ptr` must be null or point to at least `len` readable bytes that stay
/// valid for `'a`.
pub(crate) unsafe fn engine_bytes<'a>(ptr: *const c_void, len: c_int) -> &'a [u8] {
    if ptr.is_null() || len <= 0 {
        return &[];
    }
    unsafe { slice::from_raw_parts(ptr.cast::<u8>(), len as usize) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_index_saturates() {
        assert_eq!(c_index(1), 1);
        assert_eq!(c_index(usize::MAX), c_int::MAX);
    }

    #[test]
    fn test_raw_bytes_empty_is_static() {
        let raw = raw_bytes(Buffer::Transient(&[])).expect("empty buffer fits");
        assert_eq!(raw.len, 0);
        assert!(!raw.ptr.is_null());
        assert!(raw.destructor.is_none());
    }

    #[test]
    fn test_raw_bytes_transient_copy() {
        let data = vec![7u8; 5];
        let raw = raw_bytes(Buffer::Transient(&data)).expect("small buffer fits");
        assert_eq!(raw.len, 5);
        assert!(raw.destructor.is_some());

        let raw = raw_bytes(Buffer::Static(b"abc")).expect("small buffer fits");
        assert!(raw.destructor.is_none());
    }

    #[test]
    fn test_raw_units_counts_bytes() {
        let units: Vec<u16> = "h\0i".encode_utf16().collect();
        let raw = raw_units(&units).expect("small buffer fits");
        assert_eq!(raw.len, 6);
    }

    #[test]
    fn test_engine_bytes_null_pointer() {
        let bytes = unsafe { engine_bytes(std::ptr::null(), 10) };
        assert!(bytes.is_empty());
    }
}
