use std::borrow::Cow;
use std::ffi::c_int;
use std::marker::PhantomData;

use rusqlite::ffi;

use super::{c_index, engine_bytes};
use crate::error::Result;
use crate::marshal::{self, Decode};
use crate::source::Source;
use crate::storage::StorageClass;

/// Non-owning view of a statement positioned on a result row.
pub struct RowCursor<'s> {
    raw: *mut ffi::sqlite3_stmt,
    _marker: PhantomData<&'s ffi::sqlite3_stmt>,
}

impl<'s> RowCursor<'s> {
    /// # Safety
    /// `raw` must be a live statement whose last step returned
    /// `SQLITE_ROW`, and it must not be stepped, reset or finalized for `'s`.
    pub unsafe fn from_raw(raw: *mut ffi::sqlite3_stmt) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn column_count(&self) -> usize {
        let count = unsafe { ffi::sqlite3_column_count(self.raw) };
        count.max(0) as usize
    }

    /// Column `index` (0-based) of the current row.
    pub fn column(&self, index: usize) -> Column<'_> {
        Column {
            stmt: self.raw,
            index: c_index(index),
            _marker: PhantomData,
        }
    }

    pub fn get<T: Decode>(&self, index: usize) -> Result<T> {
        marshal::extract_column(self, index)
    }
}

/// One column of the current row.
pub struct Column<'a> {
    stmt: *mut ffi::sqlite3_stmt,
    index: c_int,
    _marker: PhantomData<&'a ffi::sqlite3_stmt>,
}

impl Source for Column<'_> {
    fn storage_class(&self) -> StorageClass {
        StorageClass::from_code(unsafe { ffi::sqlite3_column_type(self.stmt, self.index) })
    }

    fn read_integer(&self) -> i64 {
        unsafe { ffi::sqlite3_column_int64(self.stmt, self.index) }
    }

    fn read_float(&self) -> f64 {
        unsafe { ffi::sqlite3_column_double(self.stmt, self.index) }
    }

    fn read_text(&self) -> Cow<'_, [u8]> {
        // Pointer first, then length: the length call must see any conversion.
        unsafe {
            let ptr = ffi::sqlite3_column_text(self.stmt, self.index);
            let len = ffi::sqlite3_column_bytes(self.stmt, self.index);
            Cow::Borrowed(engine_bytes(ptr.cast(), len))
        }
    }

    fn read_blob(&self) -> Cow<'_, [u8]> {
        unsafe {
            let ptr = ffi::sqlite3_column_blob(self.stmt, self.index);
            let len = ffi::sqlite3_column_bytes(self.stmt, self.index);
            Cow::Borrowed(engine_bytes(ptr, len))
        }
    }
}
