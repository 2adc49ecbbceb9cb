use std::ffi::c_int;
use std::marker::PhantomData;

use rusqlite::ffi;

use super::{c_index, raw_bytes, raw_units};
use crate::error::Status;
use crate::marshal::{self, Encode};
use crate::sink::{Buffer, Sink};

/// Non-owning view of a prepared statement, used for parameter binding.
pub struct StatementHandle<'s> {
    raw: *mut ffi::sqlite3_stmt,
    _marker: PhantomData<&'s mut ffi::sqlite3_stmt>,
}

impl<'s> StatementHandle<'s> {
    /// # Safety
    /// `raw` must be a live prepared statement for all of `'s`, and no other
    /// code may step or finalize it while this handle is in use.
    pub unsafe fn from_raw(raw: *mut ffi::sqlite3_stmt) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn parameter_count(&self) -> usize {
        let count = unsafe { ffi::sqlite3_bind_parameter_count(self.raw) };
        count.max(0) as usize
    }

    /// Parameter slot `index` (1-based, as the engine numbers them).
    pub fn slot(&mut self, index: usize) -> Slot<'_> {
        Slot {
            stmt: self.raw,
            index: c_index(index),
            _marker: PhantomData,
        }
    }

    pub fn bind<T: Encode + ?Sized>(&mut self, index: usize, value: &T) -> Status {
        marshal::bind(self, index, value)
    }
}

/// One positional parameter of a prepared statement.
pub struct Slot<'a> {
    stmt: *mut ffi::sqlite3_stmt,
    index: c_int,
    _marker: PhantomData<&'a mut ffi::sqlite3_stmt>,
}

impl Sink for Slot<'_> {
    type Status = Status;

    fn put_null(self) -> Status {
        Status::from_code(unsafe { ffi::sqlite3_bind_null(self.stmt, self.index) })
    }

    fn put_integer(self, value: i64) -> Status {
        Status::from_code(unsafe { ffi::sqlite3_bind_int64(self.stmt, self.index, value) })
    }

    fn put_float(self, value: f64) -> Status {
        Status::from_code(unsafe { ffi::sqlite3_bind_double(self.stmt, self.index, value) })
    }

    fn put_text(self, text: Buffer<'_>) -> Status {
        let Some(raw) = raw_bytes(text) else {
            return Status::from_code(ffi::SQLITE_TOOBIG);
        };
        Status::from_code(unsafe {
            ffi::sqlite3_bind_text(
                self.stmt,
                self.index,
                raw.ptr.cast(),
                raw.len,
                raw.destructor,
            )
        })
    }

    fn put_text16(self, units: &[u16]) -> Status {
        let Some(raw) = raw_units(units) else {
            return Status::from_code(ffi::SQLITE_TOOBIG);
        };
        Status::from_code(unsafe {
            ffi::sqlite3_bind_text16(self.stmt, self.index, raw.ptr, raw.len, raw.destructor)
        })
    }

    fn put_blob(self, blob: Buffer<'_>) -> Status {
        // A null data pointer would bind NULL, so empty blobs go through zeroblob.
        if blob.is_empty() {
            return Status::from_code(unsafe {
                ffi::sqlite3_bind_zeroblob(self.stmt, self.index, 0)
            });
        }
        let Some(raw) = raw_bytes(blob) else {
            return Status::from_code(ffi::SQLITE_TOOBIG);
        };
        Status::from_code(unsafe {
            ffi::sqlite3_bind_blob(self.stmt, self.index, raw.ptr, raw.len, raw.destructor)
        })
    }
}
