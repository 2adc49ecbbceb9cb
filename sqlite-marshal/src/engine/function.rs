use std::borrow::Cow;
use std::ffi::c_int;
use std::marker::PhantomData;
use std::slice;

use rusqlite::ffi;

use super::{engine_bytes, raw_bytes, raw_units};
use crate::error::Result;
use crate::marshal::{self, Decode, Encode};
use crate::source::Source;
use crate::storage::StorageClass;
use crate::sink::{Buffer, Sink};

/// Non-owning view of the context of one user-defined function call.
pub struct FunctionContext<'c> {
    raw: *mut ffi::sqlite3_context,
    _marker: PhantomData<&'c mut ffi::sqlite3_context>,
}

impl<'c> FunctionContext<'c> {
    /// # Safety
    /// `raw` must be the context passed to the currently running function
    /// callback, and must not outlive that callback.
    pub unsafe fn from_raw(raw: *mut ffi::sqlite3_context) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn result(&mut self) -> ResultSink<'_> {
        ResultSink {
            ctx: self.raw,
            _marker: PhantomData,
        }
    }

    pub fn produce<T: Encode + ?Sized>(&mut self, value: &T) {
        marshal::produce_result(self, value)
    }
}

/// The result channel of a function call.
pub struct ResultSink<'a> {
    ctx: *mut ffi::sqlite3_context,
    _marker: PhantomData<&'a mut ffi::sqlite3_context>,
}

impl Sink for ResultSink<'_> {
    type Status = ();

    fn put_null(self) {
        unsafe { ffi::sqlite3_result_null(self.ctx) }
    }

    fn put_integer(self, value: i64) {
        unsafe { ffi::sqlite3_result_int64(self.ctx, value) }
    }

    fn put_float(self, value: f64) {
        unsafe { ffi::sqlite3_result_double(self.ctx, value) }
    }

    fn put_text(self, text: Buffer<'_>) {
        match raw_bytes(text) {
            Some(raw) => unsafe {
                ffi::sqlite3_result_text(self.ctx, raw.ptr.cast(), raw.len, raw.destructor)
            },
            None => unsafe { ffi::sqlite3_result_error_toobig(self.ctx) },
        }
    }

    fn put_text16(self, units: &[u16]) {
        match raw_units(units) {
            Some(raw) => unsafe {
                ffi::sqlite3_result_text16(self.ctx, raw.ptr, raw.len, raw.destructor)
            },
            None => unsafe { ffi::sqlite3_result_error_toobig(self.ctx) },
        }
    }

    fn put_blob(self, blob: Buffer<'_>) {
        if blob.is_empty() {
            return unsafe { ffi::sqlite3_result_zeroblob(self.ctx, 0) };
        }
        match raw_bytes(blob) {
            Some(raw) => unsafe {
                ffi::sqlite3_result_blob(self.ctx, raw.ptr, raw.len, raw.destructor)
            },
            None => unsafe { ffi::sqlite3_result_error_toobig(self.ctx) },
        }
    }
}

/// Non-owning view of a detached engine value, such as a function argument.
#[derive(Clone, Copy)]
pub struct ValueHandle<'v> {
    raw: *mut ffi::sqlite3_value,
    _marker: PhantomData<&'v ffi::sqlite3_value>,
}

impl<'v> ValueHandle<'v> {
    /// # Safety
    /// `raw` must be a valid, protected `sqlite3_value` for all of `'v`.
    pub unsafe fn from_raw(raw: *mut ffi::sqlite3_value) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn get<T: Decode>(&self) -> Result<T> {
        marshal::extract_value(self)
    }
}

impl Source for ValueHandle<'_> {
    fn storage_class(&self) -> StorageClass {
        StorageClass::from_code(unsafe { ffi::sqlite3_value_type(self.raw) })
    }

    fn read_integer(&self) -> i64 {
        unsafe { ffi::sqlite3_value_int64(self.raw) }
    }

    fn read_float(&self) -> f64 {
        unsafe { ffi::sqlite3_value_double(self.raw) }
    }

    fn read_text(&self) -> Cow<'_, [u8]> {
        unsafe {
            let ptr = ffi::sqlite3_value_text(self.raw);
            let len = ffi::sqlite3_value_bytes(self.raw);
            Cow::Borrowed(engine_bytes(ptr.cast(), len))
        }
    }

    fn read_blob(&self) -> Cow<'_, [u8]> {
        unsafe {
            let ptr = ffi::sqlite3_value_blob(self.raw);
            let len = ffi::sqlite3_value_bytes(self.raw);
            Cow::Borrowed(engine_bytes(ptr, len))
        }
    }
}

/// The argument vector of a function call.
#[derive(Clone, Copy)]
pub struct Arguments<'v> {
    values: &'v [*mut ffi::sqlite3_value],
}

impl<'v> Arguments<'v> {
    /// # Safety
    /// `argc` and `argv` must be the argument count and vector passed to the
    /// currently running function callback.
    pub unsafe fn from_raw(argc: c_int, argv: *mut *mut ffi::sqlite3_value) -> Self {
        let values = if argv.is_null() || argc <= 0 {
            &[][..]
        } else {
            unsafe { slice::from_raw_parts(argv.cast_const(), argc as usize) }
        };
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Argument `index` (0-based).
    pub fn value(&self, index: usize) -> Option<ValueHandle<'v>> {
        self.values
            .get(index)
            .map(|raw| unsafe { ValueHandle::from_raw(*raw) })
    }

    /// Decode argument `index`; a missing argument reads as SQL NULL.
    pub fn get<T: Decode>(&self, index: usize) -> Result<T> {
        match self.value(index) {
            Some(value) => marshal::extract_value(&value),
            None => T::decode(&Missing),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ValueHandle<'v>> + 'v {
        self.values
            .iter()
            .map(|raw| unsafe { ValueHandle::from_raw(*raw) })
    }
}

struct Missing;

impl Source for Missing {
    fn storage_class(&self) -> StorageClass {
        StorageClass::Null
    }

    fn read_integer(&self) -> i64 {
        0
    }

    fn read_float(&self) -> f64 {
        0.0
    }

    fn read_text(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&[])
    }

    fn read_blob(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&[])
    }
}
