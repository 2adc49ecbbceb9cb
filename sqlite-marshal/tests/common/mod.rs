//!
//! Shared harness for the integration tests.
//!
//! Prepares and steps raw statements through `rusqlite::ffi` so the
//! marshalling layer is exercised against real engine handles, and
//! registers raw user-defined functions.
//!

#![allow(dead_code)]

use std::ffi::{CString, c_char, c_int};
use std::marker::PhantomData;
use std::path::Path;
use std::ptr;
use std::sync::Once;

use rusqlite::{Connection, ffi};
use sqlite_marshal::{Decode, Encode, RowCursor, StatementHandle, Status};

pub type RawFunction =
    unsafe extern "C" fn(*mut ffi::sqlite3_context, c_int, *mut *mut ffi::sqlite3_value);

static LOGGING: Once = Once::new();

pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open() -> Self {
        init_logging();
        let conn = Connection::open_in_memory().expect("Failed to open in-memory database");
        Db { conn }
    }

    pub fn open_path(path: &Path) -> Self {
        init_logging();
        let conn = Connection::open(path).expect("Failed to open database file");
        Db { conn }
    }

    pub fn exec(&self, sql: &str) {
        self.conn.execute_batch(sql).expect("Failed to execute batch");
    }

    pub fn prepare(&self, sql: &str) -> Prepared<'_> {
        let mut raw = ptr::null_mut();
        let rc = unsafe {
            ffi::sqlite3_prepare_v2(
                self.conn.handle(),
                sql.as_ptr().cast::<c_char>(),
                sql.len() as c_int,
                &mut raw,
                ptr::null_mut(),
            )
        };
        assert_eq!(rc, ffi::SQLITE_OK, "Failed to prepare `{sql}`");
        Prepared {
            raw,
            _db: PhantomData,
        }
    }

    pub fn register(&self, name: &str, arity: c_int, func: RawFunction) {
        let name = CString::new(name).expect("function name has no NUL");
        let rc = unsafe {
            ffi::sqlite3_create_function_v2(
                self.conn.handle(),
                name.as_ptr(),
                arity,
                ffi::SQLITE_UTF8,
                ptr::null_mut(),
                Some(func),
                None,
                None,
                None,
            )
        };
        assert_eq!(rc, ffi::SQLITE_OK, "Failed to register function");
    }

    /// Bind `value` to `SELECT ?1` and read the single column back as `U`.
    pub fn round_trip<T, U>(&self, value: &T) -> sqlite_marshal::Result<U>
    where
        T: Encode + ?Sized,
        U: Decode,
    {
        let mut stmt = self.prepare("SELECT ?1");
        assert!(stmt.handle().bind(1, value).is_ok());
        assert_eq!(stmt.step(), ffi::SQLITE_ROW);
        stmt.row().get::<U>(0)
    }
}

pub struct Prepared<'db> {
    raw: *mut ffi::sqlite3_stmt,
    _db: PhantomData<&'db Db>,
}

impl Prepared<'_> {
    pub fn handle(&mut self) -> StatementHandle<'_> {
        unsafe { StatementHandle::from_raw(self.raw) }
    }

    pub fn bind<T: Encode + ?Sized>(&mut self, index: usize, value: &T) -> Status {
        self.handle().bind(index, value)
    }

    pub fn step(&mut self) -> c_int {
        unsafe { ffi::sqlite3_step(self.raw) }
    }

    pub fn row(&self) -> RowCursor<'_> {
        unsafe { RowCursor::from_raw(self.raw) }
    }

    pub fn reset(&mut self) {
        unsafe {
            ffi::sqlite3_reset(self.raw);
            ffi::sqlite3_clear_bindings(self.raw);
        }
    }

    /// Step to completion and reset for the next round of bindings.
    pub fn execute(&mut self) {
        assert_eq!(self.step(), ffi::SQLITE_DONE);
        self.reset();
    }
}

impl Drop for Prepared<'_> {
    fn drop(&mut self) {
        unsafe {
            ffi::sqlite3_finalize(self.raw);
        }
    }
}
