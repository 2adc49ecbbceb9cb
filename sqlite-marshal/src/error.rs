//!
//! Marshalling Error Types
//!
//! Extraction of scalars, `Option`, `Box` and sequences is total, so the
//! only error this layer raises itself is a tagged-union `Mismatch`: the
//! observed storage class has no supporting alternative.
//!
//! Bind calls return the engine's status code verbatim as a `Status`.
//! Callers that want `?` convert it with `Status::into_result`, which
//! wraps any non-OK code in `Error::Engine` without interpreting it.
//!

use std::ffi::c_int;
use std::fmt;

use rusqlite::ffi;
use thiserror::Error;

use crate::storage::StorageClass;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("value of storage class {class} is unsupported by this union (code {code})")]
    Mismatch { class: StorageClass, code: c_int },

    #[error("engine returned status code {code}")]
    Engine { code: c_int },
}

impl Error {
    pub fn mismatch(class: StorageClass) -> Self {
        Error::Mismatch {
            class,
            code: ffi::SQLITE_MISMATCH,
        }
    }

    /// The engine status code carried by this error.
    pub fn code(&self) -> c_int {
        match self {
            Error::Mismatch { code, .. } | Error::Engine { code } => *code,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Native status code returned by a bind call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Status(c_int);

impl Status {
    pub const OK: Status = Status(ffi::SQLITE_OK);

    pub const fn from_code(code: c_int) -> Self {
        Status(code)
    }

    pub const fn code(self) -> c_int {
        self.0
    }

    pub const fn is_ok(self) -> bool {
        self.0 == ffi::SQLITE_OK
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::Engine { code: self.0 })
        }
    }
}

impl From<Status> for c_int {
    fn from(status: Status) -> c_int {
        status.0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
