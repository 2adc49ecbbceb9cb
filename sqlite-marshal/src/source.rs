//!
//! Inbound Value Sources
//!
//! A source is one readable value: a column of the current row, a
//! function argument, or a detached materialized value. Column and value
//! extraction share every decode body by going through this trait.
//!
//! The storage class is data-driven and may differ from row to row for
//! the same column, so decode bodies query it on every call.
//!

use std::borrow::Cow;

use crate::storage::StorageClass;

pub trait Source {
    fn storage_class(&self) -> StorageClass;

    /// Read as a 64-bit integer, applying the engine's conversion rules
    /// when the stored class differs.
    fn read_integer(&self) -> i64;

    fn read_float(&self) -> f64;

    /// UTF-8 bytes with their explicit length.
    ///
    /// Borrowed bytes are only valid until the source is advanced or read
    /// through another accessor; decode bodies copy them out immediately.
    fn read_text(&self) -> Cow<'_, [u8]>;

    fn read_blob(&self) -> Cow<'_, [u8]>;

    fn is_null(&self) -> bool {
        self.storage_class() == StorageClass::Null
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn storage_class(&self) -> StorageClass {
        (**self).storage_class()
    }

    fn read_integer(&self) -> i64 {
        (**self).read_integer()
    }

    fn read_float(&self) -> f64 {
        (**self).read_float()
    }

    fn read_text(&self) -> Cow<'_, [u8]> {
        (**self).read_text()
    }

    fn read_blob(&self) -> Cow<'_, [u8]> {
        (**self).read_blob()
    }
}
