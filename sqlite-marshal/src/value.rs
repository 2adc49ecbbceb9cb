//!
//! Detached Materialized Values
//!
//! Result sets are often materialized into `rusqlite::types::Value` rows
//! before they are handed around. This module runs the same encode and
//! decode bodies against those values: `ValueRef` is a `Source`, and
//! `ValueSink` produces an owned `Value`.
//!
//! Reading a different class than the one stored follows the engine's
//! conversions: integers and floats cast into each other, text is parsed
//! as a number (falling back to 0), and numbers read as text are rendered
//! with the engine's own formatter (15 significant digits for floats).
//!

use std::borrow::Cow;
use std::ffi::CStr;

use rusqlite::ffi;
use rusqlite::types::{Value, ValueRef};

use crate::error::Result;
use crate::marshal::{Decode, Encode};
use crate::sink::{Buffer, Sink};
use crate::source::Source;
use crate::storage::StorageClass;

/// Encode `value` into an owned engine value.
pub fn to_value<T: Encode + ?Sized>(value: &T) -> Value {
    value.encode(ValueSink)
}

pub fn from_value<T: Decode>(value: ValueRef<'_>) -> Result<T> {
    T::decode(&value)
}

/// Sink that materializes the written value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSink;

impl Sink for ValueSink {
    type Status = Value;

    fn put_null(self) -> Value {
        Value::Null
    }

    fn put_integer(self, value: i64) -> Value {
        Value::Integer(value)
    }

    fn put_float(self, value: f64) -> Value {
        Value::Real(value)
    }

    fn put_text(self, text: Buffer<'_>) -> Value {
        Value::Text(String::from_utf8_lossy(text.bytes()).into_owned())
    }

    fn put_text16(self, units: &[u16]) -> Value {
        Value::Text(String::from_utf16_lossy(units))
    }

    fn put_blob(self, blob: Buffer<'_>) -> Value {
        Value::Blob(blob.bytes().to_vec())
    }
}

fn class_of(value: ValueRef<'_>) -> StorageClass {
    match value {
        ValueRef::Null => StorageClass::Null,
        ValueRef::Integer(_) => StorageClass::Integer,
        ValueRef::Real(_) => StorageClass::Float,
        ValueRef::Text(_) => StorageClass::Text,
        ValueRef::Blob(_) => StorageClass::Blob,
    }
}

fn parse_number(bytes: &[u8]) -> Option<f64> {
    std::str::from_utf8(bytes).ok()?.trim().parse::<f64>().ok()
}

fn integer_of(value: ValueRef<'_>) -> i64 {
    match value {
        ValueRef::Null => 0,
        ValueRef::Integer(i) => i,
        ValueRef::Real(f) => f as i64,
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .or_else(|| parse_number(bytes).map(|f| f as i64))
            .unwrap_or(0),
    }
}

fn float_of(value: ValueRef<'_>) -> f64 {
    match value {
        ValueRef::Null => 0.0,
        ValueRef::Integer(i) => i as f64,
        ValueRef::Real(f) => f,
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => parse_number(bytes).unwrap_or(0.0),
    }
}

/// Same text a REAL column yields when read as text.
fn render_float(f: f64) -> Vec<u8> {
    unsafe {
        let raw = ffi::sqlite3_mprintf(c"%!.15g".as_ptr(), f);
        if raw.is_null() {
            return format!("{f:?}").into_bytes();
        }
        let text = CStr::from_ptr(raw).to_bytes().to_vec();
        ffi::sqlite3_free(raw.cast());
        text
    }
}

fn bytes_of(value: ValueRef<'_>) -> Cow<'_, [u8]> {
    match value {
        ValueRef::Null => Cow::Borrowed(&[]),
        ValueRef::Integer(i) => Cow::Owned(i.to_string().into_bytes()),
        ValueRef::Real(f) => Cow::Owned(render_float(f)),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Cow::Borrowed(bytes),
    }
}

impl Source for ValueRef<'_> {
    fn storage_class(&self) -> StorageClass {
        class_of(*self)
    }

    fn read_integer(&self) -> i64 {
        integer_of(*self)
    }

    fn read_float(&self) -> f64 {
        float_of(*self)
    }

    fn read_text(&self) -> Cow<'_, [u8]> {
        bytes_of(*self)
    }

    fn read_blob(&self) -> Cow<'_, [u8]> {
        bytes_of(*self)
    }
}

impl Source for Value {
    fn storage_class(&self) -> StorageClass {
        class_of(ValueRef::from(self))
    }

    fn read_integer(&self) -> i64 {
        integer_of(ValueRef::from(self))
    }

    fn read_float(&self) -> f64 {
        float_of(ValueRef::from(self))
    }

    fn read_text(&self) -> Cow<'_, [u8]> {
        bytes_of(ValueRef::from(self))
    }

    fn read_blob(&self) -> Cow<'_, [u8]> {
        bytes_of(ValueRef::from(self))
    }
}
