//!
//! Text Types
//!
//! `String` / `str` travel as UTF-8 and `Utf16String` as native-order
//! UTF-16 code units. Both bind with an explicit byte length, so embedded
//! zero bytes survive the round trip. A NULL reads as the empty string.
//!
//! UTF-16 extraction transcodes the engine's UTF-8 bytes here rather than
//! asking the engine to convert the stored value in place.
//!

use std::fmt;

use crate::error::Result;
use crate::marshal::{Decode, Encode};
use crate::sink::{Buffer, Sink};
use crate::source::Source;
use crate::storage::{ClassSet, Storage};

impl Storage for str {
    const CLASSES: ClassSet = ClassSet::TEXT;
}

impl Encode for str {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        sink.put_text(Buffer::Transient(self.as_bytes()))
    }
}

impl Storage for String {
    const CLASSES: ClassSet = ClassSet::TEXT;
}

impl Encode for String {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        self.as_str().encode(sink)
    }
}

impl Decode for String {
    fn decode<S: Source + ?Sized>(src: &S) -> Result<Self> {
        if src.is_null() {
            return Ok(String::new());
        }
        Ok(String::from_utf8_lossy(&src.read_text()).into_owned())
    }
}

/// Text held as UTF-16 code units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Utf16String(Vec<u16>);

impl Utf16String {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_units(&self) -> &[u16] {
        &self.0
    }

    pub fn into_units(self) -> Vec<u16> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl From<&str> for Utf16String {
    fn from(text: &str) -> Self {
        Self(text.encode_utf16().collect())
    }
}

impl From<Vec<u16>> for Utf16String {
    fn from(units: Vec<u16>) -> Self {
        Self(units)
    }
}

impl fmt::Display for Utf16String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl Storage for Utf16String {
    const CLASSES: ClassSet = ClassSet::TEXT;
}

impl Encode for Utf16String {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        sink.put_text16(&self.0)
    }
}

impl Decode for Utf16String {
    fn decode<S: Source + ?Sized>(src: &S) -> Result<Self> {
        if src.is_null() {
            return Ok(Utf16String::new());
        }
        let text = src.read_text();
        Ok(Utf16String(
            String::from_utf8_lossy(&text).encode_utf16().collect(),
        ))
    }
}
