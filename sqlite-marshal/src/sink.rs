//!
//! Outbound Value Sinks
//!
//! A sink is the engine call that receives one value: a statement
//! parameter slot when binding, or a function-result channel when a
//! user-defined function returns. Both receive values through the same
//! six entry points, so each host type writes its encode body once.
//!
//! A sink is consumed by the single `put_*` call that writes to it.
//!

/// Retention policy for text and blob bytes handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer<'a> {
    /// The engine copies the bytes before the call returns.
    Transient(&'a [u8]),
    /// The engine may keep the pointer for as long as it likes.
    Static(&'static [u8]),
}

impl<'a> Buffer<'a> {
    pub fn bytes(&self) -> &'a [u8] {
        match *self {
            Buffer::Transient(bytes) => bytes,
            Buffer::Static(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}

pub trait Sink: Sized {
    /// What the underlying call reports back: a status code for statement
    /// slots, nothing for function results.
    type Status;

    fn put_null(self) -> Self::Status;

    fn put_integer(self, value: i64) -> Self::Status;

    fn put_float(self, value: f64) -> Self::Status;

    /// UTF-8 text with an explicit byte length; embedded zero bytes survive.
    fn put_text(self, text: Buffer<'_>) -> Self::Status;

    /// UTF-16 text in native byte order, length given in code units.
    fn put_text16(self, units: &[u16]) -> Self::Status;

    fn put_blob(self, blob: Buffer<'_>) -> Self::Status;
}
