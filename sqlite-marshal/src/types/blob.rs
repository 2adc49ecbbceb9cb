//!
//! Blob and Sequence Types
//!
//! A sequence of fixed-size elements binds as one blob holding each
//! element's native-endian byte image back to back, so `N` elements of
//! width `W` produce `N * W` bytes. Extraction splits the blob into
//! `W`-byte chunks; a trailing partial element is dropped.
//!
//! `&[u8]` is the raw (pointer, length) buffer and binds without a copy on
//! the host side. Extraction always copies out into a `Vec`, since the
//! engine may reuse its storage once the cursor moves.
//!

use std::borrow::Cow;
use std::mem::size_of;

use crate::error::Result;
use crate::marshal::{Decode, Encode};
use crate::sink::{Buffer, Sink};
use crate::source::Source;
use crate::storage::{ClassSet, Storage};

/// A fixed-size value that can be laid out contiguously inside a blob.
pub trait Element: Copy {
    const SIZE: usize;

    fn write_ne(self, out: &mut Vec<u8>);

    /// `chunk` is exactly `SIZE` bytes long.
    fn read_ne(chunk: &[u8]) -> Self;

    fn encode_slice(items: &[Self]) -> Cow<'_, [u8]> {
        let mut out = Vec::with_capacity(items.len() * Self::SIZE);
        for item in items {
            item.write_ne(&mut out);
        }
        Cow::Owned(out)
    }

    fn decode_slice(bytes: &[u8]) -> Vec<Self> {
        bytes.chunks_exact(Self::SIZE).map(Self::read_ne).collect()
    }
}

impl Element for u8 {
    const SIZE: usize = 1;

    fn write_ne(self, out: &mut Vec<u8>) {
        out.push(self);
    }

    fn read_ne(chunk: &[u8]) -> Self {
        chunk[0]
    }

    fn encode_slice(items: &[u8]) -> Cow<'_, [u8]> {
        Cow::Borrowed(items)
    }

    fn decode_slice(bytes: &[u8]) -> Vec<u8> {
        bytes.to_vec()
    }
}

macro_rules! element_types {
    ($($ty:ty),+ $(,)?) => {$(
        impl Element for $ty {
            const SIZE: usize = size_of::<$ty>();

            fn write_ne(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_ne_bytes());
            }

            fn read_ne(chunk: &[u8]) -> Self {
                let mut raw = [0u8; size_of::<$ty>()];
                raw.copy_from_slice(chunk);
                <$ty>::from_ne_bytes(raw)
            }
        }
    )+};
}

element_types!(i8, i16, u16, i32, u32, i64, u64, f32, f64);

impl<T: Element> Storage for [T] {
    const CLASSES: ClassSet = ClassSet::BLOB;
}

impl<T: Element> Encode for [T] {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        let bytes = T::encode_slice(self);
        sink.put_blob(Buffer::Transient(&bytes))
    }
}

impl<T: Element> Storage for Vec<T> {
    const CLASSES: ClassSet = ClassSet::BLOB;
}

impl<T: Element> Encode for Vec<T> {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        self.as_slice().encode(sink)
    }
}

impl<T: Element> Decode for Vec<T> {
    fn decode<S: Source + ?Sized>(src: &S) -> Result<Self> {
        if src.is_null() {
            return Ok(Vec::new());
        }
        Ok(T::decode_slice(&src.read_blob()))
    }
}
