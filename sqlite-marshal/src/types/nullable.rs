//!
//! Null Sentinel, Optional and Pointer Types
//!
//! Plain scalars coalesce NULL into their zero value. Callers that need
//! to tell NULL apart choose `Option<T>`, whose capability set is `T`'s
//! plus `Null`. The nullable owned pointer is `Option<Box<T>>`; `Box<T>`
//! alone forwards everything to `T`.
//!

use crate::error::Result;
use crate::marshal::{Decode, Encode};
use crate::sink::Sink;
use crate::source::Source;
use crate::storage::{ClassSet, Storage, StorageClass};

/// SQL NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl Storage for Null {
    const CLASSES: ClassSet = ClassSet::NULL;
}

impl Encode for Null {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        sink.put_null()
    }
}

impl Decode for Null {
    fn decode<S: Source + ?Sized>(_src: &S) -> Result<Self> {
        Ok(Null)
    }
}

impl<T: Storage> Storage for Option<T> {
    const CLASSES: ClassSet = T::CLASSES.with(StorageClass::Null);
}

impl<T: Encode> Encode for Option<T> {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        match self {
            Some(value) => value.encode(sink),
            None => sink.put_null(),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode<S: Source + ?Sized>(src: &S) -> Result<Self> {
        if src.is_null() {
            return Ok(None);
        }
        T::decode(src).map(Some)
    }
}

impl<T: Storage + ?Sized> Storage for Box<T> {
    const CLASSES: ClassSet = T::CLASSES;
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        (**self).encode(sink)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode<S: Source + ?Sized>(src: &S) -> Result<Self> {
        T::decode(src).map(Box::new)
    }
}

impl<T: Storage + ?Sized> Storage for &T {
    const CLASSES: ClassSet = T::CLASSES;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        (**self).encode(sink)
    }
}
