//!
//! Persistent Buffers
//!
//! By default the engine copies text and blob bytes before a bind or
//! result call returns. Wrapping `'static` data in `Persistent` hands the
//! engine the pointer itself and skips that copy.
//!

use crate::marshal::Encode;
use crate::sink::{Buffer, Sink};
use crate::storage::{ClassSet, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Persistent<T>(pub T);

impl Storage for Persistent<&'static str> {
    const CLASSES: ClassSet = ClassSet::TEXT;
}

impl Encode for Persistent<&'static str> {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        sink.put_text(Buffer::Static(self.0.as_bytes()))
    }
}

impl Storage for Persistent<&'static [u8]> {
    const CLASSES: ClassSet = ClassSet::BLOB;
}

impl Encode for Persistent<&'static [u8]> {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        sink.put_blob(Buffer::Static(self.0))
    }
}
