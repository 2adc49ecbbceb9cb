//!
//! Numeric Types
//!
//! Every integer width binds through the engine's single 64-bit integer
//! path. Narrower widths truncate on the way back exactly like an `as`
//! cast, and `u64` values above `i64::MAX` wrap through the signed
//! representative and come back unchanged.
//!
//! `f32` widens to `f64` when bound and narrows again when extracted.
//!
//! A NULL reads as zero.
//!

use crate::error::Result;
use crate::marshal::{Decode, Encode};
use crate::sink::Sink;
use crate::source::Source;
use crate::storage::{ClassSet, Storage};

macro_rules! integer_types {
    ($($ty:ty),+ $(,)?) => {$(
        impl Storage for $ty {
            const CLASSES: ClassSet = ClassSet::INTEGER;
        }

        impl Encode for $ty {
            fn encode<K: Sink>(&self, sink: K) -> K::Status {
                sink.put_integer(*self as i64)
            }
        }

        impl Decode for $ty {
            fn decode<S: Source + ?Sized>(src: &S) -> Result<Self> {
                if src.is_null() {
                    return Ok(0);
                }
                Ok(src.read_integer() as $ty)
            }
        }
    )+};
}

integer_types!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Storage for bool {
    const CLASSES: ClassSet = ClassSet::INTEGER;
}

impl Encode for bool {
    fn encode<K: Sink>(&self, sink: K) -> K::Status {
        sink.put_integer(i64::from(*self))
    }
}

impl Decode for bool {
    fn decode<S: Source + ?Sized>(src: &S) -> Result<Self> {
        if src.is_null() {
            return Ok(false);
        }
        Ok(src.read_integer() != 0)
    }
}

macro_rules! float_types {
    ($($ty:ty),+ $(,)?) => {$(
        impl Storage for $ty {
            const CLASSES: ClassSet = ClassSet::FLOAT;
        }

        impl Encode for $ty {
            fn encode<K: Sink>(&self, sink: K) -> K::Status {
                sink.put_float(f64::from(*self))
            }
        }

        impl Decode for $ty {
            fn decode<S: Source + ?Sized>(src: &S) -> Result<Self> {
                if src.is_null() {
                    return Ok(0.0);
                }
                Ok(src.read_float() as $ty)
            }
        }
    )+};
}

float_types!(f32, f64);
