//!
//! Tagged Unions
//!
//! A tagged union holds exactly one of its declared alternatives.
//!
//! - Capability: the union supports a class when any alternative does
//! - Encode: forwards to whichever alternative is held
//! - Decode: the observed storage class picks the first alternative, in
//!   declaration order, whose capability set contains it; if none does,
//!   extraction fails with `Error::Mismatch`
//!
//! When two alternatives share a class the earlier one always wins.
//!
//! `tagged_union!` declares a named union over concrete types:
//!
//! ```rust
//! sqlite_marshal::tagged_union! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum Cell {
//!         Int(i64),
//!         Text(String),
//!     }
//! }
//! ```
//!
//! `Union2` through `Union5` are ready-made generic unions.
//!

use crate::error::Error;
use crate::storage::StorageClass;

#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant($ty)),+
        }

        $crate::__tagged_union_impls! {
            [] $name;
            $($variant($ty)),+
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tagged_union_impls {
    (
        [$($param:ident),*] $self_ty:ty;
        $($variant:ident($ty:ty)),+
    ) => {
        impl<$($param),*> $crate::Storage for $self_ty
        where
            $($ty: $crate::Storage,)+
        {
            const CLASSES: $crate::ClassSet = $crate::ClassSet::EMPTY
                $(.union(<$ty as $crate::Storage>::CLASSES))+;
        }

        impl<$($param),*> $crate::Encode for $self_ty
        where
            $($ty: $crate::Encode,)+
        {
            fn encode<K: $crate::Sink>(&self, sink: K) -> K::Status {
                match self {
                    $(Self::$variant(value) => $crate::Encode::encode(value, sink),)+
                }
            }
        }

        impl<$($param),*> $crate::Decode for $self_ty
        where
            $($ty: $crate::Decode,)+
        {
            fn decode<S: $crate::Source + ?Sized>(src: &S) -> $crate::Result<Self> {
                let class = $crate::Source::storage_class(src);
                $(
                    if <$ty as $crate::Storage>::CLASSES.contains(class) {
                        $crate::types::tagged::selected(stringify!($self_ty), stringify!($variant), class);
                        return <$ty as $crate::Decode>::decode(src).map(|value| Self::$variant(value));
                    }
                )+
                Err($crate::types::tagged::unsupported(stringify!($self_ty), class))
            }
        }
    };
}

#[doc(hidden)]
pub fn selected(union: &'static str, alternative: &'static str, class: StorageClass) {
    tracing::trace!(union, alternative, %class, "selected union alternative");
}

#[doc(hidden)]
pub fn unsupported(union: &'static str, class: StorageClass) -> Error {
    tracing::debug!(union, %class, "no union alternative supports storage class");
    Error::mismatch(class)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Union2<T1, T2> {
    First(T1),
    Second(T2),
}

crate::__tagged_union_impls! {
    [T1, T2] Union2<T1, T2>;
    First(T1), Second(T2)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Union3<T1, T2, T3> {
    First(T1),
    Second(T2),
    Third(T3),
}

crate::__tagged_union_impls! {
    [T1, T2, T3] Union3<T1, T2, T3>;
    First(T1), Second(T2), Third(T3)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Union4<T1, T2, T3, T4> {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
}

crate::__tagged_union_impls! {
    [T1, T2, T3, T4] Union4<T1, T2, T3, T4>;
    First(T1), Second(T2), Third(T3), Fourth(T4)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Union5<T1, T2, T3, T4, T5> {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
}

crate::__tagged_union_impls! {
    [T1, T2, T3, T4, T5] Union5<T1, T2, T3, T4, T5>;
    First(T1), Second(T2), Third(T3), Fourth(T4), Fifth(T5)
}
