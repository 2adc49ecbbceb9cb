//!
//! Storage Classes and Capability Sets
//!
//! SQLite tags every stored or passed value with one of five storage
//! classes. A host type declares, at compile time, which of those classes
//! it can be bound to and extracted from:
//!
//! - `StorageClass` is the engine's runtime tag
//! - `ClassSet` is a bit set of storage classes usable in `const` context
//! - `Storage` is the capability registry: one associated `CLASSES` per type
//!
//! Wrapper types compute their sets from the inner type's set, so the whole
//! registry is resolved by the compiler and an unregistered type is a
//! build error rather than a runtime failure.
//!

use std::ffi::c_int;
use std::fmt;

use rusqlite::ffi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    Null,
    Integer,
    Float,
    Text,
    Blob,
}

impl StorageClass {
    pub const ALL: [StorageClass; 5] = [
        StorageClass::Null,
        StorageClass::Integer,
        StorageClass::Float,
        StorageClass::Text,
        StorageClass::Blob,
    ];

    /// Map a `sqlite3_column_type` / `sqlite3_value_type` code.
    ///
    /// The engine only ever reports the five documented codes; anything
    /// else is treated as `Null`.
    pub fn from_code(code: c_int) -> Self {
        match code {
            ffi::SQLITE_INTEGER => StorageClass::Integer,
            ffi::SQLITE_FLOAT => StorageClass::Float,
            ffi::SQLITE_TEXT => StorageClass::Text,
            ffi::SQLITE_BLOB => StorageClass::Blob,
            _ => StorageClass::Null,
        }
    }

    pub const fn code(self) -> c_int {
        match self {
            StorageClass::Null => ffi::SQLITE_NULL,
            StorageClass::Integer => ffi::SQLITE_INTEGER,
            StorageClass::Float => ffi::SQLITE_FLOAT,
            StorageClass::Text => ffi::SQLITE_TEXT,
            StorageClass::Blob => ffi::SQLITE_BLOB,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            StorageClass::Null => "null",
            StorageClass::Integer => "integer",
            StorageClass::Float => "float",
            StorageClass::Text => "text",
            StorageClass::Blob => "blob",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            StorageClass::Null => 1 << 0,
            StorageClass::Integer => 1 << 1,
            StorageClass::Float => 1 << 2,
            StorageClass::Text => 1 << 3,
            StorageClass::Blob => 1 << 4,
        }
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of storage classes, built and queried in `const` context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const EMPTY: ClassSet = ClassSet(0);
    pub const NULL: ClassSet = ClassSet::of(StorageClass::Null);
    pub const INTEGER: ClassSet = ClassSet::of(StorageClass::Integer);
    pub const FLOAT: ClassSet = ClassSet::of(StorageClass::Float);
    pub const TEXT: ClassSet = ClassSet::of(StorageClass::Text);
    pub const BLOB: ClassSet = ClassSet::of(StorageClass::Blob);

    pub const fn of(class: StorageClass) -> ClassSet {
        ClassSet(class.bit())
    }

    pub const fn union(self, other: ClassSet) -> ClassSet {
        ClassSet(self.0 | other.0)
    }

    pub const fn with(self, class: StorageClass) -> ClassSet {
        self.union(ClassSet::of(class))
    }

    pub const fn contains(self, class: StorageClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in engine code order (null, integer, float, text, blob).
    pub fn iter(self) -> impl Iterator<Item = StorageClass> {
        StorageClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, class) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(class.name())?;
        }
        f.write_str("}")
    }
}

impl FromIterator<StorageClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = StorageClass>>(iter: I) -> Self {
        iter.into_iter().fold(ClassSet::EMPTY, ClassSet::with)
    }
}

/// Compile-time capability registration.
///
/// `CLASSES` is the set of storage classes the type can be bound to and
/// extracted from. Every registered type has a non-empty set.
pub trait Storage {
    const CLASSES: ClassSet;
}

/// Does `T` support `class`?
pub const fn supports<T: Storage + ?Sized>(class: StorageClass) -> bool {
    T::CLASSES.contains(class)
}
