//!
//! sqlite-marshal - Compile-time Value Marshalling for SQLite
//!
//! Bridges SQLite's dynamically typed value model (null, integer, float,
//! text, blob) and Rust's static types. Host code binds parameters,
//! produces function results and extracts columns or arguments using its
//! own types; the engine only ever sees its five storage classes.
//!
//! Architecture:
//! - `Storage` is the capability registry. Each type names the storage
//!   classes it supports as an associated `const`, and wrappers derive
//!   theirs from the inner type, so unsupported types fail to compile.
//! - `Encode` is one body per type, shared by parameter binding and
//!   function-result production through the `Sink` trait.
//! - `Decode` is one body per type, shared by column extraction and
//!   argument extraction through the `Source` trait.
//! - `Option`, `Box`, `Vec` and tagged unions implement the same traits by
//!   forwarding to their inner types, and compose to any depth.
//!
//! Operations:
//! - `bind(stmt, index, &value) -> Status`
//! - `produce_result(ctx, &value)`
//! - `extract_column::<T>(row, index) -> Result<T>`
//! - `extract_value::<T>(value) -> Result<T>`
//!
//! Extraction never fails for plain scalars: NULL reads as the type's zero
//! value. The only error raised here is `Error::Mismatch`, when a tagged
//! union has no alternative for the observed storage class. Bind status
//! codes come back from the engine untouched.
//!
//! The handles in `engine` never own the statement, context or value they
//! point at. Text and blob bytes are copied by the engine before a call
//! returns unless the caller opts into `Persistent`.
//!

pub mod engine;
pub mod error;
pub mod marshal;
pub mod sink;
pub mod source;
pub mod storage;
pub mod types;
pub mod value;

pub use engine::{
    Arguments, Column, FunctionContext, ResultSink, RowCursor, Slot, StatementHandle, ValueHandle,
};
pub use error::{Error, Result, Status};
pub use marshal::{Decode, Encode, bind, extract_column, extract_value, produce_result};
pub use sink::{Buffer, Sink};
pub use source::Source;
pub use storage::{ClassSet, Storage, StorageClass, supports};
pub use types::{Element, Null, Persistent, Union2, Union3, Union4, Union5, Utf16String};
pub use value::{ValueSink, from_value, to_value};
