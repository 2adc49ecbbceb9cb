//!
//! Marshalling Operations
//!
//! Every registered type implements two bodies:
//!
//! - `Encode` writes the value into a `Sink` (statement slot or function
//!   result), so binding and result production share one body
//! - `Decode` reads the value from a `Source` (row column or detached
//!   value), so column and value extraction share one body
//!
//! The four boundary operations below are thin entry points that pick the
//! sink or source and call the type's body. Composite types implement the
//! same two traits by forwarding to their inner types, so adding a type
//! never touches an existing one.
//!

use tracing::debug;

use crate::engine::{FunctionContext, RowCursor, StatementHandle, ValueHandle};
use crate::error::{Result, Status};
use crate::sink::Sink;
use crate::source::Source;
use crate::storage::Storage;

pub trait Encode: Storage {
    fn encode<K: Sink>(&self, sink: K) -> K::Status;
}

pub trait Decode: Storage + Sized {
    fn decode<S: Source + ?Sized>(src: &S) -> Result<Self>;
}

/// Bind `value` to parameter `index` (1-based). The engine's status code is
/// returned unchanged.
pub fn bind<T: Encode + ?Sized>(stmt: &mut StatementHandle<'_>, index: usize, value: &T) -> Status {
    let status = value.encode(stmt.slot(index));
    if !status.is_ok() {
        debug!(index, code = status.code(), "engine rejected parameter binding");
    }
    status
}

/// Set `value` as the result of the running function call.
pub fn produce_result<T: Encode + ?Sized>(ctx: &mut FunctionContext<'_>, value: &T) {
    value.encode(ctx.result())
}

/// Read column `index` (0-based) of the current row.
pub fn extract_column<T: Decode>(row: &RowCursor<'_>, index: usize) -> Result<T> {
    T::decode(&row.column(index))
}

pub fn extract_value<T: Decode>(value: &ValueHandle<'_>) -> Result<T> {
    T::decode(value)
}
