//!
//! Registered Host Types
//!
//! | Rust type                          | Storage classes            |
//! |------------------------------------|----------------------------|
//! | `i8`..`i64`, `u8`..`u64`, `isize`, `usize`, `bool` | integer    |
//! | `f32`, `f64`                       | float                      |
//! | `str`, `String`, `Utf16String`     | text                       |
//! | `[T]`, `Vec<T>` for `T: Element`   | blob                       |
//! | `Null`                             | null                       |
//! | `Option<T>`                        | classes of `T` plus null   |
//! | `Box<T>`, `&T`                     | classes of `T`             |
//! | `Persistent<&'static str / [u8]>`  | text / blob (bind only)    |
//! | tagged unions                      | union of the alternatives' |
//!

mod blob;
mod nullable;
mod numeric;
mod persistent;
#[doc(hidden)]
pub mod tagged;
mod text;

pub use blob::Element;
pub use nullable::Null;
pub use persistent::Persistent;
pub use tagged::{Union2, Union3, Union4, Union5};
pub use text::Utf16String;
