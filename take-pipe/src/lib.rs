//! A value that may not be there, and a way to keep transforming it
//! without checking at every step.
//!
//! ```
//! # use take_pipe::*;
//! let name = take_nullable(std::env::var("TAKE_DOC_UNSET").ok())
//!     .through(|name| name.to_uppercase())
//!     .with_default(String::from("anonymous"));
//!
//! assert_eq!(name, "anonymous");
//! ```
pub use crate::into_pipe::IntoPipe;
pub use crate::pipe::Pipe;

mod into_pipe;
mod pipe;
#[cfg(feature = "serde")]
mod serialize;

/// Start a pipeline with a value.
///
/// The value is always held, even an `Option`: `take(None::<u8>)` holds
/// `None`. Use [`take_nullable`] to turn `None` into nothing.
pub fn take<T>(value: T) -> Pipe<T> {
    Pipe::Something(value)
}

/// Start a pipeline with a value that might be `None`.
pub fn take_nullable<T>(value: Option<T>) -> Pipe<T> {
    Pipe::from(value)
}

/// Start a pipeline that holds nothing.
pub fn nothing<T>() -> Pipe<T> {
    Pipe::Nothing
}
