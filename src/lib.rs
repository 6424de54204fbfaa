//! Chain transformations over a value that may not be there.
//!
//! ```
//! use take::prelude::*;
//!
//! let greeting = take("foo")
//!     .through(|s| s.to_uppercase())
//!     .through(|s| format!("Hello, {s}"))
//!     .with_default(String::from("nobody home"));
//!
//! assert_eq!(greeting, "Hello, FOO");
//! ```
pub use {
    take_inspect as inspect, // sinks
    take_pipe as pipe,       // container
};

pub use crate::pipe::{IntoPipe, Pipe, nothing, take, take_nullable};

pub mod prelude {
    pub use crate::inspect::{Capture, Format, Logger, Sink, Stdout, Writer};
    pub use crate::pipe::{IntoPipe, Pipe, nothing, take, take_nullable};
}
