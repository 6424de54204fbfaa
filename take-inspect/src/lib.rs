//! Diagnostic sinks for looking at a value in the middle of a pipeline.
//!
//! A [`Sink`] receives an [`Entry`] (an optional label and the value, if any)
//! and writes it somewhere. [`Stdout`] is what `Pipe::inspect` uses unless
//! another sink is given.
pub use crate::capture::Capture;
pub use crate::entry::{Entry, Format, NOTHING};
pub use crate::error::{Error, Result};
pub use crate::logger::Logger;
pub use crate::writer::{Stdout, Writer};

mod capture;
mod entry;
mod error;
mod logger;
mod writer;

pub trait Sink {
    fn emit(&mut self, entry: Entry<'_>) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&mut self, entry: Entry<'_>) -> Result<()> {
        (**self).emit(entry)
    }
}
