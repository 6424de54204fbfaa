use std::io::{self, Write};

use crate::entry::{Entry, Format};
use crate::error::Result;
use crate::Sink;

/// The default sink: one line per entry on standard output.
#[derive(Debug, Default, Copy, Clone)]
pub struct Stdout {
    format: Format,
}

impl Stdout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

impl Sink for Stdout {
    fn emit(&mut self, entry: Entry<'_>) -> Result<()> {
        let line = entry.to_line(self.format)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        Ok(())
    }
}

/// Write entries to anything that implements [`io::Write`].
#[derive(Debug)]
pub struct Writer<W> {
    output: W,
    format: Format,
}

impl<W: Write> Writer<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            format: Format::default(),
        }
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Sink for Writer<W> {
    fn emit(&mut self, entry: Entry<'_>) -> Result<()> {
        let line = entry.to_line(self.format)?;
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
