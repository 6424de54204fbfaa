use crate::entry::{Entry, Format};
use crate::error::Result;
use crate::Sink;

/// Keep rendered entries in memory.
///
/// ```
/// # use take_inspect::*;
/// let mut capture = Capture::new();
/// capture.emit(Entry::new(Some("n"), Some(&1))).unwrap();
/// assert_eq!(capture.lines(), ["n: 1"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Capture {
    lines: Vec<String>,
    format: Format,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove and return everything captured so far.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Sink for Capture {
    fn emit(&mut self, entry: Entry<'_>) -> Result<()> {
        let line = entry.to_line(self.format)?;
        self.lines.push(line);
        Ok(())
    }
}
