use std::fmt::{self, Debug, Display, Write};

use crate::error::Result;

/// What an absent value renders as.
pub const NOTHING: &str = "nothing";

/// How a sink renders the value of an [`Entry`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Format {
    /// Single line, `{:?}`
    #[default]
    Compact,
    /// Multi line, `{:#?}`
    Pretty,
}

/// A single inspected value on its way to a [`Sink`](crate::Sink).
///
/// The value is `None` when the inspected pipe held nothing.
#[derive(Debug, Copy, Clone)]
pub struct Entry<'a> {
    label: Option<&'a str>,
    value: Option<&'a dyn Debug>,
}

impl<'a> Entry<'a> {
    pub fn new(label: Option<&'a str>, value: Option<&'a dyn Debug>) -> Self {
        Self { label, value }
    }

    pub fn label(&self) -> Option<&'a str> {
        self.label
    }

    pub fn value(&self) -> Option<&'a dyn Debug> {
        self.value
    }

    pub fn is_nothing(&self) -> bool {
        self.value.is_none()
    }

    /// Write the entry as `label: value`, or just `value` if there is no label.
    pub fn render(&self, format: Format, output: &mut impl Write) -> fmt::Result {
        if let Some(label) = self.label {
            write!(output, "{label}: ")?;
        }

        match (self.value, format) {
            (None, _) => output.write_str(NOTHING),
            (Some(value), Format::Compact) => write!(output, "{value:?}"),
            (Some(value), Format::Pretty) => write!(output, "{value:#?}"),
        }
    }

    pub fn to_line(&self, format: Format) -> Result<String> {
        let mut line = String::new();
        self.render(format, &mut line)?;
        Ok(line)
    }
}

impl Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(Format::Compact, f)
    }
}
