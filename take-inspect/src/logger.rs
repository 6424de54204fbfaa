use log::Level;

use crate::entry::{Entry, Format};
use crate::error::Result;
use crate::Sink;

pub const DEFAULT_TARGET: &str = "take::inspect";

/// Forward entries to the `log` facade.
#[derive(Debug, Copy, Clone)]
pub struct Logger {
    level: Level,
    target: &'static str,
    format: Format,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            target: DEFAULT_TARGET,
            format: Format::default(),
        }
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for Logger {
    fn emit(&mut self, entry: Entry<'_>) -> Result<()> {
        if !log::log_enabled!(target: self.target, self.level) {
            return Ok(());
        }

        let line = entry.to_line(self.format)?;
        log::log!(target: self.target, self.level, "{line}");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::fmt::{self, Debug};

    use super::*;

    struct Unprintable;

    impl Debug for Unprintable {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn disabled_level_skips_rendering() {
        // No logger is installed, so every level is disabled
        let mut logger = Logger::new().level(Level::Error).format(Format::Pretty);
        assert!(logger.emit(Entry::new(None, Some(&Unprintable))).is_ok());
    }
}
