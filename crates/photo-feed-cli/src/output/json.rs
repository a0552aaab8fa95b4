//! JSON output adapter.

use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Mutex;

/// JSON Lines output adapter.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonOutput {
    /// Creates a new JSON output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Creates a new JSON output writing to the given writer.
    #[allow(dead_code)] // API for programmatic use
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Writes one item as a single line.
    pub fn write<T: Serialize>(&self, item: &T) -> Result<()> {
        self.write_value(item, false)
    }

    /// Writes one item, optionally pretty-printed.
    #[allow(clippy::significant_drop_tightening)]
    pub fn write_value<T: Serialize + ?Sized>(&self, item: &T, pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(item)?
        } else {
            serde_json::to_string(item)?
        };
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{json}")?;
        Ok(())
    }

    /// Writes a batch of items as a JSON array.
    pub fn write_array<T: Serialize>(&self, items: &[T], pretty: bool) -> Result<()> {
        self.write_value(items, pretty)
    }

    /// Flushes the underlying writer.
    #[allow(clippy::significant_drop_tightening)]
    pub fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}
