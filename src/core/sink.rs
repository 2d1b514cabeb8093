//! Sink trait for rendered log output

use parking_lot::Mutex;
use std::io::{self, Write};

/// Destination accepting rendered log lines
///
/// Writes go through `&self` so a sink can be shared (`Arc<dyn Sink>`)
/// between its owner and any number of loggers.
pub trait Sink: Send + Sync {
    fn write(&self, text: &str) -> io::Result<()>;

    /// Capability check performed once when a logger is built
    fn is_writable(&self) -> bool {
        true
    }
}

impl<W: Write + Send> Sink for Mutex<W> {
    fn write(&self, text: &str) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}
