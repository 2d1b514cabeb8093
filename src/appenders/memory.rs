//! In-memory sink, mostly useful for tests

use crate::core::Sink;
use parking_lot::Mutex;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

/// Collects every write in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<String>,
    closed: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that fails the writable capability check
    pub fn closed() -> Self {
        let sink = Self::new();
        sink.close();
        sink
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, text: &str) -> io::Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "memory sink is closed"));
        }
        self.buffer.lock().push_str(text);
        Ok(())
    }

    fn is_writable(&self) -> bool {
        !self.closed.load(Ordering::Acquire)
    }
}
