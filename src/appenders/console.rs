//! Console sink implementation

use crate::core::{Channel, Sink};
use std::io::{self, Write};

/// Writes to the process's standard output or standard error
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    channel: Channel,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            channel: Channel::Standard,
        }
    }

    pub fn stderr() -> Self {
        Self {
            channel: Channel::Error,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

impl Sink for ConsoleSink {
    fn write(&self, text: &str) -> io::Result<()> {
        // Lock for the whole line so concurrent callers don't interleave within it
        match self.channel {
            Channel::Standard => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()
            }
            Channel::Error => {
                let mut err = io::stderr().lock();
                err.write_all(text.as_bytes())?;
                err.flush()
            }
        }
    }
}
