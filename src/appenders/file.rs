//! File sink implementation

use crate::core::Sink;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends rendered lines to a file
///
/// The caller opens and closes the file; a logger only writes to it.
pub struct FileSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the file; later writes fail and the sink reports non-writable
    pub fn close(&self) -> io::Result<()> {
        if let Some(mut file) = self.file.lock().take() {
            file.flush()?;
        }
        Ok(())
    }
}

impl Sink for FileSink {
    fn write(&self, text: &str) -> io::Result<()> {
        let mut guard = self.file.lock();
        let file = guard.as_mut().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("file sink '{}' is closed", self.path.display()),
            )
        })?;
        file.write_all(text.as_bytes())
    }

    fn is_writable(&self) -> bool {
        self.file.lock().is_some()
    }
}
