//! File-backed ledger store.
//!
//! Each append opens the file in append mode, writes the line, and fsyncs
//! before reporting success. Scans open an independent read handle, so
//! readers never contend with the single writer; whole-line appends keep
//! a concurrent reader from observing a torn record.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::ports::{LedgerStore, LedgerStoreError, LineStream};

/// Ledger store over one line-per-record text file.
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(err: std::io::Error) -> LedgerStoreError {
        LedgerStoreError::new(err.to_string())
    }
}

impl LedgerStore for FileLedger {
    fn append_line(&self, line: &str) -> Result<(), LedgerStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(Self::io_err)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(Self::io_err)?;
        file.write_all(line.as_bytes()).map_err(Self::io_err)?;
        file.write_all(b"\n").map_err(Self::io_err)?;
        file.sync_all().map_err(Self::io_err)?;
        Ok(())
    }

    fn scan_lines(&self) -> Result<LineStream<'_>, LedgerStoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            // A ledger that was never written to is simply empty.
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(Box::new(std::iter::empty()));
            }
            Err(err) => return Err(Self::io_err(err)),
        };

        let lines = BufReader::new(file).lines().map_while(|result| match result {
            Ok(line) => Some(line),
            Err(err) => {
                // A mid-scan read failure truncates the replay; the lines
                // already yielded are still in write order.
                warn!(%err, "ledger scan stopped on read failure");
                None
            }
        });
        Ok(Box::new(lines))
    }
}
