//! File-backed identity store.
//!
//! One text file per membership set, one identifier per line — the layout
//! shared with the registration files of existing installations. Appends
//! and rewrites are durable before returning; rewrites go through a temp
//! file and an atomic rename so a reader never observes a half-written
//! set.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use shared_types::{CardId, RoleSet};
use tracing::warn;

use crate::ports::{IdentityStore, IdentityStoreError};

/// Identity store over two line-per-identifier text files.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    visitors_path: PathBuf,
    custodians_path: PathBuf,
}

impl FileIdentityStore {
    pub fn new<P: AsRef<Path>>(visitors_path: P, custodians_path: P) -> Self {
        Self {
            visitors_path: visitors_path.as_ref().to_path_buf(),
            custodians_path: custodians_path.as_ref().to_path_buf(),
        }
    }

    fn path(&self, set: RoleSet) -> &Path {
        match set {
            RoleSet::Visitors => &self.visitors_path,
            RoleSet::Custodians => &self.custodians_path,
        }
    }

    fn io_err(err: std::io::Error) -> IdentityStoreError {
        IdentityStoreError::new(err.to_string())
    }
}

impl IdentityStore for FileIdentityStore {
    fn scan(&self, set: RoleSet) -> Result<Vec<CardId>, IdentityStoreError> {
        let mut contents = String::new();
        match File::open(self.path(set)) {
            Ok(mut file) => {
                file.read_to_string(&mut contents).map_err(Self::io_err)?;
            }
            // A set that was never written to is simply empty.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(Self::io_err(err)),
        }

        let mut ids = Vec::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match CardId::parse(line) {
                Ok(id) => ids.push(id),
                Err(err) => {
                    warn!(set = %set, line, %err, "skipping invalid registry line");
                }
            }
        }
        Ok(ids)
    }

    fn append(&self, set: RoleSet, id: &CardId) -> Result<(), IdentityStoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path(set))
            .map_err(Self::io_err)?;
        file.write_all(id.as_str().as_bytes()).map_err(Self::io_err)?;
        file.write_all(b"\n").map_err(Self::io_err)?;
        file.sync_all().map_err(Self::io_err)?;
        Ok(())
    }

    fn rewrite(&self, set: RoleSet, ids: &[CardId]) -> Result<(), IdentityStoreError> {
        let path = self.path(set);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(Self::io_err)?;
        }

        let mut contents = String::new();
        for id in ids {
            contents.push_str(id.as_str());
            contents.push('\n');
        }

        // Write atomically via temp file.
        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path).map_err(Self::io_err)?;
        file.write_all(contents.as_bytes()).map_err(Self::io_err)?;
        file.sync_all().map_err(Self::io_err)?;
        std::fs::rename(&temp_path, path).map_err(Self::io_err)?;
        Ok(())
    }
}
