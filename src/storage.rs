//! JSON file persistence for the dashboard document
//!
//! One document, one file. `load` is strict and reports parse failures;
//! `load_or_default` applies the degrade-to-default policy (any failure
//! anywhere discards the whole document rather than salvaging parts).
//! Both run the [`crate::normalize`] pass on whatever they produce.
//!
//! Saving overwrites the file in place. There is no temp-file swap; a
//! failed write can leave a truncated file. Accepted weakness.

use crate::model::AppData;
use crate::normalize::{self, RawAppData};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Load and normalize the document
    ///
    /// A missing file yields an empty default document; an unreadable or
    /// malformed file is an error, left to the caller's policy.
    pub fn load(&self) -> Result<AppData> {
        if !self.file_path.exists() {
            return Ok(AppData::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("reading {}", self.file_path.display()))?;
        let raw: RawAppData = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.file_path.display()))?;
        Ok(normalize::normalize(raw))
    }

    /// Load the document, falling back to an empty default on any failure
    pub fn load_or_default(&self) -> AppData {
        match self.load() {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load data file, starting empty");
                AppData::new()
            }
        }
    }

    /// Serialize the whole document and overwrite the file
    pub fn save(&self, data: &AppData) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("writing {}", self.file_path.display()))?;
        Ok(())
    }

    /// Write the in-memory document verbatim to a user-chosen path
    pub fn export_to(data: &AppData, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(data)?;
        fs::write(path, content).with_context(|| format!("exporting to {}", path.display()))?;
        Ok(())
    }

    /// Read a document from a user-chosen path, normalized
    pub fn import_from(path: impl AsRef<Path>) -> Result<AppData> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("importing from {}", path.display()))?;
        let raw: RawAppData = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(normalize::normalize(raw))
    }
}
