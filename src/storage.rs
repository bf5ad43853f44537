//! Plain-text artifact storage: session logs and other small text files kept
//! alongside generated maps.

use crate::error::StorageError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{debug, info};

/// Timestamp layout used for appended log lines.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// File extension for stored artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::AsRefStr, strum_macros::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactKind {
    /// Human-readable text, the usual choice.
    #[default]
    Txt,
    /// Opaque data blobs.
    Dat,
}

/// Text-file store rooted at a single directory.
///
/// Every operation resolves the artifact path the same way, from the store's
/// root and extension kind, so create, append, read, and delete always agree
/// on which file they are talking about. The root directory must already
/// exist; the store never creates directories.
#[derive(Debug, Clone)]
pub struct TextStore {
    root: PathBuf,
    kind: ArtifactKind,
}

impl TextStore {
    pub fn new(root: impl Into<PathBuf>, kind: ArtifactKind) -> Self {
        Self {
            root: root.into(),
            kind,
        }
    }

    /// Full path of the named artifact under this store.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{}", self.kind.as_ref()))
    }

    /// Creates the named artifact with an upper-cased `header` line.
    ///
    /// First write wins: if the artifact already exists it is left untouched
    /// and `false` is returned.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn create(&self, name: &str, header: &str) -> Result<bool, StorageError> {
        let path = self.artifact_path(name);
        if path.exists() {
            debug!("Artifact {} already exists, leaving it untouched", path.display());
            return Ok(false);
        }

        fs::write(&path, format!("{}\n", header.to_uppercase()))?;
        info!("Created artifact {}", path.display());
        Ok(true)
    }

    /// Reads the full contents of the named artifact.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file does not exist or cannot be read.
    pub fn read(&self, name: &str) -> Result<String, StorageError> {
        Ok(fs::read_to_string(self.artifact_path(name))?)
    }

    /// Appends a timestamped session line to the named artifact, creating it
    /// (without a header) if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or written, or a
    /// timestamp error if the current time cannot be formatted.
    pub fn append(&self, name: &str, note: &str) -> Result<(), StorageError> {
        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT)?;

        let path = self.artifact_path(name);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(format!("Login: {timestamp} {note}\n").as_bytes())?;
        info!("Appended session line to {}", path.display());
        Ok(())
    }

    /// Deletes the named artifact.
    ///
    /// Returns `false` when there was nothing to delete.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if an existing file cannot be removed.
    pub fn delete(&self, name: &str) -> Result<bool, StorageError> {
        let path = self.artifact_path(name);
        if !path.exists() {
            debug!("Artifact {} does not exist, nothing to delete", path.display());
            return Ok(false);
        }

        fs::remove_file(&path)?;
        info!("Deleted artifact {}", path.display());
        Ok(true)
    }

    /// The directory this store resolves artifacts under.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
