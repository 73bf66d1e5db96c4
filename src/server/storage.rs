//! Upload and result file storage.
//!
//! Uploads are persisted under fresh UUID names so concurrent clients can
//! never clobber each other; client-supplied names are sanitized before any
//! filesystem access.

use crate::defaults;
use crate::error::{Result, SubcueError};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem layout for uploaded media and generated subtitles.
#[derive(Debug)]
pub struct MediaStore {
    upload_dir: PathBuf,
    result_dir: PathBuf,
}

impl MediaStore {
    /// Create the store, ensuring both directories exist.
    pub fn new(upload_dir: PathBuf, result_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&upload_dir)?;
        std::fs::create_dir_all(&result_dir)?;
        Ok(Self {
            upload_dir,
            result_dir,
        })
    }

    /// Persist an uploaded payload under a fresh unique name.
    ///
    /// The original file name contributes only its (sanitized) extension.
    ///
    /// # Returns
    /// The stored file name
    pub fn store_upload(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        let stored_name = match sanitized_extension(original_name) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        std::fs::write(self.upload_dir.join(&stored_name), bytes)?;
        Ok(stored_name)
    }

    /// Path of a stored upload, or `None` if no such upload exists.
    pub fn upload_path(&self, stored_name: &str) -> Result<Option<PathBuf>> {
        let path = self.upload_dir.join(validate_name(stored_name)?);
        Ok(path.is_file().then_some(path))
    }

    /// Path where the subtitle file for a stored upload will be written.
    pub fn result_path(&self, result_name: &str) -> Result<PathBuf> {
        Ok(self.result_dir.join(validate_name(result_name)?))
    }

    /// Path of an existing result file, or `None` if absent.
    pub fn existing_result(&self, result_name: &str) -> Result<Option<PathBuf>> {
        let path = self.result_path(result_name)?;
        Ok(path.is_file().then_some(path))
    }

    /// Subtitle file name derived from a stored upload name.
    pub fn result_name_for(stored_name: &str) -> String {
        let stem = Path::new(stored_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(stored_name);
        format!("{}.{}", stem, defaults::RESULT_EXTENSION)
    }
}

/// Reject names that could escape the storage directories.
fn validate_name(name: &str) -> Result<&str> {
    let suspicious = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if suspicious {
        return Err(SubcueError::InvalidFileName {
            name: name.to_string(),
        });
    }
    Ok(name)
}

/// Extract a safe ASCII-alphanumeric extension from a client file name.
fn sanitized_extension(name: &str) -> Option<&str> {
    let ext = Path::new(name).extension()?.to_str()?;
    let safe = !ext.is_empty()
        && ext.len() <= 8
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    safe.then_some(ext)
}
