//! Upload directory on the local filesystem.

use std::path::{Path, PathBuf};

use anyhow::Context;
use erudio_http::error::AppError;
use erudio_kernel::settings::FileStorageSettings;
use tracing::warn;

/// Reduce a client-supplied name to a single file name inside the upload
/// directory. Names containing `..` are refused outright.
pub fn clean_filename(raw: &str) -> Result<String, AppError> {
    if raw.contains("..") {
        return Err(AppError::unsupported_operation(format!(
            "Sorry! Filename contains invalid path sequence {}",
            raw
        )));
    }

    let normalized = raw.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::unsupported_operation(format!("Invalid file name '{}'", raw)))
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates the upload directory when missing.
    pub fn new(settings: &FileStorageSettings) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&settings.upload_dir).with_context(|| {
            format!(
                "Could not create the directory where the uploaded files will be stored: {}",
                settings.upload_dir
            )
        })?;
        let root = Path::new(&settings.upload_dir)
            .canonicalize()
            .with_context(|| format!("failed to resolve upload dir {}", settings.upload_dir))?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` under the cleaned name, replacing any earlier upload.
    pub async fn store(&self, raw_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        let file_name = clean_filename(raw_name)?;
        let target = self.root.join(&file_name);

        if tokio::fs::try_exists(&target).await.unwrap_or(false) {
            warn!(file_name = %file_name, "replacing existing upload");
        }

        tokio::fs::write(&target, bytes).await.map_err(|e| {
            AppError::file_storage(
                format!("Could not store file {}. Please try again!", file_name),
                e,
            )
        })?;

        Ok(file_name)
    }

    /// Path of a stored file; `FileNotFound` when it does not exist.
    pub async fn load(&self, raw_name: &str) -> Result<PathBuf, AppError> {
        let file_name = clean_filename(raw_name)?;
        let path = self.root.join(&file_name);

        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(path),
            _ => Err(AppError::file_not_found(format!(
                "File not found {}",
                file_name
            ))),
        }
    }
}
