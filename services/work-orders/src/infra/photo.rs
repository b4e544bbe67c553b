use std::path::{Path, PathBuf};

use anyhow::Context as _;
use uuid::Uuid;

use crate::domain::repository::PhotoStore;
use crate::domain::types::{PhotoFolder, PhotoUpload};
use crate::error::WorkOrdersError;

const FALLBACK_EXTENSION: &str = "bin";

/// Stores photos on the local filesystem under `root/<folder>/<uuid>.<ext>`.
#[derive(Clone)]
pub struct LocalPhotoStore {
    pub root: PathBuf,
}

/// Lowercased alphanumeric extension of `file_name`, if it has a usable one.
fn extension_of(file_name: &str) -> &'static str {
    match Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "jpg",
        Some("png") => "png",
        Some("gif") => "gif",
        Some("webp") => "webp",
        Some("heic") => "heic",
        _ => FALLBACK_EXTENSION,
    }
}

impl PhotoStore for LocalPhotoStore {
    async fn save(
        &self,
        folder: PhotoFolder,
        upload: &PhotoUpload,
    ) -> Result<String, WorkOrdersError> {
        let relative = format!(
            "{}/{}.{}",
            folder.as_str(),
            Uuid::new_v4(),
            extension_of(&upload.file_name)
        );
        let dir = self.root.join(folder.as_str());
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("create photo dir {}", dir.display()))?;
        let path = self.root.join(&relative);
        tokio::fs::write(&path, &upload.bytes)
            .await
            .with_context(|| format!("write photo {}", path.display()))?;
        tracing::debug!(path = %relative, size = upload.bytes.len(), "photo stored");
        Ok(relative)
    }

    async fn remove(&self, path: &str) -> Result<(), WorkOrdersError> {
        let full = self.root.join(path);
        tokio::fs::remove_file(&full)
            .await
            .with_context(|| format!("remove photo {}", full.display()))?;
        tracing::debug!(path, "photo removed");
        Ok(())
    }
}
