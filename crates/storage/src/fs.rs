use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::repository::{ImageCatalog, ImageKind, StorageError};

const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Catalog backed by an images directory with one sub-directory per kind.
///
/// References are rendered as `{url_prefix}/{path relative to root}`.
#[derive(Debug, Clone)]
pub struct FsImageCatalog {
    root: PathBuf,
    url_prefix: String,
}

impl FsImageCatalog {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            url_prefix: "/images".into(),
        }
    }

    fn to_ref(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|part| part.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(format!(
            "{}/{}",
            self.url_prefix.trim_end_matches('/'),
            parts.join("/")
        ))
    }
}

#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

#[async_trait]
impl ImageCatalog for FsImageCatalog {
    async fn list_images(&self, kind: ImageKind) -> Result<Vec<String>, StorageError> {
        let dir = self.root.join(kind.dir_name());
        if !tokio::fs::try_exists(&dir).await? {
            return Err(StorageError::NotFound(dir.display().to_string()));
        }

        let mut found = Vec::new();
        let mut pending = vec![dir];
        while let Some(current) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&current).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_dir() {
                    pending.push(path);
                } else if is_supported_image(&path) {
                    if let Some(image_ref) = self.to_ref(&path) {
                        found.push(image_ref);
                    }
                }
            }
        }

        found.sort();
        Ok(found)
    }
}
