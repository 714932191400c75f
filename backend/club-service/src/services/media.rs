/// Upload storage collaborator
///
/// Writes an uploaded file under the configured upload root and hands back
/// the `(stored name, kind)` pair, which is all the rest of the service
/// ever sees of a file.
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;
use crate::models::MediaKind;

/// What the store returns for a successful upload.
#[derive(Debug, Clone)]
pub struct StoredMedia {
    pub file_name: String,
    pub kind: MediaKind,
}

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist an upload as `{millis}{original extension}` under
    /// `root/subdir` and classify it from the content type.
    pub async fn store(
        &self,
        subdir: &str,
        original_name: &str,
        content_type: &mime::Mime,
        bytes: &[u8],
    ) -> Result<StoredMedia> {
        let extension = Path::new(original_name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let file_name = format!("{}{}", Utc::now().timestamp_millis(), extension);

        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        Ok(StoredMedia {
            file_name,
            kind: MediaKind::from_mime(content_type),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_image_with_original_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let stored = store
            .store("album", "rally.png", &mime::IMAGE_PNG, b"png-bytes")
            .await
            .unwrap();

        assert!(stored.file_name.ends_with(".png"));
        assert_eq!(stored.kind, MediaKind::Image);

        let written = std::fs::read(dir.path().join("album").join(&stored.file_name)).unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[tokio::test]
    async fn classifies_non_image_as_video() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let stored = store
            .store("posts", "highlights.mp4", &"video/mp4".parse().unwrap(), b"mp4")
            .await
            .unwrap();

        assert_eq!(stored.kind, MediaKind::Video);
    }
}
