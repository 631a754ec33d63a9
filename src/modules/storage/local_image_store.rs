//! Local-disk store for report images
//!
//! Files are written to the configured upload directory and referenced by
//! the relative path `uploads/<name>`, which the router serves back.

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::UploadConfig;
use crate::core::error::{AppError, Result};
use crate::shared::constants::ALLOWED_IMAGE_EXTENSIONS;

lazy_static! {
    static ref UNSAFE_FILENAME_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_.\-]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Public URL prefix of stored images
pub const UPLOADS_PREFIX: &str = "uploads";

const MAX_BASE_NAME_LEN: usize = 100;

/// An image received with a form submission
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub data: Vec<u8>,
}

pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
        }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Create the upload directory if missing
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create upload directory {}: {}",
                self.dir.display(),
                e
            ))
        })
    }

    /// Store an image and return its reference path.
    ///
    /// Returns `Ok(None)` when there is nothing acceptable to store: no file,
    /// an empty filename or body, or an extension outside the allow-list.
    pub async fn save(&self, image: Option<UploadedImage>) -> Result<Option<String>> {
        let Some(image) = image else {
            return Ok(None);
        };
        if image.file_name.trim().is_empty() || image.data.is_empty() {
            return Ok(None);
        }
        let Some(extension) = allowed_extension(&image.file_name) else {
            debug!("Skipping image with unsupported type: {}", image.file_name);
            return Ok(None);
        };

        let unique_name = unique_file_name(&image.file_name, &extension);
        self.ensure_dir().await?;

        let path = self.dir.join(&unique_name);
        tokio::fs::write(&path, &image.data).await.map_err(|e| {
            AppError::Internal(format!("Failed to write image {}: {}", path.display(), e))
        })?;

        info!(
            "Image stored: name={}, size={}",
            unique_name,
            image.data.len()
        );

        Ok(Some(format!("{}/{}", UPLOADS_PREFIX, unique_name)))
    }
}

/// Lowercased extension if it is an accepted image type
pub fn allowed_extension(file_name: &str) -> Option<String> {
    let (_, extension) = file_name.rsplit_once('.')?;
    let extension = extension.to_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

/// Reduce a client filename stem to a safe ASCII name
pub fn sanitize_base_name(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    // Keep only the last path component
    let stem = stem.rsplit(['/', '\\']).next().unwrap_or(stem);

    let spaced = WHITESPACE_RUN.replace_all(stem.trim(), "_");
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(&spaced, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    let base: String = trimmed.chars().take(MAX_BASE_NAME_LEN).collect();
    if base.is_empty() {
        "image".to_string()
    } else {
        base
    }
}

fn unique_file_name(file_name: &str, extension: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}.{}",
        sanitize_base_name(file_name),
        Utc::now().timestamp(),
        &suffix[..8],
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn temp_store() -> LocalImageStore {
        let dir = std::env::temp_dir().join(format!("arabity-wain-test-{}", Uuid::new_v4()));
        LocalImageStore::new(&UploadConfig {
            dir: dir.to_string_lossy().into_owned(),
        })
    }

    fn image(name: &str) -> Option<UploadedImage> {
        Some(UploadedImage {
            file_name: name.to_string(),
            data: vec![0x89, 0x50, 0x4e, 0x47],
        })
    }

    #[test]
    fn test_allowed_extension() {
        assert_eq!(allowed_extension("car.PNG"), Some("png".to_string()));
        assert_eq!(allowed_extension("car.photo.jpeg"), Some("jpeg".to_string()));
        assert_eq!(allowed_extension("car.webp"), Some("webp".to_string()));
        assert_eq!(allowed_extension("car.gif"), None);
        assert_eq!(allowed_extension("car"), None);
    }

    #[test]
    fn test_sanitize_base_name() {
        assert_eq!(sanitize_base_name("my car photo.jpg"), "my_car_photo");
        assert_eq!(sanitize_base_name("../../etc/passwd.png"), "passwd");
        assert_eq!(sanitize_base_name("صورة.png"), "image");
        assert_eq!(sanitize_base_name("._hidden.png"), "hidden");
    }

    #[tokio::test]
    async fn test_save_writes_file_under_uploads_prefix() {
        let store = temp_store();

        let reference = assert_ok!(store.save(image("Toyota Hilux.JPG")).await)
            .expect("image should be stored");

        assert!(reference.starts_with("uploads/Toyota_Hilux_"));
        assert!(reference.ends_with(".jpg"));

        let name = reference.trim_start_matches("uploads/");
        let written = tokio::fs::read(store.dir().join(name)).await.unwrap();
        assert_eq!(written, vec![0x89, 0x50, 0x4e, 0x47]);

        let _ = tokio::fs::remove_dir_all(store.dir()).await;
    }

    #[tokio::test]
    async fn test_save_skips_unacceptable_uploads() {
        let store = temp_store();

        assert_eq!(store.save(None).await.unwrap(), None);
        assert_eq!(store.save(image("")).await.unwrap(), None);
        assert_eq!(store.save(image("document.pdf")).await.unwrap(), None);

        let empty = Some(UploadedImage {
            file_name: "car.png".to_string(),
            data: Vec::new(),
        });
        assert_eq!(store.save(empty).await.unwrap(), None);

        // Nothing was written, so the directory was never created
        assert!(!store.dir().exists());
    }

    #[tokio::test]
    async fn test_save_reports_unwritable_directory() {
        let file = std::env::temp_dir().join(format!("arabity-wain-file-{}", Uuid::new_v4()));
        tokio::fs::write(&file, b"not a directory").await.unwrap();

        let store = LocalImageStore::new(&UploadConfig {
            dir: file.join("nested").to_string_lossy().into_owned(),
        });
        assert_err!(store.save(image("car.png")).await);

        let _ = tokio::fs::remove_file(&file).await;
    }
}
