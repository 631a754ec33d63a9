//! Storage module for uploaded report images
//!
//! Provides a local-disk image store with extension filtering and
//! sanitized, time-uniquified filenames.

mod local_image_store;

pub use local_image_store::{LocalImageStore, UploadedImage, UPLOADS_PREFIX};
