//! Uploaded ad creatives.

use std::sync::Arc;

use nrnhub_ads::UploadId;

use crate::{KvStore, StoreError};

const MEDIA_PREFIX: &str = "media:";

/// Extensions accepted for ad creatives.
const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Repository for uploaded creative blobs.
pub struct MediaStore {
    kv: Arc<KvStore>,
}

impl MediaStore {
    /// Create a repository over a store handle.
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Store a creative under a freshly generated name derived from the
    /// original filename's extension. Returns the stored name.
    pub fn store(&self, original_filename: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let ext = extension_of(original_filename)
            .ok_or_else(|| StoreError::UnsupportedMedia(original_filename.to_string()))?;
        let name = format!("{}.{}", UploadId::generate(), ext);
        self.kv.set_raw(&format!("{}{}", MEDIA_PREFIX, name), bytes)?;
        Ok(name)
    }

    /// Fetch a stored creative's bytes.
    pub fn get(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        // Reject traversal-looking names outright.
        if name.contains('/') || name.contains("..") {
            return Ok(None);
        }
        self.kv.get_raw(&format!("{}{}", MEDIA_PREFIX, name))
    }

    /// The content type to serve a stored creative with.
    pub fn content_type_for(name: &str) -> &'static str {
        match extension_of(name).unwrap_or("") {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

/// Lower-cased allowed extension of a filename, if any.
fn extension_of(filename: &str) -> Option<&'static str> {
    let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.into_iter().find(|e| *e == ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MediaStore {
        MediaStore::new(Arc::new(KvStore::open_default().unwrap()))
    }

    #[test]
    fn test_store_and_fetch() {
        let repo = store();
        let name = repo.store("banner.png", b"img-bytes").unwrap();
        assert!(name.ends_with(".png"));
        assert_eq!(repo.get(&name).unwrap().as_deref(), Some(&b"img-bytes"[..]));
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let repo = store();
        assert!(repo.store("script.exe", b"x").is_err());
        assert!(repo.store("noext", b"x").is_err());
    }

    #[test]
    fn test_extension_case_insensitive() {
        let repo = store();
        let name = repo.store("photo.JPG", b"x").unwrap();
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_traversal_names_miss() {
        let repo = store();
        assert_eq!(repo.get("../secrets").unwrap(), None);
        assert_eq!(repo.get("a/b.png").unwrap(), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(MediaStore::content_type_for("a.png"), "image/png");
        assert_eq!(MediaStore::content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(MediaStore::content_type_for("a.bin"), "application/octet-stream");
    }
}
