//! High-level storage operations.

use rand::Rng;

use crate::client::StorageClient;
use crate::error::StorageResult;

/// Bucket holding candidate resumes.
pub const RESUMES_BUCKET: &str = "resumes";

/// Bucket holding company logos.
pub const COMPANY_LOGO_BUCKET: &str = "company-logo";

/// Upper bound (exclusive) of the random key suffix.
const KEY_SUFFIX_RANGE: u32 = 90_000;

/// A raw file handed in by the caller, uploaded as-is.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl FileUpload {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }
}

/// Build an object key of the form `<kind>-<random 0..90000>-<discriminator>`.
///
/// The random suffix is not checked for collisions; two uploads with the same
/// discriminator can land on the same key and the later one wins.
pub fn object_key(kind: &str, discriminator: &str) -> String {
    let n: u32 = rand::rng().random_range(0..KEY_SUFFIX_RANGE);
    format!("{}-{}-{}", kind, n, discriminator)
}

impl StorageClient {
    /// Upload a candidate resume and return its public URL.
    pub async fn upload_resume(
        &self,
        token: &str,
        candidate_id: &str,
        file: FileUpload,
    ) -> StorageResult<String> {
        let key = object_key("resume", candidate_id);
        self.upload_bytes(token, RESUMES_BUCKET, &key, file.bytes, &file.content_type)
            .await?;
        Ok(self.public_url(RESUMES_BUCKET, &key))
    }

    /// Upload a company logo and return its public URL.
    pub async fn upload_logo(
        &self,
        token: &str,
        company_name: &str,
        file: FileUpload,
    ) -> StorageResult<String> {
        let key = object_key("logo", company_name);
        self.upload_bytes(token, COMPANY_LOGO_BUCKET, &key, file.bytes, &file.content_type)
            .await?;
        Ok(self.public_url(COMPANY_LOGO_BUCKET, &key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_shape() {
        let key = object_key("resume", "user_9");
        let mut parts = key.splitn(3, '-');
        assert_eq!(parts.next(), Some("resume"));
        let suffix: u32 = parts.next().unwrap().parse().unwrap();
        assert!(suffix < KEY_SUFFIX_RANGE);
        assert_eq!(parts.next(), Some("user_9"));
    }

    #[test]
    fn test_object_key_keeps_discriminator_dashes() {
        let key = object_key("logo", "acme-labs");
        let mut parts = key.splitn(3, '-');
        parts.next();
        parts.next();
        assert_eq!(parts.next(), Some("acme-labs"));
    }
}
