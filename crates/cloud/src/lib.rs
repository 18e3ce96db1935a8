//! Object storage for Meridian.
//!
//! Image bytes live in a private S3 bucket; the database stores only keys.
//! Reads go through short-lived presigned URLs generated per request, writes
//! happen only from the uploader utility. [`ObjectStorage`] is the seam the
//! API and uploader depend on so tests can substitute an in-memory stub.

mod error;
mod s3;

pub use error::CloudError;
pub use s3::S3Storage;

use std::time::Duration;

use async_trait::async_trait;

/// Provider-agnostic object storage operations.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Generate a time-limited read URL for `key`.
    ///
    /// Every call produces a fresh URL; nothing is cached or tracked.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, CloudError>;

    /// Store an object under `key`.
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), CloudError>;
}
