//! AWS S3 implementation of [`ObjectStorage`].

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::CloudError;
use crate::ObjectStorage;

/// S3-backed object storage. Credentials and region come from the standard
/// AWS environment (env vars, profile, instance role); only the bucket name
/// is read explicitly.
#[derive(Clone)]
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Storage {
    /// Build a client from the ambient AWS configuration and the
    /// `AWS_S3_BUCKET` environment variable.
    pub async fn from_env() -> Result<Self, CloudError> {
        let bucket =
            std::env::var("AWS_S3_BUCKET").map_err(|_| CloudError::MissingConfig("AWS_S3_BUCKET"))?;

        let config = aws_config::load_from_env().await;
        let client = aws_sdk_s3::Client::new(&config);

        tracing::info!(bucket = %bucket, "S3 storage client created");
        Ok(Self { client, bucket })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, CloudError> {
        let presigning = PresigningConfig::expires_in(expires_in).map_err(|e| {
            CloudError::Presign {
                key: key.to_string(),
                message: e.to_string(),
            }
        })?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| CloudError::Presign {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(request.uri().to_string())
    }

    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), CloudError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| CloudError::Upload {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}
