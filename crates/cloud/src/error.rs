#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("Missing environment variable: {0}")]
    MissingConfig(&'static str),

    #[error("Failed to presign URL for {key}: {message}")]
    Presign { key: String, message: String },

    #[error("Failed to upload object {key}: {message}")]
    Upload { key: String, message: String },
}
