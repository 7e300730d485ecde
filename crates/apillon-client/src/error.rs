//! Client error types

use crate::upload::UploadStage;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Longest response body echoed back in an error message
const BODY_SNIPPET_LIMIT: usize = 512;

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or connection failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("API error ({status}): {}", snippet(.body))]
    Api { status: u16, body: String },

    /// Caller supplied an invalid argument; no request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Response body did not match the expected JSON shape
    #[error("Failed to decode response: {source}. Raw response: {}", snippet(.body))]
    Decode {
        source: serde_json::Error,
        body: String,
    },

    /// Response decoded but is missing required content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Negotiation returned fewer signed URLs than files in the batch
    #[error("Not enough upload URLs: expected {expected}, got {actual}")]
    InsufficientUrls { expected: usize, actual: usize },

    /// A signed URL rejected the uploaded content
    #[error("Upload failed with status {status}: {}", snippet(.body))]
    UploadFailed { status: u16, body: String },

    /// Starting the upload session failed
    #[error("Failed to start upload for {target}: {source}")]
    Negotiate {
        target: String,
        source: Box<ClientError>,
    },

    /// Uploading one file of a batch failed; later files were not attempted
    #[error("Failed to upload file #{index} ({file_name}): {source}")]
    Transfer {
        index: usize,
        file_name: String,
        source: Box<ClientError>,
    },

    /// Every file was uploaded but the session could not be closed
    #[error("Failed to end upload session {session_id}: {source}")]
    Finalize {
        session_id: String,
        source: Box<ClientError>,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Stage of a batch upload this error was raised in, if any
    pub fn stage(&self) -> Option<UploadStage> {
        match self {
            Self::Negotiate { .. } | Self::InsufficientUrls { .. } => {
                Some(UploadStage::Negotiating)
            }
            Self::Transfer { index, .. } => Some(UploadStage::Transferring(*index)),
            Self::Finalize { .. } => Some(UploadStage::Finalizing),
            _ => None,
        }
    }

    /// Index of the file whose upload failed
    pub fn file_index(&self) -> Option<usize> {
        match self {
            Self::Transfer { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// HTTP status behind this error, looking through batch context
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::UploadFailed { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Negotiate { source, .. }
            | Self::Transfer { source, .. }
            | Self::Finalize { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Whether running the same batch again is safe.
    ///
    /// Only true while finalize has not been attempted. Re-running after a
    /// finalize call may close the remote session twice.
    pub fn can_retry_batch(&self) -> bool {
        matches!(
            self,
            Self::Negotiate { .. } | Self::InsufficientUrls { .. } | Self::Transfer { .. }
        )
    }
}

fn snippet(body: &str) -> &str {
    if body.len() <= BODY_SNIPPET_LIMIT {
        return body;
    }
    let mut end = BODY_SNIPPET_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
