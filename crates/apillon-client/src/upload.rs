//! Session-based batch uploads
//!
//! An upload session is opened against a bucket or a website, returns one
//! pre-signed URL per file (positionally), receives the raw content through
//! those URLs and is closed with a single finalize call.

use crate::{
    client::{decode, require, segment},
    ApiResponse, ApillonClient, ClientError, Result,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Content type sent for files that do not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Where an upload session is opened
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadTarget {
    /// A storage bucket, by UUID
    Bucket(String),
    /// A hosting website, by UUID
    Website(String),
}

impl UploadTarget {
    /// Target a storage bucket
    pub fn bucket(uuid: impl Into<String>) -> Self {
        Self::Bucket(uuid.into())
    }

    /// Target a hosting website
    pub fn website(uuid: impl Into<String>) -> Self {
        Self::Website(uuid.into())
    }

    /// UUID of the bucket or website
    pub fn uuid(&self) -> &str {
        match self {
            Self::Bucket(uuid) | Self::Website(uuid) => uuid,
        }
    }

    fn base_path(&self) -> String {
        match self {
            Self::Bucket(uuid) => format!("/storage/buckets/{}", segment(uuid)),
            Self::Website(uuid) => format!("/hosting/websites/{}", segment(uuid)),
        }
    }

    fn start_path(&self) -> String {
        format!("{}/upload", self.base_path())
    }

    fn end_path(&self, session_id: &str) -> String {
        format!("{}/upload/{}/end", self.base_path(), segment(session_id))
    }

    fn require(&self) -> Result<()> {
        match self {
            Self::Bucket(uuid) => require(uuid, "bucket uuid"),
            Self::Website(uuid) => require(uuid, "website uuid"),
        }
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bucket(uuid) => write!(f, "bucket {}", uuid),
            Self::Website(uuid) => write!(f, "website {}", uuid),
        }
    }
}

/// Name and type of a file, without its content
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// File name, required
    pub file_name: String,
    /// MIME type; `None` or empty means [`DEFAULT_CONTENT_TYPE`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl FileMetadata {
    /// Create metadata without a content type
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
        }
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Content type that goes on the wire
    pub fn effective_content_type(&self) -> &str {
        match self.content_type.as_deref() {
            Some(ct) if !ct.is_empty() => ct,
            _ => DEFAULT_CONTENT_TYPE,
        }
    }
}

/// A file to upload: metadata plus raw content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    /// File metadata
    pub metadata: FileMetadata,
    /// File content
    pub content: Bytes,
}

impl UploadFile {
    /// Create a file without a content type
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            metadata: FileMetadata::new(file_name),
            content: content.into(),
        }
    }

    /// Create a file from existing metadata
    pub fn with_metadata(metadata: FileMetadata, content: impl Into<Bytes>) -> Self {
        Self {
            metadata,
            content: content.into(),
        }
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.metadata.content_type = Some(content_type.into());
        self
    }
}

/// One file slot of a negotiated session
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSlot {
    /// File UUID assigned by the API
    #[serde(default)]
    pub file_uuid: String,
    /// File name echoed back
    #[serde(default)]
    pub file_name: String,
    /// Content type echoed back
    #[serde(default)]
    pub content_type: String,
    /// Pre-signed destination URL
    #[serde(default)]
    pub url: String,
    /// Directory path, if any
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartUploadData {
    session_uuid: String,
    files: Vec<UploadSlot>,
}

/// Finalize reply; the payload is opaque and may be absent
#[derive(Debug, Deserialize)]
struct EndUploadReply {
    #[serde(default)]
    id: String,
    #[serde(default)]
    status: i64,
    #[serde(default)]
    data: Value,
}

impl From<EndUploadReply> for ApiResponse<Value> {
    fn from(reply: EndUploadReply) -> Self {
        Self {
            id: reply.id,
            status: reply.status,
            data: reply.data,
        }
    }
}

#[derive(Debug, Serialize)]
struct StartUploadRequest<'a> {
    files: Vec<StartUploadFile<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StartUploadFile<'a> {
    file_name: &'a str,
    content_type: &'a str,
}

/// A negotiated upload session
#[derive(Clone, Debug)]
pub struct UploadSession {
    /// Session identifier
    pub session_id: String,
    /// Signed URLs, in the order of the negotiated files
    pub signed_urls: Vec<String>,
    /// Per-file slot details
    pub slots: Vec<UploadSlot>,
}

impl UploadSession {
    /// Number of leading slots with a usable URL.
    ///
    /// URLs are assigned by position, so an empty URL invalidates every slot
    /// after it as well.
    pub fn usable_urls(&self) -> usize {
        self.signed_urls
            .iter()
            .take_while(|url| !url.is_empty())
            .count()
    }
}

impl From<StartUploadData> for UploadSession {
    fn from(data: StartUploadData) -> Self {
        let signed_urls = data.files.iter().map(|slot| slot.url.clone()).collect();
        Self {
            session_id: data.session_uuid,
            signed_urls,
            slots: data.files,
        }
    }
}

/// Progress of a batch upload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStage {
    /// Checking the batch before any request
    Validating,
    /// Opening the session
    Negotiating,
    /// Uploading the file at this index
    Transferring(usize),
    /// Closing the session
    Finalizing,
    /// Session closed
    Done,
}

impl fmt::Display for UploadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validating => write!(f, "validating"),
            Self::Negotiating => write!(f, "negotiating"),
            Self::Transferring(index) => write!(f, "transferring #{}", index),
            Self::Finalizing => write!(f, "finalizing"),
            Self::Done => write!(f, "done"),
        }
    }
}

fn validate_batch(target: &UploadTarget, batch: &[UploadFile]) -> Result<()> {
    target.require()?;
    if batch.is_empty() {
        return Err(ClientError::InvalidInput("no files to upload".to_string()));
    }
    for (index, file) in batch.iter().enumerate() {
        if file.metadata.file_name.is_empty() {
            return Err(ClientError::InvalidInput(format!(
                "file #{} has an empty name",
                index
            )));
        }
        if file.content.is_empty() {
            return Err(ClientError::InvalidInput(format!(
                "file #{} ({}) has empty content",
                index, file.metadata.file_name
            )));
        }
    }
    Ok(())
}

impl ApillonClient {
    /// Open an upload session and receive one signed URL per file.
    ///
    /// The URL count is not checked here.
    #[instrument(skip(self, target, files), fields(target = %target, files = files.len()))]
    pub async fn negotiate_upload(
        &self,
        target: &UploadTarget,
        files: &[FileMetadata],
    ) -> Result<UploadSession> {
        target.require()?;
        if files.is_empty() {
            return Err(ClientError::InvalidInput("no files to upload".to_string()));
        }
        if let Some(index) = files.iter().position(|f| f.file_name.is_empty()) {
            return Err(ClientError::InvalidInput(format!(
                "file #{} has an empty name",
                index
            )));
        }

        let request = StartUploadRequest {
            files: files
                .iter()
                .map(|f| StartUploadFile {
                    file_name: &f.file_name,
                    content_type: f.effective_content_type(),
                })
                .collect(),
        };
        let body = serde_json::to_value(&request)
            .map_err(|e| ClientError::InvalidInput(format!("invalid file metadata: {}", e)))?;

        let text = self
            .transport()
            .post(&target.start_path(), Some(&body))
            .await?;
        let response: ApiResponse<StartUploadData> = decode(&text)?;
        if response.data.session_uuid.is_empty() {
            return Err(ClientError::Decode {
                source: serde::de::Error::custom("sessionUuid is empty"),
                body: text,
            });
        }

        let session = UploadSession::from(response.data);
        debug!(
            session = %session.session_id,
            urls = session.signed_urls.len(),
            "Upload session opened"
        );
        Ok(session)
    }

    /// Upload raw content to one signed URL
    #[instrument(skip(self, signed_url, content), fields(size = content.len()))]
    pub async fn transfer(&self, signed_url: &str, content: Bytes) -> Result<()> {
        require(signed_url, "signed URL")?;

        let response = self.transport().put_signed(signed_url, content).await?;
        if !response.is_success() {
            return Err(ClientError::UploadFailed {
                status: response.status,
                body: response.body,
            });
        }
        Ok(())
    }

    /// Close an upload session.
    ///
    /// Call at most once per session; a repeated call has no defined outcome.
    #[instrument(skip(self, target), fields(target = %target))]
    pub async fn finalize_upload(
        &self,
        target: &UploadTarget,
        session_id: &str,
    ) -> Result<ApiResponse<Value>> {
        target.require()?;
        require(session_id, "session id")?;

        let text = self
            .transport()
            .post(&target.end_path(session_id), None)
            .await?;
        let reply: EndUploadReply = decode(&text)?;
        Ok(reply.into())
    }

    /// Upload a batch of files through one session.
    ///
    /// Files are sent strictly in order. The first failed transfer aborts
    /// the batch and leaves the session open; files already sent stay in
    /// remote storage. Re-running the batch is safe only if the returned
    /// error reports [`ClientError::can_retry_batch`].
    #[instrument(skip(self, target, batch), fields(target = %target, files = batch.len()))]
    pub async fn upload_batch(
        &self,
        target: &UploadTarget,
        batch: &[UploadFile],
    ) -> Result<ApiResponse<Value>> {
        debug!(stage = %UploadStage::Validating, "Checking batch");
        validate_batch(target, batch)?;

        debug!(stage = %UploadStage::Negotiating, "Opening upload session");
        let metadata: Vec<FileMetadata> = batch.iter().map(|f| f.metadata.clone()).collect();
        let session = self
            .negotiate_upload(target, &metadata)
            .await
            .map_err(|source| {
                warn!(error = %source, "Upload session could not be opened");
                ClientError::Negotiate {
                    target: target.to_string(),
                    source: Box::new(source),
                }
            })?;

        let usable = session.usable_urls();
        if usable < batch.len() {
            warn!(
                session = %session.session_id,
                expected = batch.len(),
                actual = usable,
                "Not enough signed URLs, nothing uploaded"
            );
            return Err(ClientError::InsufficientUrls {
                expected: batch.len(),
                actual: usable,
            });
        }

        let delay = self.config().settle_delay;
        if !delay.is_zero() {
            debug!(?delay, "Waiting for signed URLs to become valid");
            tokio::time::sleep(delay).await;
        }

        for (index, (file, url)) in batch.iter().zip(&session.signed_urls).enumerate() {
            let name = &file.metadata.file_name;
            debug!(stage = %UploadStage::Transferring(index), file = %name, "Uploading file");

            if let Err(source) = self.transfer(url, file.content.clone()).await {
                warn!(
                    session = %session.session_id,
                    index,
                    file = %name,
                    error = %source,
                    "Upload aborted, session left open"
                );
                return Err(ClientError::Transfer {
                    index,
                    file_name: name.clone(),
                    source: Box::new(source),
                });
            }
        }

        debug!(
            stage = %UploadStage::Finalizing,
            session = %session.session_id,
            "Closing upload session"
        );
        let result = self
            .finalize_upload(target, &session.session_id)
            .await
            .map_err(|source| {
                warn!(
                    session = %session.session_id,
                    error = %source,
                    "Files uploaded but session not closed"
                );
                ClientError::Finalize {
                    session_id: session.session_id.clone(),
                    source: Box::new(source),
                }
            })?;

        info!(
            stage = %UploadStage::Done,
            session = %session.session_id,
            "Uploaded {} files",
            batch.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{session_reply, test_client, Call, MockTransport};
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    fn two_files() -> Vec<UploadFile> {
        vec![UploadFile::new("a.txt", "x"), UploadFile::new("b.txt", "y")]
    }

    #[test]
    fn test_effective_content_type() {
        let blank = FileMetadata::new("a").with_content_type("");
        let png = FileMetadata::new("a").with_content_type("image/png");

        assert_eq!(FileMetadata::new("a").effective_content_type(), "text/plain");
        assert_eq!(blank.effective_content_type(), "text/plain");
        assert_eq!(png.effective_content_type(), "image/png");
    }

    #[test]
    fn test_target_paths() {
        let bucket = UploadTarget::bucket("b-1");
        assert_eq!(bucket.start_path(), "/storage/buckets/b-1/upload");
        assert_eq!(bucket.end_path("s-1"), "/storage/buckets/b-1/upload/s-1/end");

        let website = UploadTarget::website("w-1");
        assert_eq!(website.start_path(), "/hosting/websites/w-1/upload");
        assert_eq!(website.to_string(), "website w-1");
    }

    #[test]
    fn test_usable_urls_stop_at_first_gap() {
        let session = UploadSession {
            session_id: "s".to_string(),
            signed_urls: vec!["u0".to_string(), String::new(), "u2".to_string()],
            slots: Vec::new(),
        };
        assert_eq!(session.usable_urls(), 1);
    }

    #[tokio::test]
    async fn test_single_file_defaults_content_type() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(session_reply("session-1", &["https://signed/0"]));
        mock.reply(json!({"id": "end", "status": 200, "data": {"closed": true}}).to_string());
        let client = test_client(&mock);

        let batch = vec![UploadFile::new("a.txt", "hello").with_content_type("")];
        let result = client
            .upload_batch(&UploadTarget::bucket("bucket"), &batch)
            .await
            .unwrap();

        assert_eq!(result.id, "end");
        assert_eq!(result.data, json!({"closed": true}));

        let calls = mock.calls();
        assert_eq!(calls.len(), 3);
        match &calls[0] {
            Call::Post { path, body } => {
                assert_eq!(path, "/storage/buckets/bucket/upload");
                let body = serde_json::to_string(body.as_ref().unwrap()).unwrap();
                assert!(body.contains(r#""contentType":"text/plain""#), "body: {}", body);
            }
            other => panic!("Expected negotiate POST, got {:?}", other),
        }
        assert_eq!(
            calls[1],
            Call::Put {
                url: "https://signed/0".to_string(),
                body: Bytes::from("hello"),
            }
        );
        assert_eq!(
            calls[2],
            Call::Post {
                path: "/storage/buckets/bucket/upload/session-1/end".to_string(),
                body: None,
            }
        );
    }

    #[tokio::test]
    async fn test_transfers_follow_batch_order() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(session_reply(
            "s",
            &["https://signed/0", "https://signed/1", "https://signed/2"],
        ));
        let client = test_client(&mock);

        let batch = vec![
            UploadFile::new("one.txt", "1"),
            UploadFile::new("two.txt", "2"),
            UploadFile::new("three.txt", "3"),
        ];
        client
            .upload_batch(&UploadTarget::bucket("bucket"), &batch)
            .await
            .unwrap();

        let puts = mock.puts();
        assert_eq!(puts.len(), 3);
        for (index, (url, body)) in puts.iter().enumerate() {
            assert_eq!(url, &format!("https://signed/{}", index));
            assert_eq!(body, &batch[index].content);
        }
        assert_eq!(mock.finalize_calls(), 1);
    }

    #[rstest]
    #[case::empty_batch(Vec::new())]
    #[case::empty_content(vec![UploadFile::new("a.txt", "x"), UploadFile::new("b.txt", "")])]
    #[case::empty_name(vec![UploadFile::new("", "x")])]
    #[tokio::test]
    async fn test_invalid_batch_makes_no_calls(#[case] batch: Vec<UploadFile>) {
        let mock = Arc::new(MockTransport::new());
        let client = test_client(&mock);

        let result = client
            .upload_batch(&UploadTarget::bucket("bucket"), &batch)
            .await;

        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_target_is_rejected() {
        let mock = Arc::new(MockTransport::new());
        let client = test_client(&mock);

        let result = client
            .upload_batch(&UploadTarget::bucket(""), &two_files())
            .await;

        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_insufficient_urls_skips_transfers() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(session_reply("s", &["https://signed/0"]));
        let client = test_client(&mock);

        let result = client
            .upload_batch(&UploadTarget::bucket("bucket"), &two_files())
            .await;

        match result {
            Err(ClientError::InsufficientUrls { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected InsufficientUrls, got {:?}", other),
        }
        assert!(mock.puts().is_empty());
        assert_eq!(mock.finalize_calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_transfer_aborts_batch() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(session_reply(
            "s",
            &["https://signed/0", "https://signed/1", "https://signed/2"],
        ));
        mock.put_status(200, "");
        mock.put_status(500, "storage unavailable");
        let client = test_client(&mock);

        let batch = vec![
            UploadFile::new("a.txt", "x"),
            UploadFile::new("b.txt", "y"),
            UploadFile::new("c.txt", "z"),
        ];
        let error = client
            .upload_batch(&UploadTarget::bucket("bucket"), &batch)
            .await
            .unwrap_err();

        assert_eq!(error.file_index(), Some(1));
        match &error {
            ClientError::Transfer { file_name, source, .. } => {
                assert_eq!(file_name, "b.txt");
                assert!(matches!(
                    source.as_ref(),
                    ClientError::UploadFailed { status: 500, body } if body == "storage unavailable"
                ));
            }
            other => panic!("Expected Transfer error, got {:?}", other),
        }
        assert_eq!(mock.puts().len(), 2);
        assert_eq!(mock.finalize_calls(), 0);
    }

    #[tokio::test]
    async fn test_negotiate_failure_is_wrapped() {
        let mock = Arc::new(MockTransport::new());
        mock.fail(401, "unauthorized");
        let client = test_client(&mock);

        let error = client
            .upload_batch(&UploadTarget::bucket("bucket"), &two_files())
            .await
            .unwrap_err();

        match &error {
            ClientError::Negotiate { target, source } => {
                assert_eq!(target, "bucket bucket");
                assert!(matches!(source.as_ref(), ClientError::Api { status: 401, .. }));
            }
            other => panic!("Expected Negotiate error, got {:?}", other),
        }
        assert!(mock.puts().is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_negotiate_response() {
        let mock = Arc::new(MockTransport::new());
        mock.reply("<html>gateway timeout</html>");
        let client = test_client(&mock);

        let error = client
            .upload_batch(&UploadTarget::bucket("bucket"), &two_files())
            .await
            .unwrap_err();

        match error {
            ClientError::Negotiate { source, .. } => match *source {
                ClientError::Decode { body, .. } => {
                    assert_eq!(body, "<html>gateway timeout</html>")
                }
                other => panic!("Expected Decode error, got {:?}", other),
            },
            other => panic!("Expected Negotiate error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_finalize_failure_after_all_transfers() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(session_reply("s-9", &["https://signed/0", "https://signed/1"]));
        mock.fail(500, "end failed");
        let client = test_client(&mock);

        let error = client
            .upload_batch(&UploadTarget::bucket("bucket"), &two_files())
            .await
            .unwrap_err();

        assert!(matches!(&error, ClientError::Finalize { session_id, .. } if session_id == "s-9"));
        assert!(!error.can_retry_batch());
        assert_eq!(mock.puts().len(), 2);
        assert_eq!(mock.finalize_calls(), 1);
    }

    #[rstest]
    #[case::no_session_id(json!({"data": {"files": [{"url": "https://signed/0"}]}}))]
    #[case::empty_session_id(json!({
        "data": {"sessionUuid": "", "files": [{"url": "https://signed/0"}]}
    }))]
    #[case::no_files(json!({"data": {"sessionUuid": "s"}}))]
    #[tokio::test]
    async fn test_incomplete_negotiate_reply_keeps_raw_body(#[case] reply: Value) {
        let mock = Arc::new(MockTransport::new());
        let raw = reply.to_string();
        mock.reply(raw.clone());
        let client = test_client(&mock);

        let error = client
            .upload_batch(&UploadTarget::bucket("bucket"), &[UploadFile::new("a.txt", "x")])
            .await
            .unwrap_err();

        match error {
            ClientError::Negotiate { source, .. } => match *source {
                ClientError::Decode { body, .. } => assert_eq!(body, raw),
                other => panic!("Expected Decode error, got {:?}", other),
            },
            other => panic!("Expected Negotiate error, got {:?}", other),
        }
        assert!(mock.puts().is_empty());
    }

    #[tokio::test]
    async fn test_finalize_reply_without_data() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(session_reply("s", &["https://signed/0"]));
        mock.reply(json!({"id": "end", "status": 200}).to_string());
        let client = test_client(&mock);

        let result = client
            .upload_batch(&UploadTarget::bucket("bucket"), &[UploadFile::new("a.txt", "x")])
            .await
            .unwrap();

        assert_eq!(result.status, 200);
        assert_eq!(result.data, Value::Null);
        assert_eq!(mock.finalize_calls(), 1);
    }

    #[tokio::test]
    async fn test_file_names_are_escaped_on_the_wire() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(session_reply("s", &["https://signed/0", "https://signed/1"]));
        let client = test_client(&mock);
        let names = ["a \"b\".txt", "dir\\c\",\"x\":\"y.txt"];

        let batch: Vec<UploadFile> = names.iter().map(|n| UploadFile::new(*n, "x")).collect();
        client
            .upload_batch(&UploadTarget::bucket("bucket"), &batch)
            .await
            .unwrap();

        let body = match &mock.calls()[0] {
            Call::Post { body: Some(body), .. } => serde_json::to_string(body).unwrap(),
            other => panic!("Expected negotiate POST, got {:?}", other),
        };
        let sent: Value = serde_json::from_str(&body).unwrap();
        let files = sent["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        for (file, name) in files.iter().zip(names) {
            assert_eq!(file["fileName"], name);
            assert_eq!(file["contentType"], "text/plain");
            assert_eq!(file.as_object().unwrap().len(), 2);
        }
    }

    #[tokio::test]
    async fn test_finalize_requires_session_id() {
        let mock = Arc::new(MockTransport::new());
        let client = test_client(&mock);

        let result = client
            .finalize_upload(&UploadTarget::bucket("bucket"), "")
            .await;

        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_transfer_accepts_any_2xx() {
        let mock = Arc::new(MockTransport::new());
        mock.put_status(201, "");
        let client = test_client(&mock);

        client
            .transfer("https://signed/0", Bytes::from_static(b"data"))
            .await
            .unwrap();
    }
}
