//! Storage buckets, files and uploads

use crate::{
    client::{request_body, require, segment},
    ApiResponse, ApillonClient, BucketItem, ClientError, CreateBucketRequest, FileInfo,
    FileMetadata, IpfsClusterInfo, IpfsLink, ListData, Result, UploadFile, UploadSession,
    UploadTarget,
};
use serde_json::Value;
use tracing::{info, instrument};

/// Storage API, from [`ApillonClient::storage`]
#[derive(Clone, Copy)]
pub struct Storage<'a> {
    client: &'a ApillonClient,
}

impl<'a> Storage<'a> {
    pub(crate) fn new(client: &'a ApillonClient) -> Self {
        Self { client }
    }

    // ==================== Bucket Operations ====================

    /// Create a bucket
    #[instrument(skip(self))]
    pub async fn create_bucket(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ApiResponse<Value>> {
        require(name, "bucket name")?;
        let request = CreateBucketRequest {
            name: name.to_string(),
            description: description.filter(|d| !d.is_empty()).map(str::to_string),
        };
        let body = request_body(&request)?;

        let response = self
            .client
            .post_json("/storage/buckets", Some(&body))
            .await?;
        info!("Bucket {} created", name);
        Ok(response)
    }

    /// List buckets, optionally filtered by name
    #[instrument(skip(self))]
    pub async fn list_buckets(
        &self,
        name: Option<&str>,
    ) -> Result<ApiResponse<ListData<BucketItem>>> {
        let mut query = Vec::new();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            query.push(("name", name.to_string()));
        }
        self.client.get_json("/storage/buckets", &query).await
    }

    /// Directories and files at the root of a bucket
    #[instrument(skip(self))]
    pub async fn get_bucket_content(&self, bucket_uuid: &str) -> Result<ApiResponse<Value>> {
        require(bucket_uuid, "bucket uuid")?;
        let path = format!("/storage/buckets/{}/content", segment(bucket_uuid));
        self.client.get_json(&path, &[]).await
    }

    // ==================== File Operations ====================

    /// List files in a bucket
    #[instrument(skip(self))]
    pub async fn list_files(&self, bucket_uuid: &str) -> Result<ApiResponse<ListData<FileInfo>>> {
        require(bucket_uuid, "bucket uuid")?;
        let path = format!("/storage/buckets/{}/files", segment(bucket_uuid));
        self.client.get_json(&path, &[]).await
    }

    /// Get file details
    #[instrument(skip(self))]
    pub async fn get_file_details(
        &self,
        bucket_uuid: &str,
        file_uuid: &str,
    ) -> Result<ApiResponse<FileInfo>> {
        require(bucket_uuid, "bucket uuid")?;
        require(file_uuid, "file uuid")?;
        let path = format!(
            "/storage/buckets/{}/files/{}",
            segment(bucket_uuid),
            segment(file_uuid)
        );
        self.client.get_json(&path, &[]).await
    }

    /// Delete a file
    #[instrument(skip(self))]
    pub async fn delete_file(
        &self,
        bucket_uuid: &str,
        file_uuid: &str,
    ) -> Result<ApiResponse<Value>> {
        require(bucket_uuid, "bucket uuid")?;
        require(file_uuid, "file uuid")?;
        let path = format!(
            "/storage/buckets/{}/files/{}",
            segment(bucket_uuid),
            segment(file_uuid)
        );
        self.client.delete_json(&path).await
    }

    /// Delete a directory and everything below it
    #[instrument(skip(self))]
    pub async fn delete_directory(
        &self,
        bucket_uuid: &str,
        directory_uuid: &str,
    ) -> Result<ApiResponse<bool>> {
        require(bucket_uuid, "bucket uuid")?;
        require(directory_uuid, "directory uuid")?;
        let path = format!(
            "/storage/buckets/{}/directories/{}",
            segment(bucket_uuid),
            segment(directory_uuid)
        );
        self.client.delete_json(&path).await
    }

    // ==================== IPFS ====================

    /// Gateway link for a CID
    #[instrument(skip(self))]
    pub async fn get_ipfs_link(&self, cid: &str) -> Result<String> {
        require(cid, "CID")?;
        let path = format!("/storage/link-on-ipfs/{}", segment(cid));
        let response: ApiResponse<IpfsLink> = self.client.get_json(&path, &[]).await?;

        if response.data.link.is_empty() {
            return Err(ClientError::InvalidResponse(format!(
                "no IPFS link returned for CID {}",
                cid
            )));
        }
        Ok(response.data.link)
    }

    /// IPFS cluster details of the project
    #[instrument(skip(self))]
    pub async fn get_ipfs_cluster_info(&self) -> Result<ApiResponse<IpfsClusterInfo>> {
        self.client
            .get_json("/storage/ipfs-cluster-info", &[])
            .await
    }

    // ==================== Uploads ====================

    /// Upload files to a bucket through one session
    pub async fn upload_files(
        &self,
        bucket_uuid: &str,
        files: &[UploadFile],
    ) -> Result<ApiResponse<Value>> {
        self.client
            .upload_batch(&UploadTarget::bucket(bucket_uuid), files)
            .await
    }

    /// Open an upload session on a bucket
    pub async fn start_upload(
        &self,
        bucket_uuid: &str,
        files: &[FileMetadata],
    ) -> Result<UploadSession> {
        self.client
            .negotiate_upload(&UploadTarget::bucket(bucket_uuid), files)
            .await
    }

    /// Close an upload session on a bucket
    pub async fn end_upload(
        &self,
        bucket_uuid: &str,
        session_id: &str,
    ) -> Result<ApiResponse<Value>> {
        self.client
            .finalize_upload(&UploadTarget::bucket(bucket_uuid), session_id)
            .await
    }
}
