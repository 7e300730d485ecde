//! Website hosting

use crate::{
    client::{request_body, require, segment},
    ApiResponse, ApillonClient, FileMetadata, Result, UploadFile, UploadSession, UploadTarget,
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// Hosting API, from [`ApillonClient::hosting`]
#[derive(Clone, Copy)]
pub struct Hosting<'a> {
    client: &'a ApillonClient,
}

impl<'a> Hosting<'a> {
    pub(crate) fn new(client: &'a ApillonClient) -> Self {
        Self { client }
    }

    /// List websites
    #[instrument(skip(self))]
    pub async fn list_websites(&self) -> Result<ApiResponse<Value>> {
        self.client.get_json("/hosting/websites", &[]).await
    }

    /// Create a website
    #[instrument(skip(self, body))]
    pub async fn create_website(&self, body: &impl Serialize) -> Result<ApiResponse<Value>> {
        let body = request_body(body)?;
        self.client
            .post_json("/hosting/websites", Some(&body))
            .await
    }

    /// Get website details
    #[instrument(skip(self))]
    pub async fn get_website(&self, website_uuid: &str) -> Result<ApiResponse<Value>> {
        require(website_uuid, "website uuid")?;
        let path = format!("/hosting/websites/{}", segment(website_uuid));
        self.client.get_json(&path, &[]).await
    }

    /// Open an upload session on a website
    pub async fn start_upload(
        &self,
        website_uuid: &str,
        files: &[FileMetadata],
    ) -> Result<UploadSession> {
        self.client
            .negotiate_upload(&UploadTarget::website(website_uuid), files)
            .await
    }

    /// Close an upload session on a website
    pub async fn end_upload(
        &self,
        website_uuid: &str,
        session_id: &str,
    ) -> Result<ApiResponse<Value>> {
        self.client
            .finalize_upload(&UploadTarget::website(website_uuid), session_id)
            .await
    }

    /// Upload files to a website through one session
    pub async fn upload_files(
        &self,
        website_uuid: &str,
        files: &[UploadFile],
    ) -> Result<ApiResponse<Value>> {
        self.client
            .upload_batch(&UploadTarget::website(website_uuid), files)
            .await
    }

    /// Deploy a website to an environment
    #[instrument(skip(self, body))]
    pub async fn deploy_website(
        &self,
        website_uuid: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse<Value>> {
        require(website_uuid, "website uuid")?;
        let body = request_body(body)?;
        let path = format!("/hosting/websites/{}/deploy", segment(website_uuid));
        self.client.post_json(&path, Some(&body)).await
    }

    /// List deployments of a website
    #[instrument(skip(self))]
    pub async fn list_deployments(&self, website_uuid: &str) -> Result<ApiResponse<Value>> {
        require(website_uuid, "website uuid")?;
        let path = format!("/hosting/websites/{}/deployments", segment(website_uuid));
        self.client.get_json(&path, &[]).await
    }

    /// Get deployment details
    #[instrument(skip(self))]
    pub async fn get_deployment(
        &self,
        website_uuid: &str,
        deployment_uuid: &str,
    ) -> Result<ApiResponse<Value>> {
        require(website_uuid, "website uuid")?;
        require(deployment_uuid, "deployment uuid")?;
        let path = format!(
            "/hosting/websites/{}/deployments/{}",
            segment(website_uuid),
            segment(deployment_uuid)
        );
        self.client.get_json(&path, &[]).await
    }

    /// Create a short URL
    #[instrument(skip(self, body))]
    pub async fn create_short_url(&self, body: &impl Serialize) -> Result<ApiResponse<Value>> {
        let body = request_body(body)?;
        self.client
            .post_json("/hosting/short-url", Some(&body))
            .await
    }
}
