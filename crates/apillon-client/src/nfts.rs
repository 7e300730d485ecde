//! NFT collections

use crate::{
    client::{request_body, require, segment},
    ApiResponse, ApillonClient, Result,
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// NFT API, from [`ApillonClient::nfts`]
#[derive(Clone, Copy)]
pub struct Nfts<'a> {
    client: &'a ApillonClient,
}

impl<'a> Nfts<'a> {
    pub(crate) fn new(client: &'a ApillonClient) -> Self {
        Self { client }
    }

    /// List collections
    #[instrument(skip(self))]
    pub async fn list_collections(&self) -> Result<ApiResponse<Value>> {
        self.client.get_json("/nfts/collections", &[]).await
    }

    /// Get collection details
    #[instrument(skip(self))]
    pub async fn get_collection(&self, collection_uuid: &str) -> Result<ApiResponse<Value>> {
        require(collection_uuid, "collection uuid")?;
        let path = format!("/nfts/collections/{}", segment(collection_uuid));
        self.client.get_json(&path, &[]).await
    }

    /// List transactions of a collection
    #[instrument(skip(self))]
    pub async fn list_transactions(&self, collection_uuid: &str) -> Result<ApiResponse<Value>> {
        require(collection_uuid, "collection uuid")?;
        let path = format!("/nfts/collections/{}/transactions", segment(collection_uuid));
        self.client.get_json(&path, &[]).await
    }

    /// Create a collection on a Substrate chain
    #[instrument(skip(self, body))]
    pub async fn create_substrate_collection(
        &self,
        body: &impl Serialize,
    ) -> Result<ApiResponse<Value>> {
        self.create("substrate", body).await
    }

    /// Create a collection on an EVM chain
    #[instrument(skip(self, body))]
    pub async fn create_evm_collection(&self, body: &impl Serialize) -> Result<ApiResponse<Value>> {
        self.create("evm", body).await
    }

    /// Create a collection on Unique network
    #[instrument(skip(self, body))]
    pub async fn create_unique_collection(
        &self,
        body: &impl Serialize,
    ) -> Result<ApiResponse<Value>> {
        self.create("unique", body).await
    }

    async fn create(&self, chain: &str, body: &impl Serialize) -> Result<ApiResponse<Value>> {
        let body = request_body(body)?;
        let path = format!("/nfts/collections/{}", chain);
        self.client.post_json(&path, Some(&body)).await
    }
}
