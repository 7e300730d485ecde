//! Computing contracts

use crate::{
    client::{request_body, require, segment},
    ApiResponse, ApillonClient, Result,
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// Computing API, from [`ApillonClient::computing`]
#[derive(Clone, Copy)]
pub struct Computing<'a> {
    client: &'a ApillonClient,
}

impl<'a> Computing<'a> {
    pub(crate) fn new(client: &'a ApillonClient) -> Self {
        Self { client }
    }

    /// Create a computing contract
    #[instrument(skip(self, body))]
    pub async fn create_contract(&self, body: &impl Serialize) -> Result<ApiResponse<Value>> {
        let body = request_body(body)?;
        self.client
            .post_json("/computing/contracts", Some(&body))
            .await
    }

    /// List computing contracts
    #[instrument(skip(self))]
    pub async fn list_contracts(&self) -> Result<ApiResponse<Value>> {
        self.client.get_json("/computing/contracts", &[]).await
    }

    /// Get contract details
    #[instrument(skip(self))]
    pub async fn get_contract(&self, contract_uuid: &str) -> Result<ApiResponse<Value>> {
        require(contract_uuid, "contract uuid")?;
        let path = format!("/computing/contracts/{}", segment(contract_uuid));
        self.client.get_json(&path, &[]).await
    }

    /// List contract transactions
    #[instrument(skip(self))]
    pub async fn list_transactions(&self, contract_uuid: &str) -> Result<ApiResponse<Value>> {
        require(contract_uuid, "contract uuid")?;
        let path = format!("/computing/contracts/{}/transactions", segment(contract_uuid));
        self.client.get_json(&path, &[]).await
    }

    /// Transfer contract ownership
    #[instrument(skip(self, body))]
    pub async fn transfer_ownership(
        &self,
        contract_uuid: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse<Value>> {
        self.contract_action(contract_uuid, "transfer-ownership", body)
            .await
    }

    /// Encrypt content with the contract key
    #[instrument(skip(self, body))]
    pub async fn encrypt(
        &self,
        contract_uuid: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse<Value>> {
        self.contract_action(contract_uuid, "encrypt", body).await
    }

    /// Assign an encrypted CID to an NFT
    #[instrument(skip(self, body))]
    pub async fn assign_cid_to_nft(
        &self,
        contract_uuid: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse<Value>> {
        self.contract_action(contract_uuid, "assign-cid-to-nft", body)
            .await
    }

    async fn contract_action(
        &self,
        contract_uuid: &str,
        action: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse<Value>> {
        require(contract_uuid, "contract uuid")?;
        let body = request_body(body)?;
        let path = format!("/computing/contracts/{}/{}", segment(contract_uuid), action);
        self.client.post_json(&path, Some(&body)).await
    }
}
