//! Smart contracts

use crate::{
    client::{request_body, require, segment},
    ApiResponse, ApillonClient, Result,
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// Smart contract API, from [`ApillonClient::contracts`]
#[derive(Clone, Copy)]
pub struct Contracts<'a> {
    client: &'a ApillonClient,
}

impl<'a> Contracts<'a> {
    pub(crate) fn new(client: &'a ApillonClient) -> Self {
        Self { client }
    }

    // ==================== Contract Templates ====================

    /// List available contracts
    #[instrument(skip(self))]
    pub async fn list_contracts(&self) -> Result<ApiResponse<Value>> {
        self.client.get_json("/contracts", &[]).await
    }

    /// Get contract details
    #[instrument(skip(self))]
    pub async fn get_contract(&self, contract_uuid: &str) -> Result<ApiResponse<Value>> {
        require(contract_uuid, "contract uuid")?;
        let path = format!("/contracts/{}", segment(contract_uuid));
        self.client.get_json(&path, &[]).await
    }

    /// Get the ABI of a contract
    #[instrument(skip(self))]
    pub async fn get_contract_abi(&self, contract_uuid: &str) -> Result<ApiResponse<Value>> {
        require(contract_uuid, "contract uuid")?;
        let path = format!("/contracts/{}/abi", segment(contract_uuid));
        self.client.get_json(&path, &[]).await
    }

    /// Deploy a contract
    #[instrument(skip(self, body))]
    pub async fn deploy_contract(
        &self,
        contract_uuid: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse<Value>> {
        require(contract_uuid, "contract uuid")?;
        let body = request_body(body)?;
        let path = format!("/contracts/{}/deploy", segment(contract_uuid));
        self.client.post_json(&path, Some(&body)).await
    }

    // ==================== Deployed Contracts ====================

    /// List deployed contracts
    #[instrument(skip(self))]
    pub async fn list_deployed_contracts(&self) -> Result<ApiResponse<Value>> {
        self.client.get_json("/contracts/deployed", &[]).await
    }

    /// Get deployed contract details
    #[instrument(skip(self))]
    pub async fn get_deployed_contract(&self, deployed_uuid: &str) -> Result<ApiResponse<Value>> {
        require(deployed_uuid, "deployed contract uuid")?;
        self.client
            .get_json(&deployed_path(deployed_uuid, ""), &[])
            .await
    }

    /// Call a method on a deployed contract
    #[instrument(skip(self, body))]
    pub async fn call_deployed_contract(
        &self,
        deployed_uuid: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse<Value>> {
        require(deployed_uuid, "deployed contract uuid")?;
        let body = request_body(body)?;
        self.client
            .post_json(&deployed_path(deployed_uuid, "/call"), Some(&body))
            .await
    }

    /// Get the ABI of a deployed contract
    #[instrument(skip(self))]
    pub async fn get_deployed_abi(&self, deployed_uuid: &str) -> Result<ApiResponse<Value>> {
        require(deployed_uuid, "deployed contract uuid")?;
        self.client
            .get_json(&deployed_path(deployed_uuid, "/abi"), &[])
            .await
    }

    /// Delete a deployed contract
    #[instrument(skip(self))]
    pub async fn delete_deployed_contract(
        &self,
        deployed_uuid: &str,
    ) -> Result<ApiResponse<Value>> {
        require(deployed_uuid, "deployed contract uuid")?;
        self.client
            .delete_json(&deployed_path(deployed_uuid, ""))
            .await
    }

    /// List transactions of a deployed contract
    #[instrument(skip(self))]
    pub async fn list_transactions(&self, deployed_uuid: &str) -> Result<ApiResponse<Value>> {
        require(deployed_uuid, "deployed contract uuid")?;
        self.client
            .get_json(&deployed_path(deployed_uuid, "/transactions"), &[])
            .await
    }
}

fn deployed_path(deployed_uuid: &str, suffix: &str) -> String {
    format!("/contracts/deployed/{}{}", segment(deployed_uuid), suffix)
}
