//! Social channels and hubs

use crate::{
    client::{request_body, require, segment},
    ApiResponse, ApillonClient, Result,
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// Social API, from [`ApillonClient::social`]
#[derive(Clone, Copy)]
pub struct Social<'a> {
    client: &'a ApillonClient,
}

impl<'a> Social<'a> {
    pub(crate) fn new(client: &'a ApillonClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn list_channels(&self) -> Result<ApiResponse<Value>> {
        self.client.get_json("/social/channels", &[]).await
    }

    #[instrument(skip(self))]
    pub async fn get_channel(&self, channel_uuid: &str) -> Result<ApiResponse<Value>> {
        require(channel_uuid, "channel uuid")?;
        let path = format!("/social/channels/{}", segment(channel_uuid));
        self.client.get_json(&path, &[]).await
    }

    #[instrument(skip(self, body))]
    pub async fn create_channel(&self, body: &impl Serialize) -> Result<ApiResponse<Value>> {
        let body = request_body(body)?;
        self.client.post_json("/social/channels", Some(&body)).await
    }

    #[instrument(skip(self))]
    pub async fn list_hubs(&self) -> Result<ApiResponse<Value>> {
        self.client.get_json("/social/hubs", &[]).await
    }

    #[instrument(skip(self))]
    pub async fn get_hub(&self, hub_uuid: &str) -> Result<ApiResponse<Value>> {
        require(hub_uuid, "hub uuid")?;
        let path = format!("/social/hubs/{}", segment(hub_uuid));
        self.client.get_json(&path, &[]).await
    }

    #[instrument(skip(self, body))]
    pub async fn create_hub(&self, body: &impl Serialize) -> Result<ApiResponse<Value>> {
        let body = request_body(body)?;
        self.client.post_json("/social/hubs", Some(&body)).await
    }
}
