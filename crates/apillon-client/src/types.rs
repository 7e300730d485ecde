//! Common types for the client SDK

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope shared by every Apillon API response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Request identifier
    #[serde(default)]
    pub id: String,
    /// Status reported by the API
    #[serde(default)]
    pub status: i64,
    /// Response payload
    pub data: T,
}

/// A page of items
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListData<T> {
    /// Items on this page
    #[serde(default)]
    pub items: Vec<T>,
    /// Total number of items available
    #[serde(default)]
    pub total: u64,
}

/// Creation and update times
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    /// Creation time
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
}

/// A storage bucket
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketItem {
    /// Bucket UUID
    pub bucket_uuid: String,
    /// Bucket type
    #[serde(default)]
    pub bucket_type: i32,
    /// Bucket name
    pub name: String,
    /// Bucket description
    #[serde(default)]
    pub description: Option<String>,
    /// Total size in bytes
    #[serde(default)]
    pub size: i64,
    /// Timestamps
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A stored file
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// File UUID
    pub file_uuid: String,
    /// Content identifier, once the file reached IPFS
    #[serde(rename = "CID", default)]
    pub cid: Option<String>,
    /// File name
    pub name: String,
    /// MIME type
    #[serde(default)]
    pub content_type: Option<String>,
    /// Directory path inside the bucket
    #[serde(default)]
    pub path: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: i64,
    /// Processing status
    #[serde(default)]
    pub file_status: i32,
    /// Public link
    #[serde(default)]
    pub link: Option<String>,
    /// Parent directory UUID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_uuid: Option<String>,
    /// Timestamps
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// IPFS cluster details of the project
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpfsClusterInfo {
    /// Cluster secret
    pub secret: String,
    /// Owning project UUID
    #[serde(rename = "project_uuid")]
    pub project_uuid: String,
    /// IPFS gateway URL
    pub ipfs_gateway: String,
    /// IPNS gateway URL
    pub ipns_gateway: String,
}

/// Gateway link for a CID
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IpfsLink {
    /// Link URL
    #[serde(default)]
    pub link: String,
}

/// Request body for creating a bucket
#[derive(Clone, Debug, Serialize)]
pub struct CreateBucketRequest {
    /// Bucket name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
