//! # Apillon Client SDK
//!
//! A client SDK for the Apillon storage and Web3 platform REST API.
//!
//! ## Features
//!
//! - **Storage**: Buckets, files, IPFS links and batch file uploads
//! - **Hosting**: Websites, deployments and website file uploads
//! - **Web3**: NFT collections, computing contracts, smart contracts
//! - **Social**: Channels and hubs
//!
//! ## Upload sessions
//!
//! Files reach a bucket (or a website) through a three step session:
//!
//! ```text
//! negotiate ──► PUT signed URL #0 ──► ... ──► PUT #n ──► finalize
//! ```
//!
//! [`ApillonClient::upload_batch`] runs the whole sequence and stops at the
//! first failure. The individual steps are public as well.
//!
//! ## Example
//!
//! ```rust,ignore
//! use apillon_client::{ApillonClient, Config, UploadFile};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApillonClient::new(Config::new("your-api-key"))?;
//!
//!     client.storage().create_bucket("my-bucket", None).await?;
//!
//!     let files = vec![UploadFile::new("hello.txt", "Hello, World!")];
//!     let result = client.storage().upload_files("bucket-uuid", &files).await?;
//!     println!("Session closed with status {}", result.status);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod computing;
mod config;
mod contracts;
mod error;
mod hosting;
mod nfts;
mod social;
mod storage;
mod transport;
mod types;
mod upload;

#[cfg(test)]
mod testing;

pub use client::ApillonClient;
pub use computing::Computing;
pub use config::{Config, DEFAULT_ENDPOINT, DEFAULT_SETTLE_DELAY};
pub use contracts::Contracts;
pub use error::{ClientError, Result};
pub use hosting::Hosting;
pub use nfts::Nfts;
pub use social::Social;
pub use storage::Storage;
pub use transport::{HttpTransport, SignedPutResponse, Transport};
pub use types::*;
pub use upload::{
    FileMetadata, UploadFile, UploadSession, UploadSlot, UploadStage, UploadTarget,
    DEFAULT_CONTENT_TYPE,
};
