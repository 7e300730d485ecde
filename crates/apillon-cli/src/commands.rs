//! Subcommands

use crate::files::load_files;
use apillon_client::{ApillonClient, ClientError};
use clap::Subcommand;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage buckets
    #[command(subcommand)]
    Buckets(BucketCommand),

    /// Inspect and delete files in a bucket
    #[command(subcommand)]
    Files(FileCommand),

    /// Upload local files to a bucket
    Upload {
        /// Bucket UUID
        bucket: String,
        /// Files to upload
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Upload local files to a website
    WebsiteUpload {
        /// Website UUID
        website: String,
        /// Files to upload
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Resolve an IPFS gateway link for a CID
    IpfsLink {
        /// Content identifier
        cid: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum BucketCommand {
    /// List buckets
    List {
        /// Filter by bucket name
        #[arg(long)]
        name: Option<String>,
    },
    /// Create a bucket
    Create {
        /// Bucket name
        name: String,
        /// Bucket description
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FileCommand {
    /// List files in a bucket
    List {
        /// Bucket UUID
        bucket: String,
    },
    /// Show file details
    Get {
        /// Bucket UUID
        bucket: String,
        /// File UUID or CID
        file: String,
    },
    /// Delete a file
    Delete {
        /// Bucket UUID
        bucket: String,
        /// File UUID or CID
        file: String,
    },
}

/// Run one subcommand and print its result as JSON
pub async fn run(client: &ApillonClient, command: Command) -> anyhow::Result<()> {
    let storage = client.storage();

    match command {
        Command::Buckets(BucketCommand::List { name }) => {
            print_json(&storage.list_buckets(name.as_deref()).await?)
        }
        Command::Buckets(BucketCommand::Create { name, description }) => {
            print_json(&storage.create_bucket(&name, description.as_deref()).await?)
        }
        Command::Files(FileCommand::List { bucket }) => {
            print_json(&storage.list_files(&bucket).await?)
        }
        Command::Files(FileCommand::Get { bucket, file }) => {
            print_json(&storage.get_file_details(&bucket, &file).await?)
        }
        Command::Files(FileCommand::Delete { bucket, file }) => {
            print_json(&storage.delete_file(&bucket, &file).await?)
        }
        Command::Upload { bucket, paths } => {
            let files = load_files(&paths).await?;
            info!("Uploading {} file(s) to bucket {}", files.len(), bucket);
            let result = storage.upload_files(&bucket, &files).await.map_err(report)?;
            print_json(&result)
        }
        Command::WebsiteUpload { website, paths } => {
            let files = load_files(&paths).await?;
            info!("Uploading {} file(s) to website {}", files.len(), website);
            let result = client
                .hosting()
                .upload_files(&website, &files)
                .await
                .map_err(report)?;
            print_json(&result)
        }
        Command::IpfsLink { cid } => {
            println!("{}", storage.get_ipfs_link(&cid).await?);
            Ok(())
        }
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report(error: ClientError) -> ClientError {
    if let Some(stage) = error.stage() {
        if error.can_retry_batch() {
            warn!("Upload failed while {}; the batch can be retried", stage);
        } else {
            warn!("Upload failed while {}; check the session before retrying", stage);
        }
    }
    error
}
