//! # Apillon CLI
//!
//! Command line access to Apillon storage: buckets, files, batch uploads
//! to buckets and websites, and IPFS links.

pub mod commands;
pub mod files;
pub mod settings;

pub use commands::{run, Command};
pub use settings::{Overrides, Settings};
