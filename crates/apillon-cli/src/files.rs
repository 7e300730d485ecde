//! Local file loading

use anyhow::{bail, Context};
use apillon_client::{FileMetadata, UploadFile};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read local files into an upload batch, in argument order.
///
/// The content type is guessed from the extension; unknown extensions
/// keep the SDK default.
pub async fn load_files(paths: &[PathBuf]) -> anyhow::Result<Vec<UploadFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(load_file(path).await?);
    }
    Ok(files)
}

async fn load_file(path: &Path) -> anyhow::Result<UploadFile> {
    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    if !meta.is_file() {
        bail!("{} is not a regular file", path.display());
    }

    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => bail!("{} has no usable file name", path.display()),
    };
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;

    let mut metadata = FileMetadata::new(file_name);
    if let Some(content_type) = mime_guess::from_path(path).first_raw() {
        metadata = metadata.with_content_type(content_type);
    }
    debug!(file = %path.display(), size = content.len(), "Loaded file");

    Ok(UploadFile::with_metadata(metadata, content))
}
