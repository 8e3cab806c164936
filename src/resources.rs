use std::fs;
use std::path::Path;
use tracing::info;
use crate::error::Result;

/// Copies a course resource to `destination`, replacing whatever is there.
/// Returns the number of bytes written.
pub fn download(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<u64> {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    let bytes = fs::copy(source, destination)?;
    info!(from = %source.display(), to = %destination.display(), bytes, "Resource downloaded");
    Ok(bytes)
}

/// Name offered in the save dialog for a stored resource path.
pub fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resource".to_string())
}
