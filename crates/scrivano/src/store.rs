//! Article persistence.

use scrivano_error::{ScrivanoResult, StoreError, StoreErrorKind};
use std::path::{Path, PathBuf};

/// Write the finished document to `<dir>/<name>.md`.
///
/// Creates the output directory if it does not exist. An existing file with
/// the same name is overwritten.
///
/// # Errors
///
/// Returns `StoreErrorKind::FileWrite` if directory creation or the write
/// fails.
#[tracing::instrument(skip(content), fields(name = %name, dir = %dir.as_ref().display()))]
pub fn save_article<P: AsRef<Path>>(
    name: &str,
    content: &str,
    dir: P,
) -> ScrivanoResult<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .map_err(|e| StoreError::new(StoreErrorKind::FileWrite(e.to_string())))?;

    let path = dir.join(format!("{name}.md"));
    std::fs::write(&path, content)
        .map_err(|e| StoreError::new(StoreErrorKind::FileWrite(e.to_string())))?;

    tracing::info!(path = %path.display(), "Article saved");
    Ok(path)
}
