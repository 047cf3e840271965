use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Industry catalog – one subdirectory per industry under the data root
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("data root {0} does not exist")]
    MissingRoot(PathBuf),

    #[error("data root {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("reading data root: {0}")]
    Io(#[from] std::io::Error),
}

/// List the industries available under `root`: the names of its immediate
/// subdirectories, sorted so the sidebar order is stable across runs.
pub fn list_industries(root: &Path) -> Result<Vec<String>, CatalogError> {
    if !root.exists() {
        return Err(CatalogError::MissingRoot(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CatalogError::NotADirectory(root.to_path_buf()));
    }

    let mut industries = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            industries.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    industries.sort();
    Ok(industries)
}
