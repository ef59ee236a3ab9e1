/// Catalog construction module
///
/// This module handles:
/// - Deriving metadata from filenames (derive.rs)
/// - Scanning a recipes directory (scan.rs)
/// - Reading and writing the JSON catalog artifact (artifact.rs)

pub mod artifact;
pub mod derive;
pub mod scan;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::data::RecipeMeta;

/// Errors from catalog IO. A missing scan directory is not an error; it
/// produces an empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog artifact parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a catalog comes from
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Live scan of a flat image directory
    Directory(PathBuf),
    /// Precomputed JSON artifact
    Artifact(PathBuf),
}

/// Load a catalog from either source. Both paths produce identical output
/// for the same source directory.
pub fn load(source: &CatalogSource) -> Result<Vec<RecipeMeta>, CatalogError> {
    match source {
        CatalogSource::Directory(dir) => Ok(scan::scan_dir(dir)),
        CatalogSource::Artifact(path) => artifact::read_artifact(path),
    }
}

/// Async wrapper over `load` for the UI; the scan runs in a blocking task
/// so large folders never stall the event loop
pub async fn load_async(source: CatalogSource) -> Result<Vec<RecipeMeta>, String> {
    tokio::task::spawn_blocking(move || load(&source).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {e}"))?
}

/// Prefer a generated artifact inside the directory, otherwise scan it
pub fn preferred_source(dir: &Path) -> CatalogSource {
    let artifact_path = dir.join(artifact::ARTIFACT_FILE_NAME);
    if artifact_path.is_file() {
        CatalogSource::Artifact(artifact_path)
    } else {
        CatalogSource::Directory(dir.to_path_buf())
    }
}

/// Default recipes directory: `recipes/` under the user's pictures folder,
/// falling back to the home directory, then the working directory
pub fn default_recipes_dir() -> PathBuf {
    let mut path = dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push("recipes");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_directory_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("rezept-soup.png"), b"").unwrap();

        let source = CatalogSource::Directory(dir.path().to_path_buf());
        let catalog = load(&source).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_missing_directory_is_ok_and_empty() {
        let source = CatalogSource::Directory(PathBuf::from("/nonexistent/recipes"));
        let catalog = load(&source).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_preferred_source_picks_artifact_when_present() {
        let dir = tempfile::tempdir().unwrap();

        match preferred_source(dir.path()) {
            CatalogSource::Directory(path) => assert_eq!(path, dir.path()),
            other => panic!("expected directory source, got {other:?}"),
        }

        fs::write(dir.path().join(artifact::ARTIFACT_FILE_NAME), "[]").unwrap();
        match preferred_source(dir.path()) {
            CatalogSource::Artifact(path) => {
                assert!(path.ends_with(artifact::ARTIFACT_FILE_NAME));
            }
            other => panic!("expected artifact source, got {other:?}"),
        }
    }
}
