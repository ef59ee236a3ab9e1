/// Catalog artifact (JSON)
///
/// The catalog can be exported to and loaded from a JSON array of recipe
/// entries. For the same source directory the artifact path and a live
/// scan are observably equivalent.

use std::fs;
use std::path::Path;

use super::{scan, CatalogError};
use crate::state::data::RecipeMeta;

/// Artifact filename looked up inside a recipes directory
pub const ARTIFACT_FILE_NAME: &str = "recipes.json";

/// Read a catalog from a JSON artifact
pub fn read_artifact(path: &Path) -> Result<Vec<RecipeMeta>, CatalogError> {
    let json = fs::read_to_string(path)?;
    let mut catalog: Vec<RecipeMeta> = serde_json::from_str(&json)?;

    // Artifacts are written sorted with unique ids; re-establish both
    // invariants for hand-edited files
    scan::sort_by_title(&mut catalog);
    scan::disambiguate_ids(&mut catalog);

    Ok(catalog)
}

/// Write a catalog as a pretty-printed JSON array, creating parent
/// directories as needed
pub fn write_artifact(path: &Path, catalog: &[RecipeMeta]) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
