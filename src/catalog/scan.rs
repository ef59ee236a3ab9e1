/// Directory scanning
///
/// Builds the catalog by walking a flat recipes directory and passing each
/// qualifying image filename through the metadata deriver. A missing
/// directory yields an empty catalog, not an error; the UI renders a valid
/// empty state from it.

use std::collections::HashMap;
use std::path::Path;

use walkdir::WalkDir;

use super::derive;
use crate::state::data::{RecipeMeta, MOOD_NOTE_PLACEHOLDER, PREP_TIME_PLACEHOLDER};

/// Image extensions accepted by the scan, matched case-insensitively
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Scan a recipes directory into a catalog sorted by title
pub fn scan_dir(dir: &Path) -> Vec<RecipeMeta> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut catalog: Vec<RecipeMeta> = WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|entry| {
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !is_image_file(&file_name) {
                return None;
            }
            Some(entry_for(entry.path(), &file_name))
        })
        .collect();

    sort_by_title(&mut catalog);
    disambiguate_ids(&mut catalog);
    catalog
}

/// Build one catalog entry from a qualifying file
fn entry_for(path: &Path, file_name: &str) -> RecipeMeta {
    let meta = derive::derive(file_name);

    RecipeMeta {
        id: meta.id,
        title: meta.title,
        image: path.to_string_lossy().to_string(),
        tags: meta.tags,
        featured: meta.featured,
        prep_time: PREP_TIME_PLACEHOLDER.to_string(),
        mood_note: MOOD_NOTE_PLACEHOLDER.to_string(),
    }
}

/// True iff the filename carries one of the accepted image extensions
fn is_image_file(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)),
        None => false,
    }
}

/// Ascending by title, case-insensitive, raw title as tie-break
pub fn sort_by_title(catalog: &mut [RecipeMeta]) {
    catalog.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
    });
}

/// Append numeric suffixes to later entries whose slug id collides with an
/// earlier one, so ids stay unique within the catalog
pub fn disambiguate_ids(catalog: &mut [RecipeMeta]) {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for entry in catalog.iter_mut() {
        let count = seen.entry(entry.id.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            entry.id = format!("{}-{}", entry.id, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let catalog = scan_dir(Path::new("/nonexistent/recipes"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_empty_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_dir(dir.path()).is_empty());
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file("rezept-soup.png"));
        assert!(is_image_file("rezept-soup.PNG"));
        assert!(is_image_file("rezept-soup.jpg"));
        assert!(is_image_file("rezept-soup.jpeg"));
        assert!(!is_image_file("rezept-soup.txt"));
        assert!(!is_image_file("rezept-soup.gif"));
        assert!(!is_image_file("no-extension"));
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "rezept-kung-pao-chicken-13x18cm.png");
        touch(dir.path(), "rezept-american-pancake-13x18cm.png");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "recipes.json");

        let catalog = scan_dir(dir.path());
        let titles: Vec<&str> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["American Pancake", "Kung Pao Chicken"]);
    }

    #[test]
    fn test_scan_ignores_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "rezept-soup.png");
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "rezept-hidden.png");

        let catalog = scan_dir(dir.path());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].title, "Soup");
    }

    #[test]
    fn test_scan_fills_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "rezept-bang-bang-chicken-13x18cm.png");

        let catalog = scan_dir(dir.path());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "bang-bang-chicken");
        assert!(catalog[0].featured);
        assert_eq!(catalog[0].prep_time, PREP_TIME_PLACEHOLDER);
        assert_eq!(catalog[0].mood_note, MOOD_NOTE_PLACEHOLDER);
        assert!(catalog[0].image.ends_with("rezept-bang-bang-chicken-13x18cm.png"));
    }

    #[test]
    fn test_id_collisions_get_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        // Distinct filenames, same prettified title
        touch(dir.path(), "pancake.png");
        touch(dir.path(), "pancake.jpg");

        let catalog = scan_dir(dir.path());
        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["pancake", "pancake-2"]);
    }
}
