/// Shared data structures for the recipe catalog
///
/// These structs represent the data model that flows between
/// the catalog loader and the UI layer. Serde names follow the
/// JSON artifact shape (lowercase tags, camelCase fields).

use serde::{Deserialize, Serialize};

/// Placeholder prep time until per-recipe timing exists
pub const PREP_TIME_PLACEHOLDER: &str = "~15 min";

/// Placeholder mood note until per-recipe notes exist
pub const MOOD_NOTE_PLACEHOLDER: &str = "Add your personal notes here soon.";

/// Closed set of recipe categories used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeTag {
    Protein,
    Sweet,
    Snack,
    Sauce,
    Bake,
    Noodles,
    Basics,
    Salmon,
    Chicken,
    Waffle,
    Granola,
}

/// Represents a single recipe card in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMeta {
    /// Stable identifier derived from the title (e.g. "bang-bang-chicken"),
    /// unique within a catalog
    pub id: String,
    /// Human-readable title derived from the filename
    pub title: String,
    /// Path to the source image
    pub image: String,
    /// Ordered, duplicate-free category tags; never empty
    pub tags: Vec<RecipeTag>,
    /// Member of the curated featured allow-list
    pub featured: bool,
    /// Placeholder, constant for all entries
    pub prep_time: String,
    /// Placeholder, constant for all entries; searched alongside the title
    pub mood_note: String,
}
