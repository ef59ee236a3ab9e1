/// Tag registry
///
/// Display metadata for each recipe tag: label and accent color. The
/// accent colors come from the design token table so filter chips match
/// the theme. A synthetic "All recipes" pseudo-filter is prepended by the
/// view and is not part of this registry.

use iced::Color;

use crate::state::data::RecipeTag;
use crate::theme::tokens;

/// Display record for one tag filter chip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagFilter {
    pub id: RecipeTag,
    pub label: &'static str,
    pub accent: Color,
}

/// Registry order used to render the chip row
pub const TAG_ORDER: [RecipeTag; 11] = [
    RecipeTag::Protein,
    RecipeTag::Sweet,
    RecipeTag::Snack,
    RecipeTag::Sauce,
    RecipeTag::Bake,
    RecipeTag::Noodles,
    RecipeTag::Basics,
    RecipeTag::Salmon,
    RecipeTag::Chicken,
    RecipeTag::Waffle,
    RecipeTag::Granola,
];

/// Display label for a tag
pub fn label(tag: RecipeTag) -> &'static str {
    match tag {
        RecipeTag::Protein => "Protein",
        RecipeTag::Sweet => "Sweet",
        RecipeTag::Snack => "Snack",
        RecipeTag::Sauce => "Sauce",
        RecipeTag::Bake => "Bake",
        RecipeTag::Noodles => "Noodles",
        RecipeTag::Basics => "Basics",
        RecipeTag::Salmon => "Salmon",
        RecipeTag::Chicken => "Chicken",
        RecipeTag::Waffle => "Waffle",
        RecipeTag::Granola => "Granola",
    }
}

/// Accent color for a tag's chip
pub fn accent(tag: RecipeTag) -> Color {
    let t = tokens();

    match tag {
        RecipeTag::Protein | RecipeTag::Noodles | RecipeTag::Granola => t.accent,
        RecipeTag::Sweet | RecipeTag::Waffle => t.accent_soft,
        RecipeTag::Snack | RecipeTag::Sauce => t.highlight,
        RecipeTag::Bake => t.accent_muted,
        RecipeTag::Basics => t.muted,
        RecipeTag::Salmon => t.success,
        RecipeTag::Chicken => t.warning,
    }
}

/// All tag filters in registry order
pub fn tag_filters() -> Vec<TagFilter> {
    TAG_ORDER
        .iter()
        .map(|&id| TagFilter {
            id,
            label: label(id),
            accent: accent(id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_tag_once() {
        let filters = tag_filters();
        assert_eq!(filters.len(), 11);

        for (index, filter) in filters.iter().enumerate() {
            assert_eq!(filter.id, TAG_ORDER[index]);
            assert!(!filter.label.is_empty());
        }
    }

    #[test]
    fn test_labels_are_title_case() {
        for &tag in &TAG_ORDER {
            let name = label(tag);
            assert!(name.chars().next().unwrap().is_ascii_uppercase());
        }
    }
}
