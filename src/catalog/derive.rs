/// Filename metadata derivation
///
/// Everything the catalog knows about a recipe comes from its filename:
/// the title, the slug id, the category tags, and the featured flag.
/// All functions here are total over any input string.

use crate::state::data::RecipeTag;

/// Metadata fragment derived from one filename
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMeta {
    pub title: String,
    pub id: String,
    pub tags: Vec<RecipeTag>,
    pub featured: bool,
}

/// Filenames that belong to the curated featured set
const FEATURED_IMAGES: [&str; 4] = [
    "rezept-bang-bang-chicken-13x18cm.png",
    "rezept-kung-pao-chicken-13x18cm.png",
    "rezept-dijon-dill-panko-salmon-13x18cm.png",
    "rezept-american-pancake-13x18cm.png",
];

/// Ordered keyword -> tag map, matched as substrings of the lowercased
/// filename
const KEYWORD_TAG_MAP: [(&str, RecipeTag); 16] = [
    ("chicken", RecipeTag::Chicken),
    ("salmon", RecipeTag::Salmon),
    ("noodle", RecipeTag::Noodles),
    ("sauce", RecipeTag::Sauce),
    ("waffel", RecipeTag::Waffle),
    ("waffle", RecipeTag::Waffle),
    ("granola", RecipeTag::Granola),
    ("flapjack", RecipeTag::Sweet),
    ("cookie", RecipeTag::Sweet),
    ("porridge", RecipeTag::Sweet),
    ("bar", RecipeTag::Snack),
    ("steak", RecipeTag::Protein),
    ("burger", RecipeTag::Protein),
    ("shawarma", RecipeTag::Protein),
    ("soup", RecipeTag::Basics),
    ("marinad", RecipeTag::Sauce),
];

/// Prefix word stripped from the front of every filename
const TITLE_PREFIX: &str = "rezept";

/// Tokens removed from the filename before prettifying, case-insensitive
const STRIP_TOKENS: [&str; 4] = ["-13x18cm", ".png", ".jpg", ".jpeg"];

/// Derive the metadata fragment for a filename
pub fn derive(file_name: &str) -> DerivedMeta {
    let title = prettify_title(file_name);
    let id = slug(&title);

    DerivedMeta {
        title,
        id,
        tags: derive_tags(file_name),
        featured: is_featured(file_name),
    }
}

/// Turn a filename into a display title: strip the prefix word and the
/// dimension/extension tokens, replace separators with spaces, collapse
/// whitespace, and capitalize each word.
pub fn prettify_title(file_name: &str) -> String {
    let rest = strip_prefix_ci(file_name, TITLE_PREFIX);
    let rest = rest.strip_prefix(['-', '_']).unwrap_or(rest);

    let mut cleaned = rest.to_string();
    for token in STRIP_TOKENS {
        cleaned = remove_ci(&cleaned, token);
    }

    let spaced: String = cleaned
        .chars()
        .map(|c| if matches!(c, '-' | '_' | '.') { ' ' } else { c })
        .collect();

    capitalize_words(&spaced)
}

/// Infer the tag set for a filename: ordered keyword-map matches first,
/// then the chicken/salmon synonym passes, then the fallback tag.
pub fn derive_tags(file_name: &str) -> Vec<RecipeTag> {
    let normalized = file_name.to_lowercase();
    let mut tags = Vec::new();

    for (keyword, tag) in KEYWORD_TAG_MAP {
        if normalized.contains(keyword) {
            push_unique(&mut tags, tag);
        }
    }

    // Synonym passes run unconditionally; the list stays duplicate-free
    if normalized.contains("chicken") || normalized.contains("huhn") {
        push_unique(&mut tags, RecipeTag::Chicken);
    }
    if normalized.contains("lachs") || normalized.contains("salmon") {
        push_unique(&mut tags, RecipeTag::Salmon);
    }

    if tags.is_empty() {
        tags.push(RecipeTag::Basics);
    }

    tags
}

/// Slug id for a title: lowercased, whitespace runs become single hyphens
pub fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// True iff the filename is in the featured allow-list
pub fn is_featured(file_name: &str) -> bool {
    FEATURED_IMAGES.contains(&file_name)
}

fn push_unique(tags: &mut Vec<RecipeTag>, tag: RecipeTag) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}

/// Strip a leading ASCII-case-insensitive prefix if present
fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> &'a str {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    }
}

/// Remove every ASCII-case-insensitive occurrence of `token`
fn remove_ci(s: &str, token: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let needle = token.to_ascii_lowercase();

    let mut out = String::with_capacity(s.len());
    let mut pos = 0;
    while let Some(found) = lower[pos..].find(&needle) {
        let start = pos + found;
        out.push_str(&s[pos..start]);
        pos = start + needle.len();
    }
    out.push_str(&s[pos..]);
    out
}

/// Uppercase the first character of every whitespace-delimited word,
/// collapsing whitespace runs to single spaces
fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_title() {
        assert_eq!(
            prettify_title("rezept-bang-bang-chicken-13x18cm.png"),
            "Bang Bang Chicken"
        );
        assert_eq!(prettify_title("REZEPT_kung_pao_chicken.PNG"), "Kung Pao Chicken");
        assert_eq!(prettify_title("granola.bars.jpeg"), "Granola Bars");
        assert_eq!(prettify_title("soup"), "Soup");
    }

    #[test]
    fn test_prefix_only_stripped_at_front() {
        // "rezept" in the middle of a name stays
        assert_eq!(prettify_title("miso-rezept.png"), "Miso Rezept");
    }

    #[test]
    fn test_capitalization_is_idempotent() {
        let once = prettify_title("rezept-dijon-dill-panko-salmon-13x18cm.png");
        let twice = capitalize_words(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Bang Bang Chicken"), "bang-bang-chicken");
        assert_eq!(slug("Soup"), "soup");
    }

    #[test]
    fn test_tags_never_empty() {
        for name in [
            "",
            "rezept-mystery-dish.png",
            "totally-unrelated.txt",
            "rezept-bang-bang-chicken-13x18cm.png",
        ] {
            assert!(!derive_tags(name).is_empty(), "no tags for {name:?}");
        }
    }

    #[test]
    fn test_fallback_tag() {
        assert_eq!(derive_tags("rezept-mystery-dish.png"), vec![RecipeTag::Basics]);
        assert_eq!(derive_tags(""), vec![RecipeTag::Basics]);
    }

    #[test]
    fn test_keyword_map_order_preserved() {
        let tags = derive_tags("chicken-noodle-soup.png");
        assert_eq!(
            tags,
            vec![RecipeTag::Chicken, RecipeTag::Noodles, RecipeTag::Basics]
        );
    }

    #[test]
    fn test_synonym_tags() {
        assert!(derive_tags("rezept-huhn-bowl.png").contains(&RecipeTag::Chicken));
        assert!(derive_tags("rezept-lachs-teriyaki.png").contains(&RecipeTag::Salmon));
    }

    #[test]
    fn test_synonym_pass_does_not_duplicate() {
        // "chicken" fires both the keyword map and the synonym pass
        let tags = derive_tags("rezept-bang-bang-chicken.png");
        assert_eq!(tags, vec![RecipeTag::Chicken]);

        // "marinad" and "sauce" both map to Sauce
        let tags = derive_tags("sauce-marinade.png");
        assert_eq!(tags, vec![RecipeTag::Sauce]);
    }

    #[test]
    fn test_featured_allow_list() {
        assert!(derive("rezept-bang-bang-chicken-13x18cm.png").featured);
        assert!(!derive("anything-else.png").featured);
        // Match is exact, not case-insensitive
        assert!(!derive("REZEPT-BANG-BANG-CHICKEN-13X18CM.PNG").featured);
    }

    #[test]
    fn test_derive_is_total() {
        // Arbitrary unicode input must not panic
        let meta = derive("режепт-суп-13x18cm.png");
        assert!(!meta.tags.is_empty());
        let meta = derive("émincé_de_poulet.jpeg");
        assert!(!meta.title.is_empty());
    }
}
