/// Card image decoding
///
/// Decodes each recipe image off the UI thread and downscales it into two
/// tiers in a single pass:
/// - a grid thumbnail for the card wall
/// - a larger preview for the lightbox

use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::imageops::FilterType;

/// Grid card tier, longest edge in pixels
const TIER_CARD: u32 = 512;

/// Lightbox preview tier, longest edge in pixels
const TIER_PREVIEW: u32 = 1600;

/// Decoded display tiers for one recipe image
#[derive(Debug, Clone)]
pub struct CardImage {
    pub thumb: Handle,
    pub preview: Handle,
}

/// Decode and downscale one recipe image. Returns the recipe id with None
/// if the file cannot be decoded; the card then keeps its placeholder.
pub async fn load_card_image(id: String, path: PathBuf) -> (String, Option<CardImage>) {
    match tokio::task::spawn_blocking(move || decode_tiers(&path)).await {
        Ok(image) => (id, image),
        Err(e) => {
            eprintln!("⚠️  Image task failed: {e}");
            (id, None)
        }
    }
}

fn decode_tiers(path: &Path) -> Option<CardImage> {
    let img = image::open(path).ok()?;

    let thumb = to_handle(img.resize(TIER_CARD, TIER_CARD, FilterType::Lanczos3));
    let preview = to_handle(img.resize(TIER_PREVIEW, TIER_PREVIEW, FilterType::Triangle));

    Some(CardImage { thumb, preview })
}

fn to_handle(img: image::DynamicImage) -> Handle {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Handle::from_rgba(width, height, rgba.into_raw())
}
