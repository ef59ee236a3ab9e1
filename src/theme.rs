/// Design tokens and the application theme
///
/// The token table below is the single source of truth for colors and
/// radii. It is compiled once at startup into the iced theme by
/// `build_theme`; there is no runtime mutation. Tag accents and widget
/// styles read the same table so everything stays on palette.

use std::sync::OnceLock;

use iced::theme::Palette;
use iced::{Color, Theme};

/// Hex values for the dark theme, the single theme the wall ships with
const CANVAS: &str = "#161210";
const SURFACE: &str = "#231c16";
const CARD: &str = "#2a221b";
const CARD_ALT: &str = "#332921";
const TEXT_PRIMARY: &str = "#f4ede4";
const TEXT_SECONDARY: &str = "#b3a79a";
const MUTED: &str = "#8a7d70";
const ACCENT: &str = "#ff7847";
const ACCENT_SOFT: &str = "#ffb38a";
const ACCENT_MUTED: &str = "#c25f38";
const HIGHLIGHT: &str = "#ffd166";
const SUCCESS: &str = "#7fb069";
const WARNING: &str = "#e9a13b";

/// Corner radii, in logical pixels
pub const RADIUS_CARD: f32 = 12.0;
pub const RADIUS_MODAL: f32 = 10.0;
pub const RADIUS_IMAGE: f32 = 8.0;
pub const RADIUS_PILL: f32 = 999.0;

/// Resolved color tokens
#[derive(Debug, Clone, Copy)]
pub struct Tokens {
    pub canvas: Color,
    pub surface: Color,
    pub card: Color,
    pub card_alt: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub accent_muted: Color,
    pub highlight: Color,
    pub success: Color,
    pub warning: Color,
    /// Faint and strong hairline borders
    pub border_faint: Color,
    pub border_strong: Color,
}

/// The resolved token table, built once
pub fn tokens() -> &'static Tokens {
    static TOKENS: OnceLock<Tokens> = OnceLock::new();
    TOKENS.get_or_init(build_tokens)
}

fn build_tokens() -> Tokens {
    Tokens {
        canvas: hex_color(CANVAS),
        surface: hex_color(SURFACE),
        card: hex_color(CARD),
        card_alt: hex_color(CARD_ALT),
        text_primary: hex_color(TEXT_PRIMARY),
        text_secondary: hex_color(TEXT_SECONDARY),
        muted: hex_color(MUTED),
        accent: hex_color(ACCENT),
        accent_soft: hex_color(ACCENT_SOFT),
        accent_muted: hex_color(ACCENT_MUTED),
        highlight: hex_color(HIGHLIGHT),
        success: hex_color(SUCCESS),
        warning: hex_color(WARNING),
        border_faint: Color {
            a: 0.10,
            ..Color::WHITE
        },
        border_strong: Color {
            a: 0.30,
            ..Color::WHITE
        },
    }
}

/// Build the application theme from the token table. Invoked once at
/// startup by the shell.
pub fn build_theme() -> Theme {
    let t = tokens();

    Theme::custom(
        "Recipe Wall".to_string(),
        Palette {
            background: t.canvas,
            text: t.text_primary,
            primary: t.accent,
            success: t.success,
            danger: t.warning,
        },
    )
}

/// Parse a `#rrggbb` token into a Color
pub fn parse_hex(hex: &str) -> Option<Color> {
    let raw = hex.strip_prefix('#')?;
    if raw.len() != 6 || !raw.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&raw[0..2], 16).ok()?;
    let g = u8::from_str_radix(&raw[2..4], 16).ok()?;
    let b = u8::from_str_radix(&raw[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

/// Parse a token that is known to be well-formed, falling back to white
fn hex_color(hex: &str) -> Color {
    parse_hex(hex).unwrap_or(Color::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let accent = parse_hex("#ff7847").unwrap();
        assert!((accent.r - 1.0).abs() < 0.005);
        assert!((accent.g - 120.0 / 255.0).abs() < 0.005);
        assert!((accent.b - 71.0 / 255.0).abs() < 0.005);
        assert_eq!(accent.a, 1.0);
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert!(parse_hex("ff7847").is_none());
        assert!(parse_hex("#ff784").is_none());
        assert!(parse_hex("#ff78479").is_none());
        assert!(parse_hex("#gggg200").is_none());
        assert!(parse_hex("#ggg200").is_none());
        assert!(parse_hex("").is_none());
    }

    #[test]
    fn test_token_table_is_fully_resolved() {
        // Every named token must come from the table, not the fallback
        let t = tokens();
        for color in [
            t.canvas,
            t.surface,
            t.card,
            t.card_alt,
            t.text_primary,
            t.text_secondary,
            t.muted,
            t.accent,
            t.accent_soft,
            t.accent_muted,
            t.highlight,
            t.success,
            t.warning,
        ] {
            assert_ne!(color, Color::WHITE);
            assert_eq!(color.a, 1.0);
        }
    }
}
