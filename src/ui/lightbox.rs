/// Lightbox modal
///
/// Overlay shown while a recipe is active: dimmed backdrop (press to
/// close), the full card image, prev/next controls that follow the
/// filtered sequence, and the recipe notes. Presses inside the content
/// never reach the backdrop.

use std::collections::HashMap;

use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, stack, text, Image,
};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Shadow, Theme};

use recipe_wall::state::data::RecipeMeta;
use recipe_wall::state::gallery::GalleryState;
use recipe_wall::theme::{tokens, RADIUS_MODAL, RADIUS_PILL};

use crate::thumbs::CardImage;
use crate::Message;

const PREVIEW_HEIGHT: f32 = 560.0;

/// Overlay `content` over `base`, closing on backdrop press
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    let backdrop = center(opaque(content)).style(|_theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..Color::BLACK
        })),
        ..container::Style::default()
    });

    stack![base.into(), opaque(mouse_area(backdrop).on_press(on_blur))].into()
}

/// The lightbox content for the active recipe
pub fn view<'a>(
    recipe: &'a RecipeMeta,
    gallery: &'a GalleryState,
    catalog: &'a [RecipeMeta],
    images: &'a HashMap<String, CardImage>,
) -> Element<'a, Message> {
    let t = tokens();
    let filtered_len = gallery.filtered(catalog).len();
    let position = gallery.current_index(catalog).map(|i| i + 1).unwrap_or(0);

    let mut header = row![text(recipe.title.as_str()).size(18).width(Length::Fill)]
        .spacing(12)
        .align_y(Alignment::Center);
    if recipe.featured {
        header = header.push(text("★ Featured").size(13).color(t.highlight));
    }
    header = header.push(
        button(text("Close").size(13))
            .on_press(Message::CloseRecipe)
            .padding([6.0, 12.0])
            .style(nav_style),
    );

    let picture: Element<'a, Message> = match images.get(&recipe.id) {
        Some(card_image) => Image::new(card_image.preview.clone())
            .content_fit(ContentFit::Contain)
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .into(),
        None => container(text("Loading…").color(t.text_secondary))
            .width(Length::Fixed(420.0))
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .into(),
    };

    let nav = row![
        button(text("‹ Prev").size(14))
            .on_press_maybe(gallery.has_prev(catalog).then_some(Message::GoPrev))
            .padding([6.0, 12.0])
            .style(nav_style),
        text(format!("{position} / {filtered_len}"))
            .size(13)
            .color(t.text_secondary),
        button(text("Next ›").size(14))
            .on_press_maybe(gallery.has_next(catalog).then_some(Message::GoNext))
            .padding([6.0, 12.0])
            .style(nav_style),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let notes = text(format!("{} · {}", recipe.prep_time, recipe.mood_note))
        .size(13)
        .color(t.text_secondary);

    container(
        column![header, picture, nav, notes]
            .spacing(14)
            .align_x(Alignment::Center),
    )
    .padding(18)
    .max_width(720)
    .style(|_theme| container::Style {
        background: Some(Background::Color(tokens().surface)),
        border: Border {
            color: tokens().border_strong,
            width: 1.0,
            radius: RADIUS_MODAL.into(),
        },
        ..container::Style::default()
    })
    .into()
}

fn nav_style(_theme: &Theme, status: button::Status) -> button::Style {
    let t = tokens();

    let (background, text_color) = match status {
        button::Status::Disabled => (t.surface, t.muted),
        button::Status::Hovered | button::Status::Pressed => (t.card_alt, t.text_primary),
        _ => (t.card, t.text_primary),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: t.border_faint,
            width: 1.0,
            radius: RADIUS_PILL.into(),
        },
        shadow: Shadow::default(),
    }
}
