/// Recipe card widget
///
/// A fixed-width card: image area on top, title and up to three tag chips
/// below. The whole card is a button that opens the lightbox.

use iced::widget::{button, column, container, row, text, Image};
use iced::{Alignment, Background, Border, ContentFit, Element, Length, Shadow, Theme};

use recipe_wall::state::data::{RecipeMeta, RecipeTag};
use recipe_wall::tags;
use recipe_wall::theme::{tokens, RADIUS_CARD, RADIUS_PILL};

use crate::thumbs::CardImage;
use crate::Message;

/// Card footprint; the image area keeps the A5 sheet aspect
pub const CARD_WIDTH: f32 = 220.0;
const IMAGE_HEIGHT: f32 = 296.0;

/// At most this many tag chips per card
const MAX_TAG_CHIPS: usize = 3;

pub fn view<'a>(recipe: &'a RecipeMeta, image: Option<&'a CardImage>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match image {
        Some(card_image) => Image::new(card_image.thumb.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .into(),
        None => placeholder(),
    };

    let mut title_row = row![text(recipe.title.as_str()).size(15).width(Length::Fill)]
        .spacing(6)
        .align_y(Alignment::Center);
    if recipe.featured {
        title_row = title_row.push(text("★").size(14).color(tokens().highlight));
    }

    let mut chips = row![].spacing(6);
    for &tag in recipe.tags.iter().take(MAX_TAG_CHIPS) {
        chips = chips.push(tag_chip(tag));
    }

    let details = column![title_row, chips].spacing(8).padding(12);

    button(column![picture, details].width(Length::Fixed(CARD_WIDTH)))
        .on_press(Message::OpenRecipe(recipe.id.clone()))
        .padding(0)
        .style(card_style)
        .into()
}

fn tag_chip(tag: RecipeTag) -> Element<'static, Message> {
    container(
        text(tags::label(tag))
            .size(11)
            .color(tokens().text_secondary),
    )
    .padding([2.0, 8.0])
    .style(|_theme| container::Style {
        border: Border {
            color: tokens().border_faint,
            width: 1.0,
            radius: RADIUS_PILL.into(),
        },
        ..container::Style::default()
    })
    .into()
}

fn placeholder() -> Element<'static, Message> {
    container(text("…").size(24).color(tokens().muted))
        .width(Length::Fill)
        .height(Length::Fixed(IMAGE_HEIGHT))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(|_theme| container::Style {
            background: Some(Background::Color(tokens().surface)),
            ..container::Style::default()
        })
        .into()
}

fn card_style(_theme: &Theme, status: button::Status) -> button::Style {
    let t = tokens();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => t.card_alt,
        _ => t.card,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: t.text_primary,
        border: Border {
            color: t.border_faint,
            width: 1.0,
            radius: RADIUS_CARD.into(),
        },
        shadow: Shadow::default(),
    }
}
