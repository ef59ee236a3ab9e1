/// Gallery view: header with search, filter chips, count label, card grid
///
/// The chip row prepends the synthetic "All recipes" filter to the tag
/// registry. While the lightbox holds the scroll lock the grid is rendered
/// in a fixed container instead of a scrollable.

use std::collections::HashMap;

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Background, Border, Color, Element, Length, Shadow, Theme};
use iced_aw::Wrap;

use recipe_wall::state::data::RecipeMeta;
use recipe_wall::state::gallery::{GalleryState, TagSelection};
use recipe_wall::tags;
use recipe_wall::theme::{tokens, RADIUS_PILL};

use super::card;
use crate::thumbs::CardImage;
use crate::Message;

/// Main gallery content
pub fn view<'a>(
    gallery: &'a GalleryState,
    catalog: &'a [RecipeMeta],
    images: &'a HashMap<String, CardImage>,
    status: &'a str,
) -> Element<'a, Message> {
    let filtered = gallery.filtered(catalog);

    let content = column![
        header(gallery),
        chip_row(gallery),
        count_label(filtered.len(), catalog.len()),
        grid(&filtered, images),
        text(status).size(13).color(tokens().text_secondary),
    ]
    .spacing(20)
    .padding(32)
    .width(Length::Fill);

    if gallery.scroll_locked() {
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn header(gallery: &GalleryState) -> Element<'_, Message> {
    let t = tokens();

    let intro = column![
        text("RECIPE HUB").size(12).color(t.text_secondary),
        text("Your curated recipe wall.").size(32),
        text("Browse the cards, tap one to open the full sheet.")
            .size(15)
            .color(t.text_secondary),
    ]
    .spacing(8)
    .width(Length::Fill);

    let search = text_input("Search titles or notes...", gallery.query())
        .on_input(Message::QueryChanged)
        .padding(10)
        .width(Length::Fixed(320.0));

    let controls = row![
        button(text("Open Folder").size(14))
            .on_press(Message::OpenFolder)
            .padding(8),
        button(text("Export Catalog").size(14))
            .on_press(Message::ExportCatalog)
            .padding(8),
    ]
    .spacing(8);

    row![intro, column![search, controls].spacing(10)]
        .spacing(24)
        .align_y(Alignment::End)
        .into()
}

fn chip_row(gallery: &GalleryState) -> Element<'_, Message> {
    let mut chips: Vec<Element<'_, Message>> = Vec::new();

    // The "all" pseudo-filter is not part of the tag registry
    chips.push(chip(
        "All recipes",
        tokens().muted,
        gallery.active_tag() == TagSelection::All,
        TagSelection::All,
    ));

    for filter in tags::tag_filters() {
        chips.push(chip(
            filter.label,
            filter.accent,
            gallery.active_tag() == TagSelection::Tag(filter.id),
            TagSelection::Tag(filter.id),
        ));
    }

    Wrap::with_elements(chips)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}

fn chip(
    label: &'static str,
    accent: Color,
    selected: bool,
    select: TagSelection,
) -> Element<'static, Message> {
    button(text(label).size(14))
        .on_press(Message::SelectTag(select))
        .padding([6.0, 14.0])
        .style(chip_style(accent, selected))
        .into()
}

fn chip_style(
    accent: Color,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let t = tokens();

        let (background, border_color, text_color) = if selected {
            (Color { a: 0.18, ..accent }, accent, t.text_primary)
        } else {
            let border = match status {
                button::Status::Hovered => t.border_strong,
                _ => t.border_faint,
            };
            (t.surface, border, t.text_secondary)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: RADIUS_PILL.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

fn count_label(filtered: usize, total: usize) -> Element<'static, Message> {
    text(format!("{filtered} recipes · {total} total"))
        .size(14)
        .color(tokens().text_secondary)
        .into()
}

fn grid<'a>(
    filtered: &[&'a RecipeMeta],
    images: &'a HashMap<String, CardImage>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = filtered
        .iter()
        .map(|&recipe| card::view(recipe, images.get(&recipe.id)))
        .collect();

    Wrap::with_elements(cards)
        .spacing(14.0)
        .line_spacing(14.0)
        .into()
}
