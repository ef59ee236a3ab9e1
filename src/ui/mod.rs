/// UI widgets for the recipe wall
///
/// This module builds the interactive views:
/// - Search field, filter chips and the card grid (gallery.rs)
/// - Individual recipe cards (card.rs)
/// - The modal lightbox viewer (lightbox.rs)

pub mod card;
pub mod gallery;
pub mod lightbox;
