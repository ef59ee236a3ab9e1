use std::collections::HashMap;
use std::path::PathBuf;

use iced::keyboard::{self, key};
use iced::{Element, Subscription, Task, Theme};
use rfd::FileDialog;

use recipe_wall::catalog::{self, artifact};
use recipe_wall::state::data::RecipeMeta;
use recipe_wall::state::gallery::{GalleryKey, GalleryState, TagSelection};
use recipe_wall::theme;

// GUI-only modules
mod thumbs;
mod ui;

use thumbs::CardImage;

/// Main application state
struct RecipeWall {
    /// Full catalog, sorted by title
    catalog: Vec<RecipeMeta>,
    /// Gallery controller (filters, search, lightbox)
    gallery: GalleryState,
    /// Decoded card images, keyed by recipe id
    images: HashMap<String, CardImage>,
    /// Directory the catalog was loaded from
    recipes_dir: PathBuf,
    /// Theme built once from the design tokens
    theme: Theme,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Open Folder" button
    OpenFolder,
    /// Background catalog load completed
    CatalogLoaded(Result<Vec<RecipeMeta>, String>),
    /// A card image finished decoding
    ImageLoaded(String, Option<CardImage>),
    /// User picked a filter chip
    SelectTag(TagSelection),
    /// Search text changed
    QueryChanged(String),
    /// Open the lightbox on a recipe
    OpenRecipe(String),
    /// Close the lightbox
    CloseRecipe,
    /// Step to the previous recipe in the filtered sequence
    GoPrev,
    /// Step to the next recipe in the filtered sequence
    GoNext,
    /// Key pressed while the lightbox is open
    KeyPressed(GalleryKey),
    /// User clicked the "Export Catalog" button
    ExportCatalog,
    /// Background artifact export completed
    ExportComplete(Result<usize, String>),
}

impl RecipeWall {
    /// Create a new instance and kick off the initial catalog load
    fn new() -> (Self, Task<Message>) {
        let recipes_dir = catalog::default_recipes_dir();
        println!("🍳 Recipe wall starting: {}", recipes_dir.display());

        let source = catalog::preferred_source(&recipes_dir);

        (
            RecipeWall {
                catalog: Vec::new(),
                gallery: GalleryState::new(),
                images: HashMap::new(),
                recipes_dir,
                theme: theme::build_theme(),
                status: String::from("Loading recipes..."),
            },
            Task::perform(catalog::load_async(source), Message::CatalogLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Recipes Folder")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Loading from {}...", folder_path.display());
                    self.recipes_dir = folder_path.clone();

                    let source = catalog::preferred_source(&folder_path);
                    return Task::perform(catalog::load_async(source), Message::CatalogLoaded);
                }

                Task::none()
            }
            Message::CatalogLoaded(Ok(catalog)) => {
                println!("📚 Catalog loaded: {} recipes", catalog.len());
                self.status = format!("Ready. {} recipes on the wall.", catalog.len());

                // The previous lightbox entry may not exist in the new catalog
                self.gallery.close();
                self.images.clear();

                let loads: Vec<Task<Message>> = catalog
                    .iter()
                    .map(|recipe| {
                        Task::perform(
                            thumbs::load_card_image(
                                recipe.id.clone(),
                                PathBuf::from(recipe.image.clone()),
                            ),
                            |(id, image)| Message::ImageLoaded(id, image),
                        )
                    })
                    .collect();

                self.catalog = catalog;
                Task::batch(loads)
            }
            Message::CatalogLoaded(Err(e)) => {
                eprintln!("⚠️  Catalog load failed: {e}");
                self.catalog = Vec::new();
                self.images.clear();
                self.gallery.close();
                self.status = format!("Failed to load catalog: {e}");
                Task::none()
            }
            Message::ImageLoaded(id, Some(image)) => {
                self.images.insert(id, image);
                Task::none()
            }
            Message::ImageLoaded(_, None) => Task::none(),
            Message::SelectTag(selection) => {
                self.gallery.select_tag(selection);
                Task::none()
            }
            Message::QueryChanged(query) => {
                self.gallery.set_query(query);
                Task::none()
            }
            Message::OpenRecipe(id) => {
                self.gallery.open(&id);
                Task::none()
            }
            Message::CloseRecipe => {
                self.gallery.close();
                Task::none()
            }
            Message::GoPrev => {
                self.gallery.go_prev(&self.catalog);
                Task::none()
            }
            Message::GoNext => {
                self.gallery.go_next(&self.catalog);
                Task::none()
            }
            Message::KeyPressed(key) => {
                self.gallery.handle_key(key, &self.catalog);
                Task::none()
            }
            Message::ExportCatalog => {
                let path = self.recipes_dir.join(artifact::ARTIFACT_FILE_NAME);
                self.status = format!("Exporting to {}...", path.display());

                Task::perform(
                    export_catalog_async(path, self.catalog.clone()),
                    Message::ExportComplete,
                )
            }
            Message::ExportComplete(Ok(count)) => {
                println!("📦 Exported {count} recipes");
                self.status = format!(
                    "Exported {count} recipes to {}.",
                    self.recipes_dir.join(artifact::ARTIFACT_FILE_NAME).display()
                );
                Task::none()
            }
            Message::ExportComplete(Err(e)) => {
                eprintln!("⚠️  Export failed: {e}");
                self.status = format!("Export failed: {e}");
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let base = ui::gallery::view(&self.gallery, &self.catalog, &self.images, &self.status);

        match self.gallery.active_recipe(&self.catalog) {
            Some(recipe) => {
                let content =
                    ui::lightbox::view(recipe, &self.gallery, &self.catalog, &self.images);
                ui::lightbox::modal(base, content, Message::CloseRecipe)
            }
            None => base,
        }
    }

    /// Keyboard control is attached only while the lightbox is open
    fn subscription(&self) -> Subscription<Message> {
        if !self.gallery.is_open() {
            return Subscription::none();
        }

        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            keyboard::Key::Named(key::Named::Escape) => {
                Some(Message::KeyPressed(GalleryKey::Escape))
            }
            keyboard::Key::Named(key::Named::ArrowLeft) => {
                Some(Message::KeyPressed(GalleryKey::ArrowLeft))
            }
            keyboard::Key::Named(key::Named::ArrowRight) => {
                Some(Message::KeyPressed(GalleryKey::ArrowRight))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn main() -> iced::Result {
    iced::application("Recipe Wall", RecipeWall::update, RecipeWall::view)
        .subscription(RecipeWall::subscription)
        .theme(RecipeWall::theme)
        .centered()
        .run_with(RecipeWall::new)
}

/// Async task writing the catalog artifact next to the source images
async fn export_catalog_async(path: PathBuf, catalog: Vec<RecipeMeta>) -> Result<usize, String> {
    tokio::task::spawn_blocking(move || {
        artifact::write_artifact(&path, &catalog)
            .map(|_| catalog.len())
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {e}"))?
}
