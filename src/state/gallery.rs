/// Gallery controller state machine
///
/// Holds the transient UI state tuple (active tag, search query, active
/// lightbox entry) and derives the filtered sequence from it. The controller
/// is pure over the catalog slice and has no GUI dependencies; the shell
/// forwards normalized user events to it.

use super::data::{RecipeMeta, RecipeTag};
use super::scroll_lock::{ScrollLock, ScrollState};

/// Active tag filter: the synthetic "all" selection or one concrete tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagSelection {
    #[default]
    All,
    Tag(RecipeTag),
}

/// Keys the lightbox responds to, normalized away from any GUI event type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Transient gallery UI state. Created with the "all" filter, an empty
/// query and no active entry; discarded on teardown.
#[derive(Debug, Default)]
pub struct GalleryState {
    active_tag: TagSelection,
    query: String,
    active_id: Option<String>,
    scroll: ScrollState,
    lock: Option<ScrollLock>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tag(&self) -> TagSelection {
        self.active_tag
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True while the lightbox is open
    pub fn is_open(&self) -> bool {
        self.active_id.is_some()
    }

    /// True while grid scrolling is suppressed
    pub fn scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    /// Handle to the shared scroll flag
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.clone()
    }

    pub fn select_tag(&mut self, tag: TagSelection) {
        self.active_tag = tag;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Entries passing the active tag and query filters, catalog order
    /// preserved
    pub fn filtered<'a>(&self, catalog: &'a [RecipeMeta]) -> Vec<&'a RecipeMeta> {
        catalog.iter().filter(|r| self.matches(r)).collect()
    }

    fn matches(&self, recipe: &RecipeMeta) -> bool {
        let matches_tag = match self.active_tag {
            TagSelection::All => true,
            TagSelection::Tag(tag) => recipe.tags.contains(&tag),
        };

        let matches_query = self.query.is_empty() || {
            let needle = self.query.to_lowercase();
            recipe.title.to_lowercase().contains(&needle)
                || recipe.mood_note.to_lowercase().contains(&needle)
        };

        matches_tag && matches_query
    }

    /// Position of the active entry within the filtered sequence, or None
    /// if the entry no longer passes the filters
    pub fn current_index(&self, catalog: &[RecipeMeta]) -> Option<usize> {
        let active = self.active_id.as_deref()?;
        self.filtered(catalog).iter().position(|r| r.id == active)
    }

    pub fn has_prev(&self, catalog: &[RecipeMeta]) -> bool {
        matches!(self.current_index(catalog), Some(index) if index > 0)
    }

    pub fn has_next(&self, catalog: &[RecipeMeta]) -> bool {
        let len = self.filtered(catalog).len();
        matches!(self.current_index(catalog), Some(index) if index + 1 < len)
    }

    /// Entry currently shown in the lightbox
    pub fn active_recipe<'a>(&self, catalog: &'a [RecipeMeta]) -> Option<&'a RecipeMeta> {
        let active = self.active_id.as_deref()?;
        catalog.iter().find(|r| r.id == active)
    }

    /// Open the lightbox on the given entry and take the scroll lock
    pub fn open(&mut self, id: &str) {
        self.active_id = Some(id.to_string());
        if self.lock.is_none() {
            self.lock = Some(self.scroll.acquire());
        }
    }

    /// Close the lightbox, releasing the scroll lock. Idempotent.
    pub fn close(&mut self) {
        self.active_id = None;
        self.lock = None;
    }

    /// Step to the previous entry in the filtered sequence; no-op at index 0
    pub fn go_prev(&mut self, catalog: &[RecipeMeta]) {
        if let Some(index) = self.current_index(catalog) {
            if index > 0 {
                let filtered = self.filtered(catalog);
                self.active_id = Some(filtered[index - 1].id.clone());
            }
        }
    }

    /// Step to the next entry in the filtered sequence; no-op at the end
    pub fn go_next(&mut self, catalog: &[RecipeMeta]) {
        if let Some(index) = self.current_index(catalog) {
            let filtered = self.filtered(catalog);
            if index + 1 < filtered.len() {
                self.active_id = Some(filtered[index + 1].id.clone());
            }
        }
    }

    /// Handle a key press. Ignored while the lightbox is closed; the shell
    /// only attaches the keyboard listener while an entry is active.
    pub fn handle_key(&mut self, key: GalleryKey, catalog: &[RecipeMeta]) {
        if !self.is_open() {
            return;
        }

        match key {
            GalleryKey::Escape => self.close(),
            GalleryKey::ArrowLeft => self.go_prev(catalog),
            GalleryKey::ArrowRight => self.go_next(catalog),
        }
    }
}
