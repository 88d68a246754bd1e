//! Navigation between the landing, library and detail screens
//!
//! The current screen is a tagged variant so a detail screen always carries
//! the record it shows. Library filters travel along into the detail screen so
//! going back restores them.

use crate::core::data::{PromptCategory, PromptRecord, PromptType};
use crate::core::filter::FilterOptions;
use crate::core::preferences::PreferenceStore;
use crate::core::traits::KeyValueStore;

pub const DEFAULT_FONT_SIZE: u8 = 16;
pub const MIN_FONT_SIZE: u8 = 12;
pub const MAX_FONT_SIZE: u8 = 24;
const FONT_SIZE_STEP: u8 = 2;

/// Per-visit state of the detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSession {
    pub record_id: String,
    pub content: String,
    pub focus_mode: bool,
    pub editing: bool,
    pub font_size: u8,
}

impl DetailSession {
    pub fn new(record: &PromptRecord) -> Self {
        Self {
            record_id: record.id.clone(),
            content: record.content.clone(),
            focus_mode: false,
            editing: false,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus_mode = !self.focus_mode;
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn is_edited(&self, record: &PromptRecord) -> bool {
        self.content != record.content
    }

    pub fn increase_font(&mut self) {
        self.font_size = (self.font_size + FONT_SIZE_STEP).min(MAX_FONT_SIZE);
    }

    pub fn decrease_font(&mut self) {
        self.font_size = self.font_size.saturating_sub(FONT_SIZE_STEP).max(MIN_FONT_SIZE);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Library(FilterOptions),
    Detail {
        filters: FilterOptions,
        session: DetailSession,
    },
}

/// Keys understood by the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKey {
    Escape,
    Char(char),
    CopyShortcut,
}

/// What a detail key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Back,
    FinishEditing,
    ToggleFocus,
    CopyContent,
    Ignore,
}

/// Map a key press on the detail screen, honouring edit-mode suppression
pub fn detail_action(key: DetailKey, editing: bool) -> DetailAction {
    match key {
        DetailKey::Escape if editing => DetailAction::FinishEditing,
        DetailKey::Escape => DetailAction::Back,
        DetailKey::Char(c) if !editing && c.eq_ignore_ascii_case(&'f') => DetailAction::ToggleFocus,
        DetailKey::CopyShortcut if !editing => DetailAction::CopyContent,
        _ => DetailAction::Ignore,
    }
}

/// The navigation state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    screen: Screen,
    /// Type remembered across trips back to the landing screen
    active_type: PromptType,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            active_type: PromptType::Webapp,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn active_type(&self) -> PromptType {
        self.active_type
    }

    /// Filters in effect on the library screen or behind the detail screen
    pub fn filters(&self) -> Option<&FilterOptions> {
        match &self.screen {
            Screen::Landing => None,
            Screen::Library(filters) | Screen::Detail { filters, .. } => Some(filters),
        }
    }

    fn filters_mut(&mut self) -> Option<&mut FilterOptions> {
        match &mut self.screen {
            Screen::Landing => None,
            Screen::Library(filters) => Some(filters),
            Screen::Detail { filters, .. } => Some(filters),
        }
    }

    pub fn selected_record_id(&self) -> Option<&str> {
        self.session().map(|s| s.record_id.as_str())
    }

    pub fn session(&self) -> Option<&DetailSession> {
        match &self.screen {
            Screen::Detail { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DetailSession> {
        match &mut self.screen {
            Screen::Detail { session, .. } => Some(session),
            _ => None,
        }
    }

    // ========== Transitions ==========

    /// Landing -> library for `prompt_type`, with fresh filters
    pub fn select_type(&mut self, prompt_type: PromptType) {
        self.active_type = prompt_type;
        self.screen = Screen::Library(FilterOptions::for_type(prompt_type));
        tracing::debug!(%prompt_type, "entered library");
    }

    /// Switch the type tab inside the library, keeping sort and favorites-only
    pub fn switch_type(&mut self, prompt_type: PromptType) {
        self.active_type = prompt_type;
        if let Screen::Library(filters) = &mut self.screen {
            filters.prompt_type = prompt_type;
            filters.category = PromptCategory::All;
            filters.search_query.clear();
        }
    }

    /// Open `record` from the library or a related link on the detail screen
    pub fn open_record<S: KeyValueStore>(
        &mut self,
        record: &PromptRecord,
        preferences: &mut PreferenceStore<S>,
    ) {
        let filters = match std::mem::replace(&mut self.screen, Screen::Landing) {
            Screen::Library(filters) | Screen::Detail { filters, .. } => filters,
            Screen::Landing => FilterOptions::for_type(self.active_type),
        };

        self.screen = Screen::Detail {
            filters,
            session: DetailSession::new(record),
        };
        preferences.record_view(record);
        tracing::debug!(id = %record.id, "opened record");
    }

    /// Detail -> library
    pub fn back(&mut self) {
        if let Screen::Detail { filters, .. } = &self.screen {
            self.screen = Screen::Library(filters.clone());
        }
    }

    /// Library -> landing, dropping filters
    pub fn home(&mut self) {
        if matches!(self.screen, Screen::Library(_)) {
            self.screen = Screen::Landing;
        }
    }

    /// Detail -> library searching for `tag`
    pub fn search_tag(&mut self, tag: &str) {
        if let Screen::Detail { filters, .. } = &self.screen {
            let mut filters = filters.clone();
            filters.search_query = tag.to_string();
            self.screen = Screen::Library(filters);
        }
    }

    // ========== Library filter edits ==========

    pub fn set_search(&mut self, query: &str) {
        if let Some(filters) = self.library_filters_mut() {
            filters.search_query = query.to_string();
        }
    }

    pub fn set_category(&mut self, category: PromptCategory) {
        if let Some(filters) = self.library_filters_mut() {
            filters.category = category;
        }
    }

    pub fn cycle_category(&mut self) {
        if let Some(filters) = self.library_filters_mut() {
            filters.category = filters.category.next();
        }
    }

    pub fn toggle_sort(&mut self) {
        if let Some(filters) = self.library_filters_mut() {
            filters.sort = filters.sort.toggle();
        }
    }

    pub fn toggle_favorites_only(&mut self) {
        if let Some(filters) = self.library_filters_mut() {
            filters.favorites_only = !filters.favorites_only;
        }
    }

    /// Reset search, category and favorites-only
    pub fn clear_filters(&mut self) {
        if let Some(filters) = self.library_filters_mut() {
            filters.search_query.clear();
            filters.category = PromptCategory::All;
            filters.favorites_only = false;
        }
    }

    fn library_filters_mut(&mut self) -> Option<&mut FilterOptions> {
        if matches!(self.screen, Screen::Library(_)) {
            self.filters_mut()
        } else {
            None
        }
    }
}
