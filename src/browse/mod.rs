//! Interactive full-screen museum session
//!
//! `Browser` owns the navigation state and turns key presses into router
//! transitions and preference mutations. Drawing and the event loop live in
//! `terminal`; the screen bodies are pure functions in `render`.

mod input;
pub mod render;
mod terminal;

pub use terminal::run;

use crate::core::data::PromptType;
use crate::core::operations::Museum;
use crate::core::preferences::Rating;
use crate::core::router::{detail_action, DetailAction, Screen, ViewState};
use crate::core::storage::FileStore;
use crate::core::traits::KeyValueStore;
use crate::manager::preferences::{favorite_message, rating_message};
use crate::utils::error::AppResult;
use crate::utils::output::current_theme;
use crate::utils::toast::Toast;
use crate::utils::OutputStyle;
use crossterm::event::{KeyCode, KeyEvent};
use render::{Body, DetailView, LibraryView};
use tokio::time::Instant;

/// Clipboard sink, swappable so sessions can run without a system clipboard
pub type Clipboard = Box<dyn FnMut(&str) -> AppResult<()> + Send>;

/// A selectable entry below the detail content
#[derive(Debug, Clone, PartialEq, Eq)]
enum Link {
    Related(String),
    Tag(String),
}

pub struct Browser<S: KeyValueStore = FileStore> {
    museum: Museum<S>,
    view: ViewState,
    toast: Toast,
    /// Highlighted type on the landing screen, highlighted row in the library
    cursor: usize,
    /// Highlighted related record or tag on the detail screen
    link_cursor: Option<usize>,
    /// First body line on screen
    scroll: usize,
    /// Cleared by manual scrolling so the window can leave the highlighted line
    follow_focus: bool,
    /// Body rows of the last drawn window
    page_rows: usize,
    searching: bool,
    clipboard: Clipboard,
    quit: bool,
}

impl<S: KeyValueStore> Browser<S> {
    pub fn new(museum: Museum<S>, clipboard: Clipboard) -> Self {
        Self {
            museum,
            view: ViewState::new(),
            toast: Toast::new(),
            cursor: 0,
            link_cursor: None,
            scroll: 0,
            follow_focus: true,
            page_rows: 1,
            searching: false,
            clipboard,
            quit: false,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn museum(&self) -> &Museum<S> {
        &self.museum
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn expire_toast(&mut self, generation: u64) {
        self.toast.expire(generation);
    }

    fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.toast.show(message, now);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if input::is_quit(&key) {
            self.quit = true;
            return;
        }
        if input::is_dismiss(&key) && self.toast.is_visible() {
            self.toast.dismiss();
            return;
        }
        self.follow_focus = true;

        match self.view.screen() {
            Screen::Landing => self.landing_key(key, now),
            Screen::Library(_) => self.library_key(key, now),
            Screen::Detail { .. } => self.detail_key(key, now),
        }
    }

    // ========== Landing ==========

    fn landing_key(&mut self, key: KeyEvent, now: Instant) {
        let count = PromptType::ALL.len();
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab => {
                self.cursor = (self.cursor + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                self.cursor = (self.cursor + 1) % count;
            }
            KeyCode::Enter => self.enter_library(PromptType::ALL[self.cursor % count]),
            KeyCode::Char(c) => match input::digit(c) {
                Some(n @ 1..=4) => self.enter_library(PromptType::ALL[usize::from(n - 1)]),
                _ => match c {
                    't' => self.toggle_theme(now),
                    'q' => self.quit = true,
                    _ => {}
                },
            },
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn enter_library(&mut self, prompt_type: PromptType) {
        self.view.select_type(prompt_type);
        self.cursor = 0;
        self.scroll = 0;
        self.searching = false;
    }

    // ========== Library ==========

    fn library_ids(&self) -> Vec<String> {
        self.view
            .filters()
            .map(|filters| {
                self.museum
                    .library(filters)
                    .iter()
                    .map(|r| r.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn library_key(&mut self, key: KeyEvent, now: Instant) {
        if self.searching {
            self.search_key(key);
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.library_ids().len();
                self.cursor = (self.cursor + 1).min(len.saturating_sub(1));
            }
            KeyCode::PageUp => self.cursor = self.cursor.saturating_sub(self.page_rows),
            KeyCode::PageDown => {
                let len = self.library_ids().len();
                self.cursor = (self.cursor + self.page_rows).min(len.saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(id) = self.library_ids().get(self.cursor).cloned() {
                    self.open_record(&id);
                }
            }
            KeyCode::Tab => self.switch_type(1),
            KeyCode::BackTab => self.switch_type(PromptType::ALL.len() - 1),
            KeyCode::Esc | KeyCode::Char('h') => self.go_home(),
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('c') => self.edit_filters(ViewState::cycle_category),
            KeyCode::Char('s') => self.edit_filters(ViewState::toggle_sort),
            KeyCode::Char('f') => self.edit_filters(ViewState::toggle_favorites_only),
            KeyCode::Char('x') => self.edit_filters(ViewState::clear_filters),
            KeyCode::Char(' ') => {
                if let Some(id) = self.library_ids().get(self.cursor).cloned() {
                    self.toggle_favorite(&id, now);
                }
            }
            KeyCode::Char('t') => self.toggle_theme(now),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c) => {
                if let Some(n @ 1..=5) = input::digit(c) {
                    self.open_recent(usize::from(n - 1));
                }
            }
            _ => {}
        }
    }

    fn search_key(&mut self, key: KeyEvent) {
        let Some(mut query) = self.view.filters().map(|f| f.search_query.clone()) else {
            return;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.searching = false;
                return;
            }
            KeyCode::Backspace => {
                query.pop();
            }
            KeyCode::Char(c) if !input::has_control(&key) => query.push(c),
            _ => return,
        }

        self.view.set_search(&query);
        self.cursor = 0;
        self.scroll = 0;
    }

    fn edit_filters(&mut self, edit: fn(&mut ViewState)) {
        edit(&mut self.view);
        self.cursor = 0;
        self.scroll = 0;
    }

    fn switch_type(&mut self, step: usize) {
        let count = PromptType::ALL.len();
        let current = PromptType::ALL
            .iter()
            .position(|t| *t == self.view.active_type())
            .unwrap_or(0);
        self.view.switch_type(PromptType::ALL[(current + step) % count]);
        self.cursor = 0;
        self.scroll = 0;
    }

    fn go_home(&mut self) {
        self.view.home();
        self.scroll = 0;
        self.cursor = PromptType::ALL
            .iter()
            .position(|t| *t == self.view.active_type())
            .unwrap_or(0);
    }

    fn open_recent(&mut self, index: usize) {
        let visible = self.view.filters().is_some_and(render::recents_visible);
        if !visible {
            return;
        }
        let id = self.museum.recent_records().get(index).map(|r| r.id.clone());
        if let Some(id) = id {
            self.open_record(&id);
        }
    }

    /// Open a record; any edits of the previous detail session are dropped
    fn open_record(&mut self, id: &str) {
        let (catalog, preferences) = self.museum.parts_mut();
        if let Some(record) = catalog.find_by_id(id) {
            self.view.open_record(record, preferences);
            self.link_cursor = None;
            self.scroll = 0;
            self.searching = false;
        }
    }

    // ========== Detail ==========

    fn detail_key(&mut self, key: KeyEvent, now: Instant) {
        let editing = self.view.session().is_some_and(|s| s.editing);

        if let Some(detail_key) = input::detail_key(&key) {
            match detail_action(detail_key, editing) {
                DetailAction::Back => {
                    self.view.back();
                    self.link_cursor = None;
                    self.scroll = 0;
                    return;
                }
                DetailAction::FinishEditing => {
                    if let Some(session) = self.view.session_mut() {
                        session.toggle_editing();
                    }
                    return;
                }
                DetailAction::ToggleFocus => {
                    if let Some(session) = self.view.session_mut() {
                        session.toggle_focus();
                    }
                    return;
                }
                DetailAction::CopyContent => {
                    self.copy_content(now);
                    return;
                }
                DetailAction::Ignore => {}
            }
        }

        if editing {
            self.edit_key(key);
            return;
        }
        if input::has_control(&key) {
            return;
        }

        let Some(id) = self.view.selected_record_id().map(str::to_string) else {
            return;
        };

        match key.code {
            KeyCode::Char('e') => {
                if let Some(session) = self.view.session_mut() {
                    session.toggle_editing();
                }
            }
            KeyCode::Char(' ') => self.toggle_favorite(&id, now),
            KeyCode::Char('c') => self.copy_content(now),
            KeyCode::Char('x') => self.export(&id, now),
            KeyCode::Char('s') => self.share(&id, now),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(session) = self.view.session_mut() {
                    session.increase_font();
                }
            }
            KeyCode::Char('-') => {
                if let Some(session) = self.view.session_mut() {
                    session.decrease_font();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.move_link(true),
            KeyCode::BackTab | KeyCode::Up => self.move_link(false),
            KeyCode::Enter => self.activate_link(),
            KeyCode::Char('j') => self.scroll_by(1, true),
            KeyCode::Char('k') => self.scroll_by(1, false),
            KeyCode::PageDown => self.scroll_by(self.page_rows, true),
            KeyCode::PageUp => self.scroll_by(self.page_rows, false),
            KeyCode::Char('t') => self.toggle_theme(now),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c) => {
                if let Some(rating) = input::digit(c).and_then(Rating::new) {
                    self.rate(&id, rating, now);
                }
            }
            _ => {}
        }
    }

    fn edit_key(&mut self, key: KeyEvent) {
        let Some(session) = self.view.session_mut() else {
            return;
        };

        let mut content = std::mem::take(&mut session.content);
        match key.code {
            KeyCode::Char(c) if !input::has_control(&key) => content.push(c),
            KeyCode::Enter => content.push('\n'),
            KeyCode::Tab => content.push('\t'),
            KeyCode::Backspace => {
                content.pop();
            }
            _ => {}
        }
        session.set_content(content);
    }

    fn detail_links(&self) -> Vec<Link> {
        let Some(record) = self
            .view
            .selected_record_id()
            .and_then(|id| self.museum.catalog().find_by_id(id))
        else {
            return Vec::new();
        };

        self.museum
            .related(record)
            .iter()
            .map(|r| Link::Related(r.id.clone()))
            .chain(record.tags.iter().cloned().map(Link::Tag))
            .collect()
    }

    fn move_link(&mut self, forward: bool) {
        let count = self.detail_links().len();
        if count == 0 {
            self.link_cursor = None;
            return;
        }
        self.link_cursor = Some(match (self.link_cursor, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
    }

    fn activate_link(&mut self) {
        let Some(link) = self
            .link_cursor
            .and_then(|i| self.detail_links().get(i).cloned())
        else {
            return;
        };

        match link {
            Link::Related(id) => self.open_record(&id),
            Link::Tag(tag) => {
                self.view.search_tag(&tag);
                self.link_cursor = None;
                self.cursor = 0;
                self.scroll = 0;
            }
        }
    }

    /// Manual scroll; the bottom bound is applied when the window is drawn
    fn scroll_by(&mut self, lines: usize, down: bool) {
        self.follow_focus = false;
        self.scroll = if down {
            self.scroll.saturating_add(lines)
        } else {
            self.scroll.saturating_sub(lines)
        };
    }

    // ========== Actions with feedback ==========

    fn toggle_favorite(&mut self, id: &str, now: Instant) {
        match self.museum.toggle_favorite(id) {
            Ok(added) => self.notify(favorite_message(added), now),
            Err(e) => self.notify(e.to_string(), now),
        }
    }

    fn rate(&mut self, id: &str, rating: Rating, now: Instant) {
        match self.museum.rate(id, rating) {
            Ok(()) => self.notify(rating_message(rating), now),
            Err(e) => self.notify(e.to_string(), now),
        }
    }

    fn copy_content(&mut self, now: Instant) {
        let Some(content) = self.view.session().map(|s| s.content.clone()) else {
            return;
        };
        match (self.clipboard)(&content) {
            Ok(()) => self.notify("Prompt copied to clipboard", now),
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.notify(e.to_string(), now);
            }
        }
    }

    fn share(&mut self, id: &str, now: Instant) {
        let result = self
            .museum
            .share_url(id)
            .and_then(|url| (self.clipboard)(&url));
        match result {
            Ok(()) => self.notify("Link copied to clipboard", now),
            Err(e) => {
                tracing::warn!(error = %e, "share failed");
                self.notify(e.to_string(), now);
            }
        }
    }

    fn export(&mut self, id: &str, now: Instant) {
        let content = self.view.session().map(|s| s.content.clone());
        match self.museum.export(id, content.as_deref(), None) {
            Ok(_) => self.notify("Exported to JSON", now),
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.notify(e.to_string(), now);
            }
        }
    }

    fn toggle_theme(&mut self, now: Instant) {
        let theme = self.museum.toggle_theme();
        self.notify(format!("Switched to {} theme", theme.as_str()), now);
    }

    // ========== Drawing ==========

    /// Body lines for the current screen
    pub fn render(&self, width: u16) -> Body {
        match self.view.screen() {
            Screen::Landing => render::landing_lines(
                self.cursor,
                &self.museum.catalog().count_by_type(),
                current_theme(),
            ),
            Screen::Library(filters) => {
                let records = self.museum.library(filters);
                let recents = self.museum.recent_records();
                render::library_lines(&LibraryView {
                    filters,
                    records: &records,
                    cursor: self.cursor,
                    favorites: self.museum.preferences().favorites(),
                    recents: &recents,
                    searching: self.searching,
                    config: self.museum.config(),
                })
            }
            Screen::Detail { session, .. } => {
                let Ok(record) = self.museum.find(&session.record_id) else {
                    return Body::default();
                };
                let related = self.museum.related(record);
                render::detail_lines(&DetailView {
                    record,
                    session,
                    favorite: self.museum.preferences().is_favorite(&record.id),
                    rating: self.museum.preferences().rating(&record.id),
                    related: &related,
                    link_cursor: self.link_cursor,
                    width,
                })
            }
        }
    }

    /// The `rows` body lines that fit on screen
    ///
    /// Scrolls just enough to keep the highlighted line visible, unless the
    /// last key scrolled by hand.
    pub fn window(&mut self, width: u16, rows: usize) -> Vec<String> {
        let body = self.render(width);
        let focus = body.focus.filter(|_| self.follow_focus);
        self.scroll = render::clamp_scroll(self.scroll, focus, body.lines.len(), rows);
        self.page_rows = rows.max(1);
        body.lines.into_iter().skip(self.scroll).take(rows).collect()
    }

    /// Bottom line: the toast when one is visible, key hints otherwise
    pub fn footer(&self) -> String {
        if let Some(message) = self.toast.message() {
            return OutputStyle::success(&format!("● {}", message)).to_string();
        }

        let hints = match self.view.screen() {
            Screen::Landing => "↑↓ choose · Enter/1-4 open · t theme · q quit · ^D hide notice",
            Screen::Library(_) if self.searching => "type to search · Enter/Esc done",
            Screen::Library(_) => {
                "↑↓ move · PgUp/PgDn page · Enter open · / search · Tab type · c category · s sort · f favorites · x clear · space ♥ · 1-5 recent · Esc home"
            }
            Screen::Detail { session, .. } if session.editing => "editing · Esc finish",
            Screen::Detail { .. } => {
                "Esc back · e edit · f focus · c/^C copy · space ♥ · 1-5 rate · x export · s share · +/- size · Tab/Enter links · j/k PgUp/PgDn scroll"
            }
        };
        OutputStyle::muted(hints).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::data::fixtures::record;
    use crate::core::data::{PromptCatalog, PromptCategory};
    use crate::core::operations::test_support::museum;
    use crate::core::preferences::{PreferenceStore, Theme};
    use crate::core::storage::MemoryStore;
    use crossterm::event::KeyModifiers;
    use std::sync::{Arc, Mutex};

    fn press(browser: &mut Browser<MemoryStore>, code: KeyCode) {
        browser.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    fn type_text(browser: &mut Browser<MemoryStore>, text: &str) {
        for c in text.chars() {
            press(browser, KeyCode::Char(c));
        }
    }

    fn ctrl(browser: &mut Browser<MemoryStore>, c: char) {
        browser.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), Instant::now());
    }

    fn browser_with(museum: Museum<MemoryStore>) -> (Browser<MemoryStore>, Arc<Mutex<Vec<String>>>) {
        let copied = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&copied);
        let clipboard: Clipboard = Box::new(move |text: &str| {
            sink.lock().unwrap().push(text.to_string());
            Ok(())
        });
        (Browser::new(museum, clipboard), copied)
    }

    fn browser() -> (Browser<MemoryStore>, Arc<Mutex<Vec<String>>>) {
        browser_with(museum())
    }

    fn current_id(browser: &Browser<MemoryStore>) -> Option<String> {
        browser.view().selected_record_id().map(str::to_string)
    }

    #[test]
    fn test_landing_to_detail_and_back() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Enter);
        assert!(matches!(browser.view().screen(), Screen::Library(_)));
        assert_eq!(browser.view().active_type(), PromptType::Webapp);

        press(&mut browser, KeyCode::Char('s'));
        press(&mut browser, KeyCode::Down);
        press(&mut browser, KeyCode::Enter);
        // Alphabetical: Alpha, Gamma, Zeta
        assert_eq!(current_id(&browser).as_deref(), Some("c"));
        assert_eq!(browser.museum().preferences().recents(), ["c".to_string()]);

        press(&mut browser, KeyCode::Esc);
        let Screen::Library(filters) = browser.view().screen() else {
            panic!("expected library");
        };
        assert_eq!(filters.sort.label(), "A-Z");

        press(&mut browser, KeyCode::Esc);
        assert_eq!(browser.view().screen(), &Screen::Landing);
    }

    #[test]
    fn test_digit_on_landing_selects_type() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Char('3'));
        assert_eq!(browser.view().active_type(), PromptType::Image);
    }

    #[test]
    fn test_edit_mode_suppresses_shortcuts() {
        let (mut browser, copied) = browser();
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Enter);
        assert_eq!(current_id(&browser).as_deref(), Some("a"));

        press(&mut browser, KeyCode::Char('e'));
        type_text(&mut browser, " fast");
        ctrl(&mut browser, 'c');

        let session = browser.view().session().unwrap();
        assert!(session.editing);
        assert!(!session.focus_mode);
        assert_eq!(session.content, "Content for Zeta fast");
        assert!(copied.lock().unwrap().is_empty());

        // Escape ends editing without leaving the screen
        press(&mut browser, KeyCode::Esc);
        assert!(!browser.view().session().unwrap().editing);
        assert_eq!(current_id(&browser).as_deref(), Some("a"));

        ctrl(&mut browser, 'c');
        assert_eq!(copied.lock().unwrap().as_slice(), ["Content for Zeta fast".to_string()]);
        assert_eq!(browser.toast().message(), Some("Prompt copied to clipboard"));

        press(&mut browser, KeyCode::Char('f'));
        assert!(browser.view().session().unwrap().focus_mode);
    }

    #[test]
    fn test_rate_and_favorite_from_detail() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Enter);

        press(&mut browser, KeyCode::Char('4'));
        assert_eq!(browser.toast().message(), Some("Rated 4 stars"));
        assert_eq!(
            browser.museum().preferences().rating("a"),
            Rating::new(4)
        );

        press(&mut browser, KeyCode::Char(' '));
        assert_eq!(browser.toast().message(), Some("Added to favorites"));

        press(&mut browser, KeyCode::Esc);
        press(&mut browser, KeyCode::Char('f'));
        let text = browser.render(80).lines.join("\n");
        assert!(text.contains("Zeta"));
        assert!(!text.contains("Alpha"));
    }

    #[test]
    fn test_search_mode() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Char('/'));
        assert!(browser.is_searching());

        // Shortcut letters are typed into the query while searching
        type_text(&mut browser, "gxm");
        press(&mut browser, KeyCode::Backspace);
        press(&mut browser, KeyCode::Backspace);
        type_text(&mut browser, "am");
        press(&mut browser, KeyCode::Enter);
        assert!(!browser.is_searching());

        assert_eq!(browser.view().filters().unwrap().search_query, "gam");
        press(&mut browser, KeyCode::Enter);
        assert_eq!(current_id(&browser).as_deref(), Some("c"));
    }

    #[test]
    fn test_clear_filters_and_type_tab() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Char('f'));
        press(&mut browser, KeyCode::Char('c'));
        press(&mut browser, KeyCode::Char('x'));
        let filters = browser.view().filters().unwrap();
        assert!(!filters.favorites_only);
        assert_eq!(filters.category, PromptCategory::All);

        press(&mut browser, KeyCode::Char('s'));
        press(&mut browser, KeyCode::Tab);
        let filters = browser.view().filters().unwrap();
        assert_eq!(filters.prompt_type, PromptType::System);
        assert_eq!(filters.sort.label(), "A-Z");
    }

    #[test]
    fn test_recents_strip_opens_record() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Esc);
        assert!(browser.render(80).lines.join("\n").contains("Jump back in"));

        press(&mut browser, KeyCode::Down);
        press(&mut browser, KeyCode::Char('1'));
        assert_eq!(current_id(&browser).as_deref(), Some("a"));
    }

    #[test]
    fn test_tag_and_related_links() {
        let mut tagged = record("t", "Tagged", PromptType::Image, PromptCategory::Abstract);
        tagged.tags = vec!["neon".to_string()];
        let catalog = PromptCatalog::new(vec![
            tagged,
            record("u", "Sibling", PromptType::Image, PromptCategory::Abstract),
        ])
        .unwrap();
        let preferences = PreferenceStore::load_with_theme(MemoryStore::new(), Theme::Dark);
        let (mut browser, _) =
            browser_with(Museum::with_parts(Config::default(), catalog, preferences));

        press(&mut browser, KeyCode::Char('3'));
        press(&mut browser, KeyCode::Enter);
        assert_eq!(current_id(&browser).as_deref(), Some("t"));

        // Links: related "u", then tag "neon"
        press(&mut browser, KeyCode::Tab);
        press(&mut browser, KeyCode::Enter);
        assert_eq!(current_id(&browser).as_deref(), Some("u"));

        press(&mut browser, KeyCode::Esc);
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::BackTab);
        press(&mut browser, KeyCode::Enter);
        let Screen::Library(filters) = browser.view().screen() else {
            panic!("expected library");
        };
        assert_eq!(filters.search_query, "neon");
    }

    #[test]
    fn test_opening_another_record_discards_edits() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Char('e'));
        type_text(&mut browser, "!");
        press(&mut browser, KeyCode::Esc);
        press(&mut browser, KeyCode::Esc);
        press(&mut browser, KeyCode::Enter);

        let session = browser.view().session().unwrap();
        assert_eq!(session.content, "Content for Zeta");
    }

    #[test]
    fn test_toast_expiry_ignores_stale_generation() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Char('2'));
        let (_, first) = browser.toast().pending().unwrap();
        press(&mut browser, KeyCode::Char('3'));

        browser.expire_toast(first);
        assert_eq!(browser.toast().message(), Some("Rated 3 stars"));

        let (_, second) = browser.toast().pending().unwrap();
        browser.expire_toast(second);
        assert!(browser.toast().message().is_none());
    }

    fn long_library() -> Museum<MemoryStore> {
        let records = (0..30)
            .map(|i| {
                record(
                    &format!("p{:02}", i),
                    &format!("Prompt {:02}", i),
                    PromptType::Webapp,
                    PromptCategory::Abstract,
                )
            })
            .collect();
        let catalog = PromptCatalog::new(records).unwrap();
        let preferences = PreferenceStore::load_with_theme(MemoryStore::new(), Theme::Dark);
        Museum::with_parts(Config::default(), catalog, preferences)
    }

    fn selected_line(window: &[String]) -> Option<&String> {
        window.iter().find(|line| line.contains('▶'))
    }

    #[test]
    fn test_library_cursor_stays_in_window() {
        colored::control::set_override(false);
        let (mut browser, _) = browser_with(long_library());
        press(&mut browser, KeyCode::Enter);
        for _ in 0..25 {
            press(&mut browser, KeyCode::Down);
        }

        let window = browser.window(80, 10);
        assert_eq!(window.len(), 10);
        assert!(selected_line(&window).is_some_and(|l| l.contains("Prompt 25")));
        assert!(!window.iter().any(|l| l.contains("Prompt 00")));

        // Paging back up drags the window along with the cursor
        press(&mut browser, KeyCode::PageUp);
        press(&mut browser, KeyCode::PageUp);
        let window = browser.window(80, 10);
        assert!(selected_line(&window).is_some_and(|l| l.contains("Prompt 05")));

        press(&mut browser, KeyCode::Esc);
        assert_eq!(browser.scroll, 0);
        let window = browser.window(80, 10);
        assert!(window[0].contains("Prompt Museum"));
    }

    #[test]
    fn test_detail_link_and_manual_scroll() {
        colored::control::set_override(false);
        let mut long = record("t", "Tagged", PromptType::Image, PromptCategory::Abstract);
        long.tags = vec!["neon".to_string()];
        long.content = (0..40).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let catalog = PromptCatalog::new(vec![long]).unwrap();
        let preferences = PreferenceStore::load_with_theme(MemoryStore::new(), Theme::Dark);
        let (mut browser, _) =
            browser_with(Museum::with_parts(Config::default(), catalog, preferences));

        press(&mut browser, KeyCode::Char('3'));
        press(&mut browser, KeyCode::Enter);
        let window = browser.window(80, 8);
        assert!(window[0].contains("Tagged"));
        assert!(!window.iter().any(|l| l.contains("#neon")));

        // The only link is the tag at the very bottom
        press(&mut browser, KeyCode::BackTab);
        let window = browser.window(80, 8);
        assert!(selected_line(&window).is_some_and(|l| l.contains("#neon")));
        let bottom = browser.scroll;
        assert!(bottom > 0);

        press(&mut browser, KeyCode::Char('k'));
        let window = browser.window(80, 8);
        assert_eq!(browser.scroll, bottom - 1);
        assert!(!window.iter().any(|l| l.contains("#neon")));

        press(&mut browser, KeyCode::PageUp);
        browser.window(80, 8);
        assert_eq!(browser.scroll, bottom - 9);

        // Scrolling past the end stops at the last full window
        press(&mut browser, KeyCode::PageDown);
        press(&mut browser, KeyCode::PageDown);
        press(&mut browser, KeyCode::Char('j'));
        browser.window(80, 8);
        assert_eq!(browser.scroll, bottom);

        press(&mut browser, KeyCode::Esc);
        assert_eq!(browser.scroll, 0);
    }

    #[test]
    fn test_ctrl_d_dismisses_toast() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Char('5'));
        assert!(browser.toast().is_visible());

        ctrl(&mut browser, 'd');
        assert!(!browser.toast().is_visible());
        assert!(browser.toast().pending().is_none());
        assert!(browser.footer().contains("Esc back"));

        // Without a toast the key falls through and does nothing on the detail screen
        ctrl(&mut browser, 'd');
        assert_eq!(current_id(&browser).as_deref(), Some("a"));
    }

    #[test]
    fn test_quit_keys() {
        let (mut browser, _) = browser();
        press(&mut browser, KeyCode::Enter);
        press(&mut browser, KeyCode::Char('/'));
        ctrl(&mut browser, 'q');
        assert!(browser.should_quit());
    }
}
