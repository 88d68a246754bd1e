//! Durable user preferences: favorites, recents, ratings and theme
//!
//! Every domain lives under its own key and is written through to the backing
//! [`KeyValueStore`] as soon as it changes. Reads never fail: a missing or
//! malformed value falls back to the domain default.

use crate::core::data::{PromptCatalog, PromptRecord};
use crate::core::traits::KeyValueStore;
use crate::utils::output;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

pub const THEME_KEY: &str = "theme";
pub const FAVORITES_KEY: &str = "prompt_favorites";
pub const RECENTS_KEY: &str = "prompt_recents";
pub const RATING_KEY_PREFIX: &str = "rating_";

/// Maximum number of recently viewed records kept
pub const RECENTS_LIMIT: usize = 5;

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Theme reported by the terminal, or dark when it says nothing
    pub fn detect_system() -> Theme {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    /// Interpret the `COLORFGBG` convention (`fg;bg`, background 7 or 15 is light)
    pub fn from_colorfgbg(value: Option<&str>) -> Theme {
        value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok())
            .map(|bg| if bg == 7 || bg == 15 { Theme::Light } else { Theme::Dark })
            .unwrap_or(Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A star rating between 1 and 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Rating> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Rating(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    fn parse(value: &str) -> Option<Rating> {
        value.trim().parse::<u8>().ok().and_then(Rating::new)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-memory preference state with write-through persistence
pub struct PreferenceStore<S: KeyValueStore> {
    store: S,
    favorites: HashSet<String>,
    recents: Vec<String>,
    ratings: HashMap<String, Rating>,
    theme: Theme,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Load every domain, using the terminal's theme when none is saved
    pub fn load(store: S) -> Self {
        Self::load_with_theme(store, Theme::detect_system())
    }

    /// Load every domain, using `default_theme` when none is saved
    pub fn load_with_theme(store: S, default_theme: Theme) -> Self {
        let favorites: HashSet<String> = read_id_list(&store, FAVORITES_KEY).into_iter().collect();

        let mut recents = Vec::new();
        for id in read_id_list(&store, RECENTS_KEY) {
            if !recents.contains(&id) {
                recents.push(id);
            }
        }
        recents.truncate(RECENTS_LIMIT);

        let ratings = store
            .keys()
            .into_iter()
            .filter_map(|key| {
                let id = key.strip_prefix(RATING_KEY_PREFIX)?.to_string();
                let rating = store.get(&key).as_deref().and_then(Rating::parse)?;
                Some((id, rating))
            })
            .collect();

        let theme = store
            .get(THEME_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or(default_theme);
        output::apply_theme(theme);

        Self {
            store,
            favorites,
            recents,
            ratings,
            theme,
        }
    }

    // ========== Favorites ==========

    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Flip membership of `id` and return whether it is now a favorite
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let added = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };

        let mut ids: Vec<&String> = self.favorites.iter().collect();
        ids.sort();
        if let Some(encoded) = encode_json(FAVORITES_KEY, &ids) {
            self.persist_raw(FAVORITES_KEY, &encoded);
        }

        tracing::debug!(id, added, "toggled favorite");
        added
    }

    pub fn favorite_records<'a>(&self, catalog: &'a PromptCatalog) -> Vec<&'a PromptRecord> {
        catalog
            .records()
            .iter()
            .filter(|r| self.favorites.contains(&r.id))
            .collect()
    }

    // ========== Recents ==========

    /// Recently viewed ids, most recent first
    pub fn recents(&self) -> &[String] {
        &self.recents
    }

    /// Move `record` to the front of the recents list
    pub fn record_view(&mut self, record: &PromptRecord) {
        self.recents.retain(|id| id != &record.id);
        self.recents.insert(0, record.id.clone());
        self.recents.truncate(RECENTS_LIMIT);

        if let Some(encoded) = encode_json(RECENTS_KEY, &self.recents) {
            self.persist_raw(RECENTS_KEY, &encoded);
        }
    }

    pub fn recent_records<'a>(&self, catalog: &'a PromptCatalog) -> Vec<&'a PromptRecord> {
        catalog.resolve_ids(&self.recents)
    }

    // ========== Ratings ==========

    pub fn rating(&self, id: &str) -> Option<Rating> {
        self.ratings.get(id).copied()
    }

    pub fn set_rating(&mut self, id: &str, rating: Rating) {
        self.ratings.insert(id.to_string(), rating);
        let key = format!("{}{}", RATING_KEY_PREFIX, id);
        self.persist_raw(&key, &rating.to_string());
    }

    // ========== Theme ==========

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        output::apply_theme(theme);
        self.persist_raw(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        self.set_theme(theme);
        theme
    }

    /// Give back the backing store
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist_raw(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "failed to persist preference");
        }
    }
}

fn encode_json<T: Serialize + ?Sized>(key: &str, value: &T) -> Option<String> {
    serde_json::to_string(value)
        .map_err(|e| tracing::warn!(key, error = %e, "failed to encode preference"))
        .ok()
}

fn read_id_list<S: KeyValueStore>(store: &S, key: &str) -> Vec<String> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "ignoring malformed preference value");
        Vec::new()
    })
}
