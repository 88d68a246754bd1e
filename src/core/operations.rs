//! Core operations hub
//!
//! `Museum` owns the catalog and the preference store and funnels every
//! mutation through named operations.

use crate::config::Config;
use crate::core::{
    data::{PromptCatalog, PromptRecord},
    filter::{filter_prompts, FilterOptions},
    preferences::{PreferenceStore, Rating, Theme},
    storage::FileStore,
    traits::KeyValueStore,
};
use crate::utils::error::{AppError, AppResult};
use crate::utils::export;
use std::path::{Path, PathBuf};

pub struct Museum<S: KeyValueStore = FileStore> {
    config: Config,
    catalog: PromptCatalog,
    preferences: PreferenceStore<S>,
}

impl Museum<FileStore> {
    /// Load the configured catalog and the on-disk preferences
    pub fn open(config: Config) -> AppResult<Self> {
        let catalog = match &config.general.catalog_file {
            Some(path) => PromptCatalog::load(path)?,
            None => PromptCatalog::builtin()?,
        };
        let store = FileStore::in_dir(&config.general.data_dir);
        tracing::debug!(records = catalog.len(), store = %store.path().display(), "opening museum");

        Ok(Self::with_parts(config, catalog, PreferenceStore::load(store)))
    }
}

impl<S: KeyValueStore> Museum<S> {
    pub fn with_parts(config: Config, catalog: PromptCatalog, preferences: PreferenceStore<S>) -> Self {
        Self {
            config,
            catalog,
            preferences,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    /// Catalog and mutable preferences at once, for navigation side effects
    pub fn parts_mut(&mut self) -> (&PromptCatalog, &mut PreferenceStore<S>) {
        (&self.catalog, &mut self.preferences)
    }

    pub fn find(&self, id: &str) -> AppResult<&PromptRecord> {
        self.catalog
            .find_by_id(id)
            .ok_or_else(|| AppError::Catalog(format!("Prompt '{}' not found", id)))
    }

    /// Records visible in the library for `options`
    pub fn library(&self, options: &FilterOptions) -> Vec<&PromptRecord> {
        filter_prompts(self.catalog.records(), options, self.preferences.favorites())
    }

    pub fn related(&self, record: &PromptRecord) -> Vec<&PromptRecord> {
        self.catalog.related(record)
    }

    pub fn recent_records(&self) -> Vec<&PromptRecord> {
        self.preferences.recent_records(&self.catalog)
    }

    pub fn favorite_records(&self) -> Vec<&PromptRecord> {
        self.preferences.favorite_records(&self.catalog)
    }

    // ========== Preference mutations ==========

    /// Open a record outside the interactive session, adding it to recents
    pub fn view(&mut self, id: &str) -> AppResult<PromptRecord> {
        let record = self.find(id)?.clone();
        self.preferences.record_view(&record);
        Ok(record)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> AppResult<bool> {
        self.find(id)?;
        Ok(self.preferences.toggle_favorite(id))
    }

    pub fn rate(&mut self, id: &str, rating: Rating) -> AppResult<()> {
        self.find(id)?;
        self.preferences.set_rating(id, rating);
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.set_theme(theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.preferences.toggle_theme()
    }

    // ========== Export and sharing ==========

    pub fn share_url(&self, id: &str) -> AppResult<String> {
        let record = self.find(id)?;
        Ok(export::share_url(&self.config.general.share_origin, &record.id))
    }

    /// Export `id` with `content` (defaults to the stored content) into `dir`
    pub fn export(&self, id: &str, content: Option<&str>, dir: Option<&Path>) -> AppResult<PathBuf> {
        let record = self.find(id)?;
        let dir = dir.unwrap_or(self.config.general.export_dir.as_path());
        export::export_to_dir(record, content.unwrap_or(record.content.as_str()), dir)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::data::fixtures::record;
    use crate::core::data::{PromptCategory, PromptType};
    use crate::core::storage::MemoryStore;

    pub fn museum() -> Museum<MemoryStore> {
        let catalog = PromptCatalog::new(vec![
            record("a", "Zeta", PromptType::Webapp, PromptCategory::Coding),
            record("b", "Alpha", PromptType::Webapp, PromptCategory::Writing),
            record("c", "Gamma", PromptType::Webapp, PromptCategory::Coding),
            record("i", "Image One", PromptType::Image, PromptCategory::Abstract),
        ])
        .unwrap();
        let preferences = PreferenceStore::load_with_theme(MemoryStore::new(), Theme::Dark);
        Museum::with_parts(Config::default(), catalog, preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::museum;
    use super::*;
    use crate::core::data::PromptType;
    use crate::core::filter::SortOption;

    #[test]
    fn test_library_uses_favorites() {
        let mut museum = museum();
        assert!(museum.toggle_favorite("c").unwrap());

        let mut options = FilterOptions::for_type(PromptType::Webapp);
        options.favorites_only = true;
        let ids: Vec<_> = museum.library(&options).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);

        options.favorites_only = false;
        options.sort = SortOption::Alphabetical;
        let ids: Vec<_> = museum.library(&options).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let mut museum = museum();
        assert!(museum.toggle_favorite("nope").is_err());
        assert!(museum.rate("nope", Rating::new(3).unwrap()).is_err());
        assert!(museum.view("nope").is_err());
        assert!(museum.share_url("nope").is_err());
        assert!(museum.preferences().favorites().is_empty());
    }

    #[test]
    fn test_view_updates_recents() {
        let mut museum = museum();
        museum.view("a").unwrap();
        museum.view("b").unwrap();
        let ids: Vec<_> = museum.recent_records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_share_url_uses_configured_origin() {
        let museum = museum();
        let url = museum.share_url("i").unwrap();
        assert!(url.ends_with("?id=i"));
        assert!(url.starts_with(&museum.config().general.share_origin));
    }

    #[test]
    fn test_export_with_edited_content() {
        let dir = tempfile::tempdir().unwrap();
        let museum = museum();
        let path = museum.export("i", Some("edited"), Some(dir.path())).unwrap();
        assert_eq!(path.file_name().unwrap(), "image-one.json");
        assert!(std::fs::read_to_string(path).unwrap().contains("\"edited\""));
    }
}
