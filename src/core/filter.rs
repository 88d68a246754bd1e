//! Filtering and sorting of the catalog for the library screen

use crate::core::data::{PromptCategory, PromptRecord, PromptType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Library ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Collection order. The dataset has no timestamp, so this never reorders.
    #[default]
    Newest,
    Alphabetical,
}

impl SortOption {
    pub fn toggle(&self) -> SortOption {
        match self {
            SortOption::Newest => SortOption::Alphabetical,
            SortOption::Alphabetical => SortOption::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::Alphabetical => "A-Z",
        }
    }
}

/// Inputs of the library filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub prompt_type: PromptType,
    pub search_query: String,
    pub category: PromptCategory,
    pub favorites_only: bool,
    pub sort: SortOption,
}

impl FilterOptions {
    pub fn for_type(prompt_type: PromptType) -> Self {
        Self {
            prompt_type,
            search_query: String::new(),
            category: PromptCategory::All,
            favorites_only: false,
            sort: SortOption::Newest,
        }
    }

    /// True when `record` passes every predicate
    pub fn matches(&self, record: &PromptRecord, favorites: &HashSet<String>) -> bool {
        if record.prompt_type != self.prompt_type {
            return false;
        }

        if self.favorites_only && !favorites.contains(&record.id) {
            return false;
        }

        let matches_search = self.search_query.is_empty() || {
            let query = self.search_query.to_lowercase();
            record.title.to_lowercase().contains(&query)
                || record.content.to_lowercase().contains(&query)
                || record.tags.iter().any(|t| t.to_lowercase().contains(&query))
        };

        let matches_category =
            self.category == PromptCategory::All || record.category == self.category;

        matches_search && matches_category
    }
}

/// Base letters only: decomposed, accents stripped, case-folded
fn primary_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compare titles the way a reader expects
///
/// Base letters decide first, so "Émile" sorts among the e's. Accents break
/// ties next, then case with lower case first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Select and order the records visible in the library
pub fn filter_prompts<'a>(
    records: &'a [PromptRecord],
    options: &FilterOptions,
    favorites: &HashSet<String>,
) -> Vec<&'a PromptRecord> {
    let mut result: Vec<&PromptRecord> = records
        .iter()
        .filter(|r| options.matches(r, favorites))
        .collect();

    match options.sort {
        SortOption::Alphabetical => result.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOption::Newest => {}
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::fixtures::record;

    fn ids(records: &[&PromptRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    fn sample() -> Vec<PromptRecord> {
        let mut a = record("A", "Zeta", PromptType::Webapp, PromptCategory::Coding);
        a.tags = vec!["Frontend".to_string()];
        let b = record("B", "Alpha", PromptType::Webapp, PromptCategory::Writing);
        let mut c = record("C", "middle", PromptType::Webapp, PromptCategory::Coding);
        c.content = "Explain closures in RUST".to_string();
        let d = record("D", "Alpha image", PromptType::Image, PromptCategory::Abstract);
        vec![a, b, c, d]
    }

    #[test]
    fn test_alphabetical_example() {
        let records = sample();
        let mut options = FilterOptions::for_type(PromptType::Webapp);
        options.sort = SortOption::Alphabetical;
        let favorites = HashSet::new();

        assert_eq!(ids(&filter_prompts(&records, &options, &favorites)), vec!["B", "C", "A"]);

        options.category = PromptCategory::Coding;
        assert_eq!(ids(&filter_prompts(&records, &options, &favorites)), vec!["C", "A"]);

        options.search_query = "zzz".to_string();
        assert!(filter_prompts(&records, &options, &favorites).is_empty());
    }

    #[test]
    fn test_newest_preserves_collection_order() {
        let records = sample();
        let options = FilterOptions::for_type(PromptType::Webapp);
        let favorites = HashSet::new();

        let once = filter_prompts(&records, &options, &favorites);
        assert_eq!(ids(&once), vec!["A", "B", "C"]);

        let owned: Vec<PromptRecord> = once.into_iter().cloned().collect();
        let twice = filter_prompts(&owned, &options, &favorites);
        assert_eq!(ids(&twice), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let records = sample();
        let favorites = HashSet::new();
        let mut options = FilterOptions::for_type(PromptType::Webapp);

        options.search_query = "rust".to_string();
        assert_eq!(ids(&filter_prompts(&records, &options, &favorites)), vec!["C"]);

        options.search_query = "FRONT".to_string();
        assert_eq!(ids(&filter_prompts(&records, &options, &favorites)), vec!["A"]);

        options.search_query = "alp".to_string();
        let result = filter_prompts(&records, &options, &favorites);
        assert_eq!(ids(&result), vec!["B"]);
        for r in result {
            let q = options.search_query.to_lowercase();
            assert!(
                r.title.to_lowercase().contains(&q)
                    || r.content.to_lowercase().contains(&q)
                    || r.tags.iter().any(|t| t.to_lowercase().contains(&q))
            );
        }
    }

    #[test]
    fn test_type_filter_is_exact() {
        let records = sample();
        let options = FilterOptions::for_type(PromptType::Image);
        let result = filter_prompts(&records, &options, &HashSet::new());
        assert_eq!(ids(&result), vec!["D"]);
    }

    #[test]
    fn test_favorites_only_is_subset() {
        let records = sample();
        let favorites: HashSet<String> = ["C".to_string(), "D".to_string()].into();
        let mut options = FilterOptions::for_type(PromptType::Webapp);
        options.favorites_only = true;

        let result = filter_prompts(&records, &options, &favorites);
        assert_eq!(ids(&result), vec!["C"]);
        assert!(result.iter().all(|r| favorites.contains(&r.id)));
    }

    #[test]
    fn test_compare_titles_case_folded() {
        let mut titles = vec!["beta", "Beta", "alpha", "Gamma"];
        titles.sort_by(|a, b| compare_titles(a, b));
        assert_eq!(titles, vec!["alpha", "beta", "Beta", "Gamma"]);
    }

    #[test]
    fn test_compare_titles_accents_sort_with_base_letter() {
        let mut titles = vec!["Zeta", "Émile", "Echo", "Frank"];
        titles.sort_by(|a, b| compare_titles(a, b));
        assert_eq!(titles, vec!["Echo", "Émile", "Frank", "Zeta"]);

        let mut titles = vec!["écho", "Echo", "echo"];
        titles.sort_by(|a, b| compare_titles(a, b));
        assert_eq!(titles, vec!["echo", "Echo", "écho"]);
    }

    #[test]
    fn test_alphabetical_sort_handles_accented_records() {
        let records = vec![
            record("z", "Zeta", PromptType::Image, PromptCategory::Abstract),
            record("e", "Émile", PromptType::Image, PromptCategory::Abstract),
            record("f", "Frank", PromptType::Image, PromptCategory::Abstract),
        ];
        let mut options = FilterOptions::for_type(PromptType::Image);
        options.sort = SortOption::Alphabetical;

        let sorted = filter_prompts(&records, &options, &HashSet::new());
        assert_eq!(ids(&sorted), vec!["e", "f", "z"]);
    }

    #[test]
    fn test_sort_toggle() {
        assert_eq!(SortOption::Newest.toggle(), SortOption::Alphabetical);
        assert_eq!(SortOption::Alphabetical.toggle().label(), "Newest");
    }
}
