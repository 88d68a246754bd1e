//! Core data structures for the prompt museum
//!
//! The catalog is an immutable collection of prompt records loaded once at
//! startup, either from the dataset compiled into the binary or from a JSON
//! file named in the configuration.

use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

/// Dataset shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/prompts.json");

/// Placeholder shown when a visual record has no usable image
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1620641788421-7f1c338e420a?auto=format&fit=crop&w=800&q=80";

/// Number of related records offered on the detail screen
const RELATED_LIMIT: usize = 3;

/// The four domains a prompt can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum PromptType {
    Webapp,
    System,
    Image,
    Video,
}

impl PromptType {
    pub const ALL: [PromptType; 4] = [
        PromptType::Webapp,
        PromptType::System,
        PromptType::Image,
        PromptType::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptType::Webapp => "Webapp",
            PromptType::System => "System",
            PromptType::Image => "Image",
            PromptType::Video => "Video",
        }
    }

    /// Short blurb shown on the landing screen and library header
    pub fn description(&self) -> &'static str {
        match self {
            PromptType::Webapp => {
                "Building modern web applications, React components, and frontend logic."
            }
            PromptType::System => {
                "Defining AI personas, behavioral instructions, and complex reasoning tasks."
            }
            PromptType::Image => {
                "Generative art prompts for Midjourney, DALL-E, and Stable Diffusion."
            }
            PromptType::Video => {
                "Cinematic descriptions for video generation models like Sora and Veo."
            }
        }
    }

    /// Image and video prompts carry artwork
    pub fn is_visual(&self) -> bool {
        matches!(self, PromptType::Image | PromptType::Video)
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of categories. `All` is only meaningful as a filter value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum PromptCategory {
    #[default]
    All,
    Coding,
    Writing,
    Marketing,
    Productivity,
    Creative,
    Realistic,
    Abstract,
    Cinematic,
}

impl PromptCategory {
    pub const ALL: [PromptCategory; 9] = [
        PromptCategory::All,
        PromptCategory::Coding,
        PromptCategory::Writing,
        PromptCategory::Marketing,
        PromptCategory::Productivity,
        PromptCategory::Creative,
        PromptCategory::Realistic,
        PromptCategory::Abstract,
        PromptCategory::Cinematic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptCategory::All => "All",
            PromptCategory::Coding => "Coding",
            PromptCategory::Writing => "Writing",
            PromptCategory::Marketing => "Marketing",
            PromptCategory::Productivity => "Productivity",
            PromptCategory::Creative => "Creative",
            PromptCategory::Realistic => "Realistic",
            PromptCategory::Abstract => "Abstract",
            PromptCategory::Cinematic => "Cinematic",
        }
    }

    /// Next category in declaration order, wrapping back to `All`
    pub fn next(&self) -> PromptCategory {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single prompt entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: PromptCategory,
    #[serde(rename = "type")]
    pub prompt_type: PromptType,
    pub author: String,
    #[serde(default)]
    pub image_url: String,
}

impl PromptRecord {
    pub fn is_visual(&self) -> bool {
        self.prompt_type.is_visual()
    }

    /// Image to display, substituting the placeholder when the record has none
    pub fn display_image_url(&self) -> Option<&str> {
        if !self.is_visual() {
            return None;
        }
        if self.image_url.trim().is_empty() {
            Some(FALLBACK_IMAGE_URL)
        } else {
            Some(&self.image_url)
        }
    }
}

impl fmt::Display for PromptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} / {}]", self.title, self.prompt_type, self.category)
    }
}

/// Word, character and rough token counts for a block of prompt text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    pub words: usize,
    pub characters: usize,
    pub tokens: usize,
}

impl ContentStats {
    pub fn of(content: &str) -> Self {
        let characters = content.chars().count();
        Self {
            words: content.split_whitespace().count(),
            characters,
            tokens: characters.div_ceil(4),
        }
    }
}

/// The immutable prompt collection
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    records: Vec<PromptRecord>,
}

impl PromptCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(records: Vec<PromptRecord>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "Duplicate prompt id '{}'",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    /// Catalog compiled into the binary
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog from a JSON array of records
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Io(format!("Failed to read catalog file {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        let records: Vec<PromptRecord> = serde_json::from_str(content)
            .map_err(|e| AppError::Catalog(format!("Failed to parse catalog: {}", e)))?;
        Self::new(records)
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&PromptRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Map ids back to records, silently dropping ids that no longer exist
    pub fn resolve_ids<'a, I>(&self, ids: I) -> Vec<&PromptRecord>
    where
        I: IntoIterator<Item = &'a String>,
    {
        ids.into_iter().filter_map(|id| self.find_by_id(id)).collect()
    }

    /// Records sharing both type and category with `record`
    pub fn related(&self, record: &PromptRecord) -> Vec<&PromptRecord> {
        self.records
            .iter()
            .filter(|r| {
                r.id != record.id
                    && r.category == record.category
                    && r.prompt_type == record.prompt_type
            })
            .take(RELATED_LIMIT)
            .collect()
    }

    pub fn count_by_type(&self) -> HashMap<PromptType, usize> {
        let mut counts = HashMap::new();
        for record in &self.records {
            *counts.entry(record.prompt_type).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(
        id: &str,
        title: &str,
        prompt_type: PromptType,
        category: PromptCategory,
    ) -> PromptRecord {
        PromptRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            content: format!("Content for {}", title),
            tags: Vec::new(),
            category,
            prompt_type,
            author: "Curator".to_string(),
            image_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::record;
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = PromptCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());

        let counts = catalog.count_by_type();
        for prompt_type in PromptType::ALL {
            assert!(counts.get(&prompt_type).copied().unwrap_or(0) > 0);
        }
        assert!(
            catalog
                .records()
                .iter()
                .all(|r| r.category != PromptCategory::All)
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = record("a", "Alpha", PromptType::Webapp, PromptCategory::Coding);
        let result = PromptCatalog::new(vec![a.clone(), a]);
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"[{
            "id": "x1", "title": "T", "description": "D", "content": "C",
            "tags": ["one"], "category": "Cinematic", "type": "Video",
            "author": "A", "imageUrl": "https://example.com/x.jpg"
        }]"#;
        let catalog = PromptCatalog::from_json(json).unwrap();
        let record = catalog.find_by_id("x1").unwrap();
        assert_eq!(record.prompt_type, PromptType::Video);
        assert_eq!(record.category, PromptCategory::Cinematic);
        assert_eq!(record.display_image_url(), Some("https://example.com/x.jpg"));
    }

    #[test]
    fn test_resolve_ids_drops_dangling() {
        let catalog = PromptCatalog::new(vec![
            record("a", "Alpha", PromptType::Webapp, PromptCategory::Coding),
            record("b", "Beta", PromptType::Webapp, PromptCategory::Coding),
        ])
        .unwrap();
        let ids = vec!["b".to_string(), "gone".to_string(), "a".to_string()];
        let resolved: Vec<_> = catalog.resolve_ids(&ids).iter().map(|r| r.id.clone()).collect();
        assert_eq!(resolved, vec!["b", "a"]);
    }

    #[test]
    fn test_related_same_type_and_category() {
        let catalog = PromptCatalog::new(vec![
            record("a", "A", PromptType::Image, PromptCategory::Abstract),
            record("b", "B", PromptType::Image, PromptCategory::Abstract),
            record("c", "C", PromptType::Video, PromptCategory::Abstract),
            record("d", "D", PromptType::Image, PromptCategory::Realistic),
            record("e", "E", PromptType::Image, PromptCategory::Abstract),
            record("f", "F", PromptType::Image, PromptCategory::Abstract),
            record("g", "G", PromptType::Image, PromptCategory::Abstract),
        ])
        .unwrap();
        let source = catalog.find_by_id("a").unwrap();
        let related: Vec<_> = catalog.related(source).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(related, vec!["b", "e", "f"]);
    }

    #[test]
    fn test_fallback_image() {
        let visual = record("v", "V", PromptType::Image, PromptCategory::Abstract);
        assert_eq!(visual.display_image_url(), Some(FALLBACK_IMAGE_URL));

        let text = record("t", "T", PromptType::System, PromptCategory::Writing);
        assert_eq!(text.display_image_url(), None);
    }

    #[test]
    fn test_content_stats() {
        let stats = ContentStats::of("Write a haiku  about\nrust");
        assert_eq!(stats.words, 5);
        assert_eq!(stats.characters, 25);
        assert_eq!(stats.tokens, 7);

        let empty = ContentStats::of("   ");
        assert_eq!(empty.words, 0);
    }

    #[test]
    fn test_category_cycle_wraps() {
        assert_eq!(PromptCategory::All.next(), PromptCategory::Coding);
        assert_eq!(PromptCategory::Cinematic.next(), PromptCategory::All);
    }
}
