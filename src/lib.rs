//! Prompt Museum - a terminal gallery of curated AI prompts
//!
//! The library holds the catalog, the filter engine, the persisted
//! preferences (favorites, recents, ratings, theme) and the navigation state
//! machine behind the interactive `browse` session.

pub mod browse;
pub mod cli;
pub mod config;
pub mod core;
pub mod manager;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{PromptCatalog, PromptCategory, PromptRecord, PromptType},
    filter::{filter_prompts, FilterOptions, SortOption},
    operations::Museum,
    preferences::{PreferenceStore, Rating, Theme},
    router::{Screen, ViewState},
    storage::{FileStore, MemoryStore},
    traits::KeyValueStore,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
