// Command handlers
pub mod config;      // Configuration management
pub mod preferences; // Favorites, ratings and theme
pub mod query;       // List, show and recents
pub mod share;       // Export, clipboard copy and share links

use crate::browse::{self, Browser};
use crate::core::operations::Museum;
use crate::utils::copy_to_clipboard;
use crate::utils::error::AppResult;

pub use config::handle_config_command;
pub use preferences::{handle_favorite_command, handle_rate_command, handle_theme_command};
pub use query::{handle_list_command, handle_recents_command, handle_show_command};
pub use share::{handle_copy_command, handle_export_command, handle_share_command};

pub async fn handle_browse_command(config: crate::config::Config) -> AppResult<()> {
    let museum = Museum::open(config)?;
    browse::run(Browser::new(museum, Box::new(copy_to_clipboard))).await
}
