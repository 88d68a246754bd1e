use crate::config::Config;
use crate::core::data::{PromptCategory, PromptType};
use crate::core::filter::SortOption;
use crate::manager;
use crate::utils::error::AppResult;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptmuseum")]
#[command(about = "Browse, rate and export curated AI prompts")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Commands {
    pub async fn execute(self, config: Config) -> AppResult<()> {
        match self {
            Commands::Browse => manager::handle_browse_command(config).await,
            Commands::List(args) => manager::handle_list_command(config, &args),
            Commands::Show(args) => manager::handle_show_command(config, &args),
            Commands::Recents => manager::handle_recents_command(config),
            Commands::Favorite(args) => manager::handle_favorite_command(config, &args),
            Commands::Rate(args) => manager::handle_rate_command(config, &args),
            Commands::Theme(args) => manager::handle_theme_command(config, &args),
            Commands::Export(args) => manager::handle_export_command(config, &args),
            Commands::Copy(args) => manager::handle_copy_command(config, &args),
            Commands::Share(args) => manager::handle_share_command(config, &args),
            Commands::Config(args) => manager::handle_config_command(config, args.command),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive museum (default)
    Browse,

    /// List prompts of one type with filters
    List(ListArgs),

    /// Show prompt details and add it to recently viewed
    Show(ShowArgs),

    /// Show recently viewed prompts
    Recents,

    /// Toggle a prompt in favorites
    Favorite(IdArgs),

    /// Rate a prompt from 1 to 5 stars
    Rate(RateArgs),

    /// Show, set or toggle the color theme
    Theme(ThemeArgs),

    /// Export a prompt to a JSON file
    Export(ExportArgs),

    /// Copy prompt content to the clipboard
    Copy(IdArgs),

    /// Copy a share link to the clipboard
    Share(IdArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(short = 't', long = "type", value_enum, default_value_t = PromptType::Webapp)]
    pub prompt_type: PromptType,

    #[arg(short, long, value_enum, default_value_t = PromptCategory::All)]
    pub category: PromptCategory,

    #[arg(short = 'q', long)]
    pub query: Option<String>,

    #[arg(long, help = "Only show favorites")]
    pub favorites: bool,

    #[arg(short, long, value_enum, default_value_t = SortOption::Newest)]
    pub sort: SortOption,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Prompt ID")]
    pub id: String,

    #[arg(long, help = "Also copy the content to the clipboard")]
    pub copy: bool,
}

#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Prompt ID")]
    pub id: String,
}

#[derive(Args)]
pub struct RateArgs {
    #[arg(help = "Prompt ID")]
    pub id: String,

    #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
    pub stars: u8,
}

#[derive(Args)]
pub struct ThemeArgs {
    #[arg(value_enum)]
    pub choice: Option<ThemeChoice>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(help = "Prompt ID")]
    pub id: String,

    #[arg(short, long, value_name = "DIR", help = "Output directory (overrides config)")]
    pub out: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Export this text as the prompt content")]
    pub content_file: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum ListFormat {
    Simple,
    Detailed,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}
