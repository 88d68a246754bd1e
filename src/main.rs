use anyhow::Result;
use clap::Parser;

use prompt_museum::cli::{Cli, Commands};
use prompt_museum::config::Config;
use prompt_museum::utils::error::report_error;
use prompt_museum::utils::{logging, output};

const BROWSE_LOG_FILE: &str = "promptmuseum.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    let command = cli.command.unwrap_or(Commands::Browse);

    // The interactive screen owns the terminal, so its logs always go to a file
    let log_file = match (&config.general.log_file, &command) {
        (Some(path), _) => Some(path.clone()),
        (None, Commands::Browse) => Some(config.general.data_dir.join(BROWSE_LOG_FILE)),
        (None, _) => None,
    };
    logging::init_logging(cli.debug, log_file.as_deref())?;

    if !config.general.color {
        output::set_color_enabled(false);
    }

    if let Err(e) = command.execute(config).await {
        tracing::error!(error = %e, "command failed");
        report_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
