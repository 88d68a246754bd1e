// Configuration operations

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::error::{handle_flow, AppResult, FlowResult};
use crate::utils::interactive::prompt_yes_no;
use crate::utils::{print_success, OutputStyle};

pub fn handle_config_command(mut config: Config, command: Option<ConfigCommands>) -> AppResult<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => {
            println!("{}", Config::config_file_path().display());
            Ok(())
        }
        Some(ConfigCommands::Reset) => handle_reset_command(&mut config),
        None => handle_config_help(),
    }
}

fn handle_show_command(config: &Config) -> AppResult<()> {
    OutputStyle::print_header("⚙️  Prompt Museum Configuration");

    let general = &config.general;
    println!("General:");
    println!("  Data dir: {}", general.data_dir.display());
    match &general.catalog_file {
        Some(path) => println!("  Catalog file: {}", path.display()),
        None => println!("  Catalog file: {}", OutputStyle::muted("(built-in)")),
    }
    println!("  Share origin: {}", general.share_origin);
    println!("  Export dir: {}", general.export_dir.display());
    println!("  Color: {}", general.color);
    println!("  Content preview: {}", general.content_preview);
    if let Some(log_file) = &general.log_file {
        println!("  Log file: {}", log_file.display());
    }

    Ok(())
}

fn handle_config_help() -> AppResult<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  promptmuseum config show    - Show current configuration");
    println!("  promptmuseum config path    - Print the configuration file location");
    println!("  promptmuseum config reset   - Reset configuration to defaults");
    println!();
    println!(
        "Configuration file location: {}",
        Config::config_file_path().display()
    );
    Ok(())
}

fn handle_reset_command(config: &mut Config) -> AppResult<()> {
    if prompt_yes_no(
        "Are you sure you want to reset configuration to defaults? This will overwrite your current settings.",
    )? {
        *config = Config::default();
        config.save()?;
        print_success("Configuration reset to defaults!");
    } else {
        handle_flow(FlowResult::Cancelled("Reset cancelled".to_string()));
    }
    Ok(())
}
