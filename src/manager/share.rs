// Sharing operations - Export, Copy, Share

use crate::cli::{ExportArgs, IdArgs};
use crate::config::Config;
use crate::core::operations::Museum;
use crate::utils::error::{AppError, AppResult};
use crate::utils::{copy_to_clipboard, print_success, print_warning, OutputStyle};

pub fn handle_export_command(config: Config, args: &ExportArgs) -> AppResult<()> {
    let museum = Museum::open(config)?;

    let content = match &args.content_file {
        Some(path) => Some(std::fs::read_to_string(path).map_err(|e| {
            AppError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?),
        None => None,
    };

    let path = museum.export(&args.id, content.as_deref(), args.out.as_deref())?;
    print_success("Exported to JSON");
    println!("   {}", OutputStyle::muted(&path.display().to_string()));
    Ok(())
}

pub fn handle_copy_command(config: Config, args: &IdArgs) -> AppResult<()> {
    let museum = Museum::open(config)?;
    let record = museum.find(&args.id)?;
    copy_to_clipboard(&record.content)?;
    print_success("Prompt copied to clipboard");
    Ok(())
}

pub fn handle_share_command(config: Config, args: &IdArgs) -> AppResult<()> {
    let museum = Museum::open(config)?;
    let url = museum.share_url(&args.id)?;

    // The link is still printed when no clipboard tool is installed
    match copy_to_clipboard(&url) {
        Ok(()) => print_success("Link copied to clipboard"),
        Err(e) => {
            tracing::warn!(error = %e, "could not copy share link");
            print_warning(&format!("Could not copy the link: {}", e));
        }
    }
    println!("🔗 {}", OutputStyle::accent(&url));
    Ok(())
}
