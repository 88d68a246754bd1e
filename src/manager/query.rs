// Query operations - List, Show, Recents

use crate::cli::{ListArgs, ListFormat, ShowArgs};
use crate::config::Config;
use crate::core::filter::FilterOptions;
use crate::core::operations::Museum;
use crate::utils::error::{handle_flow, AppResult, FlowResult};
use crate::utils::output::{DisplayFormatter, OutputStyle, RecordView};
use crate::utils::pagination::print_or_page;
use crate::utils::{copy_to_clipboard, print_success};

/// Filters described by the `list` arguments
pub fn filters_from_args(args: &ListArgs) -> FilterOptions {
    FilterOptions {
        prompt_type: args.prompt_type,
        search_query: args.query.clone().unwrap_or_default(),
        category: args.category,
        favorites_only: args.favorites,
        sort: args.sort,
    }
}

pub fn handle_list_command(config: Config, args: &ListArgs) -> AppResult<()> {
    let museum = Museum::open(config)?;
    let options = filters_from_args(args);
    let records = museum.library(&options);

    if records.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: format!("{} prompts matching your criteria", options.prompt_type),
        });
        return Ok(());
    }

    let format = args.format.as_ref().unwrap_or(&ListFormat::Simple);
    DisplayFormatter::format_list(
        &records,
        format,
        museum.preferences().favorites(),
        museum.config(),
    )
}

pub fn handle_show_command(config: Config, args: &ShowArgs) -> AppResult<()> {
    let mut museum = Museum::open(config)?;

    let record = match museum.view(&args.id) {
        Ok(record) => record,
        Err(_) => {
            handle_flow(FlowResult::NotFound {
                item_type: "Prompt".to_string(),
                search_term: args.id.clone(),
            });
            return Ok(());
        }
    };

    let related = museum.related(&record);
    let view = RecordView {
        record: &record,
        content: &record.content,
        favorite: museum.preferences().is_favorite(&record.id),
        rating: museum.preferences().rating(&record.id),
        related: &related,
    };
    print_or_page(&OutputStyle::render_record_detailed(&view))?;

    if args.copy {
        copy_to_clipboard(&record.content)?;
        print_success("Prompt copied to clipboard");
    }

    Ok(())
}

pub fn handle_recents_command(config: Config) -> AppResult<()> {
    let museum = Museum::open(config)?;
    let recents = museum.recent_records();

    if recents.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "recently viewed prompts".to_string(),
        });
        return Ok(());
    }

    OutputStyle::print_header("🕘 Jump back in");
    for record in recents {
        println!(
            "{}",
            OutputStyle::format_record_line(
                record,
                museum.preferences().is_favorite(&record.id),
                museum.config()
            )
        );
    }

    Ok(())
}
