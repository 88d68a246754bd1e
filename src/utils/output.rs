use crate::cli::ListFormat;
use crate::config::Config;
use crate::core::data::{ContentStats, PromptRecord};
use crate::core::preferences::{Rating, Theme};
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_stars, format_tags_comma, format_tags_hash, truncate_string};
use colored::*;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};

static LIGHT_THEME: AtomicBool = AtomicBool::new(false);

/// Switch the process-wide palette
pub fn apply_theme(theme: Theme) {
    LIGHT_THEME.store(theme == Theme::Light, Ordering::Relaxed);
}

pub fn current_theme() -> Theme {
    if LIGHT_THEME.load(Ordering::Relaxed) {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Enable or disable ANSI colors for this process
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

fn is_light() -> bool {
    LIGHT_THEME.load(Ordering::Relaxed)
}

/// Extra details shown alongside a record
pub struct RecordView<'a> {
    pub record: &'a PromptRecord,
    pub content: &'a str,
    pub favorite: bool,
    pub rating: Option<Rating>,
    pub related: &'a [&'a PromptRecord],
}

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        if is_light() {
            text.black().bold()
        } else {
            text.bright_white().bold()
        }
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        if is_light() { text.blue() } else { text.cyan() }
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn tags(text: &str) -> ColoredString {
        if is_light() { text.magenta() } else { text.bright_cyan() }
    }

    pub fn accent(text: &str) -> ColoredString {
        if is_light() { text.blue().bold() } else { text.bright_yellow() }
    }

    pub fn favorite(text: &str) -> ColoredString {
        text.red()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    fn field_line(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) -> String {
        format!("{:>12}: {}", Self::label(label), color_fn(value))
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{}", Self::field_line(label, value, color_fn));
    }

    fn heart(favorite: bool) -> ColoredString {
        if favorite {
            Self::favorite("♥")
        } else {
            Self::muted("♡")
        }
    }

    /// One-line summary used in lists
    pub fn format_record_line(record: &PromptRecord, favorite: bool, config: &Config) -> String {
        let preview = if config.general.content_preview {
            format!(" {}", Self::muted(&truncate_string(&record.content, 60)))
        } else {
            String::new()
        };

        format!(
            "{} {} {} {}{}{}",
            Self::heart(favorite),
            Self::accent(&record.title),
            Self::muted(&format!("({})", record.id)),
            Self::label(&format!("[{}]", record.category)),
            Self::tags(&format_tags_hash(&record.tags)),
            preview
        )
    }

    /// Full detail block as a string so it can be paged
    pub fn render_record_detailed(view: &RecordView<'_>) -> String {
        let record = view.record;
        let stats = ContentStats::of(view.content);
        let mut out = String::new();

        let _ = writeln!(out, "{}", Self::title(&format!("📝 {}", record.title)));
        let _ = writeln!(out, "{}", Self::header_separator());
        let _ = writeln!(out, "{}", Self::field_line("ID", &record.id, Self::muted));
        let _ = writeln!(out, "{}", Self::field_line("Type", record.prompt_type.as_str(), Self::content));
        let _ = writeln!(out, "{}", Self::field_line("Category", record.category.as_str(), Self::content));
        let _ = writeln!(out, "{}", Self::field_line("Author", &record.author, Self::content));
        let _ = writeln!(out, "{}", Self::field_line("Tags", &format_tags_comma(&record.tags), Self::tags));
        let _ = writeln!(out, "{}", Self::field_line("Rating", &format_stars(view.rating), Self::accent));
        let _ = writeln!(
            out,
            "{:>12}: {}",
            Self::label("Favorite"),
            Self::heart(view.favorite)
        );
        if let Some(url) = record.display_image_url() {
            let _ = writeln!(out, "{}", Self::field_line("Image", url, Self::muted));
        }

        let _ = writeln!(out, "\n{}", Self::content(&record.description));
        let _ = writeln!(out, "\n{}:", Self::title("📄 Content"));
        let _ = writeln!(out, "{}", Self::content(view.content));
        let _ = writeln!(
            out,
            "\n{}",
            Self::muted(&format!(
                "{} words · {} chars · ~{} tokens",
                stats.words, stats.characters, stats.tokens
            ))
        );

        if !view.related.is_empty() {
            let _ = writeln!(out, "\n{}:", Self::header("Related"));
            for related in view.related {
                let _ = writeln!(out, "  {} {}", Self::accent(&related.title), Self::muted(&format!("({})", related.id)));
            }
        }

        out
    }
}

pub fn print_prompt_count(count: usize) {
    if count == 0 {
        println!("{}", OutputStyle::muted("No prompts found."));
    } else {
        println!(
            "📝 {} ({} found)",
            OutputStyle::header("Prompts"),
            OutputStyle::info(&count.to_string())
        );
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Display formatter for different output formats
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn format_list(
        records: &[&PromptRecord],
        format: &ListFormat,
        favorites: &HashSet<String>,
        config: &Config,
    ) -> AppResult<()> {
        match format {
            ListFormat::Simple => Self::print_simple_list(records, favorites, config),
            ListFormat::Detailed => Self::print_detailed_list(records, favorites),
            ListFormat::Json => Self::print_json_list(records)?,
        }
        Ok(())
    }

    fn print_simple_list(records: &[&PromptRecord], favorites: &HashSet<String>, config: &Config) {
        print_prompt_count(records.len());
        println!("{}", OutputStyle::separator());

        for record in records {
            println!(
                "{}",
                OutputStyle::format_record_line(record, favorites.contains(&record.id), config)
            );
        }
    }

    fn print_detailed_list(records: &[&PromptRecord], favorites: &HashSet<String>) {
        OutputStyle::print_header("📝 Detailed Prompt List");

        for (i, record) in records.iter().enumerate() {
            println!("\n{}. {} {}", i + 1, OutputStyle::accent(&record.title), OutputStyle::heart(favorites.contains(&record.id)));
            OutputStyle::print_field_colored("ID", &record.id, OutputStyle::muted);
            OutputStyle::print_field_colored("Category", record.category.as_str(), OutputStyle::content);
            OutputStyle::print_field_colored("Author", &record.author, OutputStyle::content);
            let tags = format_tags_comma(&record.tags);
            if !tags.is_empty() {
                OutputStyle::print_field_colored("Tags", &tags, OutputStyle::tags);
            }
            OutputStyle::print_field_colored("Description", &record.description, OutputStyle::content);

            if i < records.len() - 1 {
                println!("{}", OutputStyle::separator());
            }
        }
    }

    fn print_json_list(records: &[&PromptRecord]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| AppError::System(format!("Failed to serialize prompts to JSON: {}", e)))?;
        println!("{}", json);
        Ok(())
    }
}
