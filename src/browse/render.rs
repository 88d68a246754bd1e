//! Screen bodies as plain lines of styled text

use crate::config::Config;
use crate::core::data::{ContentStats, PromptRecord, PromptType};
use crate::core::filter::FilterOptions;
use crate::core::preferences::{Rating, Theme};
use crate::core::router::{DetailSession, MIN_FONT_SIZE};
use crate::utils::format::{format_stars, truncate_string};
use crate::utils::OutputStyle;
use std::collections::{HashMap, HashSet};

pub struct LibraryView<'a> {
    pub filters: &'a FilterOptions,
    pub records: &'a [&'a PromptRecord],
    pub cursor: usize,
    pub favorites: &'a HashSet<String>,
    pub recents: &'a [&'a PromptRecord],
    pub searching: bool,
    pub config: &'a Config,
}

pub struct DetailView<'a> {
    pub record: &'a PromptRecord,
    pub session: &'a DetailSession,
    pub favorite: bool,
    pub rating: Option<Rating>,
    pub related: &'a [&'a PromptRecord],
    pub link_cursor: Option<usize>,
    pub width: u16,
}

/// A rendered screen body
///
/// `focus` is the index of the highlighted line, if any; the window shown on
/// screen always contains it.
#[derive(Debug, Default)]
pub struct Body {
    pub lines: Vec<String>,
    pub focus: Option<usize>,
}

/// First visible line for a window of `rows` lines over a body of `len` lines
pub fn clamp_scroll(scroll: usize, focus: Option<usize>, len: usize, rows: usize) -> usize {
    let rows = rows.max(1);
    let scroll = match focus {
        Some(line) if line < scroll => line,
        Some(line) if line >= scroll + rows => line + 1 - rows,
        _ => scroll,
    };
    scroll.min(len.saturating_sub(rows))
}

/// The recents strip is hidden while searching or showing favorites only
pub fn recents_visible(filters: &FilterOptions) -> bool {
    filters.search_query.is_empty() && !filters.favorites_only
}

/// Characters per content line; bigger fonts get narrower columns
pub fn content_width(term_width: u16, font_size: u8) -> usize {
    let base = usize::from(term_width).saturating_sub(4).max(20);
    base * usize::from(MIN_FONT_SIZE) / usize::from(font_size.max(MIN_FONT_SIZE))
}

/// Greedy word wrap that keeps explicit line breaks
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let len = line.chars().count();
            if len > 0 && len + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }

    lines
}

fn marker(selected: bool) -> String {
    if selected {
        OutputStyle::accent("▶").to_string()
    } else {
        " ".to_string()
    }
}

pub fn landing_lines(cursor: usize, counts: &HashMap<PromptType, usize>, theme: Theme) -> Body {
    let mut focus = None;
    let mut lines = vec![
        OutputStyle::title("🏛  Prompt Museum").to_string(),
        OutputStyle::muted("Curated prompts for apps, agents, images and video").to_string(),
        String::new(),
    ];

    for (i, prompt_type) in PromptType::ALL.iter().enumerate() {
        let count = counts.get(prompt_type).copied().unwrap_or(0);
        if i == cursor {
            focus = Some(lines.len());
        }
        lines.push(format!(
            "{} {}. {} {}",
            marker(i == cursor),
            i + 1,
            OutputStyle::header(prompt_type.as_str()),
            OutputStyle::muted(&format!("({} prompts)", count))
        ));
        lines.push(format!("     {}", prompt_type.description()));
    }

    lines.push(String::new());
    lines.push(OutputStyle::muted(&format!("Theme: {}", theme.as_str())).to_string());
    Body { lines, focus }
}

fn type_tabs(active: PromptType) -> String {
    PromptType::ALL
        .iter()
        .map(|t| {
            if *t == active {
                OutputStyle::accent(&format!("[{}]", t)).to_string()
            } else {
                OutputStyle::muted(&format!(" {} ", t)).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn library_lines(view: &LibraryView<'_>) -> Body {
    let filters = view.filters;
    let mut lines = vec![type_tabs(filters.prompt_type), String::new()];

    let caret = if view.searching { "▏" } else { "" };
    lines.push(format!(
        "{} {}{}   {} {}   {} {}   {} {}",
        OutputStyle::label("Search:"),
        filters.search_query,
        caret,
        OutputStyle::label("Category:"),
        filters.category,
        OutputStyle::label("Sort:"),
        filters.sort.label(),
        OutputStyle::label("Favorites only:"),
        if filters.favorites_only { "on" } else { "off" }
    ));

    if recents_visible(filters) && !view.recents.is_empty() {
        lines.push(String::new());
        lines.push(OutputStyle::header("Jump back in").to_string());
        for (i, record) in view.recents.iter().enumerate() {
            lines.push(format!(
                "  {}. {} {}",
                i + 1,
                OutputStyle::accent(&record.title),
                OutputStyle::muted(&format!("({})", record.prompt_type))
            ));
        }
    }

    lines.push(OutputStyle::separator());

    if view.records.is_empty() {
        lines.push(OutputStyle::muted("No prompts found.").to_string());
        lines.push(format!("Press {} to clear all filters", OutputStyle::accent("x")));
        return Body { lines, focus: None };
    }

    let mut focus = None;
    for (i, record) in view.records.iter().enumerate() {
        if i == view.cursor {
            focus = Some(lines.len());
        }
        lines.push(format!(
            "{} {}",
            marker(i == view.cursor),
            OutputStyle::format_record_line(record, view.favorites.contains(&record.id), view.config)
        ));
    }

    Body { lines, focus }
}

pub fn detail_lines(view: &DetailView<'_>) -> Body {
    let record = view.record;
    let session = view.session;
    let heart = if view.favorite {
        OutputStyle::favorite("♥")
    } else {
        OutputStyle::muted("♡")
    };

    let mut lines = vec![format!("{} {}", OutputStyle::title(&record.title), heart)];

    if !session.focus_mode {
        lines.push(OutputStyle::muted(&format!(
            "{} · {} · by {}",
            record.prompt_type, record.category, record.author
        ))
        .to_string());
        lines.push(format!(
            "{} {}",
            OutputStyle::label("Rating:"),
            OutputStyle::accent(&format_stars(view.rating))
        ));
        if let Some(url) = record.display_image_url() {
            lines.push(format!("{} {}", OutputStyle::label("Image:"), OutputStyle::muted(url)));
        }
        lines.push(String::new());
        lines.extend(wrap(&record.description, content_width(view.width, MIN_FONT_SIZE)));
    }

    let mut heading = format!(
        "{} {}",
        OutputStyle::header("Content"),
        OutputStyle::muted(&format!("Aa {}px", session.font_size))
    );
    if session.editing {
        heading.push_str(&format!(" {}", OutputStyle::warning("(editing, Esc to finish)")));
    } else if session.is_edited(record) {
        heading.push_str(&format!(" {}", OutputStyle::info("(edited)")));
    }
    lines.push(String::new());
    lines.push(heading);
    lines.push(OutputStyle::separator());
    lines.extend(
        wrap(&session.content, content_width(view.width, session.font_size))
            .into_iter()
            .map(|l| OutputStyle::content(&l).to_string()),
    );
    lines.push(OutputStyle::separator());

    let stats = ContentStats::of(&session.content);
    lines.push(OutputStyle::muted(&format!(
        "{} words · {} chars · ~{} tokens",
        stats.words, stats.characters, stats.tokens
    ))
    .to_string());

    if session.focus_mode {
        return Body { lines, focus: None };
    }

    let mut focus = None;
    let mut push_link = |lines: &mut Vec<String>, index: usize, text: String| {
        let selected = view.link_cursor == Some(index);
        if selected {
            focus = Some(lines.len());
        }
        lines.push(format!("{} {}", marker(selected), text));
    };

    if !view.related.is_empty() {
        lines.push(String::new());
        lines.push(OutputStyle::header("Related").to_string());
        for (i, related) in view.related.iter().enumerate() {
            push_link(
                &mut lines,
                i,
                OutputStyle::accent(&truncate_string(&related.title, 60)).to_string(),
            );
        }
    }

    if !record.tags.is_empty() {
        lines.push(String::new());
        lines.push(OutputStyle::header("Tags").to_string());
        let offset = view.related.len();
        for (i, tag) in record.tags.iter().enumerate() {
            push_link(
                &mut lines,
                offset + i,
                OutputStyle::tags(&format!("#{}", tag)).to_string(),
            );
        }
    }

    Body { lines, focus }
}
