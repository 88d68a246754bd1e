use crate::core::preferences::Rating;

/// Truncate to at most `max_chars` characters, marking the cut with `...`
pub fn truncate_string(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let kept: String = single_line.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Tags as ` #a #b`, empty when there are none
pub fn format_tags_hash(tags: &[String]) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!(" #{}", tags.join(" #"))
    }
}

pub fn format_tags_comma(tags: &[String]) -> String {
    tags.join(", ")
}

/// Five-star gauge such as `★★★☆☆`
pub fn format_stars(rating: Option<Rating>) -> String {
    let filled = rating.map(|r| r.value()).unwrap_or(0) as usize;
    let empty = usize::from(Rating::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
