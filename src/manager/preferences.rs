// Preference operations - Favorite, Rate, Theme

use crate::cli::{IdArgs, RateArgs, ThemeArgs, ThemeChoice};
use crate::config::Config;
use crate::core::operations::Museum;
use crate::core::preferences::{Rating, Theme};
use crate::core::traits::KeyValueStore;
use crate::utils::error::{handle_flow, AppError, AppResult, FlowResult};
use crate::utils::OutputStyle;

pub fn handle_favorite_command(config: Config, args: &IdArgs) -> AppResult<()> {
    let mut museum = Museum::open(config)?;
    let added = museum.toggle_favorite(&args.id)?;
    handle_flow(FlowResult::Success(favorite_message(added).to_string()));
    Ok(())
}

pub fn favorite_message(added: bool) -> &'static str {
    if added {
        "Added to favorites"
    } else {
        "Removed from favorites"
    }
}

pub fn handle_rate_command(config: Config, args: &RateArgs) -> AppResult<()> {
    let rating = Rating::new(args.stars).ok_or_else(|| {
        AppError::System(format!(
            "Rating must be between {} and {}, got {}",
            Rating::MIN,
            Rating::MAX,
            args.stars
        ))
    })?;

    let mut museum = Museum::open(config)?;
    museum.rate(&args.id, rating)?;
    handle_flow(FlowResult::Success(rating_message(rating)));
    Ok(())
}

pub fn rating_message(rating: Rating) -> String {
    format!("Rated {} stars", rating)
}

pub fn handle_theme_command(config: Config, args: &ThemeArgs) -> AppResult<()> {
    let mut museum = Museum::open(config)?;
    let theme = apply_choice(&mut museum, args.choice);
    println!(
        "🎨 {} {}",
        OutputStyle::label("Theme:"),
        OutputStyle::accent(theme.as_str())
    );
    Ok(())
}

fn apply_choice<S: KeyValueStore>(museum: &mut Museum<S>, choice: Option<ThemeChoice>) -> Theme {
    match choice {
        Some(ThemeChoice::Dark) => museum.set_theme(Theme::Dark),
        Some(ThemeChoice::Light) => museum.set_theme(Theme::Light),
        Some(ThemeChoice::Toggle) => {
            museum.toggle_theme();
        }
        None => {}
    }
    museum.preferences().theme()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operations::test_support::museum;

    #[test]
    fn test_messages() {
        assert_eq!(favorite_message(true), "Added to favorites");
        assert_eq!(favorite_message(false), "Removed from favorites");
        assert_eq!(rating_message(Rating::new(4).unwrap()), "Rated 4 stars");
    }

    #[test]
    fn test_theme_choices() {
        let mut museum = museum();
        assert_eq!(apply_choice(&mut museum, None), Theme::Dark);
        assert_eq!(apply_choice(&mut museum, Some(ThemeChoice::Toggle)), Theme::Light);
        assert_eq!(apply_choice(&mut museum, Some(ThemeChoice::Light)), Theme::Light);
        assert_eq!(apply_choice(&mut museum, Some(ThemeChoice::Dark)), Theme::Dark);
    }
}
