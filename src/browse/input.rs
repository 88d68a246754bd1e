use crate::core::router::DetailKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn has_control(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Keys the detail screen routes through `detail_action`
pub fn detail_key(key: &KeyEvent) -> Option<DetailKey> {
    match key.code {
        KeyCode::Esc => Some(DetailKey::Escape),
        KeyCode::Char(c) if has_control(key) && c.eq_ignore_ascii_case(&'c') => {
            Some(DetailKey::CopyShortcut)
        }
        KeyCode::Char(c) if !has_control(key) => Some(DetailKey::Char(c)),
        _ => None,
    }
}

/// Ctrl+Q leaves the session from any screen, even while typing
pub fn is_quit(key: &KeyEvent) -> bool {
    has_control(key) && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Ctrl+D hides the visible notification before its deadline
pub fn is_dismiss(key: &KeyEvent) -> bool {
    has_control(key) && matches!(key.code, KeyCode::Char('d') | KeyCode::Char('D'))
}

/// Star rating typed as a digit
pub fn digit(c: char) -> Option<u8> {
    c.to_digit(10).and_then(|d| u8::try_from(d).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_key_mapping() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(detail_key(&esc), Some(DetailKey::Escape));
        assert_eq!(detail_key(&ctrl_c), Some(DetailKey::CopyShortcut));
        assert_eq!(detail_key(&plain_f), Some(DetailKey::Char('f')));
        assert_eq!(detail_key(&enter), None);
    }

    #[test]
    fn test_quit_requires_control() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_dismiss(&KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)));
        assert!(!is_dismiss(&KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)));
    }
}
