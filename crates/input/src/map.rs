//! Key mapping from terminal events to the three device buttons.

use crate::types::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the button it imitates.
pub fn button_for_key(key: KeyEvent) -> Option<Button> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Button::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Button::Right)
        }
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char(' ') => Some(Button::Rotate),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Left)), Some(Button::Left));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Right)), Some(Button::Right));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('H'))), Some(Button::Left));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('d'))), Some(Button::Right));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Up)), Some(Button::Rotate));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char(' '))), Some(Button::Rotate));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('W'))), Some(Button::Rotate));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Down)), None);
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
