//! Key mapping from terminal events to game inputs.

use crate::types::{Alphabet, GameInput, Symbol};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game inputs.
///
/// Digit keys only map to symbols that exist in `alphabet`.
pub fn handle_key_event(key: KeyEvent, alphabet: Alphabet) -> Option<GameInput> {
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => Symbol::from_char(ch)
            .filter(|s| alphabet.contains(*s))
            .map(GameInput::Press),

        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(GameInput::Restart)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(n: u8) -> Option<GameInput> {
        Some(GameInput::Press(Symbol::new(n).unwrap()))
    }

    #[test]
    fn test_digit_keys() {
        let a = Alphabet::default();
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('1')), a), press(1));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('4')), a), press(4));
    }

    #[test]
    fn test_digits_outside_alphabet_ignored() {
        let a = Alphabet::default();
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0')), a), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('5')), a), None);

        let wide = Alphabet::new(9).unwrap();
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('9')), wide), press(9));
    }

    #[test]
    fn test_restart_keys() {
        let a = Alphabet::default();
        for code in [KeyCode::Char('r'), KeyCode::Char('R'), KeyCode::Char(' '), KeyCode::Enter] {
            assert_eq!(handle_key_event(KeyEvent::from(code), a), Some(GameInput::Restart));
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let a = Alphabet::default();
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left), a), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x')), a), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('1'))));
    }
}
