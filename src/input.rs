//! Key bindings and the four named on-screen controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action from a key press or control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Drop,
    Rotate,
    Quit,
    None,
}

/// Map key event to game action: arrows move/drop, Up or Enter rotate.
pub fn key_to_action(key: KeyEvent) -> Action {
    let KeyEvent { code, modifiers, .. } = key;
    if modifiers == KeyModifiers::CONTROL {
        return match code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }
    let no_mod = modifiers.is_empty() || modifiers == KeyModifiers::SHIFT;
    if !no_mod {
        return Action::None;
    }
    match code {
        KeyCode::Left => Action::MoveLeft,
        KeyCode::Right => Action::MoveRight,
        KeyCode::Down => Action::Drop,
        KeyCode::Up | KeyCode::Enter => Action::Rotate,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Named controls shown under the board; each mirrors a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    Down,
    Rotate,
}

impl Control {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Down, Self::Rotate];

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Down => "down",
            Self::Rotate => "rotate",
        }
    }

    pub fn action(self) -> Action {
        match self {
            Self::Left => Action::MoveLeft,
            Self::Right => Action::MoveRight,
            Self::Down => Action::Drop,
            Self::Rotate => Action::Rotate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_enter() {
        assert_eq!(key_to_action(key(KeyCode::Left)), Action::MoveLeft);
        assert_eq!(key_to_action(key(KeyCode::Right)), Action::MoveRight);
        assert_eq!(key_to_action(key(KeyCode::Down)), Action::Drop);
        assert_eq!(key_to_action(key(KeyCode::Up)), Action::Rotate);
        assert_eq!(key_to_action(key(KeyCode::Enter)), Action::Rotate);
        assert_eq!(key_to_action(key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(key_to_action(key(KeyCode::Esc)), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c), Action::Quit);
        let alt_left = KeyEvent::new(KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(key_to_action(alt_left), Action::None);
    }

    #[test]
    fn controls_match_keys() {
        let expected = [
            ("left", KeyCode::Left),
            ("right", KeyCode::Right),
            ("down", KeyCode::Down),
            ("rotate", KeyCode::Up),
        ];
        for (control, (name, code)) in Control::ALL.into_iter().zip(expected) {
            assert_eq!(control.name(), name);
            assert_eq!(control.action(), key_to_action(key(code)));
        }
    }
}
