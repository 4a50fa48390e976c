use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key-level actions. Screens decide what each one means in their current focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Back,
    Up,
    Down,
    Left,
    Right,
    NextField,
    PrevField,
    Submit,
    Input(char),
    Backspace,
    Delete,
    Control(char),
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

pub(crate) fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Back,

        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::Up,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::Down,
        (KeyCode::Up, _) => Action::Up,
        (KeyCode::Down, _) => Action::Down,
        (KeyCode::Left, _) => Action::Left,
        (KeyCode::Right, _) => Action::Right,

        (KeyCode::Tab, _) => Action::NextField,
        (KeyCode::BackTab, _) => Action::PrevField,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Delete, _) => Action::Delete,

        (KeyCode::Char(c), KeyModifiers::CONTROL) => Action::Control(c),
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Action {
        key_to_action(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_and_back() {
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit);
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), Action::Back);
    }

    #[test]
    fn test_navigation_vim_style() {
        assert_eq!(key(KeyCode::Char('p'), KeyModifiers::CONTROL), Action::Up);
        assert_eq!(key(KeyCode::Char('n'), KeyModifiers::CONTROL), Action::Down);
    }

    #[test]
    fn test_navigation_arrows() {
        assert_eq!(key(KeyCode::Up, KeyModifiers::NONE), Action::Up);
        assert_eq!(key(KeyCode::Down, KeyModifiers::NONE), Action::Down);
        assert_eq!(key(KeyCode::Left, KeyModifiers::NONE), Action::Left);
        assert_eq!(key(KeyCode::Right, KeyModifiers::NONE), Action::Right);
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Action::NextField);
        assert_eq!(key(KeyCode::BackTab, KeyModifiers::SHIFT), Action::PrevField);
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), Action::Submit);
        assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), Action::Backspace);
        assert_eq!(key(KeyCode::Delete, KeyModifiers::NONE), Action::Delete);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(key(KeyCode::Char('a'), KeyModifiers::NONE), Action::Input('a'));
        assert_eq!(key(KeyCode::Char('A'), KeyModifiers::SHIFT), Action::Input('A'));
        assert_eq!(key(KeyCode::Char(' '), KeyModifiers::NONE), Action::Input(' '));
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(key(KeyCode::Char('a'), KeyModifiers::CONTROL), Action::Control('a'));
        assert_eq!(key(KeyCode::Char('x'), KeyModifiers::ALT), Action::None);
    }
}
