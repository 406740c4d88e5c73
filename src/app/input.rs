//! Key mapping for normal (non-editing) mode

use crossterm::event::{KeyCode, KeyModifiers};

/// Vim-style key mapping (basic, without modifiers)
pub fn vim_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('p') => Some(Action::Previous),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('n') => Some(Action::Next),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab => Some(Action::NextSection),
        KeyCode::BackTab => Some(Action::PreviousSection),
        KeyCode::Char('i') => Some(Action::Edit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('x') => Some(Action::Run),
        KeyCode::Char(':') => Some(Action::CommandMode),
        KeyCode::Char('?') => Some(Action::Help),
        // 'q' is left unmapped so it can't quit by accident; use :q
        KeyCode::Char(c @ '1'..='5') => Some(Action::GoToSection(c as usize - '1' as usize)),
        _ => None,
    }
}

/// Key mapping with modifiers (for Ctrl combinations)
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Run),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        }
    } else {
        vim_key_to_action(key)
    }
}

/// hjkl motions, which can be switched off in the config
pub fn is_vim_motion(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('h' | 'j' | 'k' | 'l'))
}

/// Option letter typed on the quiz screen (`a` is the first option).
/// Letters past the last of `option_count` options are not answers.
pub fn option_letter(key: KeyCode, option_count: usize) -> Option<usize> {
    match key {
        KeyCode::Char(c @ 'a'..='f') => {
            Some(c as usize - 'a' as usize).filter(|option| *option < option_count)
        }
        _ => None,
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Previous,
    Next,
    NextSection,
    PreviousSection,
    GoToSection(usize),

    // Selection
    Select,
    Back,
    Reset,

    // Playground / exercises
    Edit,
    Run,

    // Modes
    ToggleTheme,
    CommandMode,
    Help,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(vim_key_to_action(KeyCode::Char('j')), Some(Action::Down));
    }

    #[test]
    fn quiz_navigation_keys() {
        for key in [KeyCode::Char('n'), KeyCode::Char('l'), KeyCode::Right] {
            assert_eq!(vim_key_to_action(key), Some(Action::Next));
        }
        for key in [KeyCode::Char('p'), KeyCode::Char('h'), KeyCode::Left] {
            assert_eq!(vim_key_to_action(key), Some(Action::Previous));
        }
    }

    #[test]
    fn enter_and_space_select() {
        assert_eq!(vim_key_to_action(KeyCode::Enter), Some(Action::Select));
        assert_eq!(vim_key_to_action(KeyCode::Char(' ')), Some(Action::Select));
    }

    #[test]
    fn digits_jump_to_sections() {
        assert_eq!(vim_key_to_action(KeyCode::Char('1')), Some(Action::GoToSection(0)));
        assert_eq!(vim_key_to_action(KeyCode::Char('5')), Some(Action::GoToSection(4)));
        assert_eq!(vim_key_to_action(KeyCode::Char('6')), None);
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(vim_key_to_action(KeyCode::Char('z')), None);
        assert_eq!(vim_key_to_action(KeyCode::Char('q')), None);
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn ctrl_r_runs() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('r'), KeyModifiers::CONTROL),
            Some(Action::Run)
        );
    }

    #[test]
    fn vim_motions() {
        assert!(is_vim_motion(KeyCode::Char('j')));
        assert!(!is_vim_motion(KeyCode::Down));
        assert!(!is_vim_motion(KeyCode::Char('n')));
    }

    #[test]
    fn option_letters() {
        assert_eq!(option_letter(KeyCode::Char('a'), 4), Some(0));
        assert_eq!(option_letter(KeyCode::Char('d'), 4), Some(3));
        assert_eq!(option_letter(KeyCode::Char('z'), 4), None);
    }

    #[test]
    fn option_letters_stop_at_option_count() {
        assert_eq!(option_letter(KeyCode::Char('e'), 4), None);
        assert_eq!(option_letter(KeyCode::Char('f'), 4), None);
        assert_eq!(option_letter(KeyCode::Char('c'), 3), Some(2));
        assert_eq!(option_letter(KeyCode::Char('d'), 3), None);
        assert_eq!(option_letter(KeyCode::Char('e'), 6), Some(4));
    }
}
