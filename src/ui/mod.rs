//! UI rendering components

pub mod command_line;
pub mod demos;
pub mod exercises;
pub mod gallery;
pub mod help;
pub mod landing;
pub mod layout;
pub mod playground;
pub mod quiz_panel;
pub mod toast;

use ratatui::{Frame, style::Style, widgets::Block};

use crate::app::state::{AppState, Screen};
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let theme = Theme::for_mode(state.theme);
    let areas = layout::split_screen(frame.area());

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), frame.area());

    match state.screen {
        Screen::Landing => {
            landing::draw(frame, areas.body, &state.landing_animation, &state.hero, &theme);
        }
        Screen::Gallery => gallery::draw(frame, areas.body, &state.gallery, &theme),
        Screen::Demos => demos::draw(frame, areas.body, &state.demos, state.editing, &theme),
        Screen::Playground => {
            playground::draw(frame, areas.body, &mut state.playground, state.editing, &theme)
        }
        Screen::Exercises => {
            exercises::draw(frame, areas.body, &mut state.exercises, state.editing, &theme)
        }
        Screen::Quiz => quiz_panel::draw(frame, areas.body, &state.quiz, &theme),
        Screen::Help => help::draw(frame, areas.body, &theme),
    }

    if state.screen != Screen::Landing {
        layout::draw_nav(frame, areas.nav, state.screen, state.theme, &theme);
    }
    command_line::draw(frame, areas.command_line, &state.command_line, &theme);

    if let Some(notification) = &state.notification {
        toast::draw(frame, areas.body, notification, &theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn every_screen_renders() {
        let mut state = AppState::default();
        for screen in [
            Screen::Landing,
            Screen::Gallery,
            Screen::Demos,
            Screen::Playground,
            Screen::Exercises,
            Screen::Quiz,
            Screen::Help,
        ] {
            state.go_to(screen);
            render(&mut state);
        }
    }

    #[test]
    fn quiz_screen_shows_first_question() {
        let mut state = AppState::default();
        state.go_to(Screen::Quiz);
        let screen = render(&mut state);
        assert!(screen.contains("Question 1 of 5"));
    }

    #[test]
    fn results_screen_shows_percentage() {
        let mut state = AppState::default();
        for answer in [1, 1, 1, 2, 1] {
            state.quiz.engine.record_answer(answer);
            state.quiz.engine.advance();
        }
        state.go_to(Screen::Quiz);
        let screen = render(&mut state);
        assert!(screen.contains("5/5 correct"));
        assert!(screen.contains("100.0%"));
    }

    #[test]
    fn light_theme_renders() {
        let mut state = AppState::default();
        state.theme = crate::theme::ThemeMode::Light;
        state.go_to(Screen::Gallery);
        let screen = render(&mut state);
        assert!(screen.contains("Concepts"));
    }

    #[test]
    fn toast_is_drawn() {
        let mut state = AppState::default();
        state.go_to(Screen::Gallery);
        state.notify(crate::app::notification::Notification::success("Saved"));
        let screen = render(&mut state);
        assert!(screen.contains("Saved"));
    }
}
