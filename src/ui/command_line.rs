//! Bottom status row: messages, or the `:` prompt with command hints

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout::cursor_spans;
use crate::app::command::suggestions;
use crate::app::state::CommandLineState;
use crate::theme::Theme;

const IDLE_HINT: &str = "Press : for commands, ? for help";

pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, theme: &Theme) {
    let line = if state.is_input_mode() { prompt_line(state, theme) } else { status_line(state, theme) };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg_primary)), area);
}

fn status_line(state: &CommandLineState, theme: &Theme) -> Line<'static> {
    match &state.message {
        Some(msg) if state.is_error => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(theme.error)))
        }
        Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(theme.fg_muted))),
        None => Line::from(Span::styled(IDLE_HINT, Style::default().fg(theme.fg_muted))),
    }
}

/// `:input` with a cursor, followed by what the typed command expects
fn prompt_line(state: &CommandLineState, theme: &Theme) -> Line<'static> {
    let text = Style::default().fg(theme.accent_primary);
    let cursor =
        Style::default().fg(theme.bg_primary).bg(theme.fg_primary).add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(":", text)];
    spans.extend(cursor_spans(&state.input, state.cursor, text, cursor));
    spans.extend(hint_spans(&state.input, theme));
    Line::from(spans)
}

fn hint_spans(input: &str, theme: &Theme) -> Vec<Span<'static>> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let muted = Style::default().fg(theme.fg_muted);

    match suggestions(input).as_slice() {
        [] => vec![Span::styled("   unknown command", Style::default().fg(theme.warning))],
        [only] => vec![
            Span::styled(format!("   {}", only.usage), Style::default().fg(theme.syntax_function)),
            Span::styled(format!("  {}", only.summary), muted),
        ],
        several => {
            let names: Vec<&str> = several.iter().map(|info| info.name).collect();
            vec![Span::styled(format!("   {}", names.join("  ")), muted)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn typed(input: &str) -> CommandLineState {
        let mut state = CommandLineState::default();
        state.enter_command_mode();
        input.chars().for_each(|c| state.insert_char(c));
        state
    }

    #[test]
    fn idle_shows_hint() {
        let theme = Theme::default();
        let state = CommandLineState::default();
        assert_eq!(text(&status_line(&state, &theme)), IDLE_HINT);
    }

    #[test]
    fn errors_use_error_color() {
        let theme = Theme::default();
        let mut state = CommandLineState::default();
        state.set_error("Unknown command: bogus");
        let line = status_line(&state, &theme);
        assert_eq!(line.spans[0].style.fg, Some(theme.error));
    }

    #[test]
    fn prompt_ends_with_cursor_cell() {
        let theme = Theme::default();
        assert_eq!(text(&prompt_line(&typed(""), &theme)), ": ");
    }

    #[test]
    fn single_match_shows_usage() {
        let theme = Theme::default();
        let rendered = text(&prompt_line(&typed("gra"), &theme));
        assert!(rendered.starts_with(":gra "));
        assert!(rendered.contains("grade [n]"));
        assert!(rendered.contains("Check an exercise"));
    }

    #[test]
    fn argument_keeps_usage_visible() {
        let theme = Theme::default();
        let rendered = text(&prompt_line(&typed("theme li"), &theme));
        assert!(rendered.contains("theme [dark|light|toggle]"));
    }

    #[test]
    fn ambiguous_prefix_lists_names() {
        let theme = Theme::default();
        let rendered = text(&prompt_line(&typed("c"), &theme));
        assert!(rendered.ends_with("clear  classify"));
    }

    #[test]
    fn unknown_word_is_flagged() {
        let theme = Theme::default();
        let rendered = text(&prompt_line(&typed("frob"), &theme));
        assert!(rendered.ends_with("unknown command"));
    }
}
