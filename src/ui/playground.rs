//! Playground screen: editor on the left, console on the right

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout::{cursor_spans, hint_line, panel};
use crate::playground::console::WELCOME;
use crate::playground::{Console, Editor, Playground};
use crate::syntax::highlight_code;
use crate::theme::Theme;

/// Editor lines with a gutter, plus a block cursor when editing
pub fn editor_lines(editor: &Editor, height: usize, editing: bool, theme: &Theme) -> Vec<Line<'static>> {
    let highlighted = highlight_code(&editor.text(), theme);
    let (cursor_row, cursor_col) = editor.cursor();
    let gutter = Style::default().fg(theme.fg_muted).bg(theme.bg_secondary);

    highlighted
        .into_iter()
        .enumerate()
        .skip(editor.scroll_offset)
        .take(height)
        .map(|(row, line)| {
            let mut spans = vec![Span::styled(format!("{:>3} ", row + 1), gutter)];
            if editing && row == cursor_row {
                spans.extend(with_cursor(&editor.lines()[row], cursor_col, theme));
            } else {
                spans.extend(line.spans);
            }
            Line::from(spans)
        })
        .collect()
}

fn with_cursor(line: &str, col: usize, theme: &Theme) -> Vec<Span<'static>> {
    cursor_spans(
        line,
        col,
        Style::default().fg(theme.fg_primary).bg(theme.bg_secondary),
        Style::default().fg(theme.bg_primary).bg(theme.cursor),
    )
}

/// Console entries, newest last, ending `scroll_back` lines above the bottom
pub fn console_lines(console: &Console, height: usize, theme: &Theme) -> Vec<Line<'static>> {
    if console.is_empty() {
        return vec![Line::from(Span::styled(WELCOME, Style::default().fg(theme.fg_muted)))];
    }

    let mut lines = Vec::new();
    for entry in console.entries() {
        lines.push(Line::from(Span::styled(
            format!("[{}]", entry.time_label()),
            Style::default().fg(theme.info).add_modifier(Modifier::DIM),
        )));
        for out in entry.output.lines() {
            lines.push(Line::from(Span::styled(out.to_string(), Style::default().fg(theme.fg_primary))));
        }
        lines.push(Line::from(""));
    }

    let end = lines.len().saturating_sub(console.scroll_back.min(lines.len()));
    let start = end.saturating_sub(height);
    lines.drain(start..end).collect()
}

pub fn draw(frame: &mut Frame, area: Rect, playground: &mut Playground, editing: bool, theme: &Theme) {
    let [panels, hint_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    let [editor_area, console_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(panels);

    let title = if editing { " Editor (editing) " } else { " Editor " };
    let block = panel(title, editing, theme);
    let inner = block.inner(editor_area);
    frame.render_widget(block, editor_area);

    let height = inner.height as usize;
    playground.editor.ensure_cursor_visible(height);
    let lines = editor_lines(&playground.editor, height, editing, theme);
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(theme.bg_secondary)), inner);

    let block = panel(" Console ", false, theme);
    let inner = block.inner(console_area);
    frame.render_widget(block, console_area);
    let lines = console_lines(&playground.console, inner.height as usize, theme);
    frame.render_widget(Paragraph::new(lines), inner);

    let hint = if editing {
        "[Ctrl-R] Run    [Esc] Stop editing"
    } else {
        "[i] Edit    [x/Ctrl-R] Run    [r] Clear console    [j/k] Scroll console    :example <n>"
    };
    frame.render_widget(Paragraph::new(hint_line(hint, theme)), hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn empty_console_shows_welcome() {
        let theme = Theme::default();
        let lines = console_lines(&Console::default(), 10, &theme);
        assert_eq!(text(&lines[0]), WELCOME);
    }

    #[test]
    fn console_entries_carry_timestamps() {
        let theme = Theme::default();
        let mut console = Console::default();
        let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        console.push_at(at, "line one\nline two");
        let lines = console_lines(&console, 10, &theme);
        assert_eq!(text(&lines[0]), "[09:05:07]");
        assert_eq!(text(&lines[1]), "line one");
        assert_eq!(text(&lines[2]), "line two");
    }

    #[test]
    fn console_keeps_newest_lines_in_view() {
        let theme = Theme::default();
        let mut console = Console::default();
        for i in 0..5 {
            console.push(format!("run {}", i));
        }
        let lines = console_lines(&console, 3, &theme);
        assert_eq!(lines.len(), 3);
        assert_eq!(text(&lines[1]), "run 4");
    }

    #[test]
    fn editor_gutter_numbers_lines() {
        let theme = Theme::default();
        let mut editor = Editor::default();
        editor.set_text("let a = 1\nlet b = 2");
        let lines = editor_lines(&editor, 10, false, &theme);
        assert_eq!(lines.len(), 2);
        assert!(text(&lines[1]).starts_with("  2 "));
        assert!(text(&lines[1]).ends_with("let b = 2"));
    }

    #[test]
    fn cursor_is_drawn_past_line_end() {
        let theme = Theme::default();
        let spans = with_cursor("ab", 2, &theme);
        assert_eq!(spans[1].content, " ");
        assert_eq!(spans[0].content, "ab");
    }
}
