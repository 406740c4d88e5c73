//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::Screen;
use crate::theme::{Theme, ThemeMode};

/// Screen split into navigation bar, body and command line
pub struct ScreenAreas {
    pub nav: Rect,
    pub body: Rect,
    pub command_line: Rect,
}

pub fn split_screen(area: Rect) -> ScreenAreas {
    let chunks =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
            .split(area);
    ScreenAreas { nav: chunks[0], body: chunks[1], command_line: chunks[2] }
}

/// Navigation bar: sections on the left, theme toggle on the right
pub fn draw_nav(frame: &mut Frame, area: Rect, current: Screen, mode: ThemeMode, theme: &Theme) {
    let mut spans = vec![Span::styled(
        " F# Master ",
        Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw(" "));

    for (i, screen) in Screen::SECTIONS.iter().enumerate() {
        let style = if *screen == current {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.fg_secondary)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, screen.title()), style));
    }

    let nav = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg_secondary));
    frame.render_widget(nav, area);

    let toggle = format!("{} [t] ", mode.toggle_icon());
    let width = toggle.chars().count() as u16 + 1;
    if area.width > width {
        let toggle_area = Rect { x: area.x + area.width - width, width, ..area };
        let toggle = Paragraph::new(toggle)
            .style(Style::default().fg(theme.warning).bg(theme.bg_secondary));
        frame.render_widget(toggle, toggle_area);
    }
}

/// Bordered block with a title in the theme's colors
pub fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused { theme.border_focused } else { theme.border };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.bg_primary).fg(theme.fg_primary))
}

/// One-line key hint at the bottom of a panel
pub fn hint_line(hint: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(hint.to_string(), Style::default().fg(theme.fg_muted)))
}

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Spans for `text` with a block cursor on char `col`. A cursor past the
/// end is drawn as a space; empty spans around it are left out.
pub fn cursor_spans(text: &str, col: usize, base: Style, cursor: Style) -> Vec<Span<'static>> {
    let before: String = text.chars().take(col).collect();
    let at = text.chars().nth(col).unwrap_or(' ');
    let after: String = text.chars().skip(col + 1).collect();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, base));
    }
    spans.push(Span::styled(at.to_string(), cursor));
    if !after.is_empty() {
        spans.push(Span::styled(after, base));
    }
    spans
}

/// Rectangle of the given size anchored to the top-right corner of `r`
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect { x: r.x + r.width - width, y: r.y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_reserves_nav_and_command_line() {
        let areas = split_screen(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.nav.height, 1);
        assert_eq!(areas.command_line.height, 1);
        assert_eq!(areas.body.height, 22);
        assert_eq!(areas.command_line.y, 23);
    }

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }

    fn contents(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn cursor_spans_split_on_chars() {
        let spans = cursor_spans("función", 2, Style::default(), Style::default());
        assert_eq!(contents(&spans), vec!["fu", "n", "ción"]);
    }

    #[test]
    fn cursor_spans_at_edges() {
        let spans = cursor_spans("abc", 0, Style::default(), Style::default());
        assert_eq!(contents(&spans), vec!["a", "bc"]);
        let spans = cursor_spans("abc", 3, Style::default(), Style::default());
        assert_eq!(contents(&spans), vec!["abc", " "]);
        let spans = cursor_spans("", 0, Style::default(), Style::default());
        assert_eq!(contents(&spans), vec![" "]);
    }

    #[test]
    fn top_right_rect_clamps() {
        let outer = Rect::new(0, 0, 30, 5);
        let rect = top_right_rect(40, 3, outer);
        assert_eq!(rect, Rect::new(0, 0, 30, 3));

        let rect = top_right_rect(10, 3, outer);
        assert_eq!(rect.x, 20);
    }
}
