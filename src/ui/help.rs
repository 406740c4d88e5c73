//! Key binding reference

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::layout::panel;
use crate::app::command::COMMANDS;
use crate::theme::Theme;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Everywhere",
        &[
            ("Tab / Shift-Tab", "Next / previous section"),
            ("1-5", "Jump to a section"),
            ("t", "Toggle dark / light theme"),
            (":", "Command line"),
            ("?", "This help"),
            ("Ctrl-C, :q", "Quit"),
        ],
    ),
    (
        "Quiz",
        &[
            ("j / k", "Highlight an option"),
            ("Enter / Space, a-d", "Answer"),
            ("n / l / Right", "Next question (finishes after the last)"),
            ("p / h / Left", "Previous question"),
            ("r", "Restart from the results"),
        ],
    ),
    (
        "Playground and exercises",
        &[
            ("i", "Start editing"),
            ("Esc", "Stop editing"),
            ("Ctrl-R, x", "Run / check"),
            ("r", "Clear console / solution"),
        ],
    ),
];

fn heading(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
    ))
}

fn entry(keys: String, what: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<28}", keys), Style::default().fg(theme.syntax_function)),
        Span::styled(what.to_string(), Style::default().fg(theme.fg_secondary)),
    ])
}

pub fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(heading(title, theme));
        for (keys, what) in *bindings {
            lines.push(entry(keys.to_string(), what, theme));
        }
        lines.push(Line::from(""));
    }

    lines.push(heading("Commands", theme));
    for info in COMMANDS {
        let mut keys = format!(":{}", info.usage);
        if let Some(alias) = info.aliases.first() {
            keys.push_str(&format!(" (:{})", alias));
        }
        lines.push(entry(keys, info.summary, theme));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press Esc or ? to go back", Style::default().fg(theme.fg_muted))));

    lines
}

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(help_lines(theme)).block(panel(" Help ", true, theme)).wrap(Wrap { trim: false }),
        area,
    );
}
