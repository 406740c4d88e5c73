//! Exercises screen

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Wrap},
};

use super::layout::{hint_line, panel};
use super::playground::editor_lines;
use crate::app::state::ExerciseState;
use crate::demos::fsharp_list;
use crate::exercises::{EXERCISES, Exercise, Feedback, Verdict};
use crate::theme::Theme;

/// Statement, starter hint and test cases with their marks
fn statement_lines(exercise: &Exercise, verdict: Option<&Verdict>, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(exercise.statement, Style::default().fg(theme.fg_primary))),
        Line::from(""),
    ];

    if !exercise.test_cases.is_empty() {
        lines.push(Line::from(Span::styled(
            "Test cases",
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )));
    }
    for case in exercise.test_cases {
        let mut spans = vec![Span::styled(
            format!("  n = {} \u{2192} {}", case.input, fsharp_list(case.expected)),
            Style::default().fg(theme.fg_secondary),
        )];
        if let Some(v) = verdict.filter(|v| v.feedback == Feedback::PerTestCase) {
            let color = if v.passed { theme.success } else { theme.error };
            spans.push(Span::styled(format!("   {}", v.message), Style::default().fg(color)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

pub fn draw(frame: &mut Frame, area: Rect, exercises: &mut ExerciseState, editing: bool, theme: &Theme) {
    let [tabs_area, statement_area, editor_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .areas(area);

    let titles: Vec<String> =
        EXERCISES.iter().map(|e| format!(" {}. {} ", e.number, e.title)).collect();
    let tabs = Tabs::new(titles)
        .select(exercises.selected)
        .style(Style::default().fg(theme.fg_muted))
        .highlight_style(Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, tabs_area);

    let exercise = &EXERCISES[exercises.selected];
    let verdict = exercises.verdicts[exercises.selected].as_ref();
    frame.render_widget(
        Paragraph::new(statement_lines(exercise, verdict, theme))
            .block(panel(" Statement ", false, theme))
            .wrap(Wrap { trim: true }),
        statement_area,
    );

    let title = if editing { " Your solution (editing) " } else { " Your solution " };
    let block = panel(title, editing, theme);
    let inner = block.inner(editor_area);
    frame.render_widget(block, editor_area);

    let height = inner.height as usize;
    let editor = exercises.current_solution_mut();
    editor.ensure_cursor_visible(height);
    let lines = if editor.is_empty() && !editing {
        vec![hint_line("Press i to start writing your solution", theme)]
    } else {
        editor_lines(editor, height, editing, theme)
    };
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(theme.bg_secondary)), inner);

    let hint = if editing {
        "[Ctrl-R] Check    [Esc] Stop editing"
    } else {
        "[h/l] Switch exercise    [i] Edit    [x/Enter] Check    [r] Clear solution"
    };
    frame.render_widget(Paragraph::new(hint_line(hint, theme)), hint_area);
}
