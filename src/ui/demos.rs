//! Interactive demos screen

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::layout::{hint_line, panel};
use crate::app::state::{DemoField, DemoState};
use crate::demos::{CLASSIFY_SOURCE, LIST_SOURCE, fsharp_list};
use crate::syntax::highlight_code;
use crate::theme::Theme;

fn input_line(label: &str, value: &str, focused: bool, editing: bool, theme: &Theme) -> Line<'static> {
    let style = if focused && editing {
        Style::default().fg(theme.bg_primary).bg(theme.accent_primary)
    } else if focused {
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(theme.fg_secondary)
    };
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(theme.fg_muted)),
        Span::styled(format!(" {} ", value), style),
    ])
}

fn list_lines(demos: &DemoState, editing: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = highlight_code(LIST_SOURCE, theme);
    lines.push(Line::from(""));
    lines.push(input_line("n", &demos.list_input, demos.focus == DemoField::List, editing, theme));
    lines.push(Line::from(""));

    match &demos.list_result {
        Some(Ok(result)) => {
            lines.push(Line::from(vec![
                Span::styled("Original:  ", Style::default().fg(theme.fg_muted)),
                Span::styled(fsharp_list(&result.original), Style::default().fg(theme.fg_primary)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Processed: ", Style::default().fg(theme.fg_muted)),
                Span::styled(fsharp_list(&result.processed), Style::default().fg(theme.success)),
            ]));
        }
        Some(Err(e)) => {
            lines.push(Line::from(Span::styled(e.to_string(), Style::default().fg(theme.error))))
        }
        None => {}
    }
    lines
}

fn pattern_lines(demos: &DemoState, editing: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = highlight_code(CLASSIFY_SOURCE, theme);
    lines.push(Line::from(""));
    lines.push(input_line(
        "n",
        &demos.pattern_input,
        demos.focus == DemoField::Pattern,
        editing,
        theme,
    ));
    lines.push(Line::from(""));

    if let Some((n, classification)) = demos.pattern_result {
        lines.push(Line::from(vec![
            Span::styled(format!("clasificarNumero {} = ", n), Style::default().fg(theme.fg_muted)),
            Span::styled(
                format!("\"{}\"", classification),
                Style::default().fg(theme.syntax_string).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines
}

pub fn draw(frame: &mut Frame, area: Rect, demos: &DemoState, editing: bool, theme: &Theme) {
    let [list_area, pattern_area, hint_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Min(6), Constraint::Length(1)])
            .areas(area);

    let list_block = panel(" Lists and pipelines ", demos.focus == DemoField::List, theme);
    frame.render_widget(
        Paragraph::new(list_lines(demos, editing, theme))
            .block(list_block)
            .wrap(Wrap { trim: false }),
        list_area,
    );

    let pattern_block = panel(" Pattern matching ", demos.focus == DemoField::Pattern, theme);
    frame.render_widget(
        Paragraph::new(pattern_lines(demos, editing, theme))
            .block(pattern_block)
            .wrap(Wrap { trim: false }),
        pattern_area,
    );

    let hint = if editing {
        "Type a number    [Enter] Evaluate    [Tab] Switch field    [Esc] Done"
    } else {
        "[j/k] Switch demo    [i] Edit input    [Enter] Evaluate"
    };
    frame.render_widget(Paragraph::new(hint_line(hint, theme)), hint_area);
}
