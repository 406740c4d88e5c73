//! Concept gallery screen

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::layout::{hint_line, panel};
use crate::gallery::{CONCEPTS, GalleryState, tooltips_for};
use crate::syntax::highlight_code;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, gallery: &GalleryState, theme: &Theme) {
    let [list_area, card_area] =
        Layout::horizontal([Constraint::Length(26), Constraint::Min(20)]).areas(area);

    let lines: Vec<Line> = CONCEPTS
        .iter()
        .enumerate()
        .map(|(i, concept)| {
            let icon = if gallery.examples_visible(i) { "\u{25BC}" } else { "\u{25B6}" };
            let style = if i == gallery.selected {
                Style::default()
                    .fg(theme.bg_primary)
                    .bg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_secondary)
            };
            Line::from(Span::styled(format!("{} {}", icon, concept.title), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(panel(" Concepts ", true, theme)), list_area);

    let concept = &CONCEPTS[gallery.selected];
    let block = panel(concept.title, false, theme);
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let mut lines = vec![
        Line::from(Span::styled(concept.summary, Style::default().fg(theme.fg_primary))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[Enter] {}", gallery.toggle_label(gallery.selected)),
            Style::default().fg(theme.info),
        )),
        Line::from(""),
    ];

    if gallery.examples_visible(gallery.selected) {
        lines.extend(highlight_code(concept.example, theme));
        lines.push(Line::from(""));

        for (token, tip) in tooltips_for(concept.example) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>12} ", token),
                    Style::default().fg(theme.syntax_function).add_modifier(Modifier::BOLD),
                ),
                Span::styled(tip, Style::default().fg(theme.fg_muted)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(hint_line("[j/k] Browse    [Enter] Toggle examples    [Tab] Next section", theme));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
