//! Notification toast in the top-right corner

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::top_right_rect;
use crate::app::notification::{Notification, NotificationKind};
use crate::theme::Theme;

const MAX_WIDTH: u16 = 48;

pub fn draw(frame: &mut Frame, area: Rect, notification: &Notification, theme: &Theme) {
    let color = match notification.kind {
        NotificationKind::Success => theme.success,
        NotificationKind::Error => theme.error,
        NotificationKind::Info => theme.info,
    };

    let text = format!("{} {}", notification.kind.icon(), notification.message);
    let inner_width = MAX_WIDTH - 2;
    let wrapped = textwrap::wrap(&text, inner_width as usize);
    let width = wrapped.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 4;
    let height = wrapped.len() as u16 + 2;

    let toast_area = top_right_rect(width.min(MAX_WIDTH), height, area);
    frame.render_widget(Clear, toast_area);

    let lines: Vec<Line> = wrapped
        .into_iter()
        .map(|l| Line::from(Span::styled(l.into_owned(), Style::default().fg(theme.fg_primary))))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.bg_tertiary));
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), toast_area);
}
