//! Landing screen: typed-out title and the hero counters

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::LandingAnimation;
use crate::gallery::HeroStats;
use crate::theme::Theme;

const TAGLINE: &str = "Learn functional programming with F#, one concept at a time";
const PROMPT: &str = "Press any key to begin...";

/// Title padded to full width so centering doesn't shift while typing
fn visible_title(chars: usize) -> String {
    let len = LandingAnimation::TITLE.chars().count();
    let shown: String = LandingAnimation::TITLE.chars().take(chars).collect();
    format!("{}{}", shown, " ".repeat(len.saturating_sub(chars)))
}

/// One line with every counter, e.g. `15 Concepts   8 Exercises`
fn counters_line(values: &[(&'static str, u32)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (label, value)) in values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("      "));
        }
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", label), Style::default().fg(theme.fg_secondary)));
    }
    Line::from(spans)
}

fn row(area: Rect, y: u16) -> Option<Rect> {
    (y < area.y + area.height).then(|| Rect { x: area.x, y, width: area.width, height: 1 })
}

/// Draw the landing screen
pub fn draw(frame: &mut Frame, area: Rect, animation: &LandingAnimation, hero: &HeroStats, theme: &Theme) {
    let bg_style = Style::default().bg(theme.bg_primary);
    frame.render_widget(Paragraph::new("").style(bg_style), area);

    let [_, content, _] = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Min(8),
        Constraint::Percentage(20),
    ])
    .areas(area);

    if let Some(title_area) = row(content, content.y) {
        let title = Paragraph::new(visible_title(animation.title_chars()))
            .style(
                Style::default()
                    .fg(theme.accent_primary)
                    .bg(theme.bg_primary)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, title_area);
    }

    if animation.show_tagline() {
        if let Some(tagline_area) = row(content, content.y + 2) {
            let tagline = Paragraph::new(TAGLINE)
                .style(Style::default().fg(theme.fg_muted).bg(theme.bg_primary))
                .alignment(Alignment::Center);
            frame.render_widget(tagline, tagline_area);
        }
    }

    if let Some(stats_area) = row(content, content.y + 5) {
        let stats = Paragraph::new(counters_line(&hero.values(Instant::now()), theme))
            .style(bg_style)
            .alignment(Alignment::Center);
        frame.render_widget(stats, stats_area);
    }

    // Blinking prompt
    if animation.complete {
        let blink = (animation.start_time.elapsed().as_millis() / 500) % 2 == 0;
        if let (true, Some(prompt_area)) = (blink, row(content, content.y + 8)) {
            let prompt = Paragraph::new(PROMPT)
                .style(Style::default().fg(theme.fg_muted).bg(theme.bg_primary))
                .alignment(Alignment::Center);
            frame.render_widget(prompt, prompt_area);
        }
    }
}
