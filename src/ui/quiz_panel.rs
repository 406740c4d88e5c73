//! Quiz screen: one question at a time, then the results

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
};

use super::layout::{centered_rect, hint_line, panel};
use crate::app::state::QuizState;
use crate::quiz::{Question, QuizEngine};
use crate::syntax::highlight_code;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, quiz: &QuizState, theme: &Theme) {
    let area = centered_rect(90, 96, area);
    let [gauge_area, body_area, hint_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(5), Constraint::Length(1)])
            .areas(area);

    let engine = &quiz.engine;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_primary).bg(theme.bg_tertiary))
        .ratio(engine.progress().clamp(0.0, 1.0))
        .label(progress_label(engine));
    frame.render_widget(gauge, gauge_area);

    if engine.is_completed() {
        let block = panel(" Quiz Results ", true, theme);
        frame.render_widget(
            Paragraph::new(results_lines(engine, theme))
                .block(block)
                .scroll((u16::try_from(quiz.results_scroll).unwrap_or(u16::MAX), 0)),
            body_area,
        );
        frame.render_widget(
            Paragraph::new(hint_line("[r] Restart quiz    [j/k] Scroll", theme)),
            hint_area,
        );
    } else {
        let block = panel(" Quiz ", true, theme);
        frame.render_widget(
            Paragraph::new(question_lines(engine, quiz.highlighted, theme))
                .block(block)
                .wrap(Wrap { trim: false }),
            body_area,
        );
        frame.render_widget(
            Paragraph::new(hint_line(&answer_hint(engine), theme)),
            hint_area,
        );
    }
}

fn answer_hint(engine: &QuizEngine) -> String {
    let last = engine.current_question().options.len().saturating_sub(1).min(5);
    format!(
        "[j/k] Highlight    [Enter/a-{}] Answer    [n/l] Next    [p/h] Previous",
        Question::option_label(last).to_ascii_lowercase()
    )
}

fn progress_label(engine: &QuizEngine) -> String {
    if engine.is_completed() {
        "Completed".to_string()
    } else {
        format!("Question {} of {}", engine.current_index() + 1, engine.question_count())
    }
}

/// Prompt, code, options and (once answered) the explanation
pub fn question_lines(engine: &QuizEngine, highlighted: usize, theme: &Theme) -> Vec<Line<'static>> {
    let index = engine.current_index();
    let question = engine.current_question();
    let answer = engine.answer(index);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Question {} of {}", index + 1, engine.question_count()),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if !question.code.is_empty() {
        lines.extend(highlight_code(&question.code, theme));
        lines.push(Line::from(""));
    }

    for (i, option) in question.options.iter().enumerate() {
        lines.push(option_line(question, i, option, highlighted, answer, theme));
    }

    if let Some(selected) = answer {
        let (verdict, color) = if question.is_correct(selected) {
            ("\u{2713} Correct!", theme.success)
        } else {
            ("\u{2717} Incorrect", theme.error)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            question.explanation.clone(),
            Style::default().fg(theme.fg_secondary),
        )));
    }

    lines
}

fn option_line(
    question: &Question,
    i: usize,
    option: &str,
    highlighted: usize,
    answer: Option<usize>,
    theme: &Theme,
) -> Line<'static> {
    let chosen = answer == Some(i);
    let prefix = if chosen { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○
    let cursor = if i == highlighted { "\u{25B8}" } else { " " };

    let mut style = if i == highlighted {
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_secondary)
    };
    let mut marker = "";
    if answer.is_some() {
        if question.is_correct(i) {
            style = style.fg(theme.success);
            marker = " \u{2713}";
        } else if chosen {
            style = style.fg(theme.error);
            marker = " \u{2717}";
        }
    }

    Line::from(Span::styled(
        format!("{} {} {}) {}{}", cursor, prefix, Question::option_label(i), option, marker),
        style,
    ))
}

/// Score, percentage and per-question breakdown
pub fn results_lines(engine: &QuizEngine, theme: &Theme) -> Vec<Line<'static>> {
    let score = engine.score();
    let headline_color = if score.is_perfect() { theme.success } else { theme.accent_secondary };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}/{} correct", score.correct, score.total),
            Style::default().fg(headline_color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            format!("{:.1}%", score.percentage()),
            Style::default().fg(theme.fg_primary),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for result in engine.breakdown() {
        let question = &engine.questions()[result.index];
        let (marker, color) =
            if result.is_correct { ("\u{2713}", theme.success) } else { ("\u{2717}", theme.error) };
        let selected = result
            .selected
            .map(|s| Question::option_label(s).to_string())
            .unwrap_or_else(|| "-".to_string());

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(format!("Q{} ", result.index + 1), Style::default().fg(theme.fg_muted)),
            Span::styled(question.prompt.clone(), Style::default().fg(theme.fg_primary)),
        ]));
        if !result.is_correct {
            lines.push(Line::from(Span::styled(
                format!(
                    "     your answer: {}   correct: {}) {}",
                    selected,
                    Question::option_label(result.correct_index),
                    question.options[result.correct_index]
                ),
                Style::default().fg(theme.fg_muted),
            )));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn explanation_hidden_until_answered() {
        let theme = Theme::default();
        let mut engine = QuizEngine::builtin();
        let explanation = engine.current_question().explanation.clone();

        assert!(!text(&question_lines(&engine, 0, &theme)).contains(&explanation));
        engine.record_answer(1);
        let rendered = text(&question_lines(&engine, 1, &theme));
        assert!(rendered.contains(&explanation));
        assert!(rendered.contains("\u{2713} Correct!"));
    }

    #[test]
    fn wrong_answer_is_marked() {
        let theme = Theme::default();
        let mut engine = QuizEngine::builtin();
        engine.record_answer(0);
        let rendered = text(&question_lines(&engine, 0, &theme));
        assert!(rendered.contains("\u{2717} Incorrect"));
    }

    #[test]
    fn results_show_score_and_percentage() {
        let theme = Theme::default();
        let mut engine = QuizEngine::builtin();
        for answer in [1, 1, 0, 2, 1] {
            engine.record_answer(answer);
            engine.advance();
        }
        let rendered = text(&results_lines(&engine, &theme));
        assert!(rendered.contains("4/5 correct"));
        assert!(rendered.contains("80.0%"));
        assert!(rendered.contains("your answer: A"));
    }

    #[test]
    fn answer_hint_names_the_last_letter() {
        let engine = QuizEngine::builtin();
        assert!(answer_hint(&engine).contains("[Enter/a-d] Answer"));
    }

    #[test]
    fn results_scroll_stays_inside_the_results() {
        let theme = Theme::default();
        let mut quiz = QuizState::new(QuizEngine::builtin());
        quiz.engine.play(&[0, 0, 0, 0, 0]);
        for _ in 0..100 {
            quiz.scroll_results_down();
        }
        let line_count = results_lines(&quiz.engine, &theme).len();
        assert_eq!(quiz.results_scroll, quiz.results_scroll_limit());
        assert!(quiz.results_scroll < line_count);
    }

    #[test]
    fn progress_label_counts_from_one() {
        let engine = QuizEngine::builtin();
        assert_eq!(progress_label(&engine), "Question 1 of 5");
    }
}
