//! Syntax highlighting using syntect
//!
//! syntect ships no F# grammar, so snippets are highlighted with the closest
//! ML-family grammar available. If none can be found, a keyword-based
//! highlighter driven by the active theme is used instead.

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::theme::Theme;

/// Global syntax set with all default syntaxes
static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Global theme set (only used for its token colours)
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Grammars to try for F#, in order of preference
const FSHARP_CANDIDATES: &[&str] = &["F#", "OCaml", "Haskell"];

const FSHARP_KEYWORDS: &[&str] = &[
    "let", "rec", "mutable", "fun", "function", "match", "with", "when", "if", "then", "else",
    "elif", "for", "in", "to", "downto", "do", "done", "while", "yield", "return", "type", "of",
    "and", "or", "not", "module", "open", "namespace", "member", "static", "override", "new",
    "interface", "inherit", "abstract", "use", "async", "task", "true", "false", "null", "try",
    "finally", "raise", "begin", "end",
];

const FSHARP_TYPES: &[&str] = &[
    "int", "float", "string", "bool", "char", "unit", "decimal", "byte", "int64", "list", "option",
    "array", "seq", "Some", "None", "Ok", "Error", "List", "Seq", "Array", "Map", "Set", "Option",
];

/// Find the grammar used for F# snippets
fn find_fsharp_syntax() -> Option<&'static SyntaxReference> {
    SYNTAX_SET.find_syntax_by_extension("fs").filter(|s| s.name != "Plain Text").or_else(|| {
        FSHARP_CANDIDATES.iter().find_map(|name| SYNTAX_SET.find_syntax_by_name(name))
    })
}

/// Convert a syntect color to a ratatui color
fn syntect_to_ratatui_color(color: syntect::highlighting::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Highlight an F# snippet, keeping parser state across lines
pub fn highlight_code(code: &str, theme: &Theme) -> Vec<Line<'static>> {
    let syntect_theme = THEME_SET.themes.get(theme.syntect_theme());

    if let (Some(syntax), Some(syntect_theme)) = (find_fsharp_syntax(), syntect_theme) {
        let mut highlighter = HighlightLines::new(syntax, syntect_theme);
        let mut lines = Vec::new();

        for line in code.split('\n') {
            match highlighter.highlight_line(line, &SYNTAX_SET) {
                Ok(ranges) if !ranges.is_empty() => {
                    let spans = ranges
                        .into_iter()
                        .map(|(style, text)| {
                            let fg = syntect_to_ratatui_color(style.foreground);
                            let mut ratatui_style = Style::default().fg(fg).bg(theme.bg_secondary);

                            if style.font_style.contains(FontStyle::BOLD) {
                                ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
                            }
                            if style.font_style.contains(FontStyle::ITALIC) {
                                ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
                            }

                            Span::styled(text.to_string(), ratatui_style)
                        })
                        .collect::<Vec<_>>();
                    lines.push(Line::from(spans));
                }
                Ok(_) => lines.push(Line::from(Span::styled(
                    String::new(),
                    Style::default().bg(theme.bg_secondary),
                ))),
                Err(e) => {
                    tracing::warn!("syntect failed on a line, using basic highlighting: {}", e);
                    lines.push(Line::from(highlight_basic(line, theme)));
                }
            }
        }
        return lines;
    }

    code.split('\n').map(|line| Line::from(highlight_basic(line, theme))).collect()
}

/// Keyword-based highlighting as fallback
pub fn highlight_basic(line: &str, theme: &Theme) -> Vec<Span<'static>> {
    let base_style = Style::default().fg(theme.fg_primary).bg(theme.bg_secondary);

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // String literals
            '"' => {
                flush_word(&mut current, &mut spans, base_style, theme);
                let mut string_content = String::from('"');
                let mut escaped = false;
                for ch in chars.by_ref() {
                    string_content.push(ch);
                    if escaped {
                        escaped = false;
                    } else if ch == '\\' {
                        escaped = true;
                    } else if ch == '"' {
                        break;
                    }
                }
                spans.push(Span::styled(
                    string_content,
                    Style::default().fg(theme.syntax_string).bg(theme.bg_secondary),
                ));
            }
            // Line comments
            '/' if chars.peek() == Some(&'/') => {
                flush_word(&mut current, &mut spans, base_style, theme);
                let comment: String = std::iter::once(c).chain(chars.by_ref()).collect();
                spans.push(Span::styled(
                    comment,
                    Style::default().fg(theme.syntax_comment).bg(theme.bg_secondary),
                ));
            }
            // Numbers
            '0'..='9'
                if current.is_empty()
                    || !current.chars().last().is_some_and(|c| c.is_alphanumeric() || c == '_') =>
            {
                flush_word(&mut current, &mut spans, base_style, theme);
                let mut number = String::from(c);
                while let Some(&ch) = chars.peek() {
                    if ch.is_ascii_digit() || ch == '_' {
                        number.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                spans.push(Span::styled(
                    number,
                    Style::default().fg(theme.syntax_number).bg(theme.bg_secondary),
                ));
            }
            // Identifiers, including qualified names like List.map
            c if c.is_alphanumeric() || c == '_' || (c == '.' && !current.is_empty()) => {
                current.push(c);
            }
            // Operators and punctuation
            _ => {
                flush_word(&mut current, &mut spans, base_style, theme);
                let style = if "+-*/%=<>!&|^~?:;,.()[]{}@".contains(c) {
                    Style::default().fg(theme.syntax_operator).bg(theme.bg_secondary)
                } else {
                    base_style
                };
                spans.push(Span::styled(c.to_string(), style));
            }
        }
    }

    flush_word(&mut current, &mut spans, base_style, theme);

    if spans.is_empty() {
        spans.push(Span::styled(line.to_string(), base_style));
    }

    spans
}

fn flush_word(word: &mut String, spans: &mut Vec<Span<'static>>, base: Style, theme: &Theme) {
    if !word.is_empty() {
        spans.push(make_span(word, base, theme));
        word.clear();
    }
}

/// Create a span with appropriate styling based on whether it's a keyword/type
fn make_span(word: &str, base_style: Style, theme: &Theme) -> Span<'static> {
    let style = if FSHARP_KEYWORDS.contains(&word) {
        Style::default()
            .fg(theme.syntax_keyword)
            .bg(theme.bg_secondary)
            .add_modifier(Modifier::BOLD)
    } else if FSHARP_TYPES.contains(&word) {
        Style::default().fg(theme.syntax_type).bg(theme.bg_secondary)
    } else if word.contains('.') {
        // Module-qualified function such as List.map
        Style::default().fg(theme.syntax_function).bg(theme.bg_secondary)
    } else if word.starts_with(|c: char| c.is_uppercase()) && word.len() > 1 {
        // Likely a type or union case
        Style::default().fg(theme.syntax_type).bg(theme.bg_secondary)
    } else {
        base_style
    };

    Span::styled(word.to_string(), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn some_ml_grammar_is_available() {
        assert!(find_fsharp_syntax().is_some());
    }

    #[test]
    fn highlight_keeps_line_count() {
        let theme = Theme::default();
        let lines = highlight_code("let x = 5\n\nprintfn \"%d\" x", &theme);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn highlight_light_theme() {
        let theme = Theme::for_mode(crate::theme::ThemeMode::Light);
        let lines = highlight_code("match x with\n| _ -> ()", &theme);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn basic_highlight_preserves_text() {
        let theme = Theme::default();
        let line = "let y = x |> List.map (fun v -> v * 2) // doubled";
        assert_eq!(text_of(&highlight_basic(line, &theme)), line);
    }

    #[test]
    fn basic_highlight_marks_keywords() {
        let theme = Theme::default();
        let spans = highlight_basic("let x = 5", &theme);
        let let_span = spans.iter().find(|s| s.content == "let").unwrap();
        assert_eq!(let_span.style.fg, Some(theme.syntax_keyword));
    }

    #[test]
    fn basic_highlight_string() {
        let theme = Theme::default();
        let spans = highlight_basic("printfn \"%s\" nombre", &theme);
        let string_span = spans.iter().find(|s| s.content == "\"%s\"").unwrap();
        assert_eq!(string_span.style.fg, Some(theme.syntax_string));
    }

    #[test]
    fn basic_highlight_qualified_function() {
        let theme = Theme::default();
        let spans = highlight_basic("List.filter", &theme);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style.fg, Some(theme.syntax_function));
    }

    #[test]
    fn empty_line_yields_one_span() {
        let theme = Theme::default();
        assert_eq!(highlight_basic("", &theme).len(), 1);
    }
}
