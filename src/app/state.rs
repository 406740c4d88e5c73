//! Application state definitions

use std::time::{Duration, Instant};

use crate::demos::{self, Classification, DemoError, ListDemo};
use crate::exercises::{EXERCISES, Verdict};
use crate::gallery::{GalleryState, HeroStats};
use crate::playground::{Editor, Playground};
use crate::quiz::QuizEngine;
use crate::theme::ThemeMode;

use super::notification::Notification;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Landing,
    Gallery,
    Demos,
    Playground,
    Exercises,
    Quiz,
    Help,
}

impl Screen {
    /// Sections reachable from the navigation bar, in order
    pub const SECTIONS: [Screen; 5] =
        [Screen::Gallery, Screen::Demos, Screen::Playground, Screen::Exercises, Screen::Quiz];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Home",
            Screen::Gallery => "Concepts",
            Screen::Demos => "Demos",
            Screen::Playground => "Playground",
            Screen::Exercises => "Exercises",
            Screen::Quiz => "Quiz",
            Screen::Help => "Help",
        }
    }

    /// Position in the navigation bar, if this is a section
    pub fn section_index(&self) -> Option<usize> {
        Self::SECTIONS.iter().position(|s| s == self)
    }

    pub fn next_section(&self) -> Screen {
        let next = self.section_index().map_or(0, |i| (i + 1) % Self::SECTIONS.len());
        Self::SECTIONS[next]
    }

    pub fn previous_section(&self) -> Screen {
        let len = Self::SECTIONS.len();
        let prev = self.section_index().map_or(len - 1, |i| (i + len - 1) % len);
        Self::SECTIONS[prev]
    }

    /// Parse a section name as typed in `:goto`
    pub fn parse(name: &str) -> Option<Screen> {
        match name.trim().to_lowercase().as_str() {
            "home" | "landing" => Some(Screen::Landing),
            "concepts" | "gallery" | "c" => Some(Screen::Gallery),
            "demos" | "demo" | "d" => Some(Screen::Demos),
            "playground" | "editor" | "p" => Some(Screen::Playground),
            "exercises" | "exercise" | "e" => Some(Screen::Exercises),
            "quiz" | "q" => Some(Screen::Quiz),
            "help" | "h" => Some(Screen::Help),
            _ => None,
        }
    }
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Command line hidden or showing status
    #[default]
    Normal,
    /// Accepting : commands
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Current mode
    pub mode: CommandMode,
    /// Input buffer
    pub input: String,
    /// Cursor position in input
    pub cursor: usize,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 100;

    /// Start command mode
    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.cursor = 0;
        self.message = None;
        self.history_index = None;
    }

    /// Exit input mode
    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
        self.cursor = 0;
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at cursor (cursor is character index)
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    /// Add to history, skipping empty and repeated commands
    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    /// Navigate history up
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.history_index = match self.history_index {
            None => Some(self.history.len() - 1),
            Some(i) => Some(i.saturating_sub(1)),
        };
        if let Some(i) = self.history_index {
            self.input = self.history[i].clone();
            self.cursor = self.char_count();
        }
    }

    /// Navigate history down
    pub fn history_down(&mut self) {
        if let Some(i) = self.history_index {
            if i + 1 < self.history.len() {
                self.history_index = Some(i + 1);
                self.input = self.history[i + 1].clone();
                self.cursor = self.char_count();
            } else {
                self.history_index = None;
                self.input.clear();
                self.cursor = 0;
            }
        }
    }
}

/// State for the landing animation
#[derive(Debug, Clone)]
pub struct LandingAnimation {
    /// When the animation started
    pub start_time: Instant,
    /// Current animation frame (50ms per frame)
    pub current_frame: usize,
    /// Whether animation is complete
    pub complete: bool,
}

impl Default for LandingAnimation {
    fn default() -> Self {
        Self { start_time: Instant::now(), current_frame: 0, complete: false }
    }
}

impl LandingAnimation {
    pub const TITLE: &'static str = "F# MASTER";
    pub const MS_PER_FRAME: u128 = 50;
    pub const TITLE_END_FRAME: usize = 18;
    pub const TAGLINE_END_FRAME: usize = 28;

    /// Advance the animation based on elapsed time
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        let elapsed_ms = now.saturating_duration_since(self.start_time).as_millis();
        self.current_frame = (elapsed_ms / Self::MS_PER_FRAME) as usize;
        self.complete = self.current_frame >= Self::TAGLINE_END_FRAME;
    }

    /// How many characters of the title to show
    pub fn title_chars(&self) -> usize {
        let len = Self::TITLE.chars().count();
        if self.current_frame >= Self::TITLE_END_FRAME {
            len
        } else {
            self.current_frame * len / Self::TITLE_END_FRAME
        }
    }

    /// Whether to show the tagline
    pub fn show_tagline(&self) -> bool {
        self.current_frame >= Self::TITLE_END_FRAME
    }
}

/// Which demo input is focused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DemoField {
    #[default]
    List,
    Pattern,
}

/// State of the interactive demos
#[derive(Debug, Clone)]
pub struct DemoState {
    pub focus: DemoField,
    pub list_input: String,
    pub pattern_input: String,
    pub list_result: Option<Result<ListDemo, DemoError>>,
    pub pattern_result: Option<(i64, Classification)>,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            focus: DemoField::List,
            list_input: demos::DEFAULT_INPUT.to_string(),
            pattern_input: demos::DEFAULT_INPUT.to_string(),
            list_result: None,
            pattern_result: None,
        }
    }
}

impl DemoState {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DemoField::List => DemoField::Pattern,
            DemoField::Pattern => DemoField::List,
        };
    }

    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            DemoField::List => &mut self.list_input,
            DemoField::Pattern => &mut self.pattern_input,
        }
    }

    /// Evaluate the focused demo with its current input
    pub fn evaluate(&mut self) {
        match self.focus {
            DemoField::List => self.run_list(&self.list_input.clone()),
            DemoField::Pattern => self.run_pattern(&self.pattern_input.clone()),
        }
    }

    pub fn run_list(&mut self, input: &str) {
        let n = demos::parse_int_or(input, demos::DEFAULT_INPUT);
        self.list_result = Some(demos::generate_list(n));
    }

    pub fn run_pattern(&mut self, input: &str) {
        let n = demos::parse_int_or(input, demos::DEFAULT_INPUT);
        self.pattern_result = Some((n, demos::classify_number(n)));
    }
}

/// State of the exercises screen
#[derive(Debug, Clone)]
pub struct ExerciseState {
    pub selected: usize,
    pub solutions: Vec<Editor>,
    pub verdicts: Vec<Option<Verdict>>,
}

impl Default for ExerciseState {
    fn default() -> Self {
        Self {
            selected: 0,
            solutions: vec![Editor::default(); EXERCISES.len()],
            verdicts: vec![None; EXERCISES.len()],
        }
    }
}

impl ExerciseState {
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % EXERCISES.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + EXERCISES.len() - 1) % EXERCISES.len();
    }

    pub fn current_solution_mut(&mut self) -> &mut Editor {
        &mut self.solutions[self.selected]
    }

    /// Grade the selected exercise; the verdict is kept for display
    pub fn grade_selected(&mut self) -> Verdict {
        let verdict = EXERCISES[self.selected].grade(&self.solutions[self.selected].text());
        self.verdicts[self.selected] = Some(verdict);
        verdict
    }
}

/// Quiz engine plus the option cursor of the quiz screen
#[derive(Debug, Clone, Default)]
pub struct QuizState {
    pub engine: QuizEngine,
    /// Highlighted option of the current question
    pub highlighted: usize,
    /// Results list scroll offset
    pub results_scroll: usize,
}

impl QuizState {
    pub fn new(engine: QuizEngine) -> Self {
        Self { engine, highlighted: 0, results_scroll: 0 }
    }

    /// Put the cursor on the recorded answer of the current question
    pub fn sync_highlight(&mut self) {
        self.highlighted = self.engine.answer(self.engine.current_index()).unwrap_or(0);
    }

    pub fn highlight_next(&mut self) {
        let count = self.engine.current_question().options.len();
        self.highlighted = (self.highlighted + 1) % count;
    }

    pub fn highlight_previous(&mut self) {
        let count = self.engine.current_question().options.len();
        self.highlighted = (self.highlighted + count - 1) % count;
    }

    /// Record the highlighted option
    pub fn choose_highlighted(&mut self) {
        self.engine.record_answer(self.highlighted);
    }

    /// Record `option` directly (letter keys)
    pub fn choose(&mut self, option: usize) {
        if self.engine.current_question().has_option(option) {
            self.highlighted = option;
        }
        self.engine.record_answer(option);
    }

    pub fn next(&mut self) {
        self.engine.advance();
        self.sync_highlight();
    }

    pub fn previous(&mut self) {
        self.engine.retreat();
        self.sync_highlight();
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.highlighted = 0;
        self.results_scroll = 0;
    }

    /// Lines below the results headline: one per question, plus a
    /// correction line for each miss
    pub fn results_scroll_limit(&self) -> usize {
        self.engine
            .breakdown()
            .iter()
            .map(|result| if result.is_correct { 1 } else { 2 })
            .sum()
    }

    pub fn scroll_results_down(&mut self) {
        self.results_scroll = (self.results_scroll + 1).min(self.results_scroll_limit());
    }

    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,
    /// Screen to return to when help is closed
    pub previous_screen: Screen,
    /// Text input goes to the focused editor or field
    pub editing: bool,
    /// Active theme preference
    pub theme: ThemeMode,
    /// Whether hjkl act as arrow keys
    pub vim_keys: bool,
    pub landing_animation: LandingAnimation,
    pub hero: HeroStats,
    pub gallery: GalleryState,
    pub demos: DemoState,
    pub playground: Playground,
    pub exercises: ExerciseState,
    pub quiz: QuizState,
    pub command_line: CommandLineState,
    pub notification: Option<Notification>,
    /// How long notifications stay visible
    pub notification_lifetime: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(QuizEngine::builtin(), ThemeMode::Dark, Duration::from_secs(10))
    }
}

impl AppState {
    pub fn new(engine: QuizEngine, theme: ThemeMode, rotation: Duration) -> Self {
        Self {
            screen: Screen::Landing,
            previous_screen: Screen::Landing,
            editing: false,
            theme,
            vim_keys: true,
            landing_animation: LandingAnimation::default(),
            hero: HeroStats::default(),
            gallery: GalleryState::default(),
            demos: DemoState::default(),
            playground: Playground::new(rotation),
            exercises: ExerciseState::default(),
            quiz: QuizState::new(engine),
            command_line: CommandLineState::default(),
            notification: None,
            notification_lifetime: Duration::from_millis(3000),
        }
    }

    /// Switch screens, leaving any text input
    pub fn go_to(&mut self, screen: Screen) {
        if screen == Screen::Help && self.screen != Screen::Help {
            self.previous_screen = self.screen;
        }
        self.editing = false;
        self.screen = screen;
        tracing::debug!("Switched to {:?}", screen);
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Advance time-based state
    pub fn tick(&mut self, now: Instant) {
        if self.screen == Screen::Landing {
            self.landing_animation.tick_at(now);
        }
        if !(self.editing && self.screen == Screen::Playground) {
            self.playground.tick(now);
        }
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now, self.notification_lifetime))
        {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notification::NotificationKind;

    #[test]
    fn sections_cycle() {
        assert_eq!(Screen::Gallery.next_section(), Screen::Demos);
        assert_eq!(Screen::Quiz.next_section(), Screen::Gallery);
        assert_eq!(Screen::Gallery.previous_section(), Screen::Quiz);
        assert_eq!(Screen::Landing.next_section(), Screen::Gallery);
        assert_eq!(Screen::Help.previous_section(), Screen::Quiz);
    }

    #[test]
    fn parse_section_names() {
        assert_eq!(Screen::parse("Quiz"), Some(Screen::Quiz));
        assert_eq!(Screen::parse("playground"), Some(Screen::Playground));
        assert_eq!(Screen::parse("nowhere"), None);
    }

    #[test]
    fn help_remembers_previous_screen() {
        let mut state = AppState::default();
        state.go_to(Screen::Quiz);
        state.go_to(Screen::Help);
        assert_eq!(state.previous_screen, Screen::Quiz);
    }

    #[test]
    fn command_line_history() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("theme".into());
        cl.add_to_history("theme".into());
        cl.add_to_history("goto quiz".into());
        assert_eq!(cl.history.len(), 2);

        cl.history_up();
        assert_eq!(cl.input, "goto quiz");
        cl.history_up();
        assert_eq!(cl.input, "theme");
        cl.history_down();
        assert_eq!(cl.input, "goto quiz");
        cl.history_down();
        assert!(cl.input.is_empty());
    }

    #[test]
    fn command_line_editing() {
        let mut cl = CommandLineState::default();
        cl.enter_command_mode();
        "thme".chars().for_each(|c| cl.insert_char(c));
        cl.move_left();
        cl.move_left();
        assert_eq!(cl.cursor, 2);
        cl.insert_char('e');
        assert_eq!(cl.input, "theme");
        cl.delete_char();
        assert_eq!(cl.input, "thme");
    }

    #[test]
    fn landing_title_types_out() {
        let mut anim = LandingAnimation::default();
        let start = anim.start_time;
        anim.tick_at(start);
        assert_eq!(anim.title_chars(), 0);
        anim.tick_at(start + Duration::from_millis(50 * 9));
        assert_eq!(anim.title_chars(), 4);
        anim.tick_at(start + Duration::from_secs(2));
        assert_eq!(anim.title_chars(), LandingAnimation::TITLE.len());
        assert!(anim.complete);
    }

    #[test]
    fn demo_state_evaluates_focused_field() {
        let mut demos = DemoState::default();
        demos.evaluate();
        assert!(matches!(demos.list_result, Some(Ok(_))));

        demos.toggle_focus();
        *demos.focused_input_mut() = "-2".into();
        demos.evaluate();
        assert_eq!(demos.pattern_result, Some((-2, Classification::Negative)));
    }

    #[test]
    fn quiz_highlight_follows_recorded_answer() {
        let mut quiz = QuizState::default();
        quiz.choose(2);
        quiz.next();
        assert_eq!(quiz.highlighted, 0);
        quiz.previous();
        assert_eq!(quiz.highlighted, 2);
    }

    #[test]
    fn quiz_highlight_wraps() {
        let mut quiz = QuizState::default();
        quiz.highlight_previous();
        assert_eq!(quiz.highlighted, 3);
        quiz.highlight_next();
        assert_eq!(quiz.highlighted, 0);
    }

    #[test]
    fn exercise_grading_is_remembered() {
        let mut exercises = ExerciseState::default();
        exercises.current_solution_mut().set_text(EXERCISES[0].starter);
        let verdict = exercises.grade_selected();
        assert!(verdict.passed);
        assert_eq!(exercises.verdicts[0], Some(verdict));
        assert_eq!(exercises.verdicts[1], None);
    }

    #[test]
    fn tick_expires_notifications() {
        let mut state = AppState::default();
        let start = Instant::now();
        state.notify(Notification::at("hi", NotificationKind::Info, start));
        state.tick(start + Duration::from_millis(100));
        assert!(state.notification.is_some());
        state.tick(start + Duration::from_secs(4));
        assert!(state.notification.is_none());
    }
}
