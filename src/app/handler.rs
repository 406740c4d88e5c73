//! Key handling
//!
//! Keys are applied to [`AppState`] directly. Anything that has to reach
//! outside the state (quitting, persisting the theme) is returned as an
//! [`Effect`] for the caller to carry out.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::{Command, ParseResult, parse_command};
use super::input::{Action, is_vim_motion, key_with_modifier_to_action, option_letter};
use super::notification::Notification;
use super::state::{AppState, Screen};
use crate::exercises::{EXERCISES, Feedback};
use crate::playground::{EXAMPLES, Execution};
use crate::theme::ThemeMode;

/// Side effects requested by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// The theme changed and should be persisted
    ThemeChanged(ThemeMode),
}

/// Apply a key press to the state
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Effect {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Effect::Quit;
    }

    if state.command_line.is_input_mode() {
        return handle_command_line_key(state, key.code);
    }

    if state.editing {
        handle_editing_key(state, key);
        return Effect::None;
    }

    if state.screen == Screen::Quiz && !state.quiz.engine.is_completed() {
        let option_count = state.quiz.engine.current_question().options.len();
        if let Some(option) = option_letter(key.code, option_count) {
            state.quiz.choose(option);
            return Effect::None;
        }
    }

    let mapped = if !state.vim_keys && is_vim_motion(key.code) {
        None
    } else {
        key_with_modifier_to_action(key.code, key.modifiers)
    };
    if state.screen == Screen::Landing {
        state.go_to(Screen::Gallery);
        // Only global actions carry over; motions just dismiss the landing screen
        if !matches!(
            mapped,
            Some(
                Action::Quit
                    | Action::ToggleTheme
                    | Action::CommandMode
                    | Action::Help
                    | Action::GoToSection(_)
            )
        ) {
            return Effect::None;
        }
    }
    let Some(action) = mapped else {
        return Effect::None;
    };

    match action {
        Action::Quit => return Effect::Quit,
        Action::ToggleTheme => {
            let mode = state.theme.toggle();
            return set_theme(state, mode);
        }
        Action::CommandMode => state.command_line.enter_command_mode(),
        Action::Help if state.screen == Screen::Help => state.go_to(state.previous_screen),
        Action::Help => state.go_to(Screen::Help),
        Action::NextSection => state.go_to(state.screen.next_section()),
        Action::PreviousSection => state.go_to(state.screen.previous_section()),
        Action::GoToSection(i) => {
            if let Some(screen) = Screen::SECTIONS.get(i) {
                state.go_to(*screen);
            }
        }
        action => handle_screen_action(state, action),
    }
    Effect::None
}

fn handle_screen_action(state: &mut AppState, action: Action) {
    match state.screen {
        Screen::Landing => {}
        Screen::Help => {
            if action == Action::Back {
                state.go_to(state.previous_screen);
            }
        }
        Screen::Gallery => match action {
            Action::Down | Action::Next => state.gallery.select_next(),
            Action::Up | Action::Previous => state.gallery.select_previous(),
            Action::Select => state.gallery.toggle_examples(),
            _ => {}
        },
        Screen::Demos => match action {
            Action::Up | Action::Down => state.demos.toggle_focus(),
            Action::Edit => state.editing = true,
            Action::Select | Action::Run => state.demos.evaluate(),
            _ => {}
        },
        Screen::Playground => match action {
            Action::Edit => {
                state.editing = true;
                state.playground.rotation.postpone(Instant::now());
            }
            Action::Run => run_playground(state),
            Action::Reset => state.playground.console.clear(),
            Action::Up => {
                let console = &mut state.playground.console;
                console.scroll_back = console.scroll_back.saturating_add(1);
            }
            Action::Down => {
                let console = &mut state.playground.console;
                console.scroll_back = console.scroll_back.saturating_sub(1);
            }
            _ => {}
        },
        Screen::Exercises => match action {
            Action::Next | Action::Down => state.exercises.select_next(),
            Action::Previous | Action::Up => state.exercises.select_previous(),
            Action::Edit => state.editing = true,
            Action::Run | Action::Select => grade_exercise(state),
            Action::Reset => state.exercises.current_solution_mut().set_text(""),
            _ => {}
        },
        Screen::Quiz => handle_quiz_action(state, action),
    }
}

fn handle_quiz_action(state: &mut AppState, action: Action) {
    let quiz = &mut state.quiz;
    if quiz.engine.is_completed() {
        match action {
            Action::Reset => quiz.reset(),
            Action::Down => quiz.scroll_results_down(),
            Action::Up => quiz.scroll_results_up(),
            _ => {}
        }
        return;
    }

    match action {
        Action::Down => quiz.highlight_next(),
        Action::Up => quiz.highlight_previous(),
        Action::Select => quiz.choose_highlighted(),
        Action::Next => quiz.next(),
        Action::Previous => quiz.previous(),
        _ => {}
    }
}

fn handle_editing_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        state.editing = false;
        return;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match state.screen {
        Screen::Playground => {
            if ctrl && key.code == KeyCode::Char('r') {
                run_playground(state);
                return;
            }
            edit_buffer(&mut state.playground.editor, key.code);
            state.playground.rotation.postpone(Instant::now());
        }
        Screen::Exercises => {
            if ctrl && key.code == KeyCode::Char('r') {
                grade_exercise(state);
                return;
            }
            edit_buffer(state.exercises.current_solution_mut(), key.code);
        }
        Screen::Demos => match key.code {
            KeyCode::Enter => state.demos.evaluate(),
            KeyCode::Tab => state.demos.toggle_focus(),
            KeyCode::Backspace => {
                state.demos.focused_input_mut().pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '+' => {
                state.demos.focused_input_mut().push(c);
            }
            _ => {}
        },
        _ => state.editing = false,
    }
}

fn edit_buffer(editor: &mut crate::playground::Editor, code: KeyCode) {
    match code {
        KeyCode::Char(c) => editor.insert_char(c),
        KeyCode::Enter => editor.newline(),
        KeyCode::Tab => editor.insert_str("    "),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_home(),
        KeyCode::End => editor.move_end(),
        _ => {}
    }
}

fn handle_command_line_key(state: &mut AppState, code: KeyCode) -> Effect {
    let cl = &mut state.command_line;
    match code {
        KeyCode::Esc => cl.exit_input_mode(),
        KeyCode::Enter => {
            let input = cl.input.clone();
            cl.add_to_history(input.clone());
            cl.exit_input_mode();
            return match parse_command(&input) {
                ParseResult::Ok(command) => execute_command(state, command),
                ParseResult::UnknownCommand(cmd) => {
                    state.command_line.set_error(format!("Unknown command: {}", cmd));
                    Effect::None
                }
                ParseResult::MissingArgument(cmd) => {
                    state.command_line.set_error(format!(":{} needs an argument", cmd));
                    Effect::None
                }
                ParseResult::InvalidArgument { command, argument } => {
                    state
                        .command_line
                        .set_error(format!("Invalid argument for :{}: {}", command, argument));
                    Effect::None
                }
            };
        }
        KeyCode::Backspace => {
            if cl.input.is_empty() {
                cl.exit_input_mode();
            } else {
                cl.delete_char();
            }
        }
        KeyCode::Left => cl.move_left(),
        KeyCode::Right => cl.move_right(),
        KeyCode::Up => cl.history_up(),
        KeyCode::Down => cl.history_down(),
        KeyCode::Char(c) => cl.insert_char(c),
        _ => {}
    }
    Effect::None
}

/// Execute a parsed command
pub fn execute_command(state: &mut AppState, command: Command) -> Effect {
    tracing::debug!("Executing command {:?}", command);
    match command {
        Command::Quit => return Effect::Quit,
        Command::Help => state.go_to(Screen::Help),
        Command::Theme(mode) => {
            let mode = mode.unwrap_or_else(|| state.theme.toggle());
            return set_theme(state, mode);
        }
        Command::Goto(name) => match Screen::parse(&name) {
            Some(screen) => state.go_to(screen),
            None => state.command_line.set_error(format!("No such section: {}", name)),
        },
        Command::Run => {
            state.go_to(Screen::Playground);
            run_playground(state);
        }
        Command::Clear => {
            state.playground.console.clear();
            state.command_line.set_message("Console cleared");
        }
        Command::Reset => {
            state.quiz.reset();
            state.command_line.set_message("Quiz restarted");
        }
        Command::Example(n) => match n.checked_sub(1).and_then(|i| EXAMPLES.get(i)) {
            Some(example) => {
                state.playground.load_example(example);
                state.playground.rotation.postpone(Instant::now());
                state.go_to(Screen::Playground);
                state.command_line.set_message(format!("Loaded \"{}\"", example.title));
            }
            None => state
                .command_line
                .set_error(format!("There are {} examples", EXAMPLES.len())),
        },
        Command::List(input) => {
            state.demos.run_list(&input);
            state.go_to(Screen::Demos);
        }
        Command::Classify(input) => {
            state.demos.run_pattern(&input);
            state.go_to(Screen::Demos);
        }
        Command::Grade(n) => {
            if let Some(n) = n {
                if n == 0 || n > EXERCISES.len() {
                    state.command_line.set_error(format!("There are {} exercises", EXERCISES.len()));
                    return Effect::None;
                }
                state.exercises.selected = n - 1;
            }
            state.go_to(Screen::Exercises);
            grade_exercise(state);
        }
        Command::Nop => state.command_line.message = None,
    }
    Effect::None
}

fn set_theme(state: &mut AppState, mode: ThemeMode) -> Effect {
    state.theme = mode;
    state.notify(Notification::info(format!("Theme: {}", mode)));
    Effect::ThemeChanged(mode)
}

fn run_playground(state: &mut AppState) {
    match state.playground.run() {
        Execution::Canned(example) => {
            state.notify(Notification::success(format!("Ran \"{}\"", example.title)))
        }
        Execution::LooksValid => state.notify(Notification::success("Code executed")),
        Execution::Unknown => state.notify(Notification::info("Simulator output in console")),
    }
}

fn grade_exercise(state: &mut AppState) {
    let verdict = state.exercises.grade_selected();
    if verdict.feedback == Feedback::Notification {
        let note = if verdict.passed {
            Notification::success(verdict.message)
        } else {
            Notification::error(verdict.message)
        };
        state.notify(note);
    }
}
