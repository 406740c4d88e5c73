//! Application state and event handling

pub mod command;
pub mod handler;
pub mod input;
pub mod notification;
pub mod state;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::quiz::QuizEngine;
use crate::ui;
use handler::Effect;
use notification::Notification;
use state::AppState;

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, engine: QuizEngine) -> Result<Self> {
        let mut state = AppState::new(
            engine,
            config.theme,
            Duration::from_secs(config.example_rotation_secs),
        );
        state.notification_lifetime = Duration::from_millis(config.notification_ms);
        state.vim_keys = config.vim_mode;

        let terminal = Self::setup_terminal()?;

        Ok(Self { config, state, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        tracing::info!("Starting TUI");

        loop {
            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match handler::handle_key(&mut self.state, key) {
                            Effect::Quit => break,
                            Effect::ThemeChanged(mode) => self.persist_theme(mode),
                            Effect::None => {}
                        }
                    }
                }
            }

            // Update animations and timers
            self.state.tick(Instant::now());
        }

        tracing::info!("Exiting TUI");
        self.restore_terminal()?;
        Ok(())
    }

    /// Save the theme preference; failures are reported but not fatal
    fn persist_theme(&mut self, mode: crate::theme::ThemeMode) {
        self.config.theme = mode;
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save theme preference: {:#}", e);
            self.state.notify(Notification::error("Could not save theme preference"));
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
