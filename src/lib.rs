//! F# Master - an interactive terminal tutorial for F#
//!
//! A concept gallery, live demos, a code playground, free-text exercises
//! and a multiple-choice quiz, all in the terminal.

pub mod app;
pub mod config;
pub mod demos;
pub mod exercises;
pub mod gallery;
pub mod playground;
pub mod quiz;
pub mod syntax;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use quiz::{QuizEngine, QuizStatus, Score};
pub use theme::{Theme, ThemeMode};
