//! The code playground
//!
//! Nothing is compiled or executed here. "Running" a snippet looks its exact
//! text up among the built-in examples and returns the recorded output, or a
//! generic message when the text is unknown.

pub mod console;
pub mod editor;
pub mod examples;

use std::time::{Duration, Instant};

pub use console::{Console, ConsoleEntry};
pub use editor::Editor;
pub use examples::{EXAMPLES, Example};

/// Output for unknown code that at least looks like F#
pub const GENERIC_SUCCESS: &str = "\u{2705} Code ran successfully\n\
     \u{1F4A1} Tip: this is a basic simulator. For real execution use F# Interactive.";

/// Output for anything else
pub const SIMULATOR_NOTICE: &str = "\u{26A0}\u{FE0F}  This is a basic F# simulator\n\
     \n\
     To run real F# code you need:\n\
     \u{2022} The .NET SDK installed\n\
     \u{2022} F# Interactive (dotnet fsi)\n\
     \u{2022} Or an online F# playground\n\
     \n\
     The simulator shows results for the built-in examples.";

/// How a snippet's output was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// The exact text of a built-in example
    Canned(&'static Example),
    /// Unknown text containing both `printfn` and `let`
    LooksValid,
    /// Anything else
    Unknown,
}

impl Execution {
    pub fn output(&self) -> &'static str {
        match self {
            Execution::Canned(example) => example.output,
            Execution::LooksValid => GENERIC_SUCCESS,
            Execution::Unknown => SIMULATOR_NOTICE,
        }
    }
}

/// Look up the canned result for `source`
pub fn execute(source: &str) -> Execution {
    if let Some(example) = EXAMPLES.iter().find(|e| e.source == source) {
        tracing::debug!("Canned output for example {:?}", example.title);
        return Execution::Canned(example);
    }
    if source.contains("printfn") && source.contains("let") {
        Execution::LooksValid
    } else {
        Execution::Unknown
    }
}

/// Cycles the editor through the built-in examples on a fixed interval
#[derive(Debug, Clone)]
pub struct ExampleRotation {
    interval: Duration,
    last_switch: Instant,
    next: usize,
}

impl ExampleRotation {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self { interval, last_switch: now, next: 0 }
    }

    /// Returns the example due at `now`, if the interval has elapsed.
    ///
    /// A zero interval disables rotation.
    pub fn tick(&mut self, now: Instant) -> Option<&'static Example> {
        if self.interval.is_zero() || now.duration_since(self.last_switch) < self.interval {
            return None;
        }
        self.last_switch = now;
        let example = &EXAMPLES[self.next];
        self.next = (self.next + 1) % EXAMPLES.len();
        Some(example)
    }

    /// Restart the interval, e.g. after the user edits the buffer
    pub fn postpone(&mut self, now: Instant) {
        self.last_switch = now;
    }
}

/// Editor, console and rotation together
#[derive(Debug, Clone)]
pub struct Playground {
    pub editor: Editor,
    pub console: Console,
    pub rotation: ExampleRotation,
}

impl Playground {
    pub fn new(rotation_interval: Duration) -> Self {
        Self {
            editor: Editor::default(),
            console: Console::default(),
            rotation: ExampleRotation::new(rotation_interval),
        }
    }

    /// Run the editor contents and append the result to the console
    pub fn run(&mut self) -> Execution {
        let execution = execute(&self.editor.text());
        self.console.push(execution.output());
        execution
    }

    /// Load a built-in example into the editor
    pub fn load_example(&mut self, example: &Example) {
        self.editor.set_text(example.source);
    }

    /// Advance timers
    pub fn tick(&mut self, now: Instant) {
        if let Some(example) = self.rotation.tick(now) {
            self.load_example(example);
        }
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}
