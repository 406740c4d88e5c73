use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fsmaster::demos::{self, fsharp_list};
use fsmaster::exercises::EXERCISES;
use fsmaster::quiz::{Question, catalog};
use fsmaster::{App, Config, QuizEngine, ThemeMode, playground};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const TEXT_WIDTH: usize = 78;

#[derive(Parser)]
#[command(name = "fsmaster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Quiz catalog (JSON array of questions) to use instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    questions: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the quiz non-interactively and print the results
    Quiz {
        /// Zero-based option per question, comma separated (e.g. 1,1,1,2,1)
        #[arg(long, value_delimiter = ',', required = true)]
        answers: Vec<usize>,
    },
    /// Run an F# file through the playground simulator
    Run {
        /// F# source file
        file: PathBuf,
    },
    /// Show or change the stored theme
    Theme {
        #[arg(value_parser = ["dark", "light", "toggle"])]
        mode: Option<String>,
    },
    /// Run one of the interactive demos
    Demo {
        #[command(subcommand)]
        demo: DemoCommand,
    },
    /// Check an exercise solution
    Grade {
        /// Exercise number
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        exercise: u8,
        /// File containing the solution
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum DemoCommand {
    /// [1..n] |> List.map (fun x -> x * 2) |> List.filter (fun x -> x > 3)
    List {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
    /// Classify a number with pattern matching
    Classify {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
}

/// Log to stderr for one-shot commands, to a file while the TUI owns the terminal
fn init_logging(tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "fsmaster=info".into());

    if tui {
        let path = Config::log_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {:?}", parent))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

fn load_engine(path: Option<&Path>) -> Result<QuizEngine> {
    match path {
        Some(path) => {
            let questions = catalog::load_from_path(path)
                .with_context(|| format!("Failed to load quiz catalog {:?}", path))?;
            Ok(QuizEngine::new(questions)?)
        }
        None => Ok(QuizEngine::builtin()),
    }
}

fn indented(text: &str) -> String {
    let options = textwrap::Options::new(TEXT_WIDTH).initial_indent("     ").subsequent_indent("     ");
    textwrap::fill(text, options)
}

fn run_quiz(mut engine: QuizEngine, answers: &[usize]) {
    let score = engine.play(answers);

    for result in engine.breakdown() {
        let question = &engine.questions()[result.index];
        let marker = if result.is_correct { "\u{2713}" } else { "\u{2717}" };
        println!("{} Q{}. {}", marker, result.index + 1, question.prompt);
        if !result.is_correct {
            let given = result
                .selected
                .map(|s| format!("{}) {}", Question::option_label(s), question.options[s]))
                .unwrap_or_else(|| "no answer".to_string());
            println!("     your answer: {}", given);
            println!(
                "     correct:     {}) {}",
                Question::option_label(result.correct_index),
                question.options[result.correct_index]
            );
            println!("{}", indented(&question.explanation));
        }
    }
    println!();
    println!("{}/{} ({:.1}%)", score.correct, score.total, score.percentage());
}

fn run_theme(mode: Option<&str>) -> Result<()> {
    let mut config = Config::load()?;
    match mode {
        None => {}
        Some("toggle") => {
            config.toggle_theme();
            config.save()?;
        }
        Some(name) => {
            config.theme = ThemeMode::parse(name).context("Unknown theme")?;
            config.save()?;
        }
    }
    println!("{} {}", config.theme.toggle_icon(), config.theme);
    Ok(())
}

fn run_demo(demo: DemoCommand) -> Result<()> {
    match demo {
        DemoCommand::List { n } => {
            let result = demos::generate_list(demos::parse_int_or(&n, demos::DEFAULT_INPUT))?;
            println!("Original:  {}", fsharp_list(&result.original));
            println!("Processed: {}", fsharp_list(&result.processed));
        }
        DemoCommand::Classify { n } => {
            let n = demos::parse_int_or(&n, demos::DEFAULT_INPUT);
            println!("clasificarNumero {} = \"{}\"", n, demos::classify_number(n));
        }
    }
    Ok(())
}

fn run_grade(exercise: u8, file: &Path) -> Result<bool> {
    let solution = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read solution {:?}", file))?;
    let exercise = EXERCISES
        .iter()
        .find(|e| e.number == exercise)
        .with_context(|| format!("No exercise {}", exercise))?;
    let verdict = exercise.grade(&solution);
    println!("{}. {}", exercise.number, exercise.title);
    println!("{}", textwrap::fill(verdict.message, TEXT_WIDTH));
    Ok(verdict.passed)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.is_none())?;

    match cli.command {
        Some(Commands::Quiz { answers }) => {
            run_quiz(load_engine(cli.questions.as_deref())?, &answers);
        }
        Some(Commands::Run { file }) => {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {:?}", file))?;
            println!("{}", playground::execute(&source).output());
        }
        Some(Commands::Theme { mode }) => run_theme(mode.as_deref())?,
        Some(Commands::Demo { demo }) => run_demo(demo)?,
        Some(Commands::Grade { exercise, file }) => {
            if !run_grade(exercise, &file)? {
                std::process::exit(1);
            }
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let engine = load_engine(cli.questions.as_deref())?;
            let mut app = App::new(config, engine)?;
            app.run().await?;
        }
    }

    Ok(())
}
