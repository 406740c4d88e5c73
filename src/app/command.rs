//! Command parsing for the command line

use crate::theme::ThemeMode;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the application: :q or :quit
    Quit,
    /// Show help: :help or :h
    Help,
    /// Switch or toggle the theme: :theme [dark|light]
    Theme(Option<ThemeMode>),
    /// Go to a section: :goto <section>
    Goto(String),
    /// Run the playground editor: :run
    Run,
    /// Clear the playground console: :clear
    Clear,
    /// Restart the quiz: :reset
    Reset,
    /// Load a built-in example into the playground: :example <n>
    Example(usize),
    /// Run the list demo: :list <n>
    List(String),
    /// Run the classification demo: :classify <n>
    Classify(String),
    /// Grade an exercise: :grade [n]
    Grade(Option<usize>),
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
    /// Argument could not be understood
    InvalidArgument { command: String, argument: String },
}

/// A command the command line understands, for hints and the help screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub summary: &'static str,
}

const fn command(
    name: &'static str,
    aliases: &'static [&'static str],
    usage: &'static str,
    summary: &'static str,
) -> CommandInfo {
    CommandInfo { name, aliases, usage, summary }
}

impl CommandInfo {
    fn answers_to(&self, word: &str) -> bool {
        self.name == word || self.aliases.contains(&word)
    }
}

pub const COMMANDS: &[CommandInfo] = &[
    command("theme", &["t"], "theme [dark|light|toggle]", "Set or toggle the theme"),
    command("goto", &["g"], "goto <section>", "Open a section"),
    command("example", &["ex"], "example <n>", "Load a built-in example"),
    command("run", &[], "run", "Run the playground editor"),
    command("clear", &[], "clear", "Clear the playground console"),
    command("list", &[], "list <n>", "List pipeline demo, n from 1 to 20"),
    command("classify", &[], "classify <n>", "Pattern matching demo"),
    command("grade", &[], "grade [n]", "Check an exercise"),
    command("reset", &[], "reset", "Restart the quiz"),
    command("help", &["h", "?"], "help", "Key and command reference"),
    command("quit", &["q"], "quit", "Leave fsmaster"),
];

/// Commands matching a partly typed command line.
///
/// While the first word is being typed, every command it is a prefix of.
/// Once an argument has started, only the command that word names.
pub fn suggestions(input: &str) -> Vec<&'static CommandInfo> {
    let input = input.trim_start();
    let (word, has_args) = match input.split_once(char::is_whitespace) {
        Some((word, _)) => (word, true),
        None => (input, false),
    };
    if word.is_empty() {
        return Vec::new();
    }

    let word = word.to_lowercase();
    COMMANDS
        .iter()
        .filter(|info| info.answers_to(&word) || (!has_args && info.name.starts_with(&word)))
        .collect()
}

fn required(cmd: &str, args: &str, build: impl FnOnce(&str) -> Option<Command>) -> ParseResult {
    if args.is_empty() {
        return ParseResult::MissingArgument(cmd.to_string());
    }
    match build(args) {
        Some(command) => ParseResult::Ok(command),
        None => ParseResult::InvalidArgument { command: cmd.to_string(), argument: args.to_string() },
    }
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    // Split into command and arguments
    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        "theme" | "t" => {
            if args.is_empty() || args.eq_ignore_ascii_case("toggle") {
                ParseResult::Ok(Command::Theme(None))
            } else {
                required("theme", args, |a| ThemeMode::parse(a).map(|m| Command::Theme(Some(m))))
            }
        }
        "goto" | "g" => required("goto", args, |a| Some(Command::Goto(a.to_string()))),
        "run" => ParseResult::Ok(Command::Run),
        "clear" => ParseResult::Ok(Command::Clear),
        "reset" => ParseResult::Ok(Command::Reset),
        "example" | "ex" => required("example", args, |a| {
            a.parse::<usize>().ok().filter(|n| *n >= 1).map(Command::Example)
        }),
        "list" => required("list", args, |a| Some(Command::List(a.to_string()))),
        "classify" => required("classify", args, |a| Some(Command::Classify(a.to_string()))),
        "grade" => {
            if args.is_empty() {
                ParseResult::Ok(Command::Grade(None))
            } else {
                required("grade", args, |a| {
                    a.parse::<usize>().ok().filter(|n| *n >= 1).map(|n| Command::Grade(Some(n)))
                })
            }
        }
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command("q"), ParseResult::Ok(Command::Quit));
        assert_eq!(parse_command("quit"), ParseResult::Ok(Command::Quit));
        assert_eq!(parse_command("Q"), ParseResult::Ok(Command::Quit));
    }

    #[test]
    fn parse_help_command() {
        assert_eq!(parse_command("help"), ParseResult::Ok(Command::Help));
        assert_eq!(parse_command("?"), ParseResult::Ok(Command::Help));
    }

    #[test]
    fn parse_theme_command() {
        assert_eq!(parse_command("theme"), ParseResult::Ok(Command::Theme(None)));
        assert_eq!(parse_command("theme toggle"), ParseResult::Ok(Command::Theme(None)));
        assert_eq!(
            parse_command("theme light"),
            ParseResult::Ok(Command::Theme(Some(ThemeMode::Light)))
        );
        assert!(matches!(parse_command("theme neon"), ParseResult::InvalidArgument { .. }));
    }

    #[test]
    fn parse_goto_command() {
        assert_eq!(parse_command("goto quiz"), ParseResult::Ok(Command::Goto("quiz".into())));
        assert_eq!(parse_command("goto"), ParseResult::MissingArgument("goto".into()));
    }

    #[test]
    fn parse_example_command() {
        assert_eq!(parse_command("example 2"), ParseResult::Ok(Command::Example(2)));
        assert!(matches!(parse_command("example 0"), ParseResult::InvalidArgument { .. }));
        assert!(matches!(parse_command("example two"), ParseResult::InvalidArgument { .. }));
    }

    #[test]
    fn parse_demo_commands() {
        assert_eq!(parse_command("list 7"), ParseResult::Ok(Command::List("7".into())));
        assert_eq!(parse_command("classify -3"), ParseResult::Ok(Command::Classify("-3".into())));
        assert_eq!(parse_command("classify"), ParseResult::MissingArgument("classify".into()));
    }

    #[test]
    fn parse_grade_command() {
        assert_eq!(parse_command("grade"), ParseResult::Ok(Command::Grade(None)));
        assert_eq!(parse_command("grade 2"), ParseResult::Ok(Command::Grade(Some(2))));
    }

    #[test]
    fn parse_empty_is_nop() {
        assert_eq!(parse_command(""), ParseResult::Ok(Command::Nop));
        assert_eq!(parse_command("   "), ParseResult::Ok(Command::Nop));
    }

    fn names(found: Vec<&CommandInfo>) -> Vec<&'static str> {
        found.into_iter().map(|info| info.name).collect()
    }

    #[test]
    fn suggestions_complete_the_first_word() {
        assert_eq!(names(suggestions("c")), vec!["clear", "classify"]);
        assert_eq!(names(suggestions("gr")), vec!["grade"]);
        assert_eq!(names(suggestions("G")), vec!["goto", "grade"]);
        assert!(suggestions("").is_empty());
        assert!(suggestions("zz").is_empty());
    }

    #[test]
    fn suggestions_after_an_argument_starts() {
        assert_eq!(names(suggestions("theme ")), vec!["theme"]);
        assert_eq!(names(suggestions("ex 2")), vec!["example"]);
        assert!(suggestions("gr 1").is_empty());
    }

    #[test]
    fn every_listed_command_parses() {
        for info in COMMANDS {
            assert!(
                !matches!(parse_command(info.name), ParseResult::UnknownCommand(_)),
                "{} is not parsed",
                info.name
            );
            for alias in info.aliases {
                assert!(!matches!(parse_command(alias), ParseResult::UnknownCommand(_)));
            }
        }
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(parse_command("frobnicate"), ParseResult::UnknownCommand("frobnicate".into()));
    }
}
