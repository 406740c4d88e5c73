//! Interactive concept demos: list pipelines and pattern matching

use std::fmt;
use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Value used when the input has no leading integer
pub const DEFAULT_INPUT: i64 = 5;

/// Bounds accepted by the list demo
pub const LIST_MIN: i64 = 1;
pub const LIST_MAX: i64 = 20;

static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("leading integer pattern is valid"));

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DemoError {
    #[error("Please enter a number between {min} and {max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// Parse the leading integer of `input`, falling back to `default`.
///
/// Trailing garbage is ignored (`"12abc"` is 12). Zero is treated as
/// missing, so `"0"` also yields the default. Integers too large for
/// `i64` saturate instead of falling back.
pub fn parse_int_or(input: &str, default: i64) -> i64 {
    LEADING_INT
        .captures(input)
        .and_then(|caps| match caps[1].parse::<i64>() {
            Ok(n) => Some(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        })
        .filter(|n| *n != 0)
        .unwrap_or(default)
}

/// Format a slice the way F# prints lists: `[1; 2; 3]`
pub fn fsharp_list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", items.join("; "))
}

/// Result of the list pipeline demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDemo {
    /// `[1..n]`
    pub original: Vec<i64>,
    /// `original |> List.map (fun x -> x * 2) |> List.filter (fun x -> x > 3)`
    pub processed: Vec<i64>,
}

/// Build `[1..n]` and run it through the double-then-filter pipeline
pub fn generate_list(n: i64) -> Result<ListDemo, DemoError> {
    if !(LIST_MIN..=LIST_MAX).contains(&n) {
        return Err(DemoError::OutOfRange { value: n, min: LIST_MIN, max: LIST_MAX });
    }
    let original: Vec<i64> = (1..=n).collect();
    let processed = original.iter().map(|x| x * 2).filter(|x| *x > 3).collect();
    Ok(ListDemo { original, processed })
}

/// Category chosen by the `clasificarNumero` match expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Zero,
    One,
    Negative,
    EvenPositive,
    OddPositive,
}

impl Classification {
    /// The string the F# function returns
    pub fn label(&self) -> &'static str {
        match self {
            Self::Zero => "Cero",
            Self::One => "Uno",
            Self::Negative => "Negativo",
            Self::EvenPositive => "Par positivo",
            Self::OddPositive => "Impar positivo",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_number(n: i64) -> Classification {
    match n {
        0 => Classification::Zero,
        1 => Classification::One,
        n if n < 0 => Classification::Negative,
        n if n % 2 == 0 => Classification::EvenPositive,
        _ => Classification::OddPositive,
    }
}

/// The F# source the classification demo mirrors
pub const CLASSIFY_SOURCE: &str = "let clasificarNumero n =
    match n with
    | 0 -> \"Cero\"
    | 1 -> \"Uno\"
    | n when n < 0 -> \"Negativo\"
    | n when n % 2 = 0 -> \"Par positivo\"
    | _ -> \"Impar positivo\"";

/// The F# source the list demo mirrors
pub const LIST_SOURCE: &str = "let procesar n =
    [1..n]
    |> List.map (fun x -> x * 2)
    |> List.filter (fun x -> x > 3)";
