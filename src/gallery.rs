//! Concept gallery: concept cards, operator tooltips and the hero counters

use std::collections::HashSet;
use std::time::{Duration, Instant};

/// A concept card in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concept {
    pub title: &'static str,
    pub summary: &'static str,
    pub example: &'static str,
}

pub const CONCEPTS: [Concept; 6] = [
    Concept {
        title: "Immutable values",
        summary: "let binds a name to a value. Bindings are immutable unless marked mutable.",
        example: "let x = 5\nlet y = x + 3\nprintfn \"%d\" y",
    },
    Concept {
        title: "Functions",
        summary: "Functions are values. Arguments are separated by spaces and types are inferred.",
        example: "let sumar a b = a + b\nlet duplicar x = x * 2\nsumar 2 3 |> duplicar",
    },
    Concept {
        title: "Lists and pipelines",
        summary: "The |> operator feeds a value into the next function, building readable pipelines.",
        example: "[1..10]\n|> List.filter (fun x -> x % 2 = 0)\n|> List.map (fun x -> x * 3)",
    },
    Concept {
        title: "Pattern matching",
        summary: "match compares a value against patterns, with guards for extra conditions.",
        example: "match n with\n| 0 -> \"Cero\"\n| n when n < 0 -> \"Negativo\"\n| _ -> \"Otro\"",
    },
    Concept {
        title: "Records",
        summary: "Records are immutable named tuples with structural equality.",
        example: "type Persona = { Nombre: string; Edad: int }\nlet p = { Nombre = \"Ana\"; Edad = 30 }",
    },
    Concept {
        title: "Option",
        summary: "Option replaces null: a value is either Some value or None.",
        example: "let dividir a b =\n    if b = 0 then None else Some (a / b)\n\nmatch dividir 10 2 with\n| Some r -> printfn \"%d\" r\n| None -> printfn \"Division by zero\"",
    },
];

/// Short explanations for common operators and functions
pub const TOOLTIPS: [(&str, &str); 5] = [
    ("|>", "Pipe forward: passes the result as the last argument"),
    ("match", "Pattern matching: compares values against patterns"),
    ("option", "Option type: either Some value or None"),
    ("List.map", "Transforms every element of the list"),
    ("List.filter", "Keeps the elements that satisfy a condition"),
];

/// Look up the tooltip for a token
pub fn tooltip(token: &str) -> Option<&'static str> {
    TOOLTIPS.iter().find(|(t, _)| *t == token).map(|(_, text)| *text)
}

/// Tooltips whose token appears in `code`
pub fn tooltips_for(code: &str) -> Vec<(&'static str, &'static str)> {
    TOOLTIPS.iter().copied().filter(|(token, _)| code.contains(*token)).collect()
}

/// Gallery browsing state
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    /// Highlighted card
    pub selected: usize,
    /// Cards whose examples are hidden
    collapsed: HashSet<usize>,
}

impl GalleryState {
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(CONCEPTS.len() - 1);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn examples_visible(&self, card: usize) -> bool {
        !self.collapsed.contains(&card)
    }

    /// Show or hide the examples of the selected card
    pub fn toggle_examples(&mut self) {
        if !self.collapsed.remove(&self.selected) {
            self.collapsed.insert(self.selected);
        }
    }

    /// Label for the toggle button of `card`
    pub fn toggle_label(&self, card: usize) -> &'static str {
        if self.examples_visible(card) { "Hide examples" } else { "Show examples" }
    }
}

/// Counters on the landing screen that count up to their target
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    pub label: &'static str,
    pub target: u32,
    pub duration: Duration,
}

impl CounterAnimation {
    /// Refresh period of the count-up
    pub const STEP: Duration = Duration::from_millis(16);

    /// Value to display `elapsed` after the animation started.
    ///
    /// The value grows by `target / (duration / 16ms)` per step, is floored,
    /// and never exceeds the target.
    pub fn value_at(&self, elapsed: Duration) -> u32 {
        let steps_total = self.duration.as_millis() as f64 / Self::STEP.as_millis() as f64;
        if steps_total <= 0.0 {
            return self.target;
        }
        let steps = (elapsed.as_millis() / Self::STEP.as_millis()) as f64;
        let current = (self.target as f64 * steps / steps_total).min(self.target as f64);
        current.floor() as u32
    }
}

/// The three hero counters
pub fn hero_counters() -> [CounterAnimation; 3] {
    [
        CounterAnimation { label: "Concepts", target: 15, duration: Duration::from_millis(2000) },
        CounterAnimation { label: "Exercises", target: 8, duration: Duration::from_millis(1500) },
        CounterAnimation {
            label: "Code examples",
            target: 25,
            duration: Duration::from_millis(2500),
        },
    ]
}

/// Hero counters with a shared start time
#[derive(Debug, Clone)]
pub struct HeroStats {
    pub counters: [CounterAnimation; 3],
    started: Instant,
}

impl Default for HeroStats {
    fn default() -> Self {
        Self { counters: hero_counters(), started: Instant::now() }
    }
}

impl HeroStats {
    /// Current (label, value) pairs
    pub fn values(&self, now: Instant) -> Vec<(&'static str, u32)> {
        let elapsed = now.saturating_duration_since(self.started);
        self.counters.iter().map(|c| (c.label, c.value_at(elapsed))).collect()
    }

    pub fn finished(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started);
        self.counters.iter().all(|c| c.value_at(elapsed) == c.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_lookup() {
        assert_eq!(tooltip("|>"), Some("Pipe forward: passes the result as the last argument"));
        assert_eq!(tooltip("let"), None);
    }

    #[test]
    fn tooltips_found_in_code() {
        let tips = tooltips_for("[1..5] |> List.map f |> List.filter g");
        let tokens: Vec<&str> = tips.iter().map(|(t, _)| *t).collect();
        assert_eq!(tokens, vec!["|>", "List.map", "List.filter"]);
    }

    #[test]
    fn examples_start_visible_and_toggle() {
        let mut gallery = GalleryState::default();
        assert!(gallery.examples_visible(0));
        assert_eq!(gallery.toggle_label(0), "Hide examples");

        gallery.toggle_examples();
        assert!(!gallery.examples_visible(0));
        assert_eq!(gallery.toggle_label(0), "Show examples");

        gallery.toggle_examples();
        assert!(gallery.examples_visible(0));
    }

    #[test]
    fn selection_is_clamped() {
        let mut gallery = GalleryState::default();
        gallery.select_previous();
        assert_eq!(gallery.selected, 0);
        for _ in 0..20 {
            gallery.select_next();
        }
        assert_eq!(gallery.selected, CONCEPTS.len() - 1);
    }

    #[test]
    fn counter_starts_at_zero_and_stops_at_target() {
        let counter = CounterAnimation {
            label: "Concepts",
            target: 15,
            duration: Duration::from_millis(2000),
        };
        assert_eq!(counter.value_at(Duration::ZERO), 0);
        assert_eq!(counter.value_at(Duration::from_millis(2000)), 15);
        assert_eq!(counter.value_at(Duration::from_secs(60)), 15);
    }

    #[test]
    fn counter_midway() {
        let counter = CounterAnimation {
            label: "Code examples",
            target: 25,
            duration: Duration::from_millis(2500),
        };
        // 78 of 156.25 steps: 25 * 78 / 156.25 = 12.48
        assert_eq!(counter.value_at(Duration::from_millis(1250)), 12);
    }

    #[test]
    fn hero_stats_finish() {
        let stats = HeroStats::default();
        let later = Instant::now() + Duration::from_secs(5);
        assert!(stats.finished(later));
        let values: Vec<u32> = stats.values(later).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![15, 8, 25]);
    }
}
