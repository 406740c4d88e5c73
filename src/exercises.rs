//! Free-text exercises
//!
//! Solutions are "graded" by checking that the text mentions the functions
//! the exercise asks for. There is no parsing; these are plain predicates
//! over the submitted text with no shared state.

/// A test case listed under an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub input: i64,
    pub expected: &'static [i64],
}

/// How an exercise reports its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// A pass/fail mark next to each listed test case
    PerTestCase,
    /// A single notification
    Notification,
}

/// A free-text exercise
#[derive(Debug, Clone, Copy)]
pub struct Exercise {
    pub number: u8,
    pub title: &'static str,
    pub statement: &'static str,
    pub starter: &'static str,
    pub test_cases: &'static [TestCase],
    pub feedback: Feedback,
    grader: fn(&str) -> bool,
}

impl Exercise {
    pub fn grade(&self, solution: &str) -> Verdict {
        let passed = (self.grader)(solution);
        tracing::debug!("Exercise {} graded: passed={}", self.number, passed);
        Verdict { passed, feedback: self.feedback, message: self.message(passed) }
    }

    fn message(&self, passed: bool) -> &'static str {
        match (self.number, passed) {
            (_, true) if self.feedback == Feedback::Notification => "Correct solution! \u{1F389}",
            (2, false) => {
                "Check your solution. It must use sortBy, access the GDP (pib) and printfn/iter."
            }
            (_, true) => "\u{2713} Correct",
            (_, false) => "\u{2717} Review",
        }
    }
}

/// Outcome of grading a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub feedback: Feedback,
    pub message: &'static str,
}

/// Exercise 1: print the first n odd numbers
pub fn odd_numbers_solution_ok(code: &str) -> bool {
    code.contains("2*") && code.contains("map") && code.contains("iter")
}

/// Exercise 2: sort countries by GDP and print them
pub fn gdp_sort_solution_ok(code: &str) -> bool {
    let sorts = code.contains("sortBy");
    let uses_gdp = code.contains("pib") || code.contains("PIB");
    let prints = code.contains("printfn") || code.contains("iter");
    sorts && uses_gdp && prints
}

pub const EXERCISES: [Exercise; 2] = [
    Exercise {
        number: 1,
        title: "First n odd numbers",
        statement: "Write a function that prints the first n odd numbers using List.map \
                    and List.iter.",
        starter: "let impares n =\n    [0..n-1]\n    |> List.map (fun i -> 2*i + 1)\n    |> List.iter (printfn \"%d\")",
        test_cases: &[
            TestCase { input: 5, expected: &[1, 3, 5, 7, 9] },
            TestCase { input: 3, expected: &[1, 3, 5] },
        ],
        feedback: Feedback::PerTestCase,
        grader: odd_numbers_solution_ok,
    },
    Exercise {
        number: 2,
        title: "Countries by GDP",
        statement: "Given a list of (country, pib) records, sort them by GDP and print each \
                    one.",
        starter: "type Pais = { Nombre: string; PIB: float }\n\nlet ordenar paises =\n    paises\n    |> List.sortBy (fun p -> p.PIB)\n    |> List.iter (fun p -> printfn \"%s: %.1f\" p.Nombre p.PIB)",
        test_cases: &[],
        feedback: Feedback::Notification,
        grader: gdp_sort_solution_ok,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_numbers_requires_all_markers() {
        assert!(odd_numbers_solution_ok("[0..n-1] |> List.map (fun i -> 2*i+1) |> List.iter"));
        assert!(!odd_numbers_solution_ok("List.map (fun i -> 2 * i + 1) |> List.iter"));
        assert!(!odd_numbers_solution_ok("2* map"));
    }

    #[test]
    fn gdp_accepts_either_case_of_pib() {
        assert!(gdp_sort_solution_ok("List.sortBy (fun p -> p.pib) |> List.iter"));
        assert!(gdp_sort_solution_ok("List.sortBy (fun p -> p.PIB)\nprintfn \"%A\""));
        assert!(!gdp_sort_solution_ok("List.sortBy (fun p -> p.Pib) |> List.iter"));
        assert!(!gdp_sort_solution_ok("List.sort pib |> List.iter"));
    }

    #[test]
    fn starters_pass_their_own_grader() {
        for exercise in &EXERCISES {
            assert!(exercise.grade(exercise.starter).passed, "exercise {}", exercise.number);
        }
    }

    #[test]
    fn exercise_one_reports_per_test_case() {
        let verdict = EXERCISES[0].grade("nothing");
        assert!(!verdict.passed);
        assert_eq!(verdict.feedback, Feedback::PerTestCase);
        assert_eq!(verdict.message, "\u{2717} Review");
        assert_eq!(EXERCISES[0].test_cases.len(), 2);
    }

    #[test]
    fn exercise_two_notifies() {
        let verdict = EXERCISES[1].grade("nothing");
        assert_eq!(verdict.feedback, Feedback::Notification);
        assert!(verdict.message.contains("sortBy"));

        let verdict = EXERCISES[1].grade(EXERCISES[1].starter);
        assert!(verdict.message.starts_with("Correct solution"));
    }
}
