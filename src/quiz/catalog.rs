//! Question catalogs: the built-in F# quiz and JSON-loaded custom sets

use std::fs;
use std::path::Path;

use super::error::QuizError;
use super::question::Question;

/// The built-in five-question F# quiz
pub fn builtin() -> Vec<Question> {
    vec![
        Question::new(
            "What does this code print?",
            "let x = 5\nlet y = x + 3\nprintfn \"%d\" y",
            ["5", "8", "Error", "3"],
            1,
            "x is 5, so y is 5 + 3 = 8",
        ),
        Question::new(
            "What is the result of this function?",
            "let duplicar lista = \n    lista |> List.map (fun x -> x * 2)\nduplicar [1; 2; 3]",
            ["[1; 2; 3]", "[2; 4; 6]", "[1; 4; 9]", "Error"],
            1,
            "List.map applies the function to every element: 1*2=2, 2*2=4, 3*2=6",
        ),
        Question::new(
            "What does this pattern match do?",
            "match x with\n| 0 -> \"Cero\"\n| 1 -> \"Uno\"\n| _ -> \"Otro\"",
            [
                "Always returns 'Cero'",
                "Sorts numbers into categories",
                "Adds numbers",
                "Filters a list",
            ],
            1,
            "The match compares x against each pattern and returns the matching text",
        ),
        Question::new(
            "How is a record defined in F#?",
            "type Persona = {\n    Nombre: string\n    Edad: int\n}",
            [
                "With a class and properties",
                "With interfaces",
                "With the { field: type } syntax",
                "It cannot be defined",
            ],
            2,
            "Records use the syntax type Name = { field1: type1; field2: type2 }",
        ),
        Question::new(
            "What does the |> operator mean?",
            "[1..5] \n|> List.filter (fun x -> x > 2)\n|> List.sum",
            [
                "Assignment",
                "Pipe forward: passes the result as the last argument",
                "Comparison",
                "Division",
            ],
            1,
            "Pipe forward (|>) takes the value on its left and passes it as the last argument \
             to the function on its right",
        ),
    ]
}

/// Validate every question in a catalog
pub fn validate(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::EmptyCatalog);
    }
    questions.iter().enumerate().try_for_each(|(i, q)| q.validate(i))
}

/// Parse and validate a catalog from a JSON string
pub fn from_json_str(json: &str) -> Result<Vec<Question>, QuizError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    validate(&questions)?;
    Ok(questions)
}

/// Load and validate a catalog from a JSON file
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, QuizError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|source| QuizError::Read { path: path.to_path_buf(), source })?;
    let questions = from_json_str(&contents)?;
    tracing::info!("Loaded {} questions from {:?}", questions.len(), path);
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_catalog_is_valid() {
        let questions = builtin();
        assert_eq!(questions.len(), 5);
        assert!(validate(&questions).is_ok());
    }

    #[test]
    fn builtin_correct_indices() {
        let indices: Vec<usize> = builtin().iter().map(|q| q.correct_index).collect();
        assert_eq!(indices, vec![1, 1, 1, 2, 1]);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(validate(&[]), Err(QuizError::EmptyCatalog)));
        assert!(matches!(from_json_str("[]"), Err(QuizError::EmptyCatalog)));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(from_json_str("{ not json"), Err(QuizError::Parse(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"prompt":"p","code":"c","options":["a","b","c"],"correct_index":2,"explanation":"e"}}]"#
        )
        .unwrap();

        let questions = load_from_path(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_index, 2);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_from_path("/definitely/not/here/questions.json");
        assert!(matches!(result, Err(QuizError::Read { .. })));
    }
}
