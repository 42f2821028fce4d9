//! Problem file naming: `<number>_<name>.<ext>`.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::GenTestError;

/// Identity of a practice problem, derived from its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemId {
    /// Problem number as written (leading zeros preserved).
    pub number: String,
    pub name: String,
}

impl ProblemId {
    /// Validate user input for a new problem.
    ///
    /// # Errors
    /// Returns [`GenTestError::InvalidProblem`] when the number is not all
    /// ASCII digits or the name is empty or contains a path separator.
    pub fn new(number: &str, name: &str) -> Result<Self, GenTestError> {
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GenTestError::InvalidProblem {
                field: "number",
                value: number.to_string(),
                reason: "must contain only digits",
            });
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(GenTestError::InvalidProblem {
                field: "name",
                value: name.to_string(),
                reason: "must not be empty",
            });
        }
        if trimmed.contains(['/', '\\', '\0']) || trimmed.starts_with('.') {
            return Err(GenTestError::InvalidProblem {
                field: "name",
                value: name.to_string(),
                reason: "must be a plain file name",
            });
        }
        Ok(Self {
            number: number.to_string(),
            name: trimmed.to_string(),
        })
    }

    /// Parse a file stem such as `1_two_sum`.
    #[must_use]
    pub fn from_stem(stem: &str) -> Option<Self> {
        let (number, name) = stem.split_once('_')?;
        Self::new(number, name).ok()
    }

    /// Parse the stem of a problem path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_stem(path.file_stem()?.to_str()?)
    }

    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}_{}.{extension}", self.number, self.name)
    }

    fn numeric(&self) -> u128 {
        self.number.parse().unwrap_or(u128::MAX)
    }
}

impl PartialOrd for ProblemId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProblemId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric()
            .cmp(&other.numeric())
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.number.cmp(&other.number))
    }
}

/// Test file for a problem: `<tests_dir>/<stem>_test.<ext>`.
///
/// # Errors
/// Returns [`GenTestError::NoFileName`] if `problem` has no file stem.
pub fn test_file_path(tests_dir: &Path, problem: &Path) -> Result<PathBuf, GenTestError> {
    let stem = problem
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| GenTestError::NoFileName(problem.to_path_buf()))?;
    let file_name = match problem.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_test.{ext}"),
        None => format!("{stem}_test"),
    };
    Ok(tests_dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_path_mirrors_problem_stem() {
        let path = test_file_path(Path::new("tests"), Path::new("problems/1_two_sum.go"))
            .expect("path derives");
        assert_eq!(path, PathBuf::from("tests/1_two_sum_test.go"));
    }

    #[test]
    fn test_path_ignores_problem_directory() {
        let path = test_file_path(Path::new("/tmp/lc/tests"), Path::new("/a/b/problems/9_x.go"))
            .expect("path derives");
        assert_eq!(path, PathBuf::from("/tmp/lc/tests/9_x_test.go"));
    }

    #[test]
    fn file_name_round_trips_through_stem() {
        let id = ProblemId::new("1", "two_sum").expect("valid problem");
        assert_eq!(id.file_name("go"), "1_two_sum.go");
        assert_eq!(ProblemId::from_stem("1_two_sum"), Some(id));
    }

    #[rstest]
    #[case("", "two_sum")]
    #[case("12a", "two_sum")]
    #[case("-1", "two_sum")]
    #[case("1", "")]
    #[case("1", "   ")]
    #[case("1", "../escape")]
    #[case("1", "a/b")]
    #[case("1", ".hidden")]
    fn invalid_problem_input_is_rejected(#[case] number: &str, #[case] name: &str) {
        assert!(ProblemId::new(number, name).is_err());
    }

    #[test]
    fn stems_without_number_are_not_problems() {
        assert_eq!(ProblemId::from_stem("scratch"), None);
        assert_eq!(ProblemId::from_stem("notes_today"), None);
    }

    #[test]
    fn ordering_is_numeric_then_name() {
        let mut ids = vec![
            ProblemId::new("10", "a").expect("valid"),
            ProblemId::new("9", "b").expect("valid"),
            ProblemId::new("9", "a").expect("valid"),
            ProblemId::new("100", "z").expect("valid"),
        ];
        ids.sort();
        let names: Vec<String> = ids.iter().map(|id| id.file_name("go")).collect();
        assert_eq!(names, ["9_a.go", "9_b.go", "10_a.go", "100_z.go"]);
    }
}
