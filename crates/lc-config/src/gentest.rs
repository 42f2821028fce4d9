//! Test skeleton generation settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How the generated test body calls the function under test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateStyle {
    /// One struct field per parameter and one `want` per result.
    #[default]
    Typed,
    /// Untyped `inputs []interface{}` spread into the call with `...`.
    Variadic,
}

fn default_test_package() -> String {
    "main".to_string()
}

fn default_import_path() -> String {
    "leetcode/problems".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GentestConfig {
    #[serde(default)]
    pub style: TemplateStyle,

    /// Package clause of generated test files.
    #[serde(default = "default_test_package")]
    pub test_package: String,

    /// Import path of the package holding the solutions.
    #[serde(default = "default_import_path")]
    pub import_path: String,

    /// Seed new problem files with a `package` clause instead of leaving them empty.
    #[serde(default)]
    pub problem_template: bool,
}

impl Default for GentestConfig {
    fn default() -> Self {
        Self {
            style: TemplateStyle::default(),
            test_package: default_test_package(),
            import_path: default_import_path(),
            problem_template: false,
        }
    }
}

impl GentestConfig {
    /// Last segment of the import path, used as the problem package name.
    #[must_use]
    pub fn package_name(&self) -> &str {
        self.import_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.import_path)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.import_path.trim().is_empty() {
            return Err(ConfigError::empty("gentest.import_path"));
        }
        if self.test_package.trim().is_empty() {
            return Err(ConfigError::empty("gentest.test_package"));
        }
        Ok(())
    }
}
