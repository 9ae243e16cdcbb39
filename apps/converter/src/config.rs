//! Converter configuration from the environment.

use std::path::PathBuf;

pub const INPUT_VAR: &str = "QUIZ_BANK_INPUT";
pub const OUTPUT_VAR: &str = "QUIZ_BANK_OUTPUT";
pub const DIALECT_VAR: &str = "QUIZ_BANK_DIALECT";

const DEFAULT_INPUT: &str = "docs/Embedded_quiz_bank.md";
const DEFAULT_OUTPUT: &str = "src/data/quiz_data.json";

/// Input and output locations, relative to the working directory by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// JSON file overriding markup tokens; the built-in dialect when unset.
    pub dialect: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            dialect: None,
        }
    }
}

impl Config {
    /// Read paths from `QUIZ_BANK_INPUT` / `QUIZ_BANK_OUTPUT` /
    /// `QUIZ_BANK_DIALECT`, falling back to the fixed defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            input: lookup(INPUT_VAR).map(PathBuf::from).unwrap_or(defaults.input),
            output: lookup(OUTPUT_VAR).map(PathBuf::from).unwrap_or(defaults.output),
            dialect: lookup(DIALECT_VAR).filter(|v| !v.is_empty()).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.input, PathBuf::from("docs/Embedded_quiz_bank.md"));
        assert_eq!(config.output, PathBuf::from("src/data/quiz_data.json"));
        assert!(config.input.is_relative());
        assert_eq!(config.dialect, None);
    }

    #[test]
    fn overrides_from_lookup() {
        let config = Config::from_lookup(|key| match key {
            INPUT_VAR => Some("bank.md".to_string()),
            _ => None,
        });
        assert_eq!(config.input, PathBuf::from("bank.md"));
        assert_eq!(config.output, Config::default().output);
    }

    #[test]
    fn dialect_path_from_lookup() {
        let config = Config::from_lookup(|key| match key {
            DIALECT_VAR => Some("dialect.json".to_string()),
            _ => None,
        });
        assert_eq!(config.dialect, Some(PathBuf::from("dialect.json")));

        let config = Config::from_lookup(|key| (key == DIALECT_VAR).then(String::new));
        assert_eq!(config.dialect, None);
    }
}
