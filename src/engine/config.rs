// Configuration for one emails-input instance.
// Every instance owns its own merged copy; nothing here is shared or mutated
// after construction.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crossterm::event::KeyCode;
use regex::Regex;

use crate::engine::error::ConfigError;
use crate::engine::validator::{PatternValidator, Validator};

pub const DEFAULT_PLACEHOLDER: &str = "add more people...";
pub const DEFAULT_DELIMITER: &str = ",";

/// Styling hooks handed to the presenter. The theme maps each name to a
/// terminal style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Outer container block
    pub container: String,

    /// The text field
    pub item_input: String,

    /// Every chip
    pub item: String,

    /// Added on top of `item` for chips that failed validation
    pub item_invalid: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "emails-input-main-container".to_string(),
            item_input: "emails-input-item-input".to_string(),
            item: "emails-input-item".to_string(),
            item_invalid: "emails-input-item-invalid".to_string(),
        }
    }
}

/// Partial configuration as supplied by a caller. Unset fields fall back to
/// the defaults in `Config::default()`.
#[derive(Default)]
pub struct Options {
    pub commit_keys: Option<Vec<KeyCode>>,
    pub paste_delimiter: Option<String>,
    pub validity_pattern: Option<String>,
    /// Takes precedence over `validity_pattern` when both are set.
    pub validator: Option<Arc<dyn Validator>>,
    pub placeholder: Option<String>,
    pub class_names: Option<ClassNames>,
}

/// Fully resolved configuration.
#[derive(Clone)]
pub struct Config {
    pub commit_keys: HashSet<KeyCode>,
    pub paste_delimiter: Regex,
    pub validator: Arc<dyn Validator>,
    pub placeholder: String,
    pub class_names: ClassNames,
}

impl Config {
    /// Merges `options` over the defaults, compiling any patterns.
    pub fn from_options(options: Options) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let commit_keys = match options.commit_keys {
            Some(keys) if keys.is_empty() => return Err(ConfigError::NoCommitKeys),
            Some(keys) => keys.into_iter().collect(),
            None => defaults.commit_keys,
        };

        let paste_delimiter = match options.paste_delimiter {
            Some(pattern) => {
                let regex = Regex::new(&pattern).map_err(ConfigError::InvalidDelimiter)?;
                if regex.is_match("") {
                    return Err(ConfigError::EmptyDelimiter);
                }
                regex
            }
            None => defaults.paste_delimiter,
        };

        let validator = match (options.validator, options.validity_pattern) {
            (Some(validator), _) => validator,
            (None, Some(pattern)) => {
                let regex = Regex::new(&pattern).map_err(ConfigError::InvalidPattern)?;
                Arc::new(PatternValidator::new(regex))
            }
            (None, None) => defaults.validator,
        };

        Ok(Self {
            commit_keys,
            paste_delimiter,
            validator,
            placeholder: options.placeholder.unwrap_or(defaults.placeholder),
            class_names: options.class_names.unwrap_or(defaults.class_names),
        })
    }

    pub fn is_commit_key(&self, key: KeyCode) -> bool {
        self.commit_keys.contains(&key)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commit_keys: HashSet::from([KeyCode::Enter, KeyCode::Char(',')]),
            paste_delimiter: Regex::new(DEFAULT_DELIMITER).expect("default delimiter compiles"),
            validator: Arc::new(PatternValidator::default()),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            class_names: ClassNames::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("commit_keys", &self.commit_keys)
            .field("paste_delimiter", &self.paste_delimiter.as_str())
            .field("placeholder", &self.placeholder)
            .field("class_names", &self.class_names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validator::DEFAULT_PATTERN;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.is_commit_key(KeyCode::Enter));
        assert!(config.is_commit_key(KeyCode::Char(',')));
        assert!(!config.is_commit_key(KeyCode::Char(';')));
        assert_eq!(config.paste_delimiter.as_str(), DEFAULT_DELIMITER);
        assert_eq!(config.placeholder, "add more people...");
        assert!(config.validator.validate("a@b.com"));
        assert!(!config.validator.validate("notanemail"));
        assert_eq!(config.class_names.item_invalid, "emails-input-item-invalid");
    }

    #[test]
    fn test_default_validator_uses_default_pattern() {
        let config = Config::default();
        let pattern = PatternValidator::new(Regex::new(DEFAULT_PATTERN).unwrap());
        for candidate in ["a@b.com", "a b@c.com", "@b.com", "a@b", "x@y.z"] {
            assert_eq!(
                config.validator.validate(candidate),
                pattern.validate(candidate),
                "{candidate}"
            );
        }
    }

    #[test]
    fn test_empty_options_match_defaults() {
        let config = Config::from_options(Options::default()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.commit_keys, defaults.commit_keys);
        assert_eq!(config.placeholder, defaults.placeholder);
        assert_eq!(config.class_names, defaults.class_names);
    }

    #[test]
    fn test_partial_options_override_only_what_is_set() {
        let config = Config::from_options(Options {
            commit_keys: Some(vec![KeyCode::Tab]),
            placeholder: Some("recipients".to_string()),
            ..Options::default()
        })
        .unwrap();
        assert!(config.is_commit_key(KeyCode::Tab));
        assert!(!config.is_commit_key(KeyCode::Enter));
        assert_eq!(config.placeholder, "recipients");
        assert_eq!(config.paste_delimiter.as_str(), DEFAULT_DELIMITER);
    }

    #[test]
    fn test_instances_do_not_share_overrides() {
        let first = Config::from_options(Options {
            placeholder: Some("first".to_string()),
            ..Options::default()
        })
        .unwrap();
        let second = Config::from_options(Options::default()).unwrap();
        assert_eq!(first.placeholder, "first");
        assert_eq!(second.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_custom_validity_pattern() {
        let config = Config::from_options(Options {
            validity_pattern: Some(r"@example\.com$".to_string()),
            ..Options::default()
        })
        .unwrap();
        assert!(config.validator.validate("me@example.com"));
        assert!(!config.validator.validate("me@b.com"));
    }

    #[test]
    fn test_validator_wins_over_pattern() {
        let config = Config::from_options(Options {
            validity_pattern: Some("^never$".to_string()),
            validator: Some(Arc::new(|_: &str| true)),
            ..Options::default()
        })
        .unwrap();
        assert!(config.validator.validate("anything"));
    }

    #[test]
    fn test_invalid_pattern_is_a_config_error() {
        let result = Config::from_options(Options {
            validity_pattern: Some("(".to_string()),
            ..Options::default()
        });
        assert!(matches!(result, Err(ConfigError::InvalidPattern(_))));
    }

    #[test]
    fn test_delimiter_must_not_match_empty() {
        let result = Config::from_options(Options {
            paste_delimiter: Some(";*".to_string()),
            ..Options::default()
        });
        assert!(matches!(result, Err(ConfigError::EmptyDelimiter)));
    }

    #[test]
    fn test_empty_commit_keys_rejected() {
        let result = Config::from_options(Options {
            commit_keys: Some(vec![]),
            ..Options::default()
        });
        assert!(matches!(result, Err(ConfigError::NoCommitKeys)));
    }
}
