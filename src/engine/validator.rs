//! Validity predicates for tokens.
//!
//! A validator is a pure function of the token text. The store calls it once
//! per accepted token and keeps the answer.

use regex::Regex;

/// Default shape check: something, `@`, something, `.`, something, with no
/// whitespace anywhere. This is a sanity bar, not RFC 5322.
pub const DEFAULT_PATTERN: &str = r"^\S+@\S+\.\S+$";

pub trait Validator: Send + Sync {
    fn validate(&self, value: &str) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, value: &str) -> bool {
        self(value)
    }
}

/// Validator backed by a compiled regular expression.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
}

impl PatternValidator {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for PatternValidator {
    fn default() -> Self {
        let pattern = Regex::new(DEFAULT_PATTERN).expect("default pattern compiles");
        Self { pattern }
    }
}

impl Validator for PatternValidator {
    fn validate(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}
