use std::fmt;
use std::sync::Arc;

use crate::engine::error::{TokenNotFound, TokenRejected};
use crate::engine::token::Token;
use crate::engine::validator::{PatternValidator, Validator};

/// Ordered, duplicate-free collection of tokens.
///
/// Values are compared by exact string equality, so `A@b.com` and `a@b.com`
/// are different tokens. The store never renders anything; callers render
/// the `Token` returned by `add`.
pub struct TokenStore {
    tokens: Vec<Token>,
    validator: Arc<dyn Validator>,
}

impl TokenStore {
    pub fn new(validator: Arc<dyn Validator>) -> Self {
        Self {
            tokens: Vec::new(),
            validator,
        }
    }

    pub fn with_default_validator() -> Self {
        Self::new(Arc::new(PatternValidator::default()))
    }

    /// Appends `value` unless it is empty or already present.
    ///
    /// The value is expected to be trimmed already. On success the returned
    /// token carries the validity computed right now.
    pub fn add(&mut self, value: &str) -> Result<Token, TokenRejected> {
        if value.is_empty() {
            log::debug!("rejected empty token");
            return Err(TokenRejected::EmptyToken);
        }

        if self.contains(value) {
            log::debug!("rejected duplicate token {value:?}");
            return Err(TokenRejected::DuplicateToken(value.to_string()));
        }

        let token = Token::new(value, self.validator.validate(value));
        log::debug!("added token {:?} (valid: {})", token.value, token.is_valid);
        self.tokens.push(token.clone());
        Ok(token)
    }

    /// Removes the token whose value equals `value`.
    pub fn remove(&mut self, value: &str) -> Result<Token, TokenNotFound> {
        match self.tokens.iter().position(|t| t.value == value) {
            Some(index) => {
                let token = self.tokens.remove(index);
                log::debug!("removed token {value:?}");
                Ok(token)
            }
            None => {
                log::debug!("remove ignored, no token {value:?}");
                Err(TokenNotFound(value.to_string()))
            }
        }
    }

    pub fn list(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.tokens.iter().any(|t| t.value == value)
    }

    pub fn values(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.value.as_str()).collect()
    }

    pub fn valid_values(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| t.is_valid)
            .map(|t| t.value.as_str())
            .collect()
    }

    pub fn invalid_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_valid).count()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::with_default_validator()
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
