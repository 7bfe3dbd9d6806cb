use thiserror::Error;

/// Why `TokenStore::add` declined a value.
///
/// Both variants are ordinary outcomes of user input, not failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenRejected {
    #[error("token is empty")]
    EmptyToken,

    #[error("token already present: {0}")]
    DuplicateToken(String),
}

/// `TokenStore::remove` was asked for a value the store does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no token with value: {0}")]
pub struct TokenNotFound(pub String);

/// Problems detected while merging options into a `Config`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid validity pattern: {0}")]
    InvalidPattern(#[source] regex::Error),

    #[error("invalid paste delimiter: {0}")]
    InvalidDelimiter(#[source] regex::Error),

    #[error("paste delimiter must not match the empty string")]
    EmptyDelimiter,

    #[error("at least one commit key is required")]
    NoCommitKeys,
}
