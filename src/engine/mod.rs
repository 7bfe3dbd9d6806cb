pub mod config;
pub mod error;
pub mod store;
pub mod token;
pub mod validator;

pub use config::{ClassNames, Config, Options};
pub use error::{ConfigError, TokenNotFound, TokenRejected};
pub use store::TokenStore;
pub use token::Token;
pub use validator::{PatternValidator, Validator};
