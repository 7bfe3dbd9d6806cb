/// One accepted entry in the store.
///
/// `is_valid` is decided once, when the token is inserted, and never
/// recomputed afterwards.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub value: String,
    pub is_valid: bool,
}

impl Token {
    pub fn new(value: impl Into<String>, is_valid: bool) -> Self {
        Self {
            value: value.into(),
            is_valid,
        }
    }
}
