/// Domain errors raised while interpreting a classification request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Query parameter '{name}' is required")]
    MissingParameter { name: &'static str },

    #[error("Query parameter '{name}' must be an integer, got '{value}'")]
    InvalidParameter { name: &'static str, value: String },
}
