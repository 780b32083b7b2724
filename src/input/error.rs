/// Reasons an input payload cannot be derived from
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input is empty")]
    Empty,

    #[error("Invalid input at line {line}, column {column}: {message}")]
    Malformed {
        message: String,
        line: usize,
        column: usize,
    },
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        InputError::Malformed {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}
