use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid value for {key}: '{value}', details: {details}")]
    InvalidValue {
        key: String,
        value: String,
        details: String,
    },
    #[error("Syntax error at line {line}: {content}")]
    Syntax { line: usize, content: String },
    #[error(transparent)]
    Provider(#[from] super::provider::Error),
}

impl Error {
    pub fn invalid(key: &str, value: &str, details: impl ToString) -> Self {
        Error::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            details: details.to_string(),
        }
    }
}
