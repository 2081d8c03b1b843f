use thiserror::Error;

#[derive(Debug, Error)]
pub enum SizingError {
    #[error("advisor error: {0}")]
    Advisor(String),

    #[error("reply parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SizingResult<T> = Result<T, SizingError>;
