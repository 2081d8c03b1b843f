use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("call script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
