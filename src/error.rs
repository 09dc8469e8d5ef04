use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadiationError {
    #[error("unsupported day selector: {0:?} (expected \"Oct 1\" or \"Nov 1\")")]
    UnsupportedDay(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RadiationError>;
