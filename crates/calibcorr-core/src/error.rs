// crates/calibcorr-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalibError>;

#[derive(Debug, Error)]
pub enum CalibError {
    #[error("coordinate error: {0}")]
    Coord(String),

    #[error("table format error: {0}")]
    TableFormat(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
