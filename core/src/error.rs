use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Invalid weight table '{table}': {reason}")]
    InvalidWeights { table: &'static str, reason: String },

    #[error("Authorization code space exhausted for {date}")]
    AuthCodeSpaceExhausted { date: chrono::NaiveDate },
}

pub type GenResult<T> = Result<T, GenError>;
