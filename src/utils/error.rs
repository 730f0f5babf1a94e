use thiserror::Error;

#[derive(Error, Debug)]
pub enum GardenError {
    #[error("Month must be between 1 and 12.")]
    MonthOutOfRange { value: i64 },

    #[error("'{input}' is not a valid month number.")]
    InvalidNumber { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GardenError>;
