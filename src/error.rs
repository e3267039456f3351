use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("No schedule data found at {0}")]
    MissingInput(String),
    #[error("Failed to read schedule table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
