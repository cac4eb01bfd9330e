use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unable to parse file: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingHeaders(Vec<String>),
    #[error("no valid rows to import")]
    NoValidRows,
    #[error("failed to save contact: {0}")]
    Insert(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, ImportError>;
