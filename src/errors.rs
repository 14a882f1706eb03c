use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// No node in the document has the requested title
    #[error("Couldn't find node with title {0:?}")]
    NodeNotFound(String),
    /// The link graph could not be written as CSV
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Reading or writing a stream failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
