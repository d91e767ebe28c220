use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while reading or writing the backing dataset file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file is missing, unreadable, or unwritable.
    #[error("dataset file unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// The file was read, but its contents do not parse as a `Dataset`.
    #[error("dataset file corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
