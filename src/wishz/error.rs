use thiserror::Error;

#[derive(Error, Debug)]
pub enum WishzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid timestamp '{0}' (expected YYYY-MM-DD HH:MM:SS)")]
    Timestamp(String),

    #[error("malformed record line: {0}")]
    MalformedLine(String),

    #[error("invalid selection: {index} (store has {count} records)")]
    InvalidSelection { index: usize, count: usize },

    #[error("dispatch error: {0}")]
    Dispatch(String),
}

pub type Result<T> = std::result::Result<T, WishzError>;
