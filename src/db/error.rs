use thiserror::Error;

/// Failures of the persistence adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// A persisted value that could not be decoded into its in-memory form.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("'{value}' under key '{key}' is not a non-negative integer")]
    Integer {
        key: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("'{value}' under key '{key}' is not a valid record")]
    Record {
        key: &'static str,
        value: String,
        #[source]
        source: serde_json::Error,
    },
}
