//! Errors surfaced by the content store and its storage backends.

/// Failure of a store operation.
///
/// Reads of a corrupt value are not an error: the collection falls back to its
/// seed. Everything that prevents a write from landing is.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("write to `{key}` failed: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
