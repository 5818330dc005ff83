use crate::kv::Namespace;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures of the backing store itself. Absence is never an error: lookups
/// return `Ok(None)` and removals `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("no free key in {namespace} after {attempts} attempts")]
    KeyTaken { namespace: Namespace, attempts: u32 },

    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("value at {namespace}/{key} is not valid JSON: {source}")]
    Corrupt {
        namespace: Namespace,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("value for {namespace}/{key} could not be serialized: {source}")]
    Serialize {
        namespace: Namespace,
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
