use lovemeet_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("not a share link: {0}")]
    NotAShareLink(String),
}
