#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed model response: {0}")]
    Malformed(String),
}

impl AiError {
    /// Status errors carry the response body; keep log lines short.
    pub(crate) fn status(status: u16, body: &str) -> Self {
        const MAX: usize = 300;
        let body = match body.char_indices().nth(MAX) {
            Some((idx, _)) => format!("{}...", &body[..idx]),
            None => body.to_string(),
        };
        Self::Status { status, body }
    }
}
