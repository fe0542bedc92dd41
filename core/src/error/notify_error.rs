// core/src/error/notify_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("transport error")]
    Transport(#[source] anyhow::Error),

    #[error("unexpected status: {status}: {body_snippet}")]
    HttpStatus { status: u16, body_snippet: String },

    #[error("api rejected message: {error}")]
    Api { error: String },

    #[error("decode/serde error")]
    Decode(#[source] anyhow::Error),
}
