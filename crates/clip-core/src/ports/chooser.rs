//! Chooser port - request/response handshake with an external picker
//!
//! The request is a list of `"<index>: <label>"` lines; the response is the
//! single line the user picked. Exit status signals success or cancellation.

use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait ChooserPort: Send + Sync {
    /// Present `lines` to the user and return the raw selected line.
    ///
    /// Blocks until the chooser exits. There is no timeout.
    async fn choose(&self, lines: &[String]) -> Result<String, ChooserError>;
}

#[derive(Debug, Error)]
pub enum ChooserError {
    #[error("failed to start chooser `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("chooser I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Non-zero exit, typically the user dismissing the chooser.
    #[error("chooser exited with status {code:?}")]
    NonZeroExit { code: Option<i32> },

    #[error("chooser returned an empty response")]
    EmptyResponse,
}
