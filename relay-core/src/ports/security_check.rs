use async_trait::async_trait;

use crate::domain::{credentials::Credentials, upstream_reply::UpstreamReply};

/// Transport-level failure while talking to the upstream endpoint.
///
/// Non-2xx upstream statuses are NOT errors at this layer; they come back as
/// a regular `UpstreamReply` and are interpreted by the caller.
#[derive(Debug, thiserror::Error)]
pub enum SecurityCheckError {
    #[error("Authentication endpoint is unreachable: {0}")]
    Unreachable(String),

    #[error("Authentication request timed out")]
    TimedOut,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Port trait for the upstream form-login endpoint
#[async_trait]
pub trait SecurityCheck: Send + Sync {
    /// Submit a credential pair to `login_url` and report the raw outcome.
    async fn submit(
        &self,
        login_url: &str,
        credentials: &Credentials,
    ) -> Result<UpstreamReply, SecurityCheckError>;
}
