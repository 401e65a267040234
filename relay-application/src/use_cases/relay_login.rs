use relay_core::{Credentials, SecurityCheck, SecurityCheckError};

/// Successful outcome of the relay login use case
#[derive(Debug, PartialEq, Eq)]
pub struct LoginAccepted {
    /// Username echoed back to the caller
    pub username: String,
    /// Login token issued by the upstream endpoint, when it set one
    pub login_token: Option<String>,
}

/// Error types specific to the relay login use case
#[derive(Debug, thiserror::Error)]
pub enum RelayLoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account is locked or disabled")]
    AccountLocked,

    #[error("Authentication service error")]
    AuthServiceError,

    #[error("Authentication failed with upstream status {0}")]
    UnexpectedStatus(u16),

    #[error(transparent)]
    SecurityCheck(#[from] SecurityCheckError),
}

/// Relay login use case - submits credentials upstream and interprets the
/// resulting HTTP status.
///
/// The upstream endpoint signals success with a redirect (it is a browser
/// form target), so 302 is the accepted outcome and is never followed.
pub struct RelayLoginUseCase<C>
where
    C: SecurityCheck,
{
    security_check: C,
}

impl<C> RelayLoginUseCase<C>
where
    C: SecurityCheck,
{
    pub fn new(security_check: C) -> Self {
        Self { security_check }
    }

    /// Execute the relay login use case
    ///
    /// # Arguments
    /// * `login_url` - Fully resolved upstream login URL
    /// * `credentials` - Trimmed, validated credential pair
    #[tracing::instrument(
        name = "RelayLoginUseCase::execute",
        skip_all,
        fields(username = credentials.username())
    )]
    pub async fn execute(
        &self,
        login_url: &str,
        credentials: &Credentials,
    ) -> Result<LoginAccepted, RelayLoginError> {
        let reply = self.security_check.submit(login_url, credentials).await?;

        match reply.status {
            302 => Ok(LoginAccepted {
                username: credentials.username().to_owned(),
                login_token: reply.login_token,
            }),
            401 => Err(RelayLoginError::InvalidCredentials),
            403 => Err(RelayLoginError::AccountLocked),
            500 => Err(RelayLoginError::AuthServiceError),
            status => Err(RelayLoginError::UnexpectedStatus(status)),
        }
    }
}
