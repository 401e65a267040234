use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use relay_application::RelayLoginError;
use relay_core::{CredentialsError, SecurityCheckError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON envelope returned on every failure path.
///
/// `statusCode` carries the raw upstream status and is only present on the
/// AUTH_FAILED row.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

#[derive(Debug, Error)]
pub enum RelayApiError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Invalid username or password. Please check your credentials and try again.")]
    InvalidCredentials,

    #[error("Account is locked or disabled. Please contact your administrator.")]
    AccountLocked,

    #[error("Authentication service is temporarily unavailable. Please try again later.")]
    AuthServiceError,

    #[error("Authentication failed. Please try again.")]
    AuthFailed(u16),

    #[error("Authentication service is unavailable. Please try again later.")]
    ServiceUnavailable,

    #[error("Authentication request timed out. Please try again.")]
    RequestTimeout,

    #[error("An unexpected error occurred. Please try again later.")]
    Unexpected(String),
}

impl RelayApiError {
    /// Stable symbolic code clients branch on
    pub fn error_code(&self) -> &'static str {
        match self {
            RelayApiError::MissingCredentials => "MISSING_CREDENTIALS",
            RelayApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            RelayApiError::AccountLocked => "ACCOUNT_LOCKED",
            RelayApiError::AuthServiceError => "AUTH_SERVICE_ERROR",
            RelayApiError::AuthFailed(_) => "AUTH_FAILED",
            RelayApiError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            RelayApiError::RequestTimeout => "REQUEST_TIMEOUT",
            RelayApiError::Unexpected(_) => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            RelayApiError::MissingCredentials => StatusCode::BAD_REQUEST,
            RelayApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            RelayApiError::AccountLocked => StatusCode::FORBIDDEN,
            RelayApiError::AuthServiceError => StatusCode::INTERNAL_SERVER_ERROR,
            RelayApiError::AuthFailed(_) => StatusCode::BAD_GATEWAY,
            RelayApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            RelayApiError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            RelayApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn upstream_status(&self) -> Option<u16> {
        match self {
            RelayApiError::AuthFailed(status) => Some(*status),
            _ => None,
        }
    }
}

impl IntoResponse for RelayApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            success: false,
            message: self.to_string(),
            error_code: self.error_code().to_owned(),
            status_code: self.upstream_status(),
        });

        (self.status(), body).into_response()
    }
}

impl From<CredentialsError> for RelayApiError {
    fn from(error: CredentialsError) -> Self {
        match error {
            CredentialsError::Missing => RelayApiError::MissingCredentials,
        }
    }
}

impl From<RelayLoginError> for RelayApiError {
    fn from(error: RelayLoginError) -> Self {
        match error {
            RelayLoginError::InvalidCredentials => RelayApiError::InvalidCredentials,
            RelayLoginError::AccountLocked => RelayApiError::AccountLocked,
            RelayLoginError::AuthServiceError => RelayApiError::AuthServiceError,
            RelayLoginError::UnexpectedStatus(status) => RelayApiError::AuthFailed(status),
            RelayLoginError::SecurityCheck(e) => e.into(),
        }
    }
}

impl From<SecurityCheckError> for RelayApiError {
    fn from(error: SecurityCheckError) -> Self {
        match error {
            SecurityCheckError::Unreachable(_) => RelayApiError::ServiceUnavailable,
            SecurityCheckError::TimedOut => RelayApiError::RequestTimeout,
            SecurityCheckError::Unexpected(detail) => RelayApiError::Unexpected(detail),
        }
    }
}
