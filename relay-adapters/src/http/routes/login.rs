use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::{CookieJar, Host, cookie::Cookie};
use relay_application::RelayLoginUseCase;
use relay_core::{Credentials, SecurityCheck};
use serde::{Deserialize, Serialize};

use crate::config::{
    RelayConfig,
    constants::{LOGIN_TOKEN_COOKIE_NAME, SECURITY_CHECK_PATH},
};

use super::error::RelayApiError;

/// Inbound form body. Fields are optional so that absent and blank input
/// fall through to the same MISSING_CREDENTIALS rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub j_username: Option<String>,
    pub j_password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub username: String,
}

/// Relay a credential pair to the upstream form-login endpoint.
///
/// One upstream attempt per request, no retries. On success the upstream
/// `login-token` cookie (when present) is copied onto the response as an
/// HttpOnly, Path=/ cookie.
#[tracing::instrument(name = "Login relay", skip_all)]
pub async fn login<C>(
    State((security_check, config)): State<(C, RelayConfig)>,
    Host(host): Host,
    headers: HeaderMap,
    jar: CookieJar,
    Form(request): Form<LoginRequest>,
) -> Result<impl IntoResponse, RelayApiError>
where
    C: SecurityCheck + Clone + 'static,
{
    let credentials = Credentials::parse(
        request.j_username.as_deref(),
        request.j_password.as_deref(),
    )?;

    let setting = config.load();
    let login_url = resolve_login_url(
        setting.effective_login_url(),
        request_scheme(&headers),
        &host,
    );
    tracing::debug!(%login_url, "Resolved upstream login URL");

    let use_case = RelayLoginUseCase::new(security_check);

    match use_case.execute(&login_url, &credentials).await {
        Ok(accepted) => {
            let jar = match accepted.login_token {
                Some(token) => jar.add(
                    Cookie::build((LOGIN_TOKEN_COOKIE_NAME, token))
                        .path("/")
                        .http_only(true)
                        .build(),
                ),
                None => jar,
            };

            Ok((
                jar,
                (
                    StatusCode::OK,
                    Json(LoginResponse {
                        success: true,
                        message: "Login successful".to_owned(),
                        username: accepted.username,
                    }),
                ),
            ))
        }
        Err(error) => {
            let api_error = RelayApiError::from(error);
            tracing::error!(
                username = credentials.username(),
                error = ?api_error,
                "Login relay failed"
            );
            Err(api_error)
        }
    }
}

/// Configured URL wins verbatim; otherwise the target is synthesized from
/// the inbound request as `<scheme>://<host>:<port>/j_security_check`.
fn resolve_login_url(configured: Option<&str>, scheme: &str, host: &str) -> String {
    if let Some(url) = configured {
        return url.to_owned();
    }

    let (hostname, port) = split_host_port(host);
    let port = port.unwrap_or(default_port(scheme));

    format!("{scheme}://{hostname}:{port}{SECURITY_CHECK_PATH}")
}

/// Scheme of the inbound request. There is no servlet-style `getScheme` in
/// axum, so honor `x-forwarded-proto` from the terminating proxy and fall
/// back to plain http.
fn request_scheme(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("http")
}

fn split_host_port(host: &str) -> (&str, Option<u16>) {
    match host.rsplit_once(':') {
        Some((hostname, port)) => match port.parse() {
            Ok(port) => (hostname, Some(port)),
            // No parseable port, e.g. a bare IPv6 literal
            Err(_) => (host, None),
        },
        None => (host, None),
    }
}

fn default_port(scheme: &str) -> u16 {
    if scheme.eq_ignore_ascii_case("https") {
        443
    } else {
        80
    }
}
