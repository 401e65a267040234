use async_trait::async_trait;
use relay_core::{Credentials, SecurityCheck, SecurityCheckError, UpstreamReply};
use reqwest::{Client, redirect::Policy};
use secrecy::ExposeSecret;

use crate::config::{
    constants::{LOGIN_TOKEN_COOKIE_NAME, PASSWORD_FIELD, USERNAME_FIELD},
    settings::RelaySetting,
};

/// Reqwest-backed implementation of the [`SecurityCheck`] port.
///
/// Holds one pooled client for the lifetime of the relay. The client never
/// follows redirects: the 302 the upstream answers on success is the signal
/// the relay inspects, so it must come back as-is together with its
/// `Set-Cookie` headers.
#[derive(Clone)]
pub struct HttpSecurityCheck {
    http_client: Client,
}

impl HttpSecurityCheck {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Build the client the relay runs with: redirects off, connect and
    /// total timeouts bounded so a slow upstream cannot hold a worker.
    pub fn from_settings(settings: &RelaySetting) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .redirect(Policy::none())
            .connect_timeout(settings.upstream.connect_timeout())
            .timeout(settings.upstream.timeout())
            .build()?;

        Ok(Self::new(http_client))
    }
}

#[async_trait]
impl SecurityCheck for HttpSecurityCheck {
    #[tracing::instrument(name = "Submitting credentials upstream", skip_all)]
    async fn submit(
        &self,
        login_url: &str,
        credentials: &Credentials,
    ) -> Result<UpstreamReply, SecurityCheckError> {
        let form = [
            (USERNAME_FIELD, credentials.username()),
            (PASSWORD_FIELD, credentials.password().expose_secret().as_str()),
        ];

        let response = self
            .http_client
            .post(login_url)
            .form(&form)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status().as_u16();
        let login_token = response
            .cookies()
            .find(|cookie| cookie.name() == LOGIN_TOKEN_COOKIE_NAME)
            .map(|cookie| cookie.value().to_owned());

        Ok(UpstreamReply::new(status, login_token))
    }
}

fn classify_transport_error(error: reqwest::Error) -> SecurityCheckError {
    // A connect timeout reports both is_timeout and is_connect; the timeout
    // row wins, matching the relay's 408 mapping.
    if error.is_timeout() {
        SecurityCheckError::TimedOut
    } else if error.is_connect() {
        SecurityCheckError::Unreachable(error.to_string())
    } else {
        SecurityCheckError::Unexpected(error.to_string())
    }
}
