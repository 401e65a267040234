/// What the upstream authentication endpoint answered.
///
/// Only the HTTP status and the login token cookie survive the upstream
/// exchange; nothing else is retained beyond the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub login_token: Option<String>,
}

impl UpstreamReply {
    pub fn new(status: u16, login_token: Option<String>) -> Self {
        Self {
            status,
            login_token,
        }
    }
}
