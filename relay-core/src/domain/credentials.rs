use secrecy::Secret;

/// Error returned when a credential pair cannot be constructed
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("Username and password are required")]
    Missing,
}

/// A validated username/password pair.
///
/// Both fields are trimmed of surrounding whitespace on construction and the
/// password is wrapped in `Secret` so it never shows up in debug output or
/// log lines. Credentials live for the duration of one request and are never
/// persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    /// Build credentials from raw form input.
    ///
    /// Absent, empty, or all-whitespace values are rejected as missing.
    pub fn parse(
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, CredentialsError> {
        let username = username.map(str::trim).filter(|value| !value.is_empty());
        let password = password.map(str::trim).filter(|value| !value.is_empty());

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self {
                username: username.to_owned(),
                password: Secret::new(password.to_owned()),
            }),
            _ => Err(CredentialsError::Missing),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}
