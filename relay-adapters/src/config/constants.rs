/// Route the relay itself serves
pub const LOGIN_ROUTE: &str = "/bin/wknd/login";

/// Path of the upstream form-login endpoint, used when the login URL is
/// derived from the inbound request
pub const SECURITY_CHECK_PATH: &str = "/j_security_check";

/// The only upstream cookie the relay forwards. Anything else the upstream
/// sets is dropped on purpose.
pub const LOGIN_TOKEN_COOKIE_NAME: &str = "login-token";

/// Form field names, identical on the inbound and the upstream side
pub const USERNAME_FIELD: &str = "j_username";
pub const PASSWORD_FIELD: &str = "j_password";

pub mod prod {
    use std::time::Duration;

    pub const APP_ADDRESS: &str = "0.0.0.0:3000";

    pub mod upstream {
        use super::Duration;

        pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
        pub const TIMEOUT: Duration = Duration::from_secs(10);
    }
}

pub mod test {
    use std::time::Duration;

    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod upstream {
        use super::Duration;

        pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(200);
        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
