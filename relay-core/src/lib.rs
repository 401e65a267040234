pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::{Credentials, CredentialsError},
    upstream_reply::UpstreamReply,
};

pub use ports::security_check::{SecurityCheck, SecurityCheckError};
