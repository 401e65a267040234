pub mod credentials;
pub mod upstream_reply;
