pub mod http_security_check;

pub use http_security_check::HttpSecurityCheck;
