pub mod relay_login;
