pub mod security_check;
