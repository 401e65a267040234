pub mod use_cases;

pub use use_cases::relay_login::{LoginAccepted, RelayLoginError, RelayLoginUseCase};
