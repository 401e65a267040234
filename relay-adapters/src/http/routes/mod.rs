pub mod error;
pub mod login;

pub use error::{ErrorResponse, RelayApiError};
pub use login::{LoginResponse, login};
