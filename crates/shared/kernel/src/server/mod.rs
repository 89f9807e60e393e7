mod error;
mod health;
pub mod router;
mod state;

pub use error::{ApiError, ApiErrorExt, ErrorBody, panic_response};
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
