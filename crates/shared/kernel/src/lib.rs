//! Kernel utilities shared by the feature slices and the server binary.
//!
//! * [`config`]: layered configuration loading (file + `K1__*` environment).
//! * `server` (feature `server`): shared API state, the system router and [`server::ApiError`].
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use k1_domain as domain;
