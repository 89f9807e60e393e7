//! # Integration Verification
//!
//! Decides whether a requested `k1a` release can be integrated with a
//! declared technical stack, and explains why not when it cannot.
//!
//! ## Modules
//!
//! * **[`matrix`]**: the read-only compatibility tables (accepted `k1a`
//!   versions and the required version of each supported component).
//! * **[`checker`]**: turns a request into a [`VerificationResult`], listing
//!   one issue per incompatibility and a remedy where one exists.
//! * **`handlers`** (feature `server`): the `POST /integration/verify` endpoint.
//!
//! The check is pure: it never fails, and identical inputs always yield
//! identical results.

pub mod checker;
mod error;
#[cfg(feature = "server")]
pub mod handlers;
pub mod matrix;
mod model;

pub use crate::checker::{Incompatibility, verify_integration};
pub use crate::error::{IntegrationError, IntegrationErrorExt};
pub use crate::matrix::CompatibilityMatrix;
pub use crate::model::{TechStackComponent, VerificationResult};
