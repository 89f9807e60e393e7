//! # Domain
//!
//! Configuration types and shared constants. Depends on `serde` only;
//! keep I/O, networking and business rules out of this crate.

pub mod config;
pub mod constants;
