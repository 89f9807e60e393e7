//! Facade crate for `k1` features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `k1` with the `server` feature to get the HTTP routers.
//! - Use [`features::integration`] directly for in-process verification.

pub use k1_domain as domain;
pub use k1_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use k1_integration::handlers::integration_router;
        pub use k1_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use k1_integration as integration;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "integration",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn integration_is_always_enabled() {
        assert!(features::is_enabled("integration"));
        assert!(!features::is_enabled("licensing"));
        assert_eq!(features::is_enabled("server"), cfg!(feature = "server"));
    }

    #[test]
    fn facade_reaches_the_checker() {
        let result = features::integration::verify_integration("3.0", &[], "api");
        assert!(result.is_compatible());
    }
}
