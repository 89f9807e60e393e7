use std::borrow::Cow;

/// A specialized [`IntegrationError`] enum of this crate.
#[k1_derive::k1_error]
pub enum IntegrationError {
    /// A declared component is missing its name or version.
    #[error("Invalid tech stack component{}: {message}", format_context(.context))]
    InvalidComponent { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
impl From<IntegrationError> for k1_kernel::server::ApiError {
    fn from(err: IntegrationError) -> Self {
        Self::Validation { message: err.to_string().into(), context: None }
    }
}
