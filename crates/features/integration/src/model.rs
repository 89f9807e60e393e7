use crate::error::IntegrationError;
use k1_derive::api_model;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// A single component of the technical stack, with its name and version.
pub struct TechStackComponent {
    /// Component name, e.g. `Python`
    pub name: String,
    /// Declared version, compared verbatim, e.g. `3.8`
    pub version: String,
}

impl TechStackComponent {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into() }
    }

    /// Rejects components with a blank name or version.
    ///
    /// # Errors
    /// Returns [`IntegrationError::InvalidComponent`] naming the blank field.
    pub fn validate(&self) -> Result<(), IntegrationError> {
        let blank = if self.name.trim().is_empty() {
            "name"
        } else if self.version.trim().is_empty() {
            "version"
        } else {
            return Ok(());
        };

        Err(IntegrationError::InvalidComponent {
            message: format!("component {blank} must not be empty").into(),
            context: None,
        })
    }
}

/// Outcome of a compatibility check: the verdict plus what failed and how to fix it.
///
/// Deserialization rejects payloads whose `compatible` flag contradicts `issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(::utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// `true` when no issue was found
    compatible: bool,
    /// One entry per incompatibility, in detection order
    issues: Vec<String>,
    /// Suggested remedies; not every issue has one
    recommendations: Vec<String>,
}

impl<'de> Deserialize<'de> for VerificationResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Wire {
            compatible: bool,
            issues: Vec<String>,
            recommendations: Vec<String>,
        }

        let wire = Wire::deserialize(deserializer)?;
        if wire.compatible != wire.issues.is_empty() {
            return Err(D::Error::custom(format!(
                "compatible = {} contradicts {} reported issue(s)",
                wire.compatible,
                wire.issues.len()
            )));
        }
        Ok(Self::new(wire.issues, wire.recommendations))
    }
}

impl VerificationResult {
    /// Builds a result whose verdict follows from `issues` being empty.
    pub(crate) fn new(issues: Vec<String>, recommendations: Vec<String>) -> Self {
        Self { compatible: issues.is_empty(), issues, recommendations }
    }

    #[must_use]
    pub const fn is_compatible(&self) -> bool {
        self.compatible
    }

    #[must_use]
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    #[must_use]
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_filled_components() {
        assert!(TechStackComponent::new("Python", "3.8").validate().is_ok());
    }

    #[test]
    fn validate_names_the_blank_field() {
        let err = TechStackComponent::new("", "3.8").validate().unwrap_err();
        assert!(err.to_string().contains("component name must not be empty"));

        let err = TechStackComponent::new("Python", " ").validate().unwrap_err();
        assert!(err.to_string().contains("component version must not be empty"));
    }

    #[test]
    fn result_with_contradicting_verdict_is_rejected() {
        let raw = r#"{"compatible": true, "issues": ["x"], "recommendations": []}"#;
        let err = serde_json::from_str::<VerificationResult>(raw).unwrap_err();
        assert!(err.to_string().contains("contradicts 1 reported issue(s)"));

        let raw = r#"{"compatible": false, "issues": [], "recommendations": []}"#;
        assert!(serde_json::from_str::<VerificationResult>(raw).is_err());
    }

    #[test]
    fn consistent_result_deserializes() {
        let raw = r#"{"compatible": false, "issues": ["x"], "recommendations": ["y"]}"#;
        let result: VerificationResult = serde_json::from_str(raw).expect("valid result");
        assert!(!result.is_compatible());
        assert_eq!(result.issues(), ["x"]);
        assert_eq!(result.recommendations(), ["y"]);
    }

    #[test]
    fn components_reject_unknown_fields() {
        let raw = r#"{"name": "Python", "version": "3.8", "vendor": "psf"}"#;
        assert!(serde_json::from_str::<TechStackComponent>(raw).is_err());
    }
}
