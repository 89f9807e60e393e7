use crate::matrix::CompatibilityMatrix;
use crate::model::{TechStackComponent, VerificationResult};
use k1_domain::constants::PRODUCT_NAME;
use std::fmt;
use tracing::{debug, instrument};

/// One reason the requested integration is not compatible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incompatibility {
    /// The requested `k1a` version is not an accepted release.
    TopLevelVersion { requested: String },
    /// The component name has no entry in the compatibility table.
    Unsupported { component: String },
    /// The component is supported but declared with a different version.
    VersionMismatch { component: String, found: String, required: String },
}

impl Incompatibility {
    /// The remedy to suggest, if any. Unsupported components have none.
    #[must_use]
    pub fn recommendation(&self, matrix: &CompatibilityMatrix) -> Option<String> {
        match self {
            Self::TopLevelVersion { .. } => Some(format!(
                "Consider using one of the '{PRODUCT_NAME}' compatible versions: {}.",
                matrix.accepted_versions().join(", ")
            )),
            Self::Unsupported { .. } => None,
            Self::VersionMismatch { component, required, .. } => {
                Some(format!("Upgrade {component} to version {required}."))
            }
        }
    }
}

impl fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLevelVersion { requested } => write!(
                f,
                "'{PRODUCT_NAME}' version {requested} is not compatible with the current system."
            ),
            Self::Unsupported { component } => write!(
                f,
                "'{PRODUCT_NAME}' integration does not support the tech stack component \
                 {component}."
            ),
            Self::VersionMismatch { component, found, required } => write!(
                f,
                "Component {component} version {found} is not compatible; \
                 requires version {required}."
            ),
        }
    }
}

impl CompatibilityMatrix {
    /// Lists every incompatibility: the top-level version first, then one
    /// entry per offending component in input order (duplicates included).
    #[must_use]
    pub fn findings(
        &self,
        k1a_version: &str,
        components: &[TechStackComponent],
    ) -> Vec<Incompatibility> {
        let top_level = (!self.is_accepted(k1a_version))
            .then(|| Incompatibility::TopLevelVersion { requested: k1a_version.to_owned() });

        let per_component = components.iter().filter_map(|c| match self.required_version(&c.name) {
            None => Some(Incompatibility::Unsupported { component: c.name.clone() }),
            Some(required) if c.version != required => Some(Incompatibility::VersionMismatch {
                component: c.name.clone(),
                found: c.version.clone(),
                required: required.to_owned(),
            }),
            Some(_) => None,
        });

        top_level.into_iter().chain(per_component).collect()
    }

    /// Checks a requested `k1a` version and stack against this matrix.
    ///
    /// `strategy` (e.g. `api`, `plugin`) is recorded on the span but does not
    /// influence the verdict.
    #[must_use]
    #[instrument(level = "trace", skip(self, components), fields(components = components.len()))]
    pub fn check(
        &self,
        k1a_version: &str,
        components: &[TechStackComponent],
        strategy: &str,
    ) -> VerificationResult {
        let findings = self.findings(k1a_version, components);

        let issues = findings.iter().map(ToString::to_string).collect();
        let recommendations = findings.iter().filter_map(|f| f.recommendation(self)).collect();
        let result = VerificationResult::new(issues, recommendations);

        debug!(
            compatible = result.is_compatible(),
            issues = result.issues().len(),
            "Integration verified"
        );
        result
    }
}

/// Checks a requested `k1a` version and stack against the standard matrix.
#[must_use]
pub fn verify_integration(
    k1a_version: &str,
    components: &[TechStackComponent],
    strategy: &str,
) -> VerificationResult {
    CompatibilityMatrix::standard().check(k1a_version, components, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(pairs: &[(&str, &str)]) -> Vec<TechStackComponent> {
        pairs.iter().map(|(n, v)| TechStackComponent::new(*n, *v)).collect()
    }

    #[test]
    fn matching_stack_is_compatible() {
        let components = stack(&[
            ("Python", "3.8"),
            ("FastAPI", "0.65.0"),
            ("PostgreSQL", "13"),
            ("Prisma", "2.20.0"),
        ]);

        let result = verify_integration("2.0", &components, "api");
        assert!(result.is_compatible());
        assert!(result.issues().is_empty());
        assert!(result.recommendations().is_empty());
    }

    #[test]
    fn findings_keep_detection_order() {
        let components = stack(&[("Unknown", "1"), ("Python", "3.9"), ("Prisma", "2.20.0")]);
        let findings = CompatibilityMatrix::standard().findings("0.9", &components);

        assert_eq!(
            findings,
            vec![
                Incompatibility::TopLevelVersion { requested: "0.9".to_owned() },
                Incompatibility::Unsupported { component: "Unknown".to_owned() },
                Incompatibility::VersionMismatch {
                    component: "Python".to_owned(),
                    found: "3.9".to_owned(),
                    required: "3.8".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn issue_and_recommendation_wording() {
        let matrix = CompatibilityMatrix::standard();
        let top = Incompatibility::TopLevelVersion { requested: "9.9".to_owned() };
        assert_eq!(top.to_string(), "'k1a' version 9.9 is not compatible with the current system.");
        assert_eq!(
            top.recommendation(matrix).as_deref(),
            Some("Consider using one of the 'k1a' compatible versions: 1.0, 2.0, 3.0.")
        );

        let unsupported = Incompatibility::Unsupported { component: "Unknown".to_owned() };
        assert_eq!(
            unsupported.to_string(),
            "'k1a' integration does not support the tech stack component Unknown."
        );
        assert_eq!(unsupported.recommendation(matrix), None);
    }

    #[test]
    fn custom_matrix_drives_the_check() {
        static ACCEPTED: &[&str] = &["7"];
        static COMPONENTS: &[(&str, &str)] = &[("Rust", "1.93")];
        let matrix = CompatibilityMatrix::new(ACCEPTED, COMPONENTS);

        let result = matrix.check("7", &stack(&[("Rust", "1.92")]), "plugin");
        assert_eq!(
            result.issues(),
            ["Component Rust version 1.92 is not compatible; requires version 1.93."]
        );
        assert_eq!(result.recommendations(), ["Upgrade Rust to version 1.93."]);

        let result = matrix.check("2.0", &[], "plugin");
        assert_eq!(
            result.recommendations(),
            ["Consider using one of the 'k1a' compatible versions: 7."]
        );
    }
}
