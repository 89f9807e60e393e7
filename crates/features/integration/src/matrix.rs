use fxhash::FxHashMap;
use std::sync::LazyLock;

/// `k1a` releases that integrate with the current system, in the order they are advertised.
pub const ACCEPTED_VERSIONS: &[&str] = &["1.0", "2.0", "3.0"];

/// The single version each supported stack component must run.
pub const REQUIRED_COMPONENTS: &[(&str, &str)] = &[
    ("Python", "3.8"),
    ("FastAPI", "0.65.0"),
    ("PostgreSQL", "13"),
    ("Prisma", "2.20.0"),
];

static STANDARD: LazyLock<CompatibilityMatrix> =
    LazyLock::new(|| CompatibilityMatrix::new(ACCEPTED_VERSIONS, REQUIRED_COMPONENTS));

/// Read-only compatibility tables: accepted top-level versions and the
/// required version per component name.
///
/// Comparisons are exact, case-sensitive string equality.
#[derive(Debug, Clone)]
pub struct CompatibilityMatrix {
    accepted: &'static [&'static str],
    required: FxHashMap<&'static str, &'static str>,
}

impl CompatibilityMatrix {
    /// Builds a matrix from static tables. A repeated component name keeps its last version.
    #[must_use]
    pub fn new(
        accepted: &'static [&'static str],
        components: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { accepted, required: components.iter().copied().collect() }
    }

    /// The process-wide matrix built from [`ACCEPTED_VERSIONS`] and [`REQUIRED_COMPONENTS`].
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    #[must_use]
    pub fn is_accepted(&self, version: &str) -> bool {
        self.accepted.iter().any(|accepted| *accepted == version)
    }

    #[must_use]
    pub const fn accepted_versions(&self) -> &'static [&'static str] {
        self.accepted
    }

    #[must_use]
    pub fn required_version(&self, component: &str) -> Option<&'static str> {
        self.required.get(component).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables() {
        let matrix = CompatibilityMatrix::standard();
        assert_eq!(matrix.accepted_versions(), ["1.0", "2.0", "3.0"]);
        assert_eq!(matrix.required_version("Python"), Some("3.8"));
        assert_eq!(matrix.required_version("FastAPI"), Some("0.65.0"));
        assert_eq!(matrix.required_version("PostgreSQL"), Some("13"));
        assert_eq!(matrix.required_version("Prisma"), Some("2.20.0"));
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let matrix = CompatibilityMatrix::standard();
        assert_eq!(matrix.required_version("python"), None);
        assert!(!matrix.is_accepted("1.0 "));
        assert!(!matrix.is_accepted("1"));
        assert!(matrix.is_accepted("3.0"));
    }

    #[test]
    fn standard_is_shared() {
        assert!(std::ptr::eq(CompatibilityMatrix::standard(), CompatibilityMatrix::standard()));
    }
}
