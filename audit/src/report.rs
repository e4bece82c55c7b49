//! Audit results.

use std::fmt;

use crate::index::Origin;

/// A visible operation with no (or blank) documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Audited type the operation is visible on.
    pub type_name: String,
    /// Undocumented operation name.
    pub operation: String,
    /// Where the operation is declared.
    pub origin: Origin,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{} ({}) has no documentation",
            self.type_name, self.operation, self.origin
        )
    }
}

/// Outcome of [`Auditor::run`](crate::Auditor::run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub(crate) findings: Vec<Finding>,
    pub(crate) missing_types: Vec<String>,
    pub(crate) checked: usize,
}

impl AuditReport {
    /// No findings and every configured type was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty() && self.missing_types.is_empty()
    }

    /// Undocumented operations, in audit order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Configured types that no scanned source declares.
    #[must_use]
    pub fn missing_types(&self) -> &[String] {
        &self.missing_types
    }

    /// Number of operations checked across all types.
    #[must_use]
    pub fn checked(&self) -> usize {
        self.checked
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for type_name in &self.missing_types {
            writeln!(f, "type {type_name} was not found in any scanned source")?;
        }
        for finding in &self.findings {
            writeln!(f, "{finding}")?;
        }
        write!(
            f,
            "{} operations checked, {} undocumented",
            self.checked,
            self.findings.len()
        )
    }
}
