//! Documentation-completeness audit for the lockhold container family.
//!
//! The audit parses Rust sources with `syn` and resolves, for each
//! configured type, every operation a caller can reach on it: `pub`
//! inherent methods, methods of crate-local traits it implements, and the
//! default methods it inherits from those traits. Each one must carry
//! non-blank doc text, either on the item itself or on the trait method it
//! implements.
//!
//! Foreign trait impls (`PartialEq`, `BitOr`, ...) are documented upstream
//! and are not checked. Trait methods without a default body are hooks
//! each type supplies; they are skipped unless `skip_abstract` is off.

#![deny(missing_docs)]
// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod config;
mod index;
mod report;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use config::{AuditConfig, ConfigError, DEFAULT_TYPES};
pub use index::{Operation, Origin};
pub use report::{AuditReport, Finding};

use index::SourceIndex;

/// Failure to load a source file into the audit.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The file could not be read.
    #[error("failed to read source {}: {source}", path.display())]
    Read {
        /// Path as given to [`Auditor::add_path`].
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The text is not valid Rust.
    #[error("failed to parse source {file}: {source}")]
    Parse {
        /// Label of the source, usually its path.
        file: String,
        /// Error reported by `syn`.
        source: syn::Error,
    },
}

/// Collects sources, then checks the configured types against them.
#[derive(Debug, Default)]
pub struct Auditor {
    config: AuditConfig,
    index: SourceIndex,
    files: usize,
}

impl Auditor {
    /// An auditor with no sources yet.
    #[must_use]
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            index: SourceIndex::default(),
            files: 0,
        }
    }

    /// The configuration this auditor runs with.
    #[must_use]
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Parse one source file. `file` only labels errors.
    pub fn add_source(&mut self, file: &str, text: &str) -> Result<(), AuditError> {
        let parsed = syn::parse_file(text).map_err(|source| AuditError::Parse {
            file: file.to_string(),
            source,
        })?;
        self.index.add_file(&parsed);
        self.files += 1;
        tracing::trace!(file, items = parsed.items.len(), "indexed source");
        Ok(())
    }

    /// Read and parse the file at `path`; see [`Auditor::add_source`].
    pub fn add_path(&mut self, path: &Path) -> Result<(), AuditError> {
        let text = std::fs::read_to_string(path).map_err(|source| AuditError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_source(&path.display().to_string(), &text)
    }

    /// Every operation visible on `type_name`, before exclusions.
    #[must_use]
    pub fn operations(&self, type_name: &str) -> Vec<Operation> {
        self.index.operations(type_name, self.config.skip_abstract)
    }

    /// Check every configured type against the sources added so far.
    ///
    /// Logs one warning per finding and a summary at `info`.
    #[must_use]
    pub fn run(&self) -> AuditReport {
        let mut report = AuditReport::default();

        for type_name in &self.config.types {
            if !self.index.declares(type_name) {
                tracing::warn!(type_name = %type_name, "audited type not found");
                report.missing_types.push(type_name.clone());
                continue;
            }

            let mut checked = 0;
            for operation in self.operations(type_name) {
                if self.config.excludes(&operation.name) {
                    continue;
                }
                checked += 1;
                if !operation.is_documented() {
                    tracing::warn!(
                        type_name = %type_name,
                        operation = %operation.name,
                        origin = %operation.origin,
                        "undocumented operation"
                    );
                    report.findings.push(Finding {
                        type_name: type_name.clone(),
                        operation: operation.name,
                        origin: operation.origin,
                    });
                }
            }

            tracing::debug!(type_name = %type_name, operations = checked, "audited type");
            report.checked += checked;
        }

        tracing::info!(
            files = self.files,
            checked = report.checked,
            findings = report.findings.len(),
            "documentation audit finished"
        );
        report
    }
}
