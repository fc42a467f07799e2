use std::fmt;

use thiserror::Error;

use crate::error::ConfigError;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub error: ConfigError,
}

impl Diagnostic {
    pub fn new(severity: Severity, error: ConfigError) -> Self {
        Self { severity, error }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.error)
    }
}

/// The configuration has at least one error-level finding.
#[derive(Debug, Clone, Error)]
#[error("site configuration has {} error(s)", .errors.len())]
pub struct ValidationFailed {
    /// Error-level findings in discovery order.
    pub errors: Vec<Diagnostic>,
    /// Warnings found alongside the errors.
    pub warnings: Vec<Diagnostic>,
}

/// Every finding of one validation run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, error: ConfigError) {
        self.diagnostics.push(Diagnostic::new(severity, error));
    }

    /// All findings.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Error-level findings.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Warning-level findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    /// Check if no finding is an error.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Check if there are no findings at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether any finding carries this error.
    pub fn contains(&self, error: &ConfigError) -> bool {
        self.diagnostics.iter().any(|d| &d.error == error)
    }

    /// Warnings on success, every finding split by severity on failure.
    pub fn into_result(self) -> Result<Vec<Diagnostic>, ValidationFailed> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.diagnostics.into_iter().partition(Diagnostic::is_error);

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ValidationFailed { errors, warnings })
        }
    }
}
