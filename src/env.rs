//! Environment variable loading
//!
//! Missing variables are collected in an [`EnvReport`] while the loader runs,
//! then surfaced all at once by [`EnvLoader::assert`].

use log::{error, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Missing required environment variables:\n{0}")]
    MissingRequired(String),
}

/// Messages collected while loading the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvReport {
    pub warnings: Vec<String>,
    pub failures: Vec<String>,
}

pub struct EnvLoader<F = fn(&str) -> Option<String>> {
    lookup: F,
    report: EnvReport,
}

impl EnvLoader {
    /// Loader reading from the process environment
    pub fn new() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }
}

impl<F> EnvLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn with_lookup(lookup: F) -> Self {
        Self {
            lookup,
            report: EnvReport::default(),
        }
    }

    /// Returns the variable, or an empty string and records a failure
    pub fn require(&mut self, name: &str, description: Option<&str>) -> String {
        self.lookup_or_record(name, description, "env is required.", true)
    }

    /// Returns the variable, or an empty string and records a warning
    pub fn warn_if_empty(&mut self, name: &str, description: Option<&str>) -> String {
        self.lookup_or_record(name, description, "env is empty, it may be needed.", false)
    }

    pub fn default(&self, name: &str, default_value: &str) -> String {
        (self.lookup)(name).unwrap_or_else(|| default_value.to_owned())
    }

    pub fn report(&self) -> &EnvReport {
        &self.report
    }

    /// Logs what was collected and fails if any required variable was missing
    pub fn assert(self) -> Result<EnvReport, EnvError> {
        let report = self.report;

        if !report.warnings.is_empty() {
            warn!("{}", report.warnings.join("\n"));
        }

        if !report.failures.is_empty() {
            let failures = report.failures.join("\n");
            error!("{failures}");
            return Err(EnvError::MissingRequired(failures));
        }

        Ok(report)
    }

    fn lookup_or_record(&mut self, name: &str, description: Option<&str>, problem: &str, fatal: bool) -> String {
        if let Some(value) = (self.lookup)(name) {
            return value;
        }

        let mut message = format!("{name} {problem}");
        if let Some(description) = description {
            message = format!("{message} ({description})");
        }

        if fatal {
            self.report.failures.push(message);
        } else {
            self.report.warnings.push(message);
        }
        String::new()
    }
}

/// Loads a `.env` file from the working directory, if there is one
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}
