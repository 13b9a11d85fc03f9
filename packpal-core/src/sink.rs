//! Best-effort persistence of rendered reports.
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::DEFAULT_OUTPUT_FILE;

/// Trait for abstracting where a rendered report is written.
pub trait ReportSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the report, returning the location it was written to.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn write_report(&self, report: &str) -> Result<PathBuf, Self::Error>;
}

#[derive(Debug, Error)]
#[error("failed to write report to {path}: {source}")]
pub struct SinkError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Writes the report as UTF-8 to a single file, replacing previous contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}

impl ReportSink for FileSink {
    type Error = SinkError;

    fn write_report(&self, report: &str) -> Result<PathBuf, Self::Error> {
        fs::write(&self.path, report).map_err(|source| SinkError {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.path.clone())
    }
}

/// Result of a save attempt. Failures are a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    NotSaved(String),
}

impl SaveOutcome {
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    #[must_use]
    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            Self::Saved(path) => Some(path),
            Self::NotSaved(_) => None,
        }
    }
}

/// Write through `sink`, turning any failure into [`SaveOutcome::NotSaved`].
pub fn save_report<S: ReportSink>(sink: &S, report: &str) -> SaveOutcome {
    match sink.write_report(report) {
        Ok(path) => {
            log::debug!("report saved to {}", path.display());
            SaveOutcome::Saved(path)
        }
        Err(err) => {
            log::warn!("report not saved: {err}");
            SaveOutcome::NotSaved(err.to_string())
        }
    }
}
