use std::fmt;
use std::path::PathBuf;

use crate::persist::PersistError;

/// Why a single file failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Read,
    Parse,
    Write,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Read => write!(f, "read failed"),
            FailureKind::Parse => write!(f, "parse failed"),
            FailureKind::Write => write!(f, "write failed"),
        }
    }
}

/// Terminal state for one discovered file. All variants are final;
/// there are no retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was read, extracted and its output written.
    Converted { output: PathBuf },
    /// The output already existed and overwrite was not requested.
    /// Carries the pre-existing output path.
    Skipped { output: PathBuf },
    /// The file could not be processed; the batch continues.
    Failed { kind: FailureKind, message: String },
}

/// Per-file record produced by the batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub source: PathBuf,
    pub outcome: FileOutcome,
}

/// One failed file, retained for diagnostics after the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNote {
    pub source: PathBuf,
    pub message: String,
}

/// Aggregate counters for one batch run. Each discovered file increments
/// `total` and exactly one of the other counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub failures: Vec<FailureNote>,
}

impl BatchReport {
    pub fn record(&mut self, outcome: ConversionOutcome) {
        self.total += 1;
        match outcome.outcome {
            FileOutcome::Converted { .. } => self.converted += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { kind, message } => {
                self.failed += 1;
                self.failures.push(FailureNote {
                    source: outcome.source,
                    message: format!("{kind}: {message}"),
                });
            }
        }
    }

    /// True when every discovered file resolved without failure.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Fatal precondition failures. Raised before any file is processed;
/// everything after this point is isolated per file.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("input directory not found or not a directory: {}", .0.display())]
    InvalidInput(PathBuf),
    #[error(transparent)]
    OutputDir(#[from] PersistError),
}
