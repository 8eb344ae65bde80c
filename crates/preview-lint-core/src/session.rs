//! Caller-side state container for validation runs.
//!
//! The engine itself is a pure function of the file set; the busy status
//! and the retained result are UI conveniences, so they live here, owned
//! by the caller, instead of inside the pipeline.

use crate::fileset::FileSet;
use crate::types::ValidationResult;
use crate::validator::Validator;

use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

/// Lifecycle of a [`ValidationSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationStatus {
    /// No run has happened since creation or the last [`ValidationSession::clear`].
    #[default]
    Idle,
    /// A run is in flight.
    Running,
    /// The most recent run finished and its result is retained.
    Done,
}

/// Holds the most recent result and the busy status on behalf of the UI.
///
/// A session wraps one configured [`Validator`]. Each call to
/// [`validate`](Self::validate) supersedes the retained result; results are
/// never merged across runs. The status is restored on every exit path,
/// panics included, so it can never stick at [`ValidationStatus::Running`].
pub struct ValidationSession {
    validator: Validator,
    status: ValidationStatus,
    last_result: Option<ValidationResult>,
}

impl ValidationSession {
    /// Creates a session around a configured validator.
    #[must_use]
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            status: ValidationStatus::Idle,
            last_result: None,
        }
    }

    /// Runs validation over the borrowed set, retains the result, and
    /// returns a reference to it.
    pub fn validate(&mut self, files: &FileSet) -> &ValidationResult {
        self.status = ValidationStatus::Running;
        let outcome = catch_unwind(AssertUnwindSafe(|| self.validator.validate(files)));
        match outcome {
            Ok(result) => {
                self.status = ValidationStatus::Done;
                self.last_result.insert(result)
            }
            Err(payload) => {
                self.status = ValidationStatus::Idle;
                resume_unwind(payload)
            }
        }
    }

    /// Discards the retained result without re-running analysis.
    pub fn clear(&mut self) {
        self.last_result = None;
        self.status = ValidationStatus::Idle;
    }

    /// True only while a [`validate`](Self::validate) call is in flight.
    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.status == ValidationStatus::Running
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    /// The most recent result, or `None` before any run or after
    /// [`clear`](Self::clear).
    #[must_use]
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }
}
