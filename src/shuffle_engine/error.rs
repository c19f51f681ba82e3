//! Error types for test generation.
//!
//! Every variant is a precondition violation the caller can show to the
//! author and retry with different counts. Nothing here aborts the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using the engine's error type.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Coarse classification for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidRequest,
    InvalidSectionCount,
    CapacityExceeded,
    GenerationShortfall,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Fewer than one test requested.
    #[error("number of tests must be at least 1 (got {requested})")]
    InvalidRequest { requested: usize },

    /// The pool has nothing to draw from.
    #[error("master pool has no sections")]
    EmptyPool,

    /// One draw count per section is required.
    #[error("expected {expected} section counts, got {actual}")]
    SectionCountMismatch { expected: usize, actual: usize },

    /// A section lists the same question id twice.
    #[error("duplicate question id '{question_id}' in section {section}")]
    DuplicateQuestionId { section: usize, question_id: String },

    /// A single-choice question or passage item marks an option that does
    /// not exist.
    #[error("correct answer of '{question_id}' in section {section} is option {correct_answer}, but only {options} options exist")]
    CorrectAnswerOutOfRange { section: usize, question_id: String, correct_answer: usize, options: usize },

    /// Draw size outside `1..=pool_size`. `section` is 1-based for display.
    #[error("invalid question count for section {section}: {requested} requested, {pool_size} available")]
    InvalidSectionCount { section: usize, requested: usize, pool_size: usize },

    /// More tests requested than can be kept pairwise distinct.
    #[error("only {capacity} unique tests can be generated with current settings ({requested} requested)")]
    CapacityExceeded { requested: usize, capacity: u128 },

    /// The sampling fallback exhausted its attempt budget.
    #[error("generated {produced} of {requested} tests before the attempt budget of {attempts} ran out")]
    GenerationShortfall { requested: usize, produced: usize, attempts: usize },
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::InvalidRequest { .. }
            | GenerationError::EmptyPool
            | GenerationError::SectionCountMismatch { .. }
            | GenerationError::DuplicateQuestionId { .. }
            | GenerationError::CorrectAnswerOutOfRange { .. } => ErrorKind::InvalidRequest,
            GenerationError::InvalidSectionCount { .. }  => ErrorKind::InvalidSectionCount,
            GenerationError::CapacityExceeded { .. }     => ErrorKind::CapacityExceeded,
            GenerationError::GenerationShortfall { .. }  => ErrorKind::GenerationShortfall,
        }
    }

    /// The largest count the caller could ask for instead, where known.
    pub fn max_achievable(&self) -> Option<u128> {
        match self {
            GenerationError::CapacityExceeded { capacity, .. } => Some(*capacity),
            GenerationError::GenerationShortfall { produced, .. } => Some(*produced as u128),
            _ => None,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
            max_achievable: self.max_achievable(),
        }
    }
}

/// Serialisable view of an error for a UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
    pub max_achievable: Option<u128>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_reports_ceiling() {
        let err = GenerationError::CapacityExceeded { requested: 25, capacity: 24 };
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(err.max_achievable(), Some(24));
        assert_eq!(
            err.to_string(),
            "only 24 unique tests can be generated with current settings (25 requested)"
        );
    }

    #[test]
    fn structural_errors_classify_as_invalid_request() {
        for err in [
            GenerationError::InvalidRequest { requested: 0 },
            GenerationError::EmptyPool,
            GenerationError::SectionCountMismatch { expected: 2, actual: 1 },
            GenerationError::DuplicateQuestionId { section: 1, question_id: "q1".into() },
            GenerationError::CorrectAnswerOutOfRange {
                section: 1,
                question_id: "q1".into(),
                correct_answer: 7,
                options: 3,
            },
        ] {
            assert_eq!(err.kind(), ErrorKind::InvalidRequest, "{err}");
            assert_eq!(err.max_achievable(), None);
        }
    }

    #[test]
    fn report_serialises_kind_and_ceiling() {
        let report = GenerationError::CapacityExceeded { requested: 13, capacity: 12 }.report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "CapacityExceeded");
        assert_eq!(json["max_achievable"], 12);
    }
}
