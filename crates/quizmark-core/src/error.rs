//! Error types for quizmark.
//!
//! Grading itself never fails: missing answer data and empty exercises are
//! resolved into an incorrect flag or a zero percentage. These errors cover
//! the surrounding operations (kind names from authored content, and
//! restoring a snapshot onto the wrong exercise).

use thiserror::Error;

use crate::model::ExerciseKind;

/// An exercise kind name that quizmark does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown exercise kind: {0}")]
pub struct KindParseError(pub String);

/// Errors that can occur when restoring an exercise from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot was taken from an exercise of another kind.
    #[error("snapshot is for a {snapshot} exercise, cannot restore onto {exercise}")]
    KindMismatch {
        snapshot: ExerciseKind,
        exercise: ExerciseKind,
    },

    /// The exercise no longer has the same number of items.
    #[error("snapshot holds {snapshot} items but the exercise has {exercise}")]
    ItemCountMismatch { snapshot: usize, exercise: usize },

    /// The snapshot was taken from a different exercise.
    #[error("snapshot belongs to exercise '{snapshot}', not '{exercise}'")]
    ExerciseMismatch { snapshot: String, exercise: String },
}
