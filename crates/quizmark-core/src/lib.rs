//! quizmark-core: Answer evaluation and scoring for exercise pages.
//!
//! This crate defines the exercise data model, answer normalization, the
//! evaluators for each exercise kind, and the scoring contract they share.
//! It is a pure library: the page glue hands it a snapshot of user input
//! and renders the flags and results it returns.

pub mod engine;
pub mod error;
pub mod evaluators;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod reveal;
pub mod scoring;
pub mod traits;

pub use engine::{grade, grade_exercise, grade_page, ExerciseReport, ItemVerdict};
pub use error::{KindParseError, SnapshotError};
pub use model::{Exercise, ExerciseContent, ExerciseKind, ExercisePage, Flag};
pub use normalize::{first_authored, normalize, parse_answers, AnswerSet};
pub use scoring::{ExerciseResult, ScoreSummary};
