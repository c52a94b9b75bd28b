//! Core trait definition for exercise evaluators.
//!
//! Each exercise kind has one evaluator, implemented in
//! [`crate::evaluators`].

use crate::scoring::ExerciseResult;

/// Grades a snapshot of items from one exercise.
///
/// Implementations clear each item's previous flag, assign a new one, and
/// return the aggregate counts. They read nothing but the items, so
/// evaluating an unchanged slice twice produces the same result.
pub trait Evaluator {
    /// The item shape this evaluator understands.
    type Item;

    /// Evaluate every item and write back its correctness flag.
    fn evaluate(&self, items: &mut [Self::Item]) -> ExerciseResult;
}
