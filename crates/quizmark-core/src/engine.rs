//! Grading entry points.
//!
//! Dispatches each exercise to its evaluator by the kind it declares and
//! collects the results of a whole page into a [`PageReport`].

use std::time::Instant;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::evaluators::{
    ExclusiveChoiceEvaluator, FreeTextEvaluator, MultiSelectEvaluator, SingleChoiceEvaluator,
};
use crate::model::{Exercise, ExerciseContent, ExerciseKind, ExercisePage, Flag};
use crate::report::{PageReport, PageSummary};
use crate::scoring::{sum_counts, ExerciseResult, ScoreSummary};
use crate::traits::Evaluator;

/// The flag assigned to one item, with its element id if it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemVerdict {
    pub index: usize,
    #[serde(default)]
    pub id: Option<String>,
    pub flag: Flag,
}

/// Result of grading one exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseReport {
    pub exercise_id: String,
    pub kind: ExerciseKind,
    pub result: ExerciseResult,
    pub summary: ScoreSummary,
    pub items: Vec<ItemVerdict>,
}

/// Evaluate the items of one exercise, writing flags back into them.
pub fn evaluate(content: &mut ExerciseContent) -> ExerciseResult {
    match content {
        ExerciseContent::FreeText(items) => FreeTextEvaluator.evaluate(items),
        ExerciseContent::SingleChoice(questions) => SingleChoiceEvaluator.evaluate(questions),
        ExerciseContent::ExclusiveChoice(rows) => ExclusiveChoiceEvaluator.evaluate(rows),
        ExerciseContent::MultiSelect(groups) => MultiSelectEvaluator.evaluate(groups),
    }
}

/// Grade one exercise and describe the outcome for the page.
pub fn grade(exercise: &mut Exercise) -> ExerciseReport {
    let result = evaluate(&mut exercise.content);
    if exercise.content.is_empty() {
        tracing::warn!(exercise = %exercise.id, "exercise has no gradable items");
    }
    tracing::debug!(
        exercise = %exercise.id,
        kind = %exercise.kind(),
        correct = result.correct,
        total = result.total,
        percentage = result.percentage,
        "graded exercise"
    );

    let items = exercise
        .content
        .item_ids()
        .into_iter()
        .zip(exercise.content.flags())
        .enumerate()
        .map(|(index, (id, flag))| ItemVerdict { index, id, flag })
        .collect();

    ExerciseReport {
        exercise_id: exercise.id.clone(),
        kind: exercise.kind(),
        result,
        summary: result.summary(),
        items,
    }
}

/// Grade every exercise on a page.
pub fn grade_page(page: &mut ExercisePage) -> PageReport {
    let start = Instant::now();
    let exercises: Vec<ExerciseReport> = page.exercises.iter_mut().map(grade).collect();

    let correct = sum_counts(exercises.iter().map(|e| e.result.correct));
    let total = sum_counts(exercises.iter().map(|e| e.result.total));
    let complete = exercises.iter().filter(|e| e.summary.complete).count();

    PageReport {
        id: Uuid::new_v4(),
        created_at: chrono::Utc::now(),
        page: PageSummary {
            id: page.id.clone(),
            title: page.title.clone(),
            exercise_count: page.exercises.len(),
        },
        overall: ExerciseResult::from_counts(correct, total),
        complete_exercises: complete,
        exercises,
        duration_us: start.elapsed().as_micros() as u64,
    }
}

/// Grade a single exercise on a page by id.
///
/// Returns `None` when the page has no exercise with that id.
pub fn grade_exercise(page: &mut ExercisePage, exercise_id: &str) -> Option<ExerciseReport> {
    let Some(exercise) = page.exercise_mut(exercise_id) else {
        tracing::warn!(exercise = exercise_id, "exercise not found on page");
        return None;
    };
    Some(grade(exercise))
}
