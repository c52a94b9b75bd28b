//! Evaluators for the four exercise kinds.

use serde::{Deserialize, Serialize};

use crate::model::{ChoiceQuestion, Flag, TextItem, WordGroup};
use crate::normalize::AnswerSet;
use crate::scoring::{item_count, ExerciseResult};
use crate::traits::Evaluator;

/// Text inputs, textareas, and selects with a pipe-delimited answer spec.
///
/// An item without a usable answer spec is counted and marked incorrect.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeTextEvaluator;

impl Evaluator for FreeTextEvaluator {
    type Item = TextItem;

    fn evaluate(&self, items: &mut [TextItem]) -> ExerciseResult {
        let mut correct = 0u32;

        for (index, item) in items.iter_mut().enumerate() {
            item.flag = Flag::Unset;
            let acceptable = AnswerSet::parse(item.answer.as_deref());
            if acceptable.is_empty() {
                tracing::warn!(
                    item = index,
                    id = item.id.as_deref().unwrap_or_default(),
                    "text item has no usable answer spec; marking incorrect"
                );
                item.flag = Flag::Incorrect;
                continue;
            }

            let is_correct = acceptable.accepts(&item.value);
            item.flag = Flag::from_correct(is_correct);
            if is_correct {
                correct += 1;
            }
        }

        ExerciseResult::from_counts(correct, item_count(items.len()))
    }
}

/// Radio-button groups: exactly one checked option equal to the answer.
///
/// Radio values are a controlled vocabulary, so the comparison is exact and
/// case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleChoiceEvaluator;

impl Evaluator for SingleChoiceEvaluator {
    type Item = ChoiceQuestion;

    fn evaluate(&self, questions: &mut [ChoiceQuestion]) -> ExerciseResult {
        let mut correct = 0u32;

        for question in questions.iter_mut() {
            question.flag = Flag::Unset;
            let is_correct = {
                let mut checked = question.checked_values();
                match (checked.next(), checked.next(), question.answer.as_deref()) {
                    (Some(value), None, Some(expected)) => value == expected,
                    _ => false,
                }
            };
            question.flag = Flag::from_correct(is_correct);
            if is_correct {
                correct += 1;
            }
        }

        ExerciseResult::from_counts(correct, item_count(questions.len()))
    }
}

/// Checkbox rows where exactly one box, the expected one, may be checked.
///
/// Checking the right box together with any other is incorrect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExclusiveChoiceEvaluator;

impl Evaluator for ExclusiveChoiceEvaluator {
    type Item = ChoiceQuestion;

    fn evaluate(&self, rows: &mut [ChoiceQuestion]) -> ExerciseResult {
        let mut correct = 0u32;

        for row in rows.iter_mut() {
            row.flag = Flag::Unset;
            let mut checked_count = 0usize;
            let mut checked_value = None;
            for value in row.checked_values() {
                checked_count += 1;
                checked_value = Some(value);
            }

            let is_correct = checked_count == 1
                && row.answer.is_some()
                && checked_value == row.answer.as_deref();
            row.flag = Flag::from_correct(is_correct);
            if is_correct {
                correct += 1;
            }
        }

        ExerciseResult::from_counts(correct, item_count(rows.len()))
    }
}

/// Counters behind a multi-select result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultiSelectTally {
    /// Correct words the user checked.
    pub correct: u32,
    /// Groups whose word should have been checked.
    pub expected: u32,
    /// Groups checked although their word is not an answer.
    pub false_positives: u32,
}

impl MultiSelectTally {
    /// Only groups that should be checked, or were, are scored.
    pub fn total(&self) -> u32 {
        self.expected.saturating_add(self.false_positives)
    }

    pub fn result(&self) -> ExerciseResult {
        ExerciseResult::from_counts(self.correct, self.total())
    }
}

/// Independent word groups, each with a single marked checkbox.
///
/// Unchecked non-answers are true negatives: their flag stays unset and they
/// stay out of the denominator. Groups without a checkbox are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiSelectEvaluator;

impl MultiSelectEvaluator {
    /// Evaluate the groups and return the full tally.
    pub fn tally(&self, groups: &mut [WordGroup]) -> MultiSelectTally {
        let mut tally = MultiSelectTally::default();

        for group in groups.iter_mut() {
            group.flag = Flag::Unset;
            let Some(checkbox) = &group.checkbox else {
                tracing::debug!(
                    id = group.id.as_deref().unwrap_or_default(),
                    "word group has no checkbox; skipping"
                );
                continue;
            };

            match (checkbox.is_answer, checkbox.checked) {
                (true, true) => {
                    group.flag = Flag::Correct;
                    tally.correct += 1;
                    tally.expected += 1;
                }
                (true, false) => {
                    group.flag = Flag::Incorrect;
                    tally.expected += 1;
                }
                (false, true) => {
                    group.flag = Flag::Incorrect;
                    tally.false_positives += 1;
                }
                (false, false) => {}
            }
        }

        tally
    }
}

impl Evaluator for MultiSelectEvaluator {
    type Item = WordGroup;

    fn evaluate(&self, groups: &mut [WordGroup]) -> ExerciseResult {
        self.tally(groups).result()
    }
}
