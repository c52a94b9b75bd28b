//! "Show solution" and reset support.
//!
//! Reveal fills items with an answer the evaluators would accept. Reset puts
//! items back to the state captured in an [`ExerciseSnapshot`] when the page
//! was initialized. Neither touches answer specs or correct-option markers.

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::model::{ChoiceQuestion, Exercise, ExerciseContent, ExerciseKind, Flag};
use crate::normalize::first_authored;

/// Fill every item of an exercise with its solution and clear the flags.
///
/// Text items get the first acceptable answer as authored in their spec,
/// choice questions get exactly one option with the expected value checked, and word groups are
/// checked iff they are marked as answers. Items with no usable answer are
/// left as they are.
pub fn reveal(exercise: &mut Exercise) {
    match &mut exercise.content {
        ExerciseContent::FreeText(items) => {
            for item in items {
                item.flag = Flag::Unset;
                match first_authored(item.answer.as_deref()) {
                    Some(answer) => item.value = answer.to_string(),
                    None => tracing::warn!(
                        exercise = %exercise.id,
                        id = item.id.as_deref().unwrap_or_default(),
                        "no answer to reveal"
                    ),
                }
            }
        }
        ExerciseContent::SingleChoice(questions) | ExerciseContent::ExclusiveChoice(questions) => {
            for question in questions {
                reveal_choice(question);
            }
        }
        ExerciseContent::MultiSelect(groups) => {
            for group in groups {
                group.flag = Flag::Unset;
                if let Some(checkbox) = &mut group.checkbox {
                    checkbox.checked = checkbox.is_answer;
                }
            }
        }
    }
}

fn reveal_choice(question: &mut ChoiceQuestion) {
    question.flag = Flag::Unset;
    let Some(answer) = question.answer.clone() else {
        return;
    };
    if !question.select(&answer) {
        tracing::warn!(answer = %answer, "expected value matches no option");
    }
}

/// Reset an exercise to a blank baseline: empty text, nothing checked, no
/// flags.
pub fn clear(exercise: &mut Exercise) {
    match &mut exercise.content {
        ExerciseContent::FreeText(items) => {
            for item in items {
                item.value.clear();
                item.flag = Flag::Unset;
            }
        }
        ExerciseContent::SingleChoice(questions) | ExerciseContent::ExclusiveChoice(questions) => {
            for question in questions {
                for option in &mut question.options {
                    option.checked = false;
                }
                question.flag = Flag::Unset;
            }
        }
        ExerciseContent::MultiSelect(groups) => {
            for group in groups {
                group.set_checked(false);
                group.flag = Flag::Unset;
            }
        }
    }
}

/// User-editable state of one exercise, captured at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSnapshot {
    exercise_id: String,
    kind: ExerciseKind,
    state: SnapshotState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SnapshotState {
    /// One value per text item.
    Values(Vec<String>),
    /// Checked state of every option, per question.
    Options(Vec<Vec<bool>>),
    /// Checked state per word group; `None` where the group has no checkbox.
    Words(Vec<Option<bool>>),
}

impl SnapshotState {
    fn len(&self) -> usize {
        match self {
            SnapshotState::Values(v) => v.len(),
            SnapshotState::Options(v) => v.len(),
            SnapshotState::Words(v) => v.len(),
        }
    }
}

impl ExerciseSnapshot {
    /// Record the current values and checked states of an exercise.
    pub fn capture(exercise: &Exercise) -> Self {
        let state = match &exercise.content {
            ExerciseContent::FreeText(items) => {
                SnapshotState::Values(items.iter().map(|i| i.value.clone()).collect())
            }
            ExerciseContent::SingleChoice(questions)
            | ExerciseContent::ExclusiveChoice(questions) => SnapshotState::Options(
                questions
                    .iter()
                    .map(|q| q.options.iter().map(|o| o.checked).collect())
                    .collect(),
            ),
            ExerciseContent::MultiSelect(groups) => SnapshotState::Words(
                groups
                    .iter()
                    .map(|g| g.checkbox.as_ref().map(|c| c.checked))
                    .collect(),
            ),
        };

        Self {
            exercise_id: exercise.id.clone(),
            kind: exercise.kind(),
            state,
        }
    }

    pub fn exercise_id(&self) -> &str {
        &self.exercise_id
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    /// Put the captured state back and clear every flag.
    ///
    /// Fails without modifying anything if the exercise is not the one the
    /// snapshot was taken from, or its items changed shape.
    pub fn restore(&self, exercise: &mut Exercise) -> Result<(), SnapshotError> {
        if exercise.id != self.exercise_id {
            return Err(SnapshotError::ExerciseMismatch {
                snapshot: self.exercise_id.clone(),
                exercise: exercise.id.clone(),
            });
        }
        let exercise_kind = exercise.kind();
        if exercise_kind != self.kind {
            return Err(SnapshotError::KindMismatch {
                snapshot: self.kind,
                exercise: exercise_kind,
            });
        }
        if exercise.content.len() != self.state.len() {
            return Err(SnapshotError::ItemCountMismatch {
                snapshot: self.state.len(),
                exercise: exercise.content.len(),
            });
        }

        match (&mut exercise.content, &self.state) {
            (ExerciseContent::FreeText(items), SnapshotState::Values(values)) => {
                for (item, value) in items.iter_mut().zip(values) {
                    item.value.clone_from(value);
                    item.flag = Flag::Unset;
                }
            }
            (
                ExerciseContent::SingleChoice(questions)
                | ExerciseContent::ExclusiveChoice(questions),
                SnapshotState::Options(checks),
            ) => {
                for (question, checks) in questions.iter_mut().zip(checks) {
                    // Options added after capture start unchecked.
                    for (index, option) in question.options.iter_mut().enumerate() {
                        option.checked = checks.get(index).copied().unwrap_or(false);
                    }
                    question.flag = Flag::Unset;
                }
            }
            (ExerciseContent::MultiSelect(groups), SnapshotState::Words(checks)) => {
                for (group, checked) in groups.iter_mut().zip(checks) {
                    group.set_checked(checked.unwrap_or(false));
                    group.flag = Flag::Unset;
                }
            }
            _ => {
                return Err(SnapshotError::KindMismatch {
                    snapshot: self.kind,
                    exercise: exercise_kind,
                })
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grade;
    use crate::model::{ChoiceOption, TextItem, WordGroup};

    fn free_text() -> Exercise {
        Exercise::new(
            "ej1",
            ExerciseContent::FreeText(vec![
                TextItem::new("Estoy|soy"),
                TextItem::new("está").with_value("prefilled"),
                TextItem::default(),
            ]),
        )
    }

    #[test]
    fn reveal_writes_first_acceptable_answer() {
        let mut exercise = free_text();
        reveal(&mut exercise);
        let ExerciseContent::FreeText(items) = &exercise.content else {
            panic!("kind changed");
        };
        assert_eq!(items[0].value, "Estoy");
        assert_eq!(items[1].value, "está");
        assert_eq!(items[2].value, "");
        assert!(items.iter().all(|i| i.flag == Flag::Unset));
    }

    #[test]
    fn revealed_answers_grade_as_correct() {
        let mut radio = Exercise::new(
            "ej2",
            ExerciseContent::SingleChoice(vec![ChoiceQuestion::new("b", ["a", "b", "c"])]),
        );
        let mut rows = Exercise::new(
            "ej3",
            ExerciseContent::ExclusiveChoice(vec![ChoiceQuestion::new("2", ["1", "2"])]),
        );
        if let ExerciseContent::ExclusiveChoice(r) = &mut rows.content {
            r[0].set_checked("1", true);
        }
        let mut words = Exercise::new(
            "ej4",
            ExerciseContent::MultiSelect(vec![
                WordGroup::new("casa", true),
                WordGroup::new("rápido", false),
            ]),
        );
        let mut text = Exercise::new(
            "ej1",
            ExerciseContent::FreeText(vec![TextItem::new(" Madrid |Paris")]),
        );

        for exercise in [&mut radio, &mut rows, &mut words, &mut text] {
            reveal(exercise);
            let report = grade(exercise);
            assert_eq!(report.result.percentage, 100, "{}", exercise.id);
        }
    }

    #[test]
    fn reveal_keeps_authored_casing_and_grades_correct() {
        let mut exercise = Exercise::new(
            "ej1",
            ExerciseContent::FreeText(vec![TextItem::new(" | Madrid |Paris")]),
        );
        reveal(&mut exercise);
        let ExerciseContent::FreeText(items) = &exercise.content else {
            panic!("kind changed");
        };
        assert_eq!(items[0].value, "Madrid");
        assert_eq!(grade(&mut exercise).result.percentage, 100);
    }

    #[test]
    fn reveal_checks_one_of_duplicate_options() {
        let mut exercise = Exercise::new(
            "ej2",
            ExerciseContent::SingleChoice(vec![ChoiceQuestion::new("2", ["1", "2", "2"])]),
        );
        reveal(&mut exercise);
        let ExerciseContent::SingleChoice(questions) = &exercise.content else {
            panic!("kind changed");
        };
        let checked: Vec<bool> = questions[0].options.iter().map(|o| o.checked).collect();
        assert_eq!(checked, vec![false, true, false]);
        assert_eq!(grade(&mut exercise).result.percentage, 100);
    }

    #[test]
    fn reveal_leaves_unmatched_choice_untouched() {
        let mut question = ChoiceQuestion::new("z", ["a", "b"]);
        question.select("a");
        let mut exercise = Exercise::new("ej2", ExerciseContent::SingleChoice(vec![question]));
        grade(&mut exercise);
        reveal(&mut exercise);
        let ExerciseContent::SingleChoice(questions) = &exercise.content else {
            panic!("kind changed");
        };
        assert_eq!(questions[0].checked_values().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(questions[0].flag, Flag::Unset);
    }

    #[test]
    fn snapshot_restore_returns_initial_state() {
        let mut exercise = free_text();
        let snapshot = ExerciseSnapshot::capture(&exercise);

        reveal(&mut exercise);
        grade(&mut exercise);
        snapshot.restore(&mut exercise).unwrap();

        let ExerciseContent::FreeText(items) = &exercise.content else {
            panic!("kind changed");
        };
        assert_eq!(items[0].value, "");
        assert_eq!(items[1].value, "prefilled");
        assert_eq!(items[0].answer.as_deref(), Some("Estoy|soy"));
        assert!(items.iter().all(|i| i.flag == Flag::Unset));
    }

    #[test]
    fn snapshot_restore_choice_and_words() {
        let mut question = ChoiceQuestion::new("b", ["a", "b"]);
        question.select("a");
        let mut exercise = Exercise::new("ej2", ExerciseContent::SingleChoice(vec![question]));
        let snapshot = ExerciseSnapshot::capture(&exercise);

        reveal(&mut exercise);
        snapshot.restore(&mut exercise).unwrap();
        let ExerciseContent::SingleChoice(questions) = &exercise.content else {
            panic!("kind changed");
        };
        assert_eq!(questions[0].checked_values().collect::<Vec<_>>(), vec!["a"]);

        let mut words = Exercise::new(
            "ej4",
            ExerciseContent::MultiSelect(vec![
                WordGroup::new("casa", true),
                WordGroup::default(),
            ]),
        );
        let snapshot = ExerciseSnapshot::capture(&words);
        reveal(&mut words);
        snapshot.restore(&mut words).unwrap();
        let ExerciseContent::MultiSelect(groups) = &words.content else {
            panic!("kind changed");
        };
        assert_eq!(groups[0].checkbox.as_ref().map(|c| c.checked), Some(false));
        assert!(groups[0].checkbox.as_ref().is_some_and(|c| c.is_answer));
    }

    #[test]
    fn restore_leaves_options_added_after_capture_unchecked() {
        let mut question = ChoiceQuestion::new("b", ["a", "b"]);
        question.select("a");
        let mut exercise = Exercise::new("ej2", ExerciseContent::SingleChoice(vec![question]));
        let snapshot = ExerciseSnapshot::capture(&exercise);

        if let ExerciseContent::SingleChoice(questions) = &mut exercise.content {
            let mut extra = ChoiceOption::new("c");
            extra.checked = true;
            questions[0].options.push(extra);
        }
        snapshot.restore(&mut exercise).unwrap();

        let ExerciseContent::SingleChoice(questions) = &exercise.content else {
            panic!("kind changed");
        };
        let checked: Vec<bool> = questions[0].options.iter().map(|o| o.checked).collect();
        assert_eq!(checked, vec![true, false, false]);
    }

    #[test]
    fn snapshot_rejects_other_exercises() {
        let exercise = free_text();
        let snapshot = ExerciseSnapshot::capture(&exercise);

        let mut other = free_text();
        other.id = "ej9".into();
        assert!(matches!(
            snapshot.restore(&mut other),
            Err(SnapshotError::ExerciseMismatch { .. })
        ));

        let mut reshaped = Exercise::new("ej1", ExerciseContent::FreeText(vec![]));
        assert_eq!(
            snapshot.restore(&mut reshaped),
            Err(SnapshotError::ItemCountMismatch {
                snapshot: 3,
                exercise: 0
            })
        );

        let mut rekinded = Exercise::new("ej1", ExerciseContent::MultiSelect(vec![]));
        assert!(matches!(
            snapshot.restore(&mut rekinded),
            Err(SnapshotError::KindMismatch { .. })
        ));
    }

    #[test]
    fn clear_blanks_everything_but_answers() {
        let mut exercise = free_text();
        grade(&mut exercise);
        clear(&mut exercise);
        let ExerciseContent::FreeText(items) = &exercise.content else {
            panic!("kind changed");
        };
        assert!(items.iter().all(|i| i.value.is_empty() && i.flag == Flag::Unset));
        assert_eq!(items[1].answer.as_deref(), Some("está"));
    }
}
