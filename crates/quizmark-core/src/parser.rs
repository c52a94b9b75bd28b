//! TOML exercise page parser.
//!
//! Loads content-authored exercise pages from TOML and validates them.

use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{
    ChoiceOption, ChoiceQuestion, Exercise, ExerciseContent, ExerciseKind, ExercisePage, Flag,
    TextItem, WordCheckbox, WordGroup,
};
use crate::normalize::AnswerSet;

/// Intermediate TOML structure for parsing page files.
#[derive(Debug, Deserialize)]
struct TomlPageFile {
    page: TomlPageHeader,
    #[serde(default)]
    exercises: Vec<TomlExercise>,
}

#[derive(Debug, Deserialize)]
struct TomlPageHeader {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlExercise {
    id: String,
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    instructions: String,
    #[serde(default)]
    items: Vec<TomlItem>,
}

/// Union of the fields every item kind may use; checked per kind below.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlItem {
    #[serde(default)]
    id: Option<String>,
    /// Answer spec (text items) or expected option value (choices).
    #[serde(default)]
    answer: Option<String>,
    /// Pre-filled value of a text item.
    #[serde(default)]
    value: Option<String>,
    /// Option values of a radio group or checkbox row.
    #[serde(default)]
    options: Option<Vec<String>>,
    /// Options checked when the page loads.
    #[serde(default)]
    selected: Option<Vec<String>>,
    /// Word of a word group.
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    is_answer: Option<bool>,
    /// Whether a word group starts checked.
    #[serde(default)]
    checked: Option<bool>,
}

impl TomlItem {
    /// Names of the fields that are set.
    fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.answer.is_some() {
            fields.push("answer");
        }
        if self.value.is_some() {
            fields.push("value");
        }
        if self.options.is_some() {
            fields.push("options");
        }
        if self.selected.is_some() {
            fields.push("selected");
        }
        if self.word.is_some() {
            fields.push("word");
        }
        if self.is_answer.is_some() {
            fields.push("is_answer");
        }
        if self.checked.is_some() {
            fields.push("checked");
        }
        fields
    }

    fn ensure_only(&self, kind: ExerciseKind, allowed: &[&str]) -> Result<()> {
        if let Some(field) = self
            .present_fields()
            .into_iter()
            .find(|f| !allowed.contains(f))
        {
            anyhow::bail!("field `{field}` is not valid for a {kind} item");
        }
        Ok(())
    }
}

/// Parse a TOML string into an `ExercisePage`.
pub fn parse_page_str(content: &str) -> Result<ExercisePage> {
    let parsed: TomlPageFile =
        toml::from_str(content).context("failed to parse exercise page TOML")?;

    let exercises = parsed
        .exercises
        .into_iter()
        .map(|e| {
            let id = e.id;
            let kind: ExerciseKind = e
                .kind
                .parse()
                .with_context(|| format!("exercise '{id}'"))?;
            let content = build_content(kind, e.items)
                .with_context(|| format!("exercise '{id}'"))?;
            Ok(Exercise {
                id,
                title: e.title,
                instructions: e.instructions,
                content,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ExercisePage {
        id: parsed.page.id,
        title: parsed.page.title,
        description: parsed.page.description,
        exercises,
    })
}

fn build_content(kind: ExerciseKind, items: Vec<TomlItem>) -> Result<ExerciseContent> {
    let content = match kind {
        ExerciseKind::FreeText => ExerciseContent::FreeText(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    item.ensure_only(kind, &["answer", "value"])
                        .with_context(|| format!("item {index}"))?;
                    Ok(TextItem {
                        id: item.id,
                        value: item.value.unwrap_or_default(),
                        answer: item.answer,
                        flag: Flag::Unset,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        ),
        ExerciseKind::SingleChoice | ExerciseKind::ExclusiveChoice => {
            let questions = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    item.ensure_only(kind, &["answer", "options", "selected"])
                        .with_context(|| format!("item {index}"))?;
                    let selected = item.selected.unwrap_or_default();
                    let options = item
                        .options
                        .unwrap_or_default()
                        .into_iter()
                        .map(|value| ChoiceOption {
                            checked: selected.contains(&value),
                            value,
                        })
                        .collect();
                    Ok(ChoiceQuestion {
                        id: item.id,
                        options,
                        answer: item.answer,
                        flag: Flag::Unset,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            if kind == ExerciseKind::SingleChoice {
                ExerciseContent::SingleChoice(questions)
            } else {
                ExerciseContent::ExclusiveChoice(questions)
            }
        }
        ExerciseKind::MultiSelect => ExerciseContent::MultiSelect(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    item.ensure_only(kind, &["word", "is_answer", "checked"])
                        .with_context(|| format!("item {index}"))?;
                    let checkbox = item.word.map(|label| WordCheckbox {
                        label,
                        is_answer: item.is_answer.unwrap_or(false),
                        checked: item.checked.unwrap_or(false),
                    });
                    Ok(WordGroup {
                        id: item.id,
                        checkbox,
                        flag: Flag::Unset,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        ),
    };
    Ok(content)
}

/// A warning from page validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The exercise ID (if applicable).
    pub exercise_id: Option<String>,
    /// Index of the offending item within its exercise (if applicable).
    pub item: Option<usize>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn item(exercise: &Exercise, index: usize, message: impl Into<String>) -> Self {
        Self {
            exercise_id: Some(exercise.id.clone()),
            item: Some(index),
            message: message.into(),
        }
    }
}

/// Validate a page for authoring mistakes.
///
/// None of these stop grading: an item without a usable answer is simply
/// always wrong. They exist so authors notice before learners do.
pub fn validate_page(page: &ExercisePage) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate exercise IDs
    let mut seen_ids = HashSet::new();
    for exercise in &page.exercises {
        if !seen_ids.insert(&exercise.id) {
            warnings.push(ValidationWarning {
                exercise_id: Some(exercise.id.clone()),
                item: None,
                message: format!("duplicate exercise ID: {}", exercise.id),
            });
        }
    }

    for exercise in &page.exercises {
        if exercise.content.is_empty() {
            warnings.push(ValidationWarning {
                exercise_id: Some(exercise.id.clone()),
                item: None,
                message: "exercise has no items".into(),
            });
        }

        match &exercise.content {
            ExerciseContent::FreeText(items) => {
                for (index, item) in items.iter().enumerate() {
                    match item.answer.as_deref() {
                        None => warnings.push(ValidationWarning::item(
                            exercise,
                            index,
                            "text item has no answer",
                        )),
                        Some(spec) if AnswerSet::parse(Some(spec)).is_empty() => {
                            warnings.push(ValidationWarning::item(
                                exercise,
                                index,
                                format!("answer {spec:?} contains no acceptable answers"),
                            ));
                        }
                        Some(_) => {}
                    }
                }
            }
            ExerciseContent::SingleChoice(questions)
            | ExerciseContent::ExclusiveChoice(questions) => {
                for (index, question) in questions.iter().enumerate() {
                    let mut values = HashSet::new();
                    for option in &question.options {
                        if !values.insert(option.value.as_str()) {
                            warnings.push(ValidationWarning::item(
                                exercise,
                                index,
                                format!("duplicate option value {:?}", option.value),
                            ));
                        }
                    }
                    let Some(answer) = question.answer.as_deref() else {
                        warnings.push(ValidationWarning::item(
                            exercise,
                            index,
                            "question has no answer",
                        ));
                        continue;
                    };
                    if !question.options.iter().any(|o| o.value == answer) {
                        warnings.push(ValidationWarning::item(
                            exercise,
                            index,
                            format!("answer {answer:?} matches no option"),
                        ));
                    }
                }
            }
            ExerciseContent::MultiSelect(groups) => {
                for (index, group) in groups.iter().enumerate() {
                    if group.checkbox.is_none() {
                        warnings.push(ValidationWarning::item(
                            exercise,
                            index,
                            "word group has no word and will be skipped",
                        ));
                    }
                }
                let has_answer = groups
                    .iter()
                    .any(|g| g.checkbox.as_ref().is_some_and(|c| c.is_answer));
                if !groups.is_empty() && !has_answer {
                    warnings.push(ValidationWarning {
                        exercise_id: Some(exercise.id.clone()),
                        item: None,
                        message: "no word is marked as an answer".into(),
                    });
                }
            }
        }
    }

    warnings
}
