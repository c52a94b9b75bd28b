//! Core data model types for quizmark.
//!
//! These types describe one exercise page as the UI layer sees it: the
//! user-entered state of every gradable item, the static expected-answer
//! data authored alongside it, and the correctness flag the evaluators
//! write back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KindParseError;

/// Visual correctness state assigned to a gradable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    #[default]
    Unset,
    Correct,
    Incorrect,
}

impl Flag {
    /// Build a flag from a correctness predicate.
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Flag::Correct
        } else {
            Flag::Incorrect
        }
    }

    /// CSS class the page uses to render this state.
    pub fn css_class(self) -> &'static str {
        match self {
            Flag::Unset => "",
            Flag::Correct => "correct",
            Flag::Incorrect => "incorrect",
        }
    }
}

/// A text input, textarea, or dropdown select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    /// Optional element identifier used by the page.
    #[serde(default)]
    pub id: Option<String>,
    /// Current user-entered value.
    #[serde(default)]
    pub value: String,
    /// Pipe-delimited acceptable answers.
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub flag: Flag,
}

impl TextItem {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            ..Self::default()
        }
    }

    /// Set the user-entered value (builder style).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// One radio button or checkbox inside a choice question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            checked: false,
        }
    }
}

/// A radio-button group or a checkbox row with one expected value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    /// Raw value of the single correct option, compared exactly.
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub flag: Flag,
}

impl ChoiceQuestion {
    /// Create a question with unchecked options.
    pub fn new<I, S>(answer: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            options: options.into_iter().map(ChoiceOption::new).collect(),
            answer: Some(answer.into()),
            flag: Flag::Unset,
        }
    }

    /// Set the checked state of every option whose value is `value`.
    pub fn set_checked(&mut self, value: &str, checked: bool) {
        for option in self.options.iter_mut().filter(|o| o.value == value) {
            option.checked = checked;
        }
    }

    /// Check the first option whose value is `value` and uncheck the rest.
    ///
    /// Returns `false`, leaving every option as it was, when no option has
    /// that value.
    pub fn select(&mut self, value: &str) -> bool {
        let Some(position) = self.options.iter().position(|o| o.value == value) else {
            return false;
        };
        for (index, option) in self.options.iter_mut().enumerate() {
            option.checked = index == position;
        }
        true
    }

    /// Values of all checked options, in order.
    pub fn checked_values(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.value.as_str())
    }
}

/// The single checkbox of a word group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCheckbox {
    /// The word shown next to the checkbox.
    pub label: String,
    /// Whether this word is one the user should select.
    #[serde(default)]
    pub is_answer: bool,
    #[serde(default)]
    pub checked: bool,
}

/// An independent checkbox unit scored on presence of the correct marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordGroup {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub checkbox: Option<WordCheckbox>,
    #[serde(default)]
    pub flag: Flag,
}

impl WordGroup {
    pub fn new(label: impl Into<String>, is_answer: bool) -> Self {
        Self {
            id: None,
            checkbox: Some(WordCheckbox {
                label: label.into(),
                is_answer,
                checked: false,
            }),
            flag: Flag::Unset,
        }
    }

    pub fn set_checked(&mut self, checked: bool) {
        if let Some(checkbox) = &mut self.checkbox {
            checkbox.checked = checked;
        }
    }
}

/// Supported exercise shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    FreeText,
    SingleChoice,
    ExclusiveChoice,
    MultiSelect,
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseKind::FreeText => write!(f, "free_text"),
            ExerciseKind::SingleChoice => write!(f, "single_choice"),
            ExerciseKind::ExclusiveChoice => write!(f, "exclusive_choice"),
            ExerciseKind::MultiSelect => write!(f, "multi_select"),
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "free_text" | "text" => Ok(ExerciseKind::FreeText),
            "single_choice" | "radio" => Ok(ExerciseKind::SingleChoice),
            "exclusive_choice" | "checkbox" => Ok(ExerciseKind::ExclusiveChoice),
            "multi_select" | "word_groups" => Ok(ExerciseKind::MultiSelect),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}

/// The items of one exercise, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum ExerciseContent {
    FreeText(Vec<TextItem>),
    SingleChoice(Vec<ChoiceQuestion>),
    ExclusiveChoice(Vec<ChoiceQuestion>),
    MultiSelect(Vec<WordGroup>),
}

impl ExerciseContent {
    pub fn kind(&self) -> ExerciseKind {
        match self {
            ExerciseContent::FreeText(_) => ExerciseKind::FreeText,
            ExerciseContent::SingleChoice(_) => ExerciseKind::SingleChoice,
            ExerciseContent::ExclusiveChoice(_) => ExerciseKind::ExclusiveChoice,
            ExerciseContent::MultiSelect(_) => ExerciseKind::MultiSelect,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ExerciseContent::FreeText(items) => items.len(),
            ExerciseContent::SingleChoice(items) | ExerciseContent::ExclusiveChoice(items) => {
                items.len()
            }
            ExerciseContent::MultiSelect(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current flag of every item, in order.
    pub fn flags(&self) -> Vec<Flag> {
        match self {
            ExerciseContent::FreeText(items) => items.iter().map(|i| i.flag).collect(),
            ExerciseContent::SingleChoice(items) | ExerciseContent::ExclusiveChoice(items) => {
                items.iter().map(|i| i.flag).collect()
            }
            ExerciseContent::MultiSelect(groups) => groups.iter().map(|g| g.flag).collect(),
        }
    }

    /// Element identifiers of every item, in order.
    pub fn item_ids(&self) -> Vec<Option<String>> {
        match self {
            ExerciseContent::FreeText(items) => items.iter().map(|i| i.id.clone()).collect(),
            ExerciseContent::SingleChoice(items) | ExerciseContent::ExclusiveChoice(items) => {
                items.iter().map(|i| i.id.clone()).collect()
            }
            ExerciseContent::MultiSelect(groups) => groups.iter().map(|g| g.id.clone()).collect(),
        }
    }
}

/// One gradable exercise on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Identifier of the exercise container.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub instructions: String,
    pub content: ExerciseContent,
}

impl Exercise {
    pub fn new(id: impl Into<String>, content: ExerciseContent) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            instructions: String::new(),
            content,
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        self.content.kind()
    }
}

/// A collection of exercises shown on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePage {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl ExercisePage {
    pub fn exercise_mut(&mut self, id: &str) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == id)
    }
}
