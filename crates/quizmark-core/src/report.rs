//! Page-level grading report with JSON (de)serialization.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::ExerciseReport;
use crate::scoring::ExerciseResult;

/// Everything produced by one "check all" pass over a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// Unique identifier of this grading pass.
    pub id: Uuid,
    /// When the page was graded.
    pub created_at: DateTime<Utc>,
    /// Summary of the page.
    pub page: PageSummary,
    /// Correct and counted items summed across every exercise.
    pub overall: ExerciseResult,
    /// Exercises scored at 100%.
    pub complete_exercises: usize,
    /// Per-exercise reports, in page order.
    pub exercises: Vec<ExerciseReport>,
    /// Time spent grading, in microseconds.
    pub duration_us: u64,
}

/// Summary of a page (without the exercise definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub exercise_count: usize,
}

impl PageReport {
    /// Look up the report of one exercise.
    pub fn exercise(&self, exercise_id: &str) -> Option<&ExerciseReport> {
        self.exercises.iter().find(|e| e.exercise_id == exercise_id)
    }

    /// Whether every exercise on the page scored 100%.
    pub fn is_complete(&self) -> bool {
        !self.exercises.is_empty() && self.complete_exercises == self.exercises.len()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize page report")
    }

    /// Parse a report previously produced by [`PageReport::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse page report JSON")
    }
}
