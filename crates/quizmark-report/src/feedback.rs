//! JSON feedback for page glue.
//!
//! The feedback document maps each exercise id to its status line and the
//! CSS class of every item, in the order the items were graded.

use anyhow::{Context, Result};
use serde_json::json;

use quizmark_core::report::PageReport;

/// Build the feedback document for a graded page.
pub fn generate_feedback(report: &PageReport) -> serde_json::Value {
    let exercises: serde_json::Map<String, serde_json::Value> = report
        .exercises
        .iter()
        .map(|exercise| {
            let items: Vec<serde_json::Value> = exercise
                .items
                .iter()
                .map(|item| {
                    json!({
                        "index": item.index,
                        "id": item.id,
                        "class": item.flag.css_class(),
                    })
                })
                .collect();

            (
                exercise.exercise_id.clone(),
                json!({
                    "kind": exercise.kind.to_string(),
                    "result_element": format!("result-{}", exercise.exercise_id),
                    "message": exercise.summary.message,
                    "percentage": exercise.summary.percentage,
                    "complete": exercise.summary.complete,
                    "correct": exercise.result.correct,
                    "total": exercise.result.total,
                    "items": items,
                }),
            )
        })
        .collect();

    json!({
        "run_id": report.id.to_string(),
        "graded_at": report.created_at.to_rfc3339(),
        "page": report.page.id,
        "overall": {
            "message": report.overall.summary().message,
            "percentage": report.overall.percentage,
            "complete_exercises": report.complete_exercises,
        },
        "exercises": exercises,
    })
}

/// Render the feedback document as pretty-printed JSON.
pub fn render_json(report: &PageReport) -> Result<String> {
    serde_json::to_string_pretty(&generate_feedback(report))
        .context("failed to serialize feedback")
}
