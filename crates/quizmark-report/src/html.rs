//! HTML feedback generator.
//!
//! Produces a fragment with one result block per exercise. Presentation is
//! left to the page's stylesheet; only class names are emitted.

use quizmark_core::engine::ExerciseReport;
use quizmark_core::report::PageReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the feedback fragment for a graded page.
pub fn render_html(report: &PageReport) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<section class=\"quizmark-results\" data-page=\"{}\">\n",
        html_escape(&report.page.id)
    ));
    html.push_str(&format!("<h2>{}</h2>\n", html_escape(&report.page.title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} / {} ejercicios completos | {}</p>\n",
        report.complete_exercises,
        report.page.exercise_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for exercise in &report.exercises {
        html.push_str(&exercise_block(exercise));
    }

    html.push_str(&format!(
        "<p class=\"result overall {}\">{}</p>\n",
        state_class(report.overall.is_complete()),
        html_escape(&report.overall.summary().message)
    ));
    html.push_str("</section>\n");
    html
}

fn state_class(complete: bool) -> &'static str {
    if complete {
        "complete"
    } else {
        "partial"
    }
}

fn exercise_block(exercise: &ExerciseReport) -> String {
    let id = html_escape(&exercise.exercise_id);
    let mut block = format!(
        "<div class=\"exercise-result\" data-exercise=\"{id}\" data-kind=\"{}\">\n",
        exercise.kind
    );

    block.push_str("<ol class=\"items\">\n");
    for item in &exercise.items {
        let label = match &item.id {
            Some(item_id) => html_escape(item_id),
            None => (item.index + 1).to_string(),
        };
        let class = item.flag.css_class();
        if class.is_empty() {
            block.push_str(&format!("<li>{label}</li>\n"));
        } else {
            block.push_str(&format!("<li class=\"{class}\">{label}</li>\n"));
        }
    }
    block.push_str("</ol>\n");

    block.push_str(&format!(
        "<p class=\"result {}\" id=\"result-{id}\">{}</p>\n",
        state_class(exercise.summary.complete),
        html_escape(&exercise.summary.message)
    ));
    block.push_str("</div>\n");
    block
}
