//! quizmark-report: Feedback rendering for graded exercise pages.
//!
//! Turns a [`quizmark_core::report::PageReport`] into an HTML fragment or a
//! JSON feedback document that page glue can apply to its elements.

pub mod feedback;
pub mod html;

pub use feedback::{generate_feedback, render_json};
pub use html::render_html;
