//! Percentage scoring and the result summary shown under each exercise.

use serde::{Deserialize, Serialize};

/// Outcome of one evaluation pass over an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExerciseResult {
    /// Items judged correct.
    pub correct: u32,
    /// Items counted in the denominator.
    pub total: u32,
    /// `correct / total` as a rounded percentage, 0 when `total` is 0.
    pub percentage: u8,
}

impl ExerciseResult {
    /// Build a result from counts, computing the percentage.
    pub fn from_counts(correct: u32, total: u32) -> Self {
        Self {
            correct,
            total,
            percentage: percentage(correct, total),
        }
    }

    /// Whether every counted item was correct.
    ///
    /// An exercise with nothing counted is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.correct >= self.total
    }

    /// Summarize this result for display.
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            percentage: self.percentage,
            message: format_message(self.correct, self.total, self.percentage),
            complete: self.is_complete(),
        }
    }
}

/// A percentage plus the status line rendered under an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub percentage: u8,
    pub message: String,
    /// Full marks; rendered differently from partial credit.
    pub complete: bool,
}

/// Rounded percentage of `correct` over `total`.
///
/// Ties round up (12.5 becomes 13). Returns 0 when `total` is 0; a
/// `correct` above `total` saturates at 100.
pub fn percentage(correct: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = u64::from(correct.min(total));
    let total = u64::from(total);
    // round(100c/t) = floor((200c + t) / 2t)
    let pct = (200 * correct + total) / (2 * total);
    pct as u8
}

/// Convert an item count to the `u32` used in results, saturating.
pub fn item_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Add up counts from several results without overflowing.
pub fn sum_counts(counts: impl IntoIterator<Item = u32>) -> u32 {
    counts.into_iter().fold(0, u32::saturating_add)
}

/// Combine counts into a percentage and status message.
pub fn format(correct: u32, total: u32) -> ScoreSummary {
    ExerciseResult::from_counts(correct, total).summary()
}

fn format_message(correct: u32, total: u32, percentage: u8) -> String {
    format!("Resultado: {percentage}% correcto. ({correct} de {total})")
}
