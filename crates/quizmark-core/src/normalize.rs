//! Answer normalization and pipe-delimited answer sets.

use serde::Serialize;

/// Separator between acceptable answers in an answer spec.
pub const ANSWER_SEPARATOR: char = '|';

/// Canonicalize an answer for comparison.
///
/// Trims surrounding whitespace and lowercases with Unicode default case
/// mapping. Accents and punctuation are kept, so `"está"` and `"esta"`
/// stay different answers.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The acceptable normalized answers of one item.
///
/// Keeps the first-seen order of the answer spec so `first()` is stable, while
/// membership and equality ignore order.
#[derive(Debug, Clone, Default, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: Vec<String>,
}

impl AnswerSet {
    /// Parse a raw answer spec. `None` or an empty spec yields an empty set.
    pub fn parse(spec: Option<&str>) -> Self {
        let mut set = Self::default();
        for part in spec.unwrap_or_default().split(ANSWER_SEPARATOR) {
            set.insert(part);
        }
        set
    }

    /// Normalize and add one answer; blanks and duplicates are ignored.
    fn insert(&mut self, raw: &str) {
        let answer = normalize(raw);
        if !answer.is_empty() && !self.contains(&answer) {
            self.answers.push(answer);
        }
    }

    /// Whether `value` is accepted, after normalizing it.
    pub fn accepts(&self, value: &str) -> bool {
        self.contains(&normalize(value))
    }

    /// Whether an already-normalized answer is in the set.
    pub fn contains(&self, normalized: &str) -> bool {
        self.answers.iter().any(|a| a == normalized)
    }

    /// The first acceptable answer, as written first in the answer spec.
    pub fn first(&self) -> Option<&str> {
        self.answers.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// An empty set means the item cannot be answered correctly.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().map(String::as_str)
    }
}

impl PartialEq for AnswerSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|a| other.contains(a))
    }
}

impl<S: AsRef<str>> FromIterator<S> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for item in iter {
            set.insert(item.as_ref());
        }
        set
    }
}

/// The first answer of a spec as the author wrote it, trimmed.
///
/// Segments that normalize to nothing are skipped, so the result is always
/// accepted by the [`AnswerSet`] parsed from the same spec.
pub fn first_authored(spec: Option<&str>) -> Option<&str> {
    spec?
        .split(ANSWER_SEPARATOR)
        .map(str::trim)
        .find(|part| !normalize(part).is_empty())
}

/// Parse an answer spec into its set of acceptable answers.
pub fn parse_answers(spec: Option<&str>) -> AnswerSet {
    AnswerSet::parse(spec)
}
