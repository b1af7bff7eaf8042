use serde::Deserialize;

/// One true/false quiz item as served by the quiz endpoint.
///
/// Replaced wholesale on every fetch; never mutated while on screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizItem {
    pub id: i64,
    pub question: String,
    /// The correct answer: `true` for O, `false` for X.
    pub answer: bool,
    pub explanation: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl QuizItem {
    /// Explanation text to reveal after answering, if there is a usable one.
    pub fn explanation_text(&self) -> Option<&str> {
        self.explanation
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
