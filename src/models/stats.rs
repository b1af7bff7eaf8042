use serde::{Deserialize, Serialize};

/// Cumulative correct/incorrect counters, persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub correct: u32,
    pub incorrect: u32,
}

impl Stats {
    pub fn total(&self) -> u64 {
        u64::from(self.correct) + u64::from(self.incorrect)
    }

    /// Integer accuracy percentage in 0..=100. Defined as 0 before the
    /// first answer.
    pub fn accuracy(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        ((f64::from(self.correct) / total as f64) * 100.0).round() as u8
    }

    /// Count one answered question.
    pub fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct = self.correct.saturating_add(1);
        } else {
            self.incorrect = self.incorrect.saturating_add(1);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
