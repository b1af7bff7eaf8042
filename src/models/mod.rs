mod quiz;
mod stats;

pub use quiz::QuizItem;
pub use stats::Stats;
