use tracing::{debug, warn};

use crate::models::{QuizItem, Stats};
use crate::source::FetchError;
use crate::store::StatsStore;

/// Whether the current quiz item has been answered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Answered { is_correct: bool },
}

/// What occupies the question slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; waiting for a manual retry.
    Failed,
    /// An item is loaded and playable.
    Ready(QuizItem),
}

/// The quiz session controller.
///
/// Owns all session state. The event loop drives it and the UI renders it
/// read-only; the fetch itself runs outside (the loop calls
/// [`App::begin_load`], runs the source, then applies the outcome with
/// [`App::finish_load`]), so every method here is synchronous and
/// testable without a terminal or a network.
pub struct App {
    load: LoadState,
    phase: Phase,
    stats: Stats,
    store: Box<dyn StatsStore>,
}

impl App {
    /// Build a controller, adopting previously persisted statistics when
    /// they load cleanly and starting from zero otherwise.
    pub fn new(store: Box<dyn StatsStore>) -> Self {
        let stats = match store.load() {
            Ok(Some(stats)) => stats,
            Ok(None) => Stats::default(),
            Err(err) => {
                warn!("failed to read persisted stats: {err}");
                Stats::default()
            }
        };

        Self {
            load: LoadState::Loading,
            phase: Phase::Unanswered,
            stats,
            store,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn current_quiz(&self) -> Option<&QuizItem> {
        match &self.load {
            LoadState::Ready(item) => Some(item),
            LoadState::Loading | LoadState::Failed => None,
        }
    }

    /// Begin loading a fresh random quiz. "Next question" and "retry"
    /// both funnel through here.
    ///
    /// Any current item is dropped wholesale and the session returns to
    /// the unanswered state. The caller runs the fetch and applies its
    /// outcome via [`App::finish_load`]. Overlapping loads are allowed;
    /// whichever outcome is applied last wins.
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
        self.phase = Phase::Unanswered;
    }

    /// Apply the outcome of a fetch started after [`App::begin_load`].
    ///
    /// Statistics are never touched here; a failure only parks the
    /// question slot in [`LoadState::Failed`] until the user retries.
    pub fn finish_load(&mut self, result: Result<QuizItem, FetchError>) {
        self.phase = Phase::Unanswered;
        match result {
            Ok(item) => {
                debug!(quiz_id = item.id, "loaded quiz");
                self.load = LoadState::Ready(item);
            }
            Err(err) => {
                warn!("failed to load quiz: {err}");
                self.load = LoadState::Failed;
            }
        }
    }

    /// Score the user's answer against the loaded item.
    ///
    /// A no-op unless an item is loaded and still unanswered, so stray
    /// selections while loading, after a failed fetch, or on an already
    /// answered question change nothing.
    pub fn select_answer(&mut self, user_answer: bool) {
        let LoadState::Ready(item) = &self.load else {
            return;
        };
        if self.phase != Phase::Unanswered {
            return;
        }

        let is_correct = user_answer == item.answer;
        self.stats.record(is_correct);
        self.persist_stats();
        self.phase = Phase::Answered { is_correct };
    }

    /// Zero both counters and persist immediately. The current question
    /// and phase are unaffected.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.persist_stats();
    }

    fn persist_stats(&mut self) {
        if let Err(err) = self.store.save(&self.stats) {
            warn!("failed to persist stats: {err}");
        }
    }
}
