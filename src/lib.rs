//! # oxquiz
//!
//! A terminal client for OX (true/false) quizzes served over HTTP.
//!
//! The client fetches one random question at a time from a quiz backend,
//! takes an O or X answer, reveals the verdict and explanation, and keeps
//! cumulative accuracy statistics on disk between sessions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use oxquiz::{HttpQuizSource, JsonStatsStore, Quiz};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let source = HttpQuizSource::new("http://127.0.0.1:8000");
//!     let store = JsonStatsStore::new("quiz_stats.json");
//!     Quiz::new(source, store).run().await
//! }
//! ```

mod app;
mod models;
mod source;
mod store;
pub mod terminal;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::Mutex;

pub use app::{App, LoadState, Phase};
pub use models::{QuizItem, Stats};
pub use source::{FetchError, HttpQuizSource, QuizSource};
pub use store::{JsonStatsStore, MemoryStatsStore, StatsStore, StoreError};

/// Controller state shared with in-flight fetch tasks.
type SharedApp = Arc<Mutex<App>>;

/// What the event loop does after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputOutcome {
    Continue,
    Fetch,
    Quit,
}

/// A quiz session wired to a question source and a stats store.
pub struct Quiz {
    app: SharedApp,
    source: Arc<dyn QuizSource>,
}

impl Quiz {
    /// Create a session that pulls questions from `source` and keeps
    /// statistics in `store`.
    pub fn new<S, T>(source: S, store: T) -> Self
    where
        S: QuizSource + 'static,
        T: StatsStore + 'static,
    {
        Self {
            app: Arc::new(Mutex::new(App::new(Box::new(store)))),
            source: Arc::new(source),
        }
    }

    /// Run the session in the terminal.
    ///
    /// This takes over the terminal, fetches the first question, and
    /// returns when the user quits.
    pub async fn run(self) -> io::Result<()> {
        let mut terminal = terminal::init()?;
        let result = run_event_loop(&mut terminal, &self.app, &self.source).await;
        terminal::restore()?;
        result
    }
}

async fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &SharedApp,
    source: &Arc<dyn QuizSource>,
) -> io::Result<()> {
    spawn_fetch(app, source);

    loop {
        {
            let app = app.lock().await;
            terminal.draw(|frame| ui::render(frame, &app))?;
        }

        // Poll with a timeout so results landing from fetch tasks
        // show up without waiting for a key press.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let outcome = {
                    let mut app = app.lock().await;
                    handle_input(&mut app, key.code)
                };

                match outcome {
                    InputOutcome::Continue => {}
                    InputOutcome::Fetch => spawn_fetch(app, source),
                    InputOutcome::Quit => break,
                }
            }
        }
    }

    Ok(())
}

/// Fetch a question in the background and hand the result to the app.
fn spawn_fetch(app: &SharedApp, source: &Arc<dyn QuizSource>) {
    let app = Arc::clone(app);
    let source = Arc::clone(source);
    tokio::spawn(async move {
        let result = source.fetch_random().await;
        app.lock().await.finish_load(result);
    });
}

/// Map a key press onto the controller. Returns what the loop should
/// do next; state eligibility is checked here or inside the app.
fn handle_input(app: &mut App, key: KeyCode) -> InputOutcome {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputOutcome::Quit,
        KeyCode::Char('o')
        | KeyCode::Char('O')
        | KeyCode::Char('t')
        | KeyCode::Char('T')
        | KeyCode::Left => {
            app.select_answer(true);
            InputOutcome::Continue
        }
        KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('f')
        | KeyCode::Char('F')
        | KeyCode::Right => {
            app.select_answer(false);
            InputOutcome::Continue
        }
        // Next works from every state; while a fetch is already in
        // flight this starts a second one and the last applied wins.
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
            app.begin_load();
            InputOutcome::Fetch
        }
        KeyCode::Char('r') | KeyCode::Char('R') => retry_failed(app),
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.reset_stats();
            InputOutcome::Continue
        }
        _ => InputOutcome::Continue,
    }
}

fn retry_failed(app: &mut App) -> InputOutcome {
    if matches!(app.load_state(), LoadState::Failed) {
        app.begin_load();
        return InputOutcome::Fetch;
    }
    InputOutcome::Continue
}
