use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, LoadState, Phase};

/// Visual state of one answer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlState {
    Neutral,
    Correct,
    Dimmed,
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let halves =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    let (true_state, false_state) = control_states(app);
    render_control(frame, halves[0], "O", "TRUE", true_state);
    render_control(frame, halves[1], "X", "FALSE", false_state);
}

fn control_states(app: &App) -> (ControlState, ControlState) {
    let LoadState::Ready(item) = app.load_state() else {
        return (ControlState::Dimmed, ControlState::Dimmed);
    };
    match app.phase() {
        Phase::Unanswered => (ControlState::Neutral, ControlState::Neutral),
        Phase::Answered { .. } if item.answer => (ControlState::Correct, ControlState::Dimmed),
        Phase::Answered { .. } => (ControlState::Dimmed, ControlState::Correct),
    }
}

fn render_control(frame: &mut Frame, area: Rect, symbol: &str, label: &str, state: ControlState) {
    let (text_color, border_color) = match state {
        ControlState::Neutral => (Color::White, Color::DarkGray),
        ControlState::Correct => (Color::Green, Color::Green),
        ControlState::Dimmed => (Color::DarkGray, Color::DarkGray),
    };

    let content = vec![
        Line::from(Span::styled(
            symbol,
            Style::default().fg(text_color).bold(),
        )),
        Line::from(Span::styled(label, Style::default().fg(text_color))),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_color),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizItem;
    use crate::source::FetchError;
    use crate::store::MemoryStatsStore;

    fn app_with(answer: bool) -> App {
        let mut app = App::new(Box::new(MemoryStatsStore::new()));
        app.finish_load(Ok(QuizItem {
            id: 1,
            question: "Q".to_string(),
            answer,
            explanation: None,
            category: None,
            difficulty: None,
        }));
        app
    }

    #[test]
    fn controls_are_neutral_until_answered() {
        let app = app_with(true);
        assert_eq!(
            control_states(&app),
            (ControlState::Neutral, ControlState::Neutral)
        );
    }

    #[test]
    fn reveal_highlights_the_true_answer_side() {
        // The user's pick does not matter; the correct side lights up.
        let mut app = app_with(true);
        app.select_answer(false);
        assert_eq!(
            control_states(&app),
            (ControlState::Correct, ControlState::Dimmed)
        );

        let mut app = app_with(false);
        app.select_answer(true);
        assert_eq!(
            control_states(&app),
            (ControlState::Dimmed, ControlState::Correct)
        );
    }

    #[test]
    fn controls_are_inert_without_an_item() {
        let app = App::new(Box::new(MemoryStatsStore::new()));
        assert_eq!(
            control_states(&app),
            (ControlState::Dimmed, ControlState::Dimmed)
        );

        let mut app = App::new(Box::new(MemoryStatsStore::new()));
        app.finish_load(Err(FetchError::HttpStatus(
            reqwest::StatusCode::NOT_FOUND,
        )));
        assert_eq!(
            control_states(&app),
            (ControlState::Dimmed, ControlState::Dimmed)
        );
    }
}
