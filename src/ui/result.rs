use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::{App, Phase};

pub const CORRECT_MESSAGE: &str = "Correct!";
pub const INCORRECT_MESSAGE: &str = "Wrong!";
pub const NO_EXPLANATION_PLACEHOLDER: &str = "No explanation available.";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Phase::Answered { is_correct } = app.phase() else {
        return;
    };
    let Some(item) = app.current_quiz() else {
        return;
    };

    let (verdict, color) = if is_correct {
        (CORRECT_MESSAGE, Color::Green)
    } else {
        (INCORRECT_MESSAGE, Color::Red)
    };

    let explanation = match item.explanation_text() {
        Some(text) => Line::from(vec![
            Span::styled("Explanation: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text, Style::default().fg(Color::Gray)),
        ]),
        None => Line::from(Span::styled(
            NO_EXPLANATION_PLACEHOLDER,
            Style::default().fg(Color::DarkGray).italic(),
        )),
    };

    let content = vec![
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::from(""),
        explanation,
    ];

    let widget = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}
