use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, LoadState};
use crate::models::QuizItem;

pub const LOADING_MESSAGE: &str = "Loading question...";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load a quiz question.";

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Span::styled(
        "OX QUIZ",
        Style::default().fg(Color::Cyan).bold(),
    ));
    frame.render_widget(title, area);

    if let Some(item) = app.current_quiz() {
        let badge = badge_text(item);
        if !badge.is_empty() {
            let widget = Paragraph::new(badge)
                .alignment(Alignment::Right)
                .fg(Color::DarkGray);
            frame.render_widget(widget, area);
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let widget = match app.load_state() {
        LoadState::Loading => Paragraph::new(LOADING_MESSAGE)
            .alignment(Alignment::Center)
            .fg(Color::Yellow),
        LoadState::Failed => Paragraph::new(LOAD_FAILED_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).bold()),
        LoadState::Ready(item) => Paragraph::new(item.question.as_str())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White).bold()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::new(1, 1, 1, 1));
    frame.render_widget(widget.block(block), area);
}

fn badge_text(item: &QuizItem) -> String {
    match (item.category.as_deref(), item.difficulty.as_deref()) {
        (Some(category), Some(difficulty)) => format!("{}  ·  {}", category, difficulty),
        (Some(category), None) => category.to_string(),
        (None, Some(difficulty)) => difficulty.to_string(),
        (None, None) => String::new(),
    }
}
