use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, LoadState, Phase};
use crate::models::Stats;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).split(area);

    render_counters(frame, rows[0], app.stats());
    render_controls(frame, rows[1], app);
}

fn render_counters(frame: &mut Frame, area: Rect, stats: Stats) {
    let line = Line::from(vec![
        Span::styled("Correct ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            stats.correct.to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
        Span::styled("  ·  Incorrect ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            stats.incorrect.to_string(),
            Style::default().fg(Color::Red).bold(),
        ),
        Span::styled("  ·  Accuracy ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}%", stats.accuracy()),
            Style::default().fg(Color::Cyan).bold(),
        ),
    ]);

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hint = match (app.load_state(), app.phase()) {
        (LoadState::Loading, _) => "c reset stats  ·  q quit",
        (LoadState::Failed, _) => "r retry  ·  c reset stats  ·  q quit",
        (LoadState::Ready(_), Phase::Unanswered) => {
            "o true  ·  x false  ·  c reset stats  ·  q quit"
        }
        (LoadState::Ready(_), Phase::Answered { .. }) => {
            "n next question  ·  c reset stats  ·  q quit"
        }
    };

    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
