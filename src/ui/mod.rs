mod answers;
mod question;
mod result;
mod stats;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .margin(1)
    .split(area);

    question::render_header(frame, chunks[0], app);
    question::render(frame, chunks[1], app);
    answers::render(frame, chunks[2], app);
    result::render(frame, chunks[3], app);
    stats::render(frame, chunks[4], app);
}
