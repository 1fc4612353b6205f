//! TUI rendering with ratatui
//!
//! Date field, five letter slots and the reveal checkbox.

use super::app::{App, MessageStyle};
use crate::core::WORD_LENGTH;
use crate::output::formatters::EMPTY_SLOT;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Date input
            Constraint::Length(5), // Slots
            Constraint::Length(3), // Reveal checkbox
            Constraint::Min(4),    // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_date_input(f, app, chunks[1]);
    render_slots(f, app, chunks[2]);
    render_reveal(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📅 WORD OF THE DAY")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_date_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Date (YYYY-MM-DD) | Enter to select ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_slots(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, WORD_LENGTH as u32); WORD_LENGTH])
        .split(area);

    let revealed = app.controller.reveal().is_revealed();
    let border = if revealed {
        Color::Green
    } else {
        Color::DarkGray
    };

    for (slot, column) in app.controller.slots().iter().zip(columns.iter()) {
        let letter = slot.unwrap_or(EMPTY_SLOT).to_string();
        let cell = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                letter,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border)),
        );
        f.render_widget(cell, *column);
    }
}

fn render_reveal(f: &mut Frame, app: &App, area: Rect) {
    let (mark, color) = if app.controller.reveal().is_revealed() {
        ("[x]", Color::Green)
    } else {
        ("[ ]", Color::White)
    };

    let checkbox = Paragraph::new(Line::from(vec![
        Span::styled(mark, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(" Reveal word"),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(checkbox, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let day_text = app.controller.selection().map_or_else(
        || "No date selected".to_string(),
        |s| {
            format!(
                "Day {} of {} | tz: {}",
                s.day_index + 1,
                app.controller.selector().len(),
                app.timezone
            )
        },
    );
    f.render_widget(
        Paragraph::new(day_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("q: Quit | Space: Reveal | ←/→: Day | t: Today | Enter: Select")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
