mod dashboard;
pub mod helpers;

use crate::app::{App, DashboardState};
use dashboard::draw_dashboard;
use helpers::{build_hint_line, centered_rect};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_title_bar(f, app, chunks[0]);

    match &app.state {
        DashboardState::Loading => draw_loading(f, chunks[1]),
        DashboardState::Error(message) => draw_error(f, message, chunks[1]),
        DashboardState::Ready(_) => {}
    }
    if app.dashboard().is_some() {
        draw_dashboard(f, app, chunks[1]);
    }

    draw_status_bar(f, app, chunks[2]);
}

fn draw_title_bar(f: &mut Frame, app: &App, area: Rect) {
    let project = app
        .dashboard()
        .map(|d| format!("[{}] ", d.project.key))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            "Jira Home ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(project),
        Span::raw("│ [q]Quit"),
    ]);

    let title = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn draw_loading(f: &mut Frame, area: Rect) {
    let rect = centered_rect(area, 20, 1);
    let loading = Paragraph::new("Loading...").alignment(Alignment::Center);
    f.render_widget(loading, rect);
}

fn draw_error(f: &mut Frame, message: &str, area: Rect) {
    let error = Paragraph::new(Span::styled(
        format!("Error: {}", message),
        Style::default().fg(Color::Red),
    ))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(error, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut line = match app.state {
        DashboardState::Ready(_) => build_hint_line(&[
            ("[Tab]", "Focus"),
            ("[↑↓]", "Scroll"),
            ("[o]", "Open project"),
            ("[q]", "Quit"),
        ]),
        _ => build_hint_line(&[("[q]", "Quit")]),
    };

    if !app.status_message.is_empty() {
        line.spans.push(Span::styled(
            format!("│ {}", app.status_message),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
