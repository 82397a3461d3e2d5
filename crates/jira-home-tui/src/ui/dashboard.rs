use crate::app::{App, Dashboard, IssuePane};
use crate::ui::helpers::{focused_border_style, truncate_with_ellipsis};
use jira_home_core::models::Issue;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

pub const AVATAR_MARKER: &str = "◉";
pub const UNASSIGNED: &str = "Unassigned";

const COLUMN_SPACING: u16 = 1;
const SUMMARY_COLUMN: usize = 1;

fn column_widths() -> [Constraint; 5] {
    [
        Constraint::Percentage(15),
        Constraint::Percentage(30),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
        Constraint::Percentage(25),
    ]
}

pub fn draw_dashboard(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(dashboard) = app.dashboard().cloned() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(Span::styled(
        "Jira Dashboard",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_project_card(f, &dashboard, top[0]);
    draw_issue_table(f, app, &dashboard, IssuePane::Open, top[1]);
    draw_issue_table(f, app, &dashboard, IssuePane::Incoming, bottom[0]);
    draw_issue_table(f, app, &dashboard, IssuePane::AssignedToMe, bottom[1]);
}

fn draw_project_card(f: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let project = &dashboard.project;

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Project")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", AVATAR_MARKER), Style::default().fg(Color::Cyan)),
            Span::raw(format!("{} | ", project.name)),
            Span::styled(project.key.clone(), bold),
        ]),
        Line::from("─".repeat(inner.width as usize)),
        Line::from(vec![
            Span::raw("Project key: "),
            Span::styled(project.key.clone(), bold),
        ]),
        Line::from(vec![
            Span::raw("Project lead: "),
            Span::styled(project.lead.display_name.clone(), bold),
        ]),
        Line::from(Span::styled(
            format!("Avatar: {}", project.avatar_urls.large),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Go to Project ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" [o]", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            project.self_url.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_issue_table(
    f: &mut Frame,
    app: &mut App,
    dashboard: &Dashboard,
    pane: IssuePane,
    area: Rect,
) {
    let issues = dashboard.issues(pane);
    let is_focused = app.focused_pane == pane;

    let title = format!("{} ({})", pane.title(), issues.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(focused_border_style(is_focused));

    let summary_width = summary_column_width(block.inner(area).width);

    let header = Row::new(["Key", "Summary", "Priority", "Status", "Assignee"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(0);

    let rows: Vec<Row> = if pane.shows_rows() {
        issues.iter().map(|issue| issue_row(issue, summary_width)).collect()
    } else {
        Vec::new()
    };

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .row_highlight_style(if is_focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        });

    f.render_stateful_widget(table, area, app.table_state_mut(pane));
}

/// Characters available to the summary column of a table `table_width` wide.
/// Splits the row the same way `Table` lays out its columns.
pub fn summary_column_width(table_width: u16) -> usize {
    let columns = Layout::horizontal(column_widths())
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(Rect::new(0, 0, table_width, 1));
    columns[SUMMARY_COLUMN].width as usize
}

pub fn issue_row(issue: &Issue, summary_width: usize) -> Row<'static> {
    Row::new(vec![
        Cell::from(issue.key.clone()),
        Cell::from(truncate_with_ellipsis(&issue.fields.summary, summary_width)),
        Cell::from(issue.priority_name().unwrap_or("-").to_string()),
        Cell::from(issue.status_name().to_string()),
        assignee_cell(issue),
    ])
}

fn assignee_cell(issue: &Issue) -> Cell<'static> {
    match issue.assignee_name() {
        Some(name) => Cell::from(Line::from(vec![
            Span::styled(format!("{} ", AVATAR_MARKER), Style::default().fg(Color::Cyan)),
            Span::raw(name.to_string()),
        ])),
        None => Cell::from(UNASSIGNED),
    }
}
