//! Full-screen report dashboard: expense table, category bars, and the
//! daily trend, with month paging. A thin shell — every keypress that
//! changes the selection just refetches and rebuilds the pure report.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Sparkline, Table},
};
use std::io::{self, Stdout};

use splitscope_api::SplitwiseClient;
use splitscope_core::Report;

use crate::render::format_currency;
use crate::report_cmd::{ReportRequest, fetch_report_blocking};

pub fn run_dashboard(client: &SplitwiseClient, request: ReportRequest) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = dashboard_loop(&mut terminal, client, request);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

struct View {
    label: String,
    report: Report,
    status: Option<String>,
}

fn dashboard_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: &SplitwiseClient,
    mut request: ReportRequest,
) -> Result<()> {
    // First fetch happens before the terminal shows anything useful, so
    // a hard failure here should abort with a real error.
    let (label, report) = fetch_report_blocking(client, &request)?;
    let mut view = View {
        label,
        report,
        status: None,
    };

    loop {
        terminal.draw(|f| draw(f, &request, &view))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Left | KeyCode::Char('h') => {
                    request.prev_month();
                    refetch(client, &request, &mut view);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    request.next_month();
                    refetch(client, &request, &mut view);
                }
                KeyCode::Char('d') => {
                    request.discover = !request.discover;
                    refetch(client, &request, &mut view);
                }
                KeyCode::Char('r') => {
                    refetch(client, &request, &mut view);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Swap in a fresh report; on failure keep the old one and surface the
/// error in the status line instead of tearing the terminal down.
fn refetch(client: &SplitwiseClient, request: &ReportRequest, view: &mut View) {
    match fetch_report_blocking(client, request) {
        Ok((label, report)) => {
            view.label = label;
            view.report = report;
            view.status = None;
        }
        Err(e) => view.status = Some(format!("fetch failed: {e:#}")),
    }
}

fn draw(f: &mut ratatui::Frame, request: &ReportRequest, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], request, view);

    if view.report.is_empty() {
        let empty = Paragraph::new("No expenses found for this period and group.")
            .block(Block::default().borders(Borders::ALL).title("Expenses"));
        f.render_widget(empty, chunks[1]);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(chunks[1]);
        draw_table(f, columns[0], &view.report);
        draw_category_bars(f, columns[1], &view.report);
    }

    draw_trend(f, chunks[2], &view.report);
    draw_footer(f, chunks[3]);
}

fn draw_header(f: &mut ratatui::Frame, area: Rect, request: &ReportRequest, view: &View) {
    let mode = if request.discover { "discover" } else { "calendar" };
    let mut line = vec![
        Span::styled(
            format!("{} — {}", view.label, request.month_label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  [{} to {}, {}]  total ",
            view.report.period.start, view.report.period.end, mode
        )),
        Span::styled(
            format_currency(view.report.total),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(status) = &view.status {
        line.push(Span::styled(
            format!("  {status}"),
            Style::default().fg(Color::Red),
        ));
    }
    let header =
        Paragraph::new(Line::from(line)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_table(f: &mut ratatui::Frame, area: Rect, report: &Report) {
    let header = Row::new(["Date", "Category", "Description", "Amount"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = report.records.iter().map(|r| {
        Row::new([
            Cell::from(r.date.format("%Y-%m-%d").to_string()),
            Cell::from(r.category.clone()),
            Cell::from(r.description.clone()),
            Cell::from(format_currency(r.amount)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Min(16),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Expenses"));

    f.render_widget(table, area);
}

fn draw_category_bars(f: &mut ratatui::Frame, area: Rect, report: &Report) {
    let data: Vec<(&str, u64)> = report
        .by_category
        .iter()
        .map(|c| (c.category.as_str(), c.amount.round() as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Spend by category ($)"),
        )
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().add_modifier(Modifier::BOLD));

    f.render_widget(chart, area);
}

fn draw_trend(f: &mut ratatui::Frame, area: Rect, report: &Report) {
    let data: Vec<u64> = report
        .by_day
        .iter()
        .map(|d| d.amount.round() as u64)
        .collect();

    let spark = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title("Daily trend"))
        .data(&data)
        .style(Style::default().fg(Color::Blue));

    f.render_widget(spark, area);
}

fn draw_footer(f: &mut ratatui::Frame, area: Rect) {
    let help = Paragraph::new("←/→ month   d discover   r refresh   q quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
