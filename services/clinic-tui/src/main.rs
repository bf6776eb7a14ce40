// services/clinic-tui/src/main.rs
//
// TUI Dashboard for clinic appointments
// Front-desk view of the appointment list with priority filters and X-ray lookup
//
// Run with: cargo run --bin clinic-tui -- --demo

use std::fs::OpenOptions;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clinickit::datetime::format_date_time;
use clinickit::{Priority, XrayCatalog};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod mock;
mod state;
mod store;

use mock::MockAppointmentGenerator;
use state::{DashboardState, InputMode};
use store::JsonFileStore;

#[derive(Parser, Debug)]
#[command(name = "clinic-tui")]
#[command(about = "Terminal UI Dashboard for clinic appointments")]
#[command(version = "0.1.0")]
struct Args {
    /// Configuration file (optional, YAML)
    #[arg(short, long, default_value = "config/clinic-tui.yaml")]
    config: String,

    /// Appointment store file, overrides the configured path
    #[arg(long)]
    store: Option<PathBuf>,

    /// Seed the store with generated appointments before loading
    #[arg(long, short)]
    demo: bool,

    /// Number of appointments generated in demo mode
    #[arg(long, default_value = "5")]
    demo_count: usize,

    /// Refresh interval in milliseconds, overrides the configured value
    #[arg(long)]
    refresh_ms: Option<u64>,
}

// Color palette: clinic blue with priority red/amber/green
mod colors {
    use ratatui::style::Color;

    pub const BLUE: Color = Color::Rgb(30, 58, 138);
    pub const LIGHT_BLUE: Color = Color::Rgb(96, 165, 250);
    pub const WHITE: Color = Color::Rgb(248, 250, 252);
    pub const SILVER: Color = Color::Rgb(148, 163, 184);
    pub const HIGH: Color = Color::Rgb(220, 38, 38);
    pub const MEDIUM: Color = Color::Rgb(202, 138, 4);
    pub const LOW: Color = Color::Rgb(22, 163, 74);
    pub const BG_DARK: Color = Color::Rgb(15, 23, 42);
    pub const BG_PANEL: Color = Color::Rgb(30, 41, 59);
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load_config(&args.config)?;

    init_tracing(&config.log_file, &config.observability.log_level)?;

    let store_path = args
        .store
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.store_path));
    let store = JsonFileStore::new(store_path);
    info!("Starting clinic-tui with store {}", store.path().display());

    if args.demo {
        let written = MockAppointmentGenerator::new()
            .seed(&store, args.demo_count, state::today_utc())
            .context("seeding demo appointments")?;
        info!("Demo mode: seeded {} appointments", written);
    }

    // The terminal operator starts logged in; `l` logs out and ends the session.
    let mut state = DashboardState::new(store, XrayCatalog::new(&config.xray));
    state.load();

    let refresh_ms = args.refresh_ms.unwrap_or(config.refresh_ms);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run app
    let result = run_app(&mut terminal, &mut state, args.demo, refresh_ms);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// Log to a file, stdout belongs to the dashboard.
fn init_tracing(log_file: &str, level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("opening log file {}", log_file))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("clinic_tui={level},clinickit={level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut DashboardState,
    demo_mode: bool,
    refresh_ms: u64,
) -> Result<()> {
    let tick_rate = Duration::from_millis(refresh_ms);

    state.add_log(
        "INFO",
        if demo_mode { "TUI Dashboard started in DEMO mode" } else { "TUI Dashboard started" },
    );

    loop {
        if !state.is_logged_in() {
            return Ok(());
        }

        terminal.draw(|frame| draw_ui(frame, state, demo_mode))?;

        // Redraw every tick so the today count follows the clock
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(state, key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns true when the user asked to quit.
fn handle_key(state: &mut DashboardState, code: KeyCode) -> bool {
    if state.input_mode == InputMode::Search {
        match code {
            KeyCode::Enter | KeyCode::Esc => state.finish_search(),
            KeyCode::Backspace => state.pop_search_char(),
            KeyCode::Char(c) => state.push_search_char(c),
            _ => {}
        }
        return false;
    }

    if state.view.is_xray_modal_open() {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('v') => state.close_xray(),
            KeyCode::Char('q') => return true,
            _ => {}
        }
        return false;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('/') => state.start_search(),
        KeyCode::Char('1') => state.toggle_filter(Priority::High),
        KeyCode::Char('2') => state.toggle_filter(Priority::Medium),
        KeyCode::Char('3') => state.toggle_filter(Priority::Low),
        KeyCode::Up => state.select_up(),
        KeyCode::Down => state.select_down(),
        KeyCode::Enter | KeyCode::Char('v') => state.view_selected_xray(),
        KeyCode::Char('c') => state.clear_data(),
        KeyCode::Char('l') => state.logout(),
        _ => {}
    }
    false
}

fn draw_ui(frame: &mut Frame, state: &DashboardState, demo_mode: bool) {
    let area = frame.area();

    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BG_DARK)),
        area,
    );

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(5),  // Stats panel
            Constraint::Length(3),  // Search + filters
            Constraint::Min(10),    // Appointments + Activity
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], state, demo_mode);
    draw_stats_panel(frame, chunks[1], state);
    draw_search_bar(frame, chunks[2], state);
    draw_main_content(frame, chunks[3], state);
    draw_footer(frame, chunks[4], state);

    if state.view.is_xray_modal_open() {
        draw_xray_popup(frame, area, state);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &DashboardState, demo_mode: bool) {
    let (mode_text, mode_color) = if demo_mode {
        ("DEMO", colors::MEDIUM)
    } else {
        ("LIVE", colors::LOW)
    };

    let title = Line::from(vec![
        Span::styled(
            " CLINIC ",
            Style::default().fg(colors::WHITE).bg(colors::BLUE).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            "DOCTOR DASHBOARD",
            Style::default().fg(colors::LIGHT_BLUE).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", mode_text),
            Style::default().fg(mode_color).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            state.view.store().path().display().to_string(),
            Style::default().fg(colors::SILVER),
        ),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors::BLUE))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(header, area);
}

fn draw_stats_panel(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = state.stats();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    draw_stat_box(frame, chunks[0], "TODAY'S APPOINTMENTS", stats.today, colors::LIGHT_BLUE);
    for (chunk, priority) in chunks[1..].iter().zip(Priority::ALL) {
        let label = format!("{} PRIORITY", priority.as_str().to_uppercase());
        draw_stat_box(frame, *chunk, &label, stats.count_for(priority), priority_color(priority));
    }
}

fn draw_stat_box(frame: &mut Frame, area: Rect, label: &str, value: usize, value_color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            label,
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(value_color).bold(),
        )),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

fn draw_search_bar(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let searching = state.input_mode == InputMode::Search;
    let border_color = if searching { colors::LIGHT_BLUE } else { colors::SILVER };

    let mut spans = vec![
        Span::styled(" Search: ", Style::default().fg(colors::SILVER)),
        Span::styled(
            state.view.search_term().to_string(),
            Style::default().fg(colors::WHITE).bold(),
        ),
    ];
    if searching {
        spans.push(Span::styled("▏", Style::default().fg(colors::LIGHT_BLUE)));
    } else if state.view.search_term().is_empty() {
        spans.push(Span::styled(
            "name or token...",
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        ));
    }

    spans.push(Span::raw("    "));
    for (key, priority) in ['1', '2', '3'].into_iter().zip(Priority::ALL) {
        let active = state.view.priority_filter() == Some(priority);
        let style = if active {
            Style::default().fg(colors::BG_DARK).bg(priority_color(priority)).bold()
        } else {
            Style::default().fg(priority_color(priority))
        };
        spans.push(Span::styled(format!(" [{}] {} ", key, priority), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .border_type(BorderType::Rounded)
            .style(Style::default().bg(colors::BG_PANEL)),
    );

    frame.render_widget(bar, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    draw_appointments_panel(frame, chunks[0], state);
    draw_activity_panel(frame, chunks[1], state);
}

fn draw_appointments_panel(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(Span::styled(
            " APPOINTMENTS ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let visible = state.visible();

    let rows: Vec<Row> = if visible.is_empty() {
        vec![Row::new(vec![
            Cell::from(""),
            Cell::from(Span::styled(
                "No appointments found",
                Style::default().fg(colors::SILVER),
            )),
        ])]
    } else {
        visible
            .iter()
            .map(|a| {
                Row::new(vec![
                    Cell::from(Span::styled(
                        format!("#{}", a.token),
                        Style::default().fg(colors::WHITE).bold(),
                    )),
                    Cell::from(Span::styled(
                        format!("{} ({} yrs, {})", a.name, a.age, a.gender),
                        Style::default().fg(colors::WHITE),
                    )),
                    Cell::from(Span::styled(a.symptoms.clone(), Style::default().fg(colors::SILVER))),
                    Cell::from(Span::styled(
                        a.priority.as_str(),
                        Style::default().fg(priority_color(a.priority)).bold(),
                    )),
                    Cell::from(Span::styled(
                        format_date_time(&a.appointment_date_time),
                        Style::default().fg(colors::SILVER),
                    )),
                    Cell::from(Span::styled(a.xray_file_name.clone(), Style::default().fg(colors::LIGHT_BLUE))),
                ])
            })
            .collect()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Min(24),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(22),
            Constraint::Length(16),
        ],
    )
    .header(
        Row::new(
            ["TOKEN", "PATIENT", "SYMPTOMS", "PRIORITY", "APPOINTMENT", "X-RAY"]
                .into_iter()
                .map(|h| Cell::from(Span::styled(h, Style::default().fg(colors::LIGHT_BLUE).bold()))),
        )
        .bottom_margin(1),
    )
    .block(block)
    .row_highlight_style(Style::default().bg(colors::BLUE))
    .highlight_symbol("▶ ");

    let selected = if visible.is_empty() { None } else { Some(state.selected_row) };
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn draw_activity_panel(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(Span::styled(
            " ACTIVITY LOG ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let logs: Vec<Line> = state
        .activity_log
        .iter()
        .rev()
        .take(20)
        .map(|entry| {
            let (prefix, color) = match entry.level.as_str() {
                "ERROR" => ("[ERR]", colors::HIGH),
                "WARN" => ("[WRN]", colors::MEDIUM),
                "INFO" => ("[INF]", colors::LOW),
                _ => ("[---]", colors::SILVER),
            };

            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
                ),
                Span::styled(format!("{} ", prefix), Style::default().fg(color)),
                Span::styled(&entry.message, Style::default().fg(colors::WHITE)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(logs)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let keys: &[(&str, &str, Color)] = if state.input_mode == InputMode::Search {
        &[
            (" [ENTER/ESC] ", " Done ", colors::LIGHT_BLUE),
            (" [BACKSPACE] ", " Delete ", colors::SILVER),
        ]
    } else {
        &[
            (" [Q] ", " Quit ", colors::HIGH),
            (" [/] ", " Search ", colors::LIGHT_BLUE),
            (" [1/2/3] ", " Filter ", colors::MEDIUM),
            (" [ENTER] ", " View X-ray ", colors::LOW),
            (" [C] ", " Clear Data ", colors::WHITE),
            (" [L] ", " Logout ", colors::SILVER),
        ]
    };

    let mut spans = Vec::new();
    for (key, label, color) in keys {
        spans.push(Span::styled(*key, Style::default().fg(colors::BG_DARK).bg(*color)));
        spans.push(Span::styled(*label, Style::default().fg(colors::SILVER)));
        spans.push(Span::raw("  "));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::BLUE))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(footer, area);
}

fn draw_xray_popup(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let popup = centered_rect(60, 30, area);
    let file = state.view.selected_xray().unwrap_or_default();
    let url = state.selected_xray_url().unwrap_or_default();

    let mut text = vec![
        Line::from(Span::styled(file, Style::default().fg(colors::WHITE).bold())),
        Line::from(""),
        Line::from(Span::styled(url, Style::default().fg(colors::LIGHT_BLUE))),
    ];
    if !state.xray.is_known(file) {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "Unknown X-ray, showing placeholder",
            Style::default().fg(colors::MEDIUM),
        )));
    }

    let block = Block::default()
        .title(Span::styled(" X-RAY IMAGE ", Style::default().fg(colors::WHITE).bold()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::LIGHT_BLUE))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block),
        popup,
    );
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => colors::HIGH,
        Priority::Medium => colors::MEDIUM,
        Priority::Low => colors::LOW,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_state(dir: &tempfile::TempDir) -> DashboardState {
        let store = JsonFileStore::new(dir.path().join("appointments.json"));
        let mut state = DashboardState::new(store, XrayCatalog::default());
        state.load();
        state
    }

    #[test]
    fn test_logout_key_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);
        assert!(state.is_logged_in());

        assert!(!handle_key(&mut state, KeyCode::Char('l')));
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_search_mode_swallows_quit_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);

        assert!(!handle_key(&mut state, KeyCode::Char('/')));
        assert!(!handle_key(&mut state, KeyCode::Char('q')));
        assert_eq!(state.view.search_term(), "q");

        assert!(!handle_key(&mut state, KeyCode::Esc));
        assert!(handle_key(&mut state, KeyCode::Char('q')));
    }

    #[test]
    fn test_filter_keys_toggle_priority() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);

        handle_key(&mut state, KeyCode::Char('2'));
        assert_eq!(state.view.priority_filter(), Some(Priority::Medium));
        handle_key(&mut state, KeyCode::Char('2'));
        assert_eq!(state.view.priority_filter(), None);
    }
}
