//! Main dashboard rendering and the terminal run loop.

use super::app::DashboardApp;
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, current_theme_name, render_footer_hints, set_theme, FooterHints, Theme};
use super::views;
use super::widgets::{
    centered_rect, check_terminal_size, render_module_indicator, render_size_warning, MIN_HEIGHT,
    MIN_WIDTH,
};
use crate::config::{DashboardModule, TuiConfig, TuiPreferences};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Footer caption shown on every screen.
pub const DEMO_CAPTION: &str = "Demo system: all data shown is simulated.";

/// Set while the dashboard owns the terminal; log output is muted meanwhile.
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Whether the interactive dashboard currently owns the terminal.
#[must_use]
pub fn terminal_active() -> bool {
    TERMINAL_ACTIVE.load(Ordering::Relaxed)
}

/// Pick the starting theme: a saved preference wins over the config file.
fn resolve_theme(tui: &TuiConfig) -> Theme {
    let saved = TuiPreferences::config_path().is_some_and(|p| p.exists());
    if saved {
        Theme::from_name(&TuiPreferences::load().theme)
    } else {
        Theme::from_name(&tui.theme)
    }
}

/// Run the interactive dashboard until the user quits.
pub fn run_dashboard_tui(app: &mut DashboardApp, tui: &TuiConfig) -> io::Result<()> {
    set_theme(resolve_theme(tui));

    enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(e);
    }
    TERMINAL_ACTIVE.store(true, Ordering::Relaxed);

    let backend = CrosstermBackend::new(stdout);
    let result = Terminal::new(backend).and_then(|mut terminal| {
        let outcome = event_loop(&mut terminal, app, Duration::from_millis(tui.tick_rate_ms));
        // Restore even when the loop failed
        let restored = execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .and_then(|()| terminal.show_cursor());
        outcome.and(restored)
    });

    TERMINAL_ACTIVE.store(false, Ordering::Relaxed);
    disable_raw_mode()?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut DashboardApp,
    tick_rate: Duration,
) -> io::Result<()> {
    let events = EventHandler::new(tick_rate);
    tracing::debug!(module = ?app.module, "dashboard started");

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render one frame of the dashboard.
pub fn render(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, tabs, content, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(2), // Module tabs
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);

    match app.module {
        DashboardModule::Scenario => views::render_scenario(frame, chunks[2], app),
        DashboardModule::Workflow => views::render_workflow(frame, chunks[2], app),
        DashboardModule::Cases => views::render_cases(frame, chunks[2], app),
    }

    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let lines = vec![
        Line::from(vec![
            Span::styled("chainaudit", Style::default().fg(colors().primary).bold()),
            Span::raw(" "),
            render_module_indicator(app.module),
            Span::styled(" │ ", Style::default().fg(colors().muted)),
            Span::styled(
                "Multi-AI supply-chain arbitration",
                Style::default().fg(colors().text),
            ),
        ]),
        Line::styled(DEMO_CAPTION, Style::default().fg(colors().text_muted).italic()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let titles: Vec<Line> = DashboardModule::ALL
        .iter()
        .enumerate()
        .map(|(i, module)| {
            let style = if *module == app.module {
                Style::default().fg(colors().accent).bold()
            } else {
                Style::default().fg(colors().text_muted)
            };
            Line::from(vec![
                Span::styled(format!("[{}]", i + 1), style),
                Span::styled(format!(" {} ", module.title()), style),
            ])
        })
        .collect();

    let selected = DashboardModule::ALL
        .iter()
        .position(|m| *m == app.module)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors().border)),
        )
        .highlight_style(Style::default().fg(colors().accent))
        .select(selected)
        .divider(Span::styled(" │ ", Style::default().fg(colors().muted)));

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();
    let readout = &app.readout;
    let separator = || Span::styled(" │ ", Style::default().fg(scheme.muted));

    let deviation_color = if readout.deviation.is_inverted() {
        scheme.error
    } else {
        scheme.success
    };

    let spans = vec![
        Span::styled(" Base price: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!("{:.1}", app.parameters.base_price()),
            Style::default().fg(scheme.primary).bold(),
        ),
        separator(),
        Span::styled("Deviation: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            readout.deviation_display(),
            Style::default().fg(deviation_color).bold(),
        ),
        separator(),
        Span::styled("Risk: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!("{} ({})", readout.risk.label(), app.parameters.risk_threshold()),
            Style::default().fg(scheme.warning).bold(),
        ),
        separator(),
        Span::styled("Cases: ", Style::default().fg(scheme.text_muted)),
        Span::styled(app.case_filter.label(), Style::default().fg(scheme.accent)),
        separator(),
        Span::styled(current_theme_name(), Style::default().fg(scheme.text_muted)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(scheme.background_alt));
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let line = if let Some(ref msg) = app.status_message {
        Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.as_str(), Style::default().fg(colors().accent).bold()),
        ])
    } else {
        Line::from(render_footer_hints(&FooterHints::for_module(app.module)))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn help_line(keys: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<15}"), Style::default().fg(colors().accent)),
        Span::styled(desc, Style::default().fg(colors().text)),
    ])
}

fn help_heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default().fg(colors().primary).bold(),
    )])
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(65, 80, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::styled(
            "━━━ Keyboard Shortcuts ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        help_heading("Navigation"),
        help_line("1 / 2 / 3", "Jump to module"),
        help_line("Tab/Shift+Tab", "Next / previous module"),
        help_line("←→ or h/l", "Switch workflow tab"),
        Line::from(""),
        help_heading("Scenario controls"),
        help_line("[ / ]", "Base price -/+ 0.1"),
        help_line("{ / }", "Base price -/+ 1.0"),
        help_line("- / +", "Risk threshold -/+ 1"),
        help_line("d", "Toggle details (logic / trend)"),
        Line::from(""),
        help_heading("Other"),
        help_line("f / F", "Cycle case filter forward / back"),
        help_line("n / Enter", "Simulate completion notification"),
        help_line("T", "Toggle theme"),
        help_line("q / Esc", "Quit"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help [?/Esc to close] ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().border_focused)),
    );

    frame.render_widget(help, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, DashboardConfig};
    use crate::model::DemoCatalog;
    use crate::tui::app::WorkflowTab;
    use ratatui::backend::TestBackend;

    fn app(module: DashboardModule) -> DashboardApp {
        let config = DashboardConfig::from_app_config(&AppConfig::default(), module);
        DashboardApp::new(DemoCatalog::seeded(), &config)
    }

    fn draw(app: &DashboardApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| render(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_scenario_screen_shows_readout() {
        let screen = draw(&app(DashboardModule::Scenario), 120, 36);
        assert!(screen.contains("RF-202403"));
        assert!(screen.contains("exceeds threshold"));
        assert!(screen.contains("92/100"));
        assert!(screen.contains(DEMO_CAPTION));
    }

    #[test]
    fn test_scenario_logic_details() {
        let mut app = app(DashboardModule::Scenario);
        app.toggle_details();
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Decision logic"));
    }

    #[test]
    fn test_workflow_tracking_tab() {
        let mut app = app(DashboardModule::Workflow);
        app.workflow_tab = WorkflowTab::Tracking;
        let screen = draw(&app, 120, 36);
        assert!(screen.contains("Conditional approval"));
        assert!(screen.contains("Simulate completion notification"));
    }

    #[test]
    fn test_every_workflow_tab_renders() {
        let mut app = app(DashboardModule::Workflow);
        for tab in WorkflowTab::ALL {
            app.workflow_tab = tab;
            let screen = draw(&app, 100, 30);
            assert!(screen.contains("Arbitration workflow"));
        }
    }

    #[test]
    fn test_cases_screen_follows_filter() {
        let mut app = app(DashboardModule::Cases);
        let screen = draw(&app, 120, 30);
        assert!(screen.contains("C-2023-045"));
        assert!(screen.contains("C-2024-012"));

        app.cycle_case_filter();
        app.toggle_details();
        let screen = draw(&app, 120, 30);
        assert!(screen.contains("1 of 3 cases"));
        assert!(!screen.contains("C-2024-012"));
    }

    #[test]
    fn test_small_terminal_warning() {
        let screen = draw(&app(DashboardModule::Scenario), 60, 20);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app(DashboardModule::Cases);
        app.toggle_help();
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Keyboard Shortcuts"));
    }
}
