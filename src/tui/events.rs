//! Event handling for the `DashboardApp`.

use super::app::DashboardApp;
use super::theme::toggle_theme;
use crate::config::{DashboardModule, TuiPreferences};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Event handler.
///
/// Polls the terminal on a background thread and forwards events over a
/// channel; a `Tick` is sent whenever a poll interval passes quietly.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => event_tx.send(Event::Key(key)),
                    Ok(CrosstermEvent::Resize(w, h)) => event_tx.send(Event::Resize(w, h)),
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    break;
                }
            } else if event_tx.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle key events for `DashboardApp`.
pub fn handle_key_event(app: &mut DashboardApp, key: KeyEvent) {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows everything but its own close keys
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q')) {
            app.toggle_help();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('1') => app.select_module(DashboardModule::Scenario),
        KeyCode::Char('2') => app.select_module(DashboardModule::Workflow),
        KeyCode::Char('3') => app.select_module(DashboardModule::Cases),
        KeyCode::Tab => app.next_module(),
        KeyCode::BackTab => app.prev_module(),
        KeyCode::Char('[') => app.nudge_base_price(-1),
        KeyCode::Char(']') => app.nudge_base_price(1),
        KeyCode::Char('{') => app.nudge_base_price(-10),
        KeyCode::Char('}') => app.nudge_base_price(10),
        KeyCode::Char('-' | '_') => app.nudge_risk_threshold(-1),
        KeyCode::Char('+' | '=') => app.nudge_risk_threshold(1),
        KeyCode::Char('f') => {
            app.cycle_case_filter();
            app.set_status_message(format!("Case filter: {}", app.case_filter.label()));
        }
        KeyCode::Char('F') => {
            app.cycle_case_filter_back();
            app.set_status_message(format!("Case filter: {}", app.case_filter.label()));
        }
        KeyCode::Right | KeyCode::Char('l') if app.module == DashboardModule::Workflow => {
            app.next_workflow_tab();
        }
        KeyCode::Left | KeyCode::Char('h') if app.module == DashboardModule::Workflow => {
            app.prev_workflow_tab();
        }
        KeyCode::Char('d') => app.toggle_details(),
        KeyCode::Char('n') | KeyCode::Enter => app.simulate_notification(),
        KeyCode::Char('T') => {
            let theme_name = toggle_theme();
            let mut prefs = TuiPreferences::load();
            prefs.theme = theme_name.to_string();
            if let Err(e) = prefs.save() {
                tracing::debug!("could not save theme preference: {e}");
            }
            app.set_status_message(format!("Theme: {theme_name}"));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, DashboardConfig};
    use crate::mapper::RiskLabel;
    use crate::model::{CaseFilter, ConflictType, DemoCatalog};
    use crate::tui::app::WorkflowTab;

    fn app() -> DashboardApp {
        let config = DashboardConfig::from_app_config(&AppConfig::default(), DashboardModule::Scenario);
        DashboardApp::new(DemoCatalog::seeded(), &config)
    }

    fn press(app: &mut DashboardApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_number_keys_select_module() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.module, DashboardModule::Cases);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.module, DashboardModule::Workflow);
    }

    #[test]
    fn test_slider_keys() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.parameters.risk_threshold(), 70);
        assert_eq!(app.readout.risk, RiskLabel::Medium);
        press(&mut app, KeyCode::Char(']'));
        assert!((app.parameters.base_price() - 14.3).abs() < 1e-9);
    }

    #[test]
    fn test_arrows_switch_workflow_tabs_only_in_workflow() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.workflow_tab, WorkflowTab::Identification);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.workflow_tab, WorkflowTab::Meeting);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.workflow_tab, WorkflowTab::Tracking);
    }

    #[test]
    fn test_filter_keys_cycle_both_ways() {
        let mut app = app();
        press(&mut app, KeyCode::Char('F'));
        assert_eq!(app.case_filter, CaseFilter::Only(ConflictType::Single));
        assert_eq!(app.status_message.as_deref(), Some("Case filter: Single conflict"));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.case_filter, CaseFilter::All);
    }

    #[test]
    fn test_help_overlay_blocks_other_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.module, DashboardModule::Scenario);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut by_ctrl_c = app();
        handle_key_event(
            &mut by_ctrl_c,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(by_ctrl_c.should_quit);

        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
