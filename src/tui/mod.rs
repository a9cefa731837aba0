//! Interactive terminal dashboard using ratatui.
//!
//! Three modules share one screen layout: the conflict scenario
//! simulation, the arbitration workflow and the case library. All state
//! lives in [`DashboardApp`]; views only read it.

mod app;
mod events;
pub mod theme;
mod ui;
pub(crate) mod views;
pub(crate) mod widgets;

pub use app::{DashboardApp, WorkflowTab};
pub use events::{handle_key_event, Event};
pub use theme::{colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme};
pub use ui::{render, run_dashboard_tui, terminal_active, DEMO_CAPTION};
