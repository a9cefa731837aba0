//! Default configuration values.

pub use crate::mapper::{DEFAULT_BASE_PRICE, DEFAULT_RISK_THRESHOLD};

/// Case-type filter shown when the case library opens.
pub const DEFAULT_CASE_FILTER: &str = "all";

/// TUI event poll interval.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// How many ticks a transient status message stays visible.
pub const STATUS_MESSAGE_TICKS: u64 = 30;
