//! Centralized theme and color scheme for the TUI.
//!
//! This module provides consistent styling across all dashboard modules.

use crate::config::DashboardModule;
use crate::model::Tone;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Department series colors
    pub procurement: Color,
    pub legal: Color,
    pub finance: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default); const so it can seed the global theme
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            procurement: Color::Cyan,
            legal: Color::Magenta,
            finance: Color::Green,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            secondary: Color::Rgb(0, 0, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            procurement: Color::Rgb(0, 100, 150),
            legal: Color::Rgb(128, 0, 128),
            finance: Color::Rgb(0, 128, 0),

            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::LightCyan,
            secondary: Color::LightBlue,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            procurement: Color::LightCyan,
            legal: Color::LightMagenta,
            finance: Color::LightGreen,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Color for a semantic status tone
    #[must_use]
    pub const fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Good => self.success,
            Tone::Caution => self.warning,
            Tone::Alert => self.error,
            Tone::Neutral => self.text_muted,
        }
    }

    /// Series color for a department
    #[must_use]
    pub const fn department_color(&self, department: crate::model::Department) -> Color {
        match department {
            crate::model::Department::Procurement => self.procurement,
            crate::model::Department::Legal => self.legal,
            crate::model::Department::Finance => self.finance,
        }
    }

    /// Delta color: inverted deltas are warnings, normal ones are good news
    #[must_use]
    pub const fn delta_color(&self, inverted: bool) -> Color {
        if inverted {
            self.error
        } else {
            self.success
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent).bold()
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn table_header() -> Style {
        Style::default().fg(colors().accent).bold()
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Module-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Get hints for a dashboard module
    pub fn for_module(module: DashboardModule) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();

        match module {
            DashboardModule::Scenario => {
                hints.insert(0, ("[ ]", "base price"));
                hints.insert(1, ("- +", "risk"));
                hints.insert(2, ("d", "logic details"));
            }
            DashboardModule::Workflow => {
                hints.insert(0, ("←→", "tabs"));
                hints.insert(1, ("n", "notify"));
            }
            DashboardModule::Cases => {
                hints.insert(0, ("f", "filter: All→Triple→Double→Single"));
                hints.insert(1, ("d", "trend"));
            }
        }

        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("1-3/Tab", "module"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
