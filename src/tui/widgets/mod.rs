//! Reusable widgets for the dashboard modules.

mod bar;

pub use bar::HorizontalBar;

use crate::config::DashboardModule;
use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Render a centered message in a bordered block.
pub fn render_empty_state(frame: &mut ratatui::Frame, area: Rect, message: &str, hint: Option<&str>) {
    let mut lines = vec![Line::from(""), Line::styled(message.to_string(), Styles::text_muted())];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(h.to_string(), Styles::text_muted().italic()));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border()))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
#[must_use]
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let budget = if max_width > 3 { max_width - 3 } else { max_width };
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();

    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Badge naming the active module.
pub fn render_module_indicator(module: DashboardModule) -> Span<'static> {
    let scheme = colors();
    let (label, color) = match module {
        DashboardModule::Scenario => ("SCENARIO", scheme.primary),
        DashboardModule::Workflow => ("WORKFLOW", scheme.accent),
        DashboardModule::Cases => ("CASES", scheme.success),
    };

    Span::styled(
        format!(" {label} "),
        Style::default().fg(scheme.badge_fg_dark).bg(color).bold(),
    )
}

/// Render a cycle indicator such as `Filter: all→[triple]→double→single`.
pub fn render_filter_indicator(
    filter_name: &str,
    current_value: &str,
    all_values: &[&str],
) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(format!("{filter_name}: "), Styles::text_muted())];

    for (i, val) in all_values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("→", Styles::text_muted()));
        }
        if *val == current_value {
            spans.push(Span::styled(
                format!(" {val} "),
                Style::default()
                    .fg(colors().badge_fg_dark)
                    .bg(colors().accent)
                    .bold(),
            ));
        } else {
            spans.push(Span::styled(format!(" {val} "), Styles::text_muted()));
        }
    }

    spans
}

// ============================================================================
// Terminal Size
// ============================================================================

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Check whether the terminal is large enough for the dashboard.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut ratatui::Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(format!("{}x{}", area.width, area.height), Styles::text()),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
        Line::from(""),
        Line::styled("Please resize your terminal", Styles::text_muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Contract DB", 20), "Contract DB");
        assert_eq!(truncate_str("Court judgement database", 10), "Court j...");
        assert_eq!(truncate_str("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // CJK characters are two cells wide
        assert_eq!(truncate_str("瑞丰精密", 7), "瑞丰...");
    }

    #[test]
    fn test_terminal_size() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(79, 24), Err((80, 24)));
    }

    #[test]
    fn test_centered_rect_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 50, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert_eq!(inner.width, 60);
    }

    #[test]
    fn test_filter_indicator_highlights_current() {
        let spans = render_filter_indicator("Filter", "double", &["all", "triple", "double", "single"]);
        // label + 4 values + 3 arrows
        assert_eq!(spans.len(), 8);
        assert_eq!(spans[5].content, " double ");
    }
}
