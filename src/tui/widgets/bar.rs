//! Horizontal weight bar.

use super::truncate_str;
use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

/// A single-line labelled bar, used for factor weights and scores.
pub struct HorizontalBar {
    label: String,
    value: usize,
    max_value: usize,
    color: Color,
    suffix: &'static str,
    label_width: usize,
}

impl HorizontalBar {
    pub fn new(label: impl Into<String>, value: usize, max_value: usize) -> Self {
        Self {
            label: label.into(),
            value,
            max_value,
            color: colors().primary,
            suffix: "",
            label_width: 28,
        }
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Unit printed after the value, e.g. `%`.
    #[must_use]
    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    #[must_use]
    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    /// Number of filled cells for a bar of `bar_width` cells.
    fn filled(&self, bar_width: usize) -> usize {
        if self.max_value == 0 {
            0
        } else {
            (self.value.min(self.max_value) * bar_width) / self.max_value
        }
    }
}

impl Widget for HorizontalBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let label_width = self.label_width.min(area.width as usize / 2);
        let value_text = format!("{:>4}{}", self.value, self.suffix);
        let value_width = value_text.chars().count();
        let bar_width = (area.width as usize).saturating_sub(label_width + value_width + 2);

        let label = format!(
            "{:width$}",
            truncate_str(&self.label, label_width),
            width = label_width
        );
        buf.set_stringn(
            area.x,
            area.y,
            &label,
            label_width,
            Style::default().fg(colors().text),
        );

        let filled = self.filled(bar_width);
        let bar: String = (0..bar_width)
            .map(|i| if i < filled { '█' } else { '░' })
            .collect();
        let bar_x = area.x + label_width as u16 + 1;
        buf.set_stringn(bar_x, area.y, &bar[..], bar_width, Style::default().fg(colors().muted));
        if filled > 0 {
            let filled_part: String = bar.chars().take(filled).collect();
            buf.set_stringn(bar_x, area.y, &filled_part, filled, Style::default().fg(self.color));
        }

        buf.set_stringn(
            bar_x + bar_width as u16 + 1,
            area.y,
            &value_text,
            value_width,
            Style::default().fg(self.color).bold(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells() {
        let bar = HorizontalBar::new("Historical on-time delivery", 30, 100);
        assert_eq!(bar.filled(20), 6);
        assert_eq!(HorizontalBar::new("x", 150, 100).filled(10), 10);
        assert_eq!(HorizontalBar::new("x", 5, 0).filled(10), 0);
    }

    #[test]
    fn test_render_writes_value() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("Capacity stability", 25, 100)
            .suffix("%")
            .render(area, &mut buf);
        let line: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(line.starts_with("Capacity stability"));
        assert!(line.trim_end().ends_with("25%"));
    }
}
