use crate::control::ratio::Indicator;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// Column of the handle for a percentage. The handle moves on `[0, w-1]`,
/// matching how pointer columns map back to a ratio.
pub fn knob_column(percent: f32, width: usize) -> usize {
    if width <= 1 {
        return 0;
    }
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    (ratio * (width as f32 - 1.0)).round() as usize
}

pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, indicator: Indicator, handle_visible: bool) {
    let w = area.width as usize;
    if w == 0 {
        return;
    }

    let fill = knob_column(indicator.fill_percent, w);
    let knob = knob_column(indicator.handle_percent, w);

    let line = if handle_visible {
        Line::from(vec![
            Span::styled("━".repeat(knob), Style::default().fg(theme.color_accent2())),
            Span::styled("●", Style::default().fg(theme.color_accent())),
            Span::styled("─".repeat(w.saturating_sub(1 + knob)), Style::default().fg(theme.color_subtext())),
        ])
    } else {
        // no handle: the filled part includes the knob cell once playback has moved
        let filled = if indicator.fill_percent > 0.0 { fill + 1 } else { 0 };
        Line::from(vec![
            Span::styled("━".repeat(filled), Style::default().fg(theme.color_accent2())),
            Span::styled("─".repeat(w.saturating_sub(filled)), Style::default().fg(theme.color_subtext())),
        ])
    };

    Paragraph::new(line).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, area: Rect) -> String {
        (area.x..area.x + area.width)
            .map(|x| buf.get(x, area.y).symbol().to_string())
            .collect()
    }

    #[test]
    fn knob_spans_the_whole_track() {
        assert_eq!(knob_column(0.0, 11), 0);
        assert_eq!(knob_column(50.0, 11), 5);
        assert_eq!(knob_column(100.0, 11), 10);
        assert_eq!(knob_column(250.0, 11), 10);
        assert_eq!(knob_column(40.0, 1), 0);
    }

    #[test]
    fn handle_only_when_visible() {
        let area = Rect::new(0, 0, 11, 1);
        let ind = Indicator { fill_percent: 50.0, handle_percent: 50.0 };

        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &Theme::fallback(), ind, true);
        assert_eq!(row(&buf, area), "━━━━━●─────");

        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &Theme::fallback(), ind, false);
        assert_eq!(row(&buf, area), "━━━━━━─────");
    }
}
