use crate::control::mute::VolumeIcon;
use crate::control::ratio::Indicator;
use crate::ui::components::progress_bar::knob_column;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, indicator: Indicator) {
    let w = area.width as usize;
    if w == 0 {
        return;
    }

    let knob = knob_column(indicator.handle_percent, w);
    let filled = if indicator.fill_percent > 0.0 { knob } else { 0 };

    let line = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(theme.color_accent())),
        Span::styled("▐", Style::default().fg(theme.color_text())),
        Span::styled("░".repeat(w.saturating_sub(filled + 1)), Style::default().fg(theme.color_subtext())),
    ]);

    Paragraph::new(line).render(area, buf);
}

pub fn render_icon(buf: &mut Buffer, area: Rect, theme: &Theme, icon: VolumeIcon) {
    let color = match icon {
        VolumeIcon::Muted => theme.color_subtext(),
        _ => theme.color_text(),
    };
    Paragraph::new(icon.symbol())
        .style(Style::default().fg(color))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_empty() {
        let area = Rect::new(0, 0, 6, 1);
        let theme = Theme::fallback();

        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &theme, Indicator { fill_percent: 100.0, handle_percent: 100.0 });
        let s: String = (0..6).map(|x| buf.get(x, 0).symbol().to_string()).collect();
        assert_eq!(s, "█████▐");

        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &theme, Indicator::default());
        let s: String = (0..6).map(|x| buf.get(x, 0).symbol().to_string()).collect();
        assert_eq!(s, "▐░░░░░");
    }
}
