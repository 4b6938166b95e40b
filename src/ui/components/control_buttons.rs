use crate::app::player::PlaybackState;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};

pub fn play_symbol(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Playing => "⏸",
        PlaybackState::Paused => "▶",
    }
}

/// Previous, play/pause, next, replay; one segment each.
pub fn render(buf: &mut Buffer, segments: &[Rect; 4], theme: &Theme, state: PlaybackState) {
    let labels = ["⏮", play_symbol(state), "⏭", "↺"];
    for (i, (area, label)) in segments.iter().zip(labels).enumerate() {
        let mut style = Style::default().fg(theme.color_text());
        if i == 1 {
            style = style.fg(theme.color_accent()).add_modifier(Modifier::BOLD);
        }
        Paragraph::new(format!("[{label}]"))
            .style(style)
            .alignment(Alignment::Center)
            .render(*area, buf);
    }
}
