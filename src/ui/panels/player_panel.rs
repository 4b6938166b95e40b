use crate::app::player::PlaybackState;
use crate::app::state::AppState;
use crate::page::Section;
use crate::playback::MediaBackend;
use crate::ui::borders::CARD_BORDER;
use crate::ui::components::{control_buttons, progress_bar, volume_bar};
use crate::ui::tui::{section_heading, PageLayout};
use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

pub fn render<M: MediaBackend>(buf: &mut Buffer, page: &PageLayout, app: &AppState<M>) {
    let theme = &app.theme;
    let player = &app.player;
    section_heading(buf, Section::Music, theme);

    Block::default()
        .borders(Borders::ALL)
        .border_set(CARD_BORDER)
        .border_style(Style::default().fg(theme.color_subtext()))
        .style(Style::default().bg(theme.color_surface()))
        .render(page.card, buf);

    let track = player.track();
    let status = if !player.is_loaded() {
        "unavailable"
    } else if player.playback() == PlaybackState::Playing {
        "playing"
    } else {
        "paused"
    };
    let now = Line::from(vec![
        Span::styled(track.title.as_str(), Style::default().fg(theme.color_text())),
        Span::styled(format!(" · {}", track.artist), Style::default().fg(theme.color_subtext())),
        Span::styled(format!("  ({status})"), Style::default().fg(theme.color_accent3())),
    ]);
    Paragraph::new(now).render(page.now_playing, buf);

    let left = player.current_label();
    let right = player.total_label();
    let time_line = format!(
        "{}{:>width$}",
        left,
        right,
        width = (page.time_line.width as usize).saturating_sub(left.width())
    );
    Paragraph::new(time_line)
        .style(Style::default().fg(theme.color_subtext()))
        .render(page.time_line, buf);

    progress_bar::render(
        buf,
        page.progress,
        theme,
        player.seek_indicator(),
        player.progress_handle_visible(),
    );
    control_buttons::render(buf, &page.controls, theme, player.playback());
    volume_bar::render_icon(buf, page.volume_icon, theme, player.volume_icon());
    volume_bar::render(buf, page.volume, theme, player.volume_indicator());
}
