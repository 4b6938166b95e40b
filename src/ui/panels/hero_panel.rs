use crate::app::state::AppState;
use crate::data::content::page_content;
use crate::playback::MediaBackend;
use crate::ui::borders::CARD_BORDER;
use crate::ui::tui::PageLayout;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

pub fn render<M: MediaBackend>(buf: &mut Buffer, page: &PageLayout, app: &mut AppState<M>) {
    let theme = app.theme;

    if page.cover.width > 0 {
        match app.cover.ascii(page.cover.width, page.cover.height) {
            Some(art) => Paragraph::new(art.to_string())
                .style(Style::default().fg(theme.color_text()))
                .render(page.cover, buf),
            None => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_set(CARD_BORDER)
                    .border_style(Style::default().fg(theme.color_subtext()));
                let inner = block.inner(page.cover);
                block.render(page.cover, buf);
                let mid = ratatui::layout::Rect { y: inner.y + inner.height / 2, height: 1, ..inner };
                Paragraph::new("♫")
                    .style(Style::default().fg(theme.color_accent()))
                    .alignment(Alignment::Center)
                    .render(mid, buf);
            }
        }
    }

    let track = app.player.track();
    let lines = vec![
        Line::styled(
            track.title.clone(),
            Style::default().fg(theme.color_accent()).add_modifier(Modifier::BOLD),
        ),
        Line::styled(track.artist.clone(), Style::default().fg(theme.color_text())),
        Line::from(""),
        Line::styled(page_content().tagline.as_str(), Style::default().fg(theme.color_subtext())),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(page.hero_text, buf);
}
