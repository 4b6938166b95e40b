use crate::app::state::AppState;
use crate::data::content::page_content;
use crate::page::Section;
use crate::playback::MediaBackend;
use crate::ui::tui::{section_heading, PageLayout};
use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};

pub fn render<M: MediaBackend>(buf: &mut Buffer, page: &PageLayout, app: &AppState<M>) {
    section_heading(buf, Section::About, &app.theme);

    let mut lines = Vec::new();
    for (i, para) in page_content().about.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(para.as_str()));
    }
    Paragraph::new(lines)
        .style(Style::default().fg(app.theme.color_text()))
        .wrap(Wrap { trim: true })
        .render(page.about, buf);
}
