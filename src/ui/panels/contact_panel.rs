use crate::app::state::AppState;
use crate::data::content::page_content;
use crate::page::contact::Field;
use crate::page::Section;
use crate::playback::MediaBackend;
use crate::ui::components::contact_field;
use crate::ui::tui::{section_heading, PageLayout};
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};

pub fn render<M: MediaBackend>(buf: &mut Buffer, page: &PageLayout, app: &AppState<M>) {
    let theme = &app.theme;
    section_heading(buf, Section::Contact, theme);

    Paragraph::new(page_content().contact.as_str())
        .style(Style::default().fg(theme.color_subtext()))
        .render(page.contact_text, buf);

    let focused = app.form.focused();
    for (area, field) in page.fields.iter().zip(Field::ALL) {
        contact_field::render(buf, *area, theme, field, app.form.value(field), focused == Some(field));
    }

    Paragraph::new("[ Send ]")
        .style(
            Style::default()
                .fg(theme.color_base())
                .bg(theme.color_accent())
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .render(page.send, buf);
}
