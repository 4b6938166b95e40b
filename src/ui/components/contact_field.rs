use crate::page::contact::Field;
use crate::ui::borders::CARD_BORDER;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, field: Field, value: &str, focused: bool) {
    let border = if focused { theme.color_accent() } else { theme.color_subtext() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(CARD_BORDER)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", field.label()));

    let text = if focused { format!("{value}▏") } else { value.to_string() };
    let mut p = Paragraph::new(text)
        .style(Style::default().fg(theme.color_text()))
        .block(block);
    if field == Field::Message {
        p = p.wrap(Wrap { trim: false });
    }
    p.render(area, buf);
}
