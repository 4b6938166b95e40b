use crate::ui::theme::Theme;
use crate::ui::tui::UiLayout;
use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};

pub fn render(buf: &mut Buffer, layout: &UiLayout, brand: &str, scrolled: bool, theme: &Theme) {
    let (bar, brand_fg, link_fg) = if scrolled {
        (Style::default().bg(theme.color_accent()), theme.color_base(), theme.color_base())
    } else {
        (Style::default().bg(theme.color_base()), theme.color_accent(), theme.color_text())
    };
    buf.set_style(layout.navbar, bar);

    buf.set_stringn(
        layout.brand.x,
        layout.brand.y,
        brand,
        layout.brand.width as usize,
        bar.fg(brand_fg).add_modifier(Modifier::BOLD),
    );

    for (section, r) in layout.links {
        buf.set_stringn(
            r.x,
            r.y,
            format!(" {} ", section.label()),
            r.width as usize,
            bar.fg(link_fg),
        );
    }
}
