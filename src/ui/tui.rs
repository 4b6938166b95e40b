use crate::app::state::AppState;
use crate::control::ratio::TrackBounds;
use crate::data::content::page_content;
use crate::page::contact::Field;
use crate::page::{content_height, Section, FOOTER_HEIGHT, SECTIONS};
use crate::playback::MediaBackend;
use crate::ui::components::navbar;
use crate::ui::panels::{about_panel, contact_panel, hero_panel, player_panel};
use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use unicode_width::UnicodeWidthStr;

pub const MIN_WIDTH: u16 = 50;
pub const MIN_HEIGHT: u16 = 12;

/// Rects of everything clickable on the page, in page coordinates
/// (row 0 is the top of the Home section, columns match the terminal).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub cover: Rect,
    pub hero_text: Rect,

    pub card: Rect,
    pub now_playing: Rect,
    pub time_line: Rect,
    pub progress: Rect,
    /// Previous, play/pause, next, replay.
    pub controls: [Rect; 4],
    pub volume_icon: Rect,
    pub volume: Rect,

    pub about: Rect,

    pub contact_text: Rect,
    pub fields: [Rect; 3],
    pub send: Rect,

    pub footer: Rect,
}

const CONTROL_WIDTH: u16 = 5;

/// Width of the offscreen page. A ratatui buffer holds at most `u16::MAX`
/// cells, so very wide terminals get a page narrower than the screen.
pub fn page_width(width: u16) -> u16 {
    width.min(u16::MAX / content_height())
}

impl PageLayout {
    pub fn compute(width: u16) -> Self {
        let x = 2;
        let w = width.saturating_sub(4);

        let home = Section::Home.top();
        let cover_w = (w / 2).min(28);
        let cover = Rect::new(x, home + 1, cover_w, 12);
        let hero_text = Rect::new(
            x + cover_w + 2,
            home + 4,
            w.saturating_sub(cover_w + 2),
            6,
        );

        let music = Section::Music.top();
        let card = Rect::new(x, music + 2, w, 9);
        // border plus one column of padding on each side
        let cx = x + 2;
        let cw = w.saturating_sub(4);
        let now_playing = Rect::new(cx, music + 3, cw, 1);
        let time_line = Rect::new(cx, music + 5, cw, 1);
        let progress = Rect::new(cx, music + 6, cw, 1);

        let row = music + 8;
        let mut controls = [Rect::default(); 4];
        for (i, r) in controls.iter_mut().enumerate() {
            *r = Rect::new(cx + i as u16 * CONTROL_WIDTH, row, CONTROL_WIDTH, 1);
        }
        let vol_w = (cw / 3).clamp(6, 20);
        let volume = Rect::new((cx + cw).saturating_sub(vol_w), row, vol_w, 1);
        let volume_icon = Rect::new(volume.x.saturating_sub(3), row, 2, 1);

        let about = Rect::new(x, Section::About.top() + 3, w, 7);

        let contact = Section::Contact.top();
        let contact_text = Rect::new(x, contact + 3, w, 1);
        let form_w = w.min(60);
        let fields = [
            Rect::new(x, contact + 5, form_w, 3),
            Rect::new(x, contact + 8, form_w, 3),
            Rect::new(x, contact + 11, form_w, 4),
        ];
        let send = Rect::new(x, contact + 15, 10, 1);

        let footer = Rect::new(0, content_height() - FOOTER_HEIGHT + 1, width, 1);

        Self {
            cover,
            hero_text,
            card,
            now_playing,
            time_line,
            progress,
            controls,
            volume_icon,
            volume,
            about,
            contact_text,
            fields,
            send,
            footer,
        }
    }

    /// What sits under a page cell.
    pub fn hit(&self, col: u16, row: u16) -> Option<Hit> {
        const CONTROL_HITS: [Hit; 4] = [Hit::Prev, Hit::PlayPause, Hit::Next, Hit::Replay];

        if contains(self.progress, col, row) {
            return Some(Hit::ProgressTrack);
        }
        for (r, hit) in self.controls.iter().zip(CONTROL_HITS) {
            if contains(*r, col, row) {
                return Some(hit);
            }
        }
        if contains(self.volume_icon, col, row) {
            return Some(Hit::VolumeIcon);
        }
        if contains(self.volume, col, row) {
            return Some(Hit::VolumeTrack);
        }
        for (r, field) in self.fields.iter().zip(Field::ALL) {
            if contains(*r, col, row) {
                return Some(Hit::Field(field));
            }
        }
        if contains(self.send, col, row) {
            return Some(Hit::Send);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Brand,
    Link(Section),
    Prev,
    PlayPause,
    Next,
    Replay,
    ProgressTrack,
    VolumeIcon,
    VolumeTrack,
    Field(Field),
    Send,
}

/// Screen geometry of the last drawn frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UiLayout {
    pub navbar: Rect,
    pub brand: Rect,
    pub links: [(Section, Rect); 4],
    pub body: Rect,
    /// Page row shown at the top of `body`.
    pub offset: u16,
    pub page: PageLayout,
}

impl UiLayout {
    pub fn compute(size: Rect, brand_label: &str, offset: u16) -> Self {
        let navbar = Rect::new(size.x, size.y, size.width, 1);
        let body = Rect::new(size.x, size.y + 1, size.width, size.height.saturating_sub(1));

        let total: u16 = SECTIONS
            .iter()
            .map(|s| s.label().width() as u16 + 3)
            .sum();
        let mut x = (navbar.x + navbar.width).saturating_sub(total + 1);
        let mut links = [(Section::Home, Rect::default()); 4];
        for (slot, section) in links.iter_mut().zip(SECTIONS) {
            let w = section.label().width() as u16 + 2;
            *slot = (section, Rect::new(x, navbar.y, w, 1));
            x += w + 1;
        }

        // the brand never reaches into the links
        let brand_x = navbar.x + 2;
        let brand = Rect::new(
            brand_x,
            navbar.y,
            (brand_label.width() as u16).min(links[0].1.x.saturating_sub(brand_x + 1)),
            1,
        );

        Self {
            navbar,
            brand,
            links,
            body,
            offset,
            page: PageLayout::compute(page_width(size.width)),
        }
    }

    /// Screen row to page row, `None` outside the scrolling body.
    pub fn page_row(&self, row: u16) -> Option<u16> {
        if row < self.body.y || row >= self.body.y + self.body.height {
            return None;
        }
        Some(row - self.body.y + self.offset)
    }
}

pub fn hit_test(layout: &UiLayout, col: u16, row: u16) -> Option<Hit> {
    if contains(layout.navbar, col, row) {
        if contains(layout.brand, col, row) {
            return Some(Hit::Brand);
        }
        return layout
            .links
            .iter()
            .find(|(_, r)| contains(*r, col, row))
            .map(|(section, _)| Hit::Link(*section));
    }

    let page_row = layout.page_row(row)?;
    layout.page.hit(col, page_row)
}

/// Extent of a slider for pointer mapping. The last column is the 100% end.
pub fn track_bounds(r: Rect) -> TrackBounds {
    TrackBounds {
        left: r.x as f32,
        width: r.width.saturating_sub(1) as f32,
    }
}

/// Title row of a section, one row below its top.
pub fn section_heading(buf: &mut Buffer, section: Section, theme: &crate::ui::theme::Theme) {
    let y = section.top() + 1;
    buf.set_string(
        2,
        y,
        section.label(),
        Style::default()
            .fg(theme.color_accent())
            .add_modifier(ratatui::style::Modifier::BOLD),
    );
}

fn contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, event::EnableMouseCapture)?;
        self.terminal.hide_cursor()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(io::stdout(), event::DisableMouseCapture, LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn draw<M: MediaBackend>(&mut self, app: &mut AppState<M>) -> Result<UiLayout> {
        let mut layout_out = UiLayout::default();
        self.terminal.draw(|f| layout_out = draw_frame(f, app))?;
        Ok(layout_out)
    }
}

fn draw_frame<M: MediaBackend>(f: &mut Frame, app: &mut AppState<M>) -> UiLayout {
    let size = f.size();
    let base_style = Style::default()
        .fg(app.theme.color_text())
        .bg(app.theme.color_base());

    f.render_widget(Clear, size);
    f.render_widget(Block::default().style(base_style), size);

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        f.render_widget(
            Paragraph::new("Terminal too small")
                .style(Style::default().fg(app.theme.color_subtext())),
            size,
        );
        return UiLayout::default();
    }

    let body_h = size.height.saturating_sub(1);
    app.scroll.set_viewport(body_h);
    let brand = app.player.track().artist.clone();
    let layout = UiLayout::compute(size, &brand, app.scroll.offset_rows());

    // The whole page is drawn offscreen, then the visible slice is
    // copied below the navbar.
    let mut page = Buffer::empty(Rect::new(0, 0, page_width(size.width), content_height()));
    page.set_style(page.area, base_style);
    hero_panel::render(&mut page, &layout.page, app);
    player_panel::render(&mut page, &layout.page, app);
    about_panel::render(&mut page, &layout.page, app);
    contact_panel::render(&mut page, &layout.page, app);
    Paragraph::new(page_content().footer.as_str())
        .style(Style::default().fg(app.theme.color_subtext()))
        .alignment(Alignment::Center)
        .render(layout.page.footer, &mut page);

    blit(&page, f.buffer_mut(), layout.body, layout.offset);

    navbar::render(f.buffer_mut(), &layout, &brand, app.navbar.is_scrolled(), &app.theme);

    if let Some(msg) = app.notification.message() {
        let w = (msg.width() as u16 + 4).min(size.width);
        let area = Rect::new(
            size.x + (size.width - w) / 2,
            (size.y + size.height).saturating_sub(5),
            w,
            3,
        );
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(msg)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(app.theme.color_text())
                        .bg(app.theme.color_surface()),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_set(crate::ui::borders::CARD_BORDER)
                        .border_style(Style::default().fg(app.theme.color_accent3())),
                ),
            area,
        );
    }

    if let Some(msg) = app.toast.message() {
        let area = Rect::new(size.x, size.y + size.height - 1, size.width, 1);
        f.render_widget(
            Paragraph::new(msg).style(
                Style::default()
                    .fg(app.theme.color_accent3())
                    .bg(app.theme.color_surface()),
            ),
            area,
        );
    }

    layout
}

/// Copy page rows `offset..offset + body.height` into `body`.
fn blit(page: &Buffer, screen: &mut Buffer, body: Rect, offset: u16) {
    let cols = body.width.min(page.area.width);
    for dy in 0..body.height {
        let src_y = offset + dy;
        if src_y >= page.area.height {
            break;
        }
        for x in 0..cols {
            *screen.get_mut(body.x + x, body.y + dy) = page.get(x, src_y).clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u16, height: u16, offset: u16) -> UiLayout {
        UiLayout::compute(Rect::new(0, 0, width, height), "SntgRM", offset)
    }

    #[test]
    fn page_rects_stay_inside_their_sections() {
        let p = PageLayout::compute(80);
        let music = Section::Music.top()..Section::About.top();
        for r in [p.now_playing, p.time_line, p.progress, p.volume, p.volume_icon] {
            assert!(music.contains(&r.y), "{r:?}");
        }
        let contact = Section::Contact.top()..Section::Contact.top() + Section::Contact.height();
        for r in p.fields {
            assert!(contact.contains(&r.y) && contact.contains(&(r.y + r.height - 1)));
        }
        assert!(p.footer.y < content_height());
    }

    #[test]
    fn volume_does_not_overlap_controls_at_min_width() {
        let p = PageLayout::compute(MIN_WIDTH);
        let controls_end = p.controls[3].x + p.controls[3].width;
        assert!(p.volume_icon.x >= controls_end);
        assert!(p.volume.x > p.volume_icon.x + p.volume_icon.width - 1);
    }

    #[test]
    fn navbar_hits() {
        let l = layout(80, 24, 0);
        assert_eq!(hit_test(&l, l.brand.x, 0), Some(Hit::Brand));
        let (section, r) = l.links[2];
        assert_eq!(hit_test(&l, r.x + 1, 0), Some(Hit::Link(section)));
        assert_eq!(section, Section::About);
    }

    #[test]
    fn body_hits_account_for_scroll() {
        let top = layout(80, 24, 0);
        let track = top.page.progress;

        // scrolled so the Music section starts right under the navbar
        let offset = Section::Music.top();
        let scrolled = layout(80, 24, offset);
        let screen_row = track.y - offset + scrolled.body.y;
        assert_eq!(hit_test(&scrolled, track.x + 3, screen_row), Some(Hit::ProgressTrack));

        // same screen row at offset 0 is somewhere in the hero
        assert_eq!(hit_test(&top, track.x + 3, screen_row), None);
    }

    #[test]
    fn controls_and_fields_resolve() {
        let l = layout(80, 80, 0);
        let p = l.page;
        let at = |r: Rect| hit_test(&l, r.x, r.y + l.body.y);
        assert_eq!(at(p.controls[0]), Some(Hit::Prev));
        assert_eq!(at(p.controls[1]), Some(Hit::PlayPause));
        assert_eq!(at(p.controls[3]), Some(Hit::Replay));
        assert_eq!(at(p.volume_icon), Some(Hit::VolumeIcon));
        assert_eq!(at(p.volume), Some(Hit::VolumeTrack));
        assert_eq!(at(p.fields[1]), Some(Hit::Field(Field::Email)));
        assert_eq!(at(p.send), Some(Hit::Send));
    }

    #[test]
    fn page_row_outside_body_is_none() {
        let l = layout(80, 24, 5);
        assert_eq!(l.page_row(0), None);
        assert_eq!(l.page_row(1), Some(5));
        assert_eq!(l.page_row(24), None);
    }

    #[test]
    fn long_brand_stops_before_the_links() {
        let l = UiLayout::compute(Rect::new(0, 0, 80, 24), &"SntgRM ".repeat(20), 0);
        let (home, r) = l.links[0];
        assert_eq!(home, Section::Home);
        assert!(l.brand.x + l.brand.width < r.x);
        assert_eq!(hit_test(&l, r.x, 0), Some(Hit::Link(Section::Home)));
        assert_eq!(hit_test(&l, r.x + 1, 0), Some(Hit::Link(Section::Home)));
        assert_eq!(hit_test(&l, l.brand.x, 0), Some(Hit::Brand));
    }

    #[test]
    fn page_width_fits_one_buffer() {
        assert_eq!(page_width(80), 80);
        let w = page_width(u16::MAX);
        assert!(w as u32 * content_height() as u32 <= u16::MAX as u32);
        assert_eq!(page_width(1200), w);
    }

    #[test]
    fn very_wide_terminal_draws() {
        use crate::data::config::Config;
        use crate::playback::fake::FakeMedia;
        use crate::ui::theme::Theme;
        use ratatui::backend::TestBackend;

        let mut app = AppState::new(Config::default(), Theme::fallback(), FakeMedia::with_duration(60));
        app.start();
        let mut terminal = Terminal::new(TestBackend::new(1200, 40)).unwrap();

        let mut layout = UiLayout::default();
        terminal.draw(|f| layout = draw_frame(f, &mut app)).unwrap();

        assert!(layout.page.footer.width <= page_width(1200));
        assert_eq!(layout.navbar.width, 1200);
        let (_, home) = layout.links[0];
        assert_eq!(hit_test(&layout, home.x + 1, 0), Some(Hit::Link(Section::Home)));
    }

    #[test]
    fn track_bounds_use_last_column_as_end() {
        let b = track_bounds(Rect::new(10, 3, 21, 1));
        assert_eq!(b, TrackBounds { left: 10.0, width: 20.0 });
        assert_eq!(track_bounds(Rect::new(4, 0, 0, 1)).width, 0.0);
    }
}
