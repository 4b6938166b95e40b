/// Sticky top bar. Switches to its "scrolled" look once the page has moved
/// past `threshold` rows.
#[derive(Debug, Clone)]
pub struct Navbar {
    threshold: u16,
    scrolled: bool,
}

impl Navbar {
    pub fn new(threshold: u16) -> Self {
        Self { threshold, scrolled: false }
    }

    pub fn on_scroll(&mut self, offset: f32) {
        self.scrolled = offset > self.threshold as f32;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}
