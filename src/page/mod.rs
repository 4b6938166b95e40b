pub mod contact;
pub mod navbar;
pub mod notification;
pub mod scroll;

/// Anchored sections of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Music,
    About,
    Contact,
}

pub const SECTIONS: [Section; 4] = [Section::Home, Section::Music, Section::About, Section::Contact];

/// Rows below the last section.
pub const FOOTER_HEIGHT: u16 = 2;

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Music => "Music",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    pub fn height(self) -> u16 {
        match self {
            Section::Home => 14,
            Section::Music => 12,
            Section::About => 11,
            Section::Contact => 17,
        }
    }

    /// First row of the section in page coordinates.
    pub fn top(self) -> u16 {
        SECTIONS
            .iter()
            .take_while(|s| **s != self)
            .map(|s| s.height())
            .sum()
    }
}

pub fn content_height() -> u16 {
    SECTIONS.iter().map(|s| s.height()).sum::<u16>() + FOOTER_HEIGHT
}
