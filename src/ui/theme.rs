use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Ansi256,
    NoColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    System,
    Carnaval,
    Latte,
    Mocha,
}

impl ThemeName {
    pub fn from_str_or_system(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "carnaval" => Self::Carnaval,
            "latte" => Self::Latte,
            "mocha" => Self::Mocha,
            _ => Self::System,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ThemeName::System => "system.toml",
            ThemeName::Carnaval => "carnaval.toml",
            ThemeName::Latte => "catppuccin_latte.toml",
            ThemeName::Mocha => "catppuccin_mocha.toml",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemePalette {
    pub text: (u8, u8, u8),
    pub subtext: (u8, u8, u8),
    pub base: (u8, u8, u8),
    pub surface: (u8, u8, u8),
    pub accent: (u8, u8, u8),
    pub accent2: (u8, u8, u8),
    pub accent3: (u8, u8, u8),
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: ThemeName,
    pub palette: ThemePalette,
    pub capability: ColorCapability,
}

impl Theme {
    /// Built-in palette for when no theme file can be read.
    pub fn fallback() -> Self {
        Self {
            name: ThemeName::System,
            palette: ThemePalette {
                text: (0xee, 0xe8, 0xd5),
                subtext: (0x93, 0xa1, 0xa1),
                base: (0x1c, 0x1b, 0x22),
                surface: (0x2a, 0x28, 0x33),
                accent: (0xf2, 0x9e, 0x38),
                accent2: (0xe0, 0x4f, 0x5f),
                accent3: (0x5f, 0xc9, 0xa8),
            },
            capability: detect_color_capability(),
        }
    }

    pub fn color_text(&self) -> Color {
        map_color(self.capability, self.palette.text)
    }
    pub fn color_subtext(&self) -> Color {
        map_color(self.capability, self.palette.subtext)
    }
    pub fn color_base(&self) -> Color {
        map_color(self.capability, self.palette.base)
    }
    pub fn color_surface(&self) -> Color {
        map_color(self.capability, self.palette.surface)
    }
    pub fn color_accent(&self) -> Color {
        map_color(self.capability, self.palette.accent)
    }
    pub fn color_accent2(&self) -> Color {
        map_color(self.capability, self.palette.accent2)
    }
    pub fn color_accent3(&self) -> Color {
        map_color(self.capability, self.palette.accent3)
    }
}

pub fn detect_color_capability() -> ColorCapability {
    let colorterm = std::env::var("COLORTERM").unwrap_or_default().to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        return ColorCapability::Ansi256;
    }

    ColorCapability::NoColor
}

fn map_color(cap: ColorCapability, t: (u8, u8, u8)) -> Color {
    match cap {
        ColorCapability::TrueColor => Color::Rgb(t.0, t.1, t.2),
        ColorCapability::Ansi256 => Color::Indexed(rgb_to_ansi256(t.0, t.1, t.2)),
        ColorCapability::NoColor => Color::Reset,
    }
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    // 6x6x6 color cube, 16..231
    let r6 = (r as u16 * 5 / 255) as u8;
    let g6 = (g as u16 * 5 / 255) as u8;
    let b6 = (b as u16 * 5 / 255) as u8;
    16 + 36 * r6 + 6 * g6 + b6
}
