use crate::data::assets;
use crate::ui::theme::{detect_color_capability, Theme, ThemeName, ThemePalette};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub struct ThemeLoader;

#[derive(Debug, Deserialize)]
struct ThemeToml {
    text: String,
    subtext: String,
    base: String,
    surface: String,
    accent: String,
    accent2: String,
    accent3: String,
}

impl ThemeLoader {
    pub fn load(name: &str) -> Result<Theme> {
        let name = ThemeName::from_str_or_system(name);
        let file = name.file_name();

        let path = assets::resolve_asset_path(&Path::new("themes").join(file));
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("theme {} unreadable ({e}); using bundled copy", path.display());
                assets::bundled_theme(file)
                    .with_context(|| format!("no bundled theme {file}"))?
                    .to_string()
            }
        };
        let palette = parse_palette(&raw).with_context(|| format!("parse theme {file}"))?;
        Ok(Theme {
            name,
            palette,
            capability: detect_color_capability(),
        })
    }
}

fn parse_palette(raw: &str) -> Result<ThemePalette> {
    let t: ThemeToml = toml::from_str(raw)?;
    Ok(ThemePalette {
        text: parse_hex(&t.text),
        subtext: parse_hex(&t.subtext),
        base: parse_hex(&t.base),
        surface: parse_hex(&t.surface),
        accent: parse_hex(&t.accent),
        accent2: parse_hex(&t.accent2),
        accent3: parse_hex(&t.accent3),
    })
}

fn parse_hex(s: &str) -> (u8, u8, u8) {
    let s = s.trim_start_matches('#');
    let channel = |i: usize| {
        s.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(255)
    };
    (channel(0), channel(2), channel(4))
}
