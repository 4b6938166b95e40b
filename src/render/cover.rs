use image::imageops::FilterType;
use std::path::Path;

pub const COVER_CHARSET: &str = " ░▒▓█";

/// Render image bytes as `height` lines of `width` shade characters.
///
/// Each character covers two source rows, roughly matching the aspect of a
/// terminal cell.
pub fn render_cover_ascii(image_bytes: &[u8], width: u16, height: u16) -> Option<String> {
    if width == 0 || height == 0 {
        return None;
    }
    let img = image::load_from_memory(image_bytes).ok()?;
    let target_h = (height as u32).saturating_mul(2);
    let gray = img
        .resize_exact(width as u32, target_h, FilterType::Triangle)
        .to_luma8();

    let charset: Vec<char> = COVER_CHARSET.chars().collect();
    let mut out = String::with_capacity((width as usize + 1) * height as usize * 3);
    for y in (0..target_h).step_by(2) {
        for x in 0..width as u32 {
            let pixel = gray.get_pixel(x, y)[0];
            let idx = (pixel as usize * (charset.len() - 1)) / 255;
            out.push(charset[idx]);
        }
        out.push('\n');
    }
    Some(out)
}

/// Cover image of the track, rendered lazily for the size it is shown at.
#[derive(Debug, Default)]
pub struct CoverArt {
    bytes: Option<Vec<u8>>,
    rendered: Option<((u16, u16), Option<String>)>,
}

impl CoverArt {
    pub fn load(path: &Path) -> Self {
        let bytes = match std::fs::read(path) {
            Ok(b) => Some(b),
            Err(e) => {
                log::warn!("cover {} unavailable: {e}", path.display());
                None
            }
        };
        Self { bytes, rendered: None }
    }

    /// `None` when there is no decodable image.
    pub fn ascii(&mut self, width: u16, height: u16) -> Option<&str> {
        let size = (width, height);
        let stale = self.rendered.as_ref().map_or(true, |(s, _)| *s != size);
        if stale {
            let art = self
                .bytes
                .as_deref()
                .and_then(|b| render_cover_ascii(b, width, height));
            self.rendered = Some((size, art));
        }
        self.rendered.as_ref().and_then(|(_, art)| art.as_deref())
    }
}
