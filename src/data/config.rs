use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub ui_fps: u32,
    pub track: TrackConfig,
    pub player: PlayerConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub title: String,
    pub artist: String,
    pub src: PathBuf,
    pub cover: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub initial_volume: f32,
    pub unmute_fallback: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Rows scrolled before the navbar switches to its "scrolled" look.
    pub navbar_scroll_threshold: u16,
    pub smooth_scroll_ms: u64,
    pub notification_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "carnaval".to_string(),
            ui_fps: 30,
            track: TrackConfig::default(),
            player: PlayerConfig::default(),
            page: PageConfig::default(),
        }
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            title: "El Carnaval".to_string(),
            artist: "SntgRM".to_string(),
            src: PathBuf::from("mp3/song.mp3"),
            cover: PathBuf::from("images/cover-art.webp"),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 0.5,
            unmute_fallback: crate::control::mute::DEFAULT_UNMUTE_LEVEL,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 2,
            smooth_scroll_ms: 450,
            notification_ms: 3000,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file gives the defaults. A file that does not parse is
    /// reported and ignored.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => crate::data::assets::resolve_config_path(),
        };
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        let mut cfg = match toml::from_str::<Config>(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            }
        };
        if let Some(dir) = path.parent() {
            cfg.track.src = resolve_media_path(dir, &cfg.track.src);
            cfg.track.cover = resolve_media_path(dir, &cfg.track.cover);
        }
        Ok(cfg.sanitized())
    }

    fn sanitized(mut self) -> Self {
        let defaults = PlayerConfig::default();
        self.ui_fps = self.ui_fps.clamp(15, 60);
        self.player.initial_volume = unit_level(self.player.initial_volume, defaults.initial_volume);
        self.player.unmute_fallback = unit_level(self.player.unmute_fallback, defaults.unmute_fallback);
        self
    }
}

/// Clamp a level to `[0, 1]`. `clamp` lets NaN through, so non-finite
/// values take `default`.
fn unit_level(v: f32, default: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        default
    }
}

/// Relative media paths are looked up in the working directory first, then
/// next to the config file.
fn resolve_media_path(config_dir: &Path, rel: &Path) -> PathBuf {
    if rel.is_absolute() || rel.exists() {
        return rel.to_path_buf();
    }
    let beside = config_dir.join(rel);
    if beside.exists() {
        beside
    } else {
        rel.to_path_buf()
    }
}
