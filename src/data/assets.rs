use anyhow::{Context, Result};
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_ASSET_DIR: &str = "CARNAVAL_PAGE_ASSET_DIR";
const APP_DIR: &str = "carnaval-page";

const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/page.toml");

const THEMES: &[(&str, &str)] = &[
    ("system.toml", include_str!("../../themes/system.toml")),
    ("carnaval.toml", include_str!("../../themes/carnaval.toml")),
    ("catppuccin_latte.toml", include_str!("../../themes/catppuccin_latte.toml")),
    ("catppuccin_mocha.toml", include_str!("../../themes/catppuccin_mocha.toml")),
];

/// Directory holding `config/` and `themes/`.
///
/// `$CARNAVAL_PAGE_ASSET_DIR` wins, then the OS config dir
/// (e.g. `~/.config/carnaval-page`), then `./.config`.
pub fn resolve_asset_root() -> PathBuf {
    if let Some(p) = std::env::var_os(ENV_ASSET_DIR) {
        return PathBuf::from(p);
    }
    BaseDirs::new()
        .map(|d| d.config_dir().join(APP_DIR))
        .unwrap_or_else(local_config_root)
}

pub fn resolve_asset_path(rel: &Path) -> PathBuf {
    resolve_asset_root().join(rel)
}

pub fn resolve_config_path() -> PathBuf {
    resolve_asset_path(Path::new("config/page.toml"))
}

/// Write the bundled config and themes into the asset root, never
/// overwriting files the user already has.
pub fn ensure_assets_ready() -> Result<PathBuf> {
    let root = resolve_asset_root();
    write_if_missing(&root.join("config/page.toml"), DEFAULT_CONFIG_TOML)?;
    for (name, contents) in THEMES {
        write_if_missing(&root.join("themes").join(name), contents)?;
    }
    Ok(root)
}

/// Bundled copy of a theme file, used when the on-disk one is unreadable.
pub fn bundled_theme(file_name: &str) -> Option<&'static str> {
    THEMES
        .iter()
        .find(|(name, _)| *name == file_name)
        .map(|(_, contents)| *contents)
}

fn local_config_root() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".config")
}

fn write_if_missing(path: &Path, contents: &str) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("mkdir {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
