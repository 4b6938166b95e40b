pub mod assets;
pub mod config;
pub mod content;
pub mod theme_loader;
