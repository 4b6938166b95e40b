use serde::Deserialize;
use std::sync::OnceLock;

/// Static copy shown on the page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub tagline: String,
    pub about: Vec<String>,
    pub contact: String,
    pub footer: String,
}

pub fn page_content() -> &'static PageContent {
    static CONTENT: OnceLock<PageContent> = OnceLock::new();
    CONTENT.get_or_init(|| {
        let raw = include_str!("../../content/page.toml");
        toml::from_str(raw).unwrap_or_else(|e| {
            log::warn!("bundled page content is malformed: {e}");
            PageContent::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let c = page_content();
        assert!(!c.tagline.is_empty());
        assert!(!c.about.is_empty());
    }
}
