use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from slides.toml (every section optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlidesConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Folder holding the manifest and the `<uid>.json` item files
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Catalogue file name inside `folder`
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            folder: default_folder(),
            manifest: default_manifest(),
        }
    }
}

fn default_folder() -> String {
    "db".to_string()
}

fn default_manifest() -> String {
    "manifest.json".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start in the high-contrast (dark) theme
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Light theme overrides, `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Dark theme overrides
    #[serde(default)]
    pub dark_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            dark_mode: false,
            show_key_hints: true,
            colors: HashMap::new(),
            dark_colors: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config: SlidesConfig = toml::from_str("").unwrap();
        assert_eq!(config.content.folder, "db");
        assert_eq!(config.content.manifest, "manifest.json");
        assert!(!config.ui.dark_mode);
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: SlidesConfig = toml::from_str(
            r##"
[content]
folder = "texts"

[ui]
dark_mode = true

[ui.dark_colors]
background = "#000000"
"##,
        )
        .unwrap();
        assert_eq!(config.content.folder, "texts");
        assert_eq!(config.content.manifest, "manifest.json");
        assert!(config.ui.dark_mode);
        assert!(config.ui.show_key_hints);
        assert_eq!(
            config.ui.dark_colors.get("background").map(String::as_str),
            Some("#000000")
        );
    }
}
