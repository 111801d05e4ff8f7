use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    /// Annotation block above the text
    pub meta: Color,
    /// Primary-script block
    pub primary: Color,
    /// Secondary-script block
    pub secondary: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFB, 0xF7, 0xEE),
            text: Color::Rgb(0x3A, 0x34, 0x2C),
            text_bright: Color::Rgb(0x12, 0x0E, 0x08),
            highlight: Color::Rgb(0x1F, 0x6F, 0x5C),
            dim: Color::Rgb(0x9A, 0x91, 0x84),
            meta: Color::Rgb(0x8A, 0x5A, 0x1E),
            primary: Color::Rgb(0x12, 0x0E, 0x08),
            secondary: Color::Rgb(0x4A, 0x55, 0x6B),
            selection_bg: Color::Rgb(0xE6, 0xDF, 0xCF),
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            meta: Color::Rgb(0xFF, 0xD7, 0x00),
            primary: Color::Rgb(0xFF, 0xFF, 0xFF),
            secondary: Color::Rgb(0x44, 0xDD, 0xFF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
        }
    }

    /// The light or dark theme with the matching `[ui]` overrides applied
    pub fn from_config(ui: &UiConfig, dark: bool) -> Self {
        if dark {
            Theme::dark().with_overrides(&ui.dark_colors)
        } else {
            Theme::light().with_overrides(&ui.colors)
        }
    }

    fn with_overrides(mut self, colors: &HashMap<String, String>) -> Self {
        for (key, value) in colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => self.background = color,
                    "text" => self.text = color,
                    "text_bright" => self.text_bright = color,
                    "highlight" => self.highlight = color,
                    "dim" => self.dim = color,
                    "meta" => self.meta = color,
                    "primary" => self.primary = color,
                    "secondary" => self.secondary = color,
                    "selection_bg" => self.selection_bg = color,
                    _ => {}
                }
            }
        }
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
