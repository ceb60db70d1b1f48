//! Per-session settings
//!
//! Read from the page URL query string (`?style=stick&seed=42&fps=1`).
//! Nothing is persisted between sessions.

use serde::{Deserialize, Serialize};

/// How the character is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CharacterStyle {
    /// Solid rectangle filling the bounding box
    #[default]
    Block,
    /// Articulated stick figure inside the bounding box
    StickFigure,
}

impl CharacterStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterStyle::Block => "block",
            CharacterStyle::StickFigure => "stick",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "block" | "rect" | "box" => Some(CharacterStyle::Block),
            "stick" | "stickfigure" | "figure" => Some(CharacterStyle::StickFigure),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    pub style: CharacterStyle,
    /// Fixed level seed (random per session when unset)
    pub seed: Option<u64>,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Settings {
    /// Parse settings from a URL query string, with or without the leading `?`
    ///
    /// Unknown keys and malformed values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "style" => match CharacterStyle::from_str(value) {
                    Some(style) => settings.style = style,
                    None => log::warn!("Unknown character style: {}", value),
                },
                "seed" => match value.parse() {
                    Ok(seed) => settings.seed = Some(seed),
                    Err(_) => log::warn!("Ignoring invalid seed: {}", value),
                },
                "fps" => settings.show_fps = matches!(value, "" | "1" | "true" | "on"),
                _ => {}
            }
        }

        settings
    }

    /// Seed to use for this session
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let settings = Self::from_query(&search);
        log::info!("Settings: {:?}", settings);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::from_query("");
        assert_eq!(s, Settings::default());
        assert_eq!(s.style, CharacterStyle::Block);
        assert_eq!(s.seed_or(5), 5);
    }

    #[test]
    fn test_full_query() {
        let s = Settings::from_query("?style=stick&seed=42&fps=1");
        assert_eq!(s.style, CharacterStyle::StickFigure);
        assert_eq!(s.seed, Some(42));
        assert!(s.show_fps);
        assert_eq!(s.seed_or(5), 42);
    }

    #[test]
    fn test_bare_flag_and_bad_values() {
        let s = Settings::from_query("fps&seed=abc&style=hexagon&other=1");
        assert!(s.show_fps);
        assert_eq!(s.seed, None);
        assert_eq!(s.style, CharacterStyle::Block);
    }

    #[test]
    fn test_style_round_trip_names() {
        for style in [CharacterStyle::Block, CharacterStyle::StickFigure] {
            assert_eq!(CharacterStyle::from_str(style.as_str()), Some(style));
        }
    }
}
