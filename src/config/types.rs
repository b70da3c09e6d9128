use serde::{Deserialize, Serialize};

use crate::quotes::{AccentColor, Palette, DEFAULT_PALETTE};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Where quotes come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the JSON quote list.
    #[serde(default = "default_source_url")]
    pub url: String,
    /// Give up on the request after this many seconds. Unset waits forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

/// Accent colors for the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Colors the selector draws from, as `#rrggbb`.
    #[serde(default = "default_palette")]
    pub palette: Vec<AccentColor>,
    /// Color shown before the first quote arrives.
    #[serde(default)]
    pub initial_color: AccentColor,
}

impl ThemeConfig {
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.clone())
    }
}

pub fn default_source_url() -> String {
    "https://gist.githubusercontent.com/camperbot/5a022b72e96c4c9585c32bf6a75f62d9/raw/e3c6895ce42069f0ee7e991229064f167fe8ccdc/quotes.json".to_string()
}

fn default_palette() -> Vec<AccentColor> {
    DEFAULT_PALETTE.iter().copied().map(AccentColor::from).collect()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            initial_color: AccentColor::default(),
        }
    }
}
