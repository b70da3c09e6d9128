use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reference accent palette, `0xRRGGBB`.
pub const DEFAULT_PALETTE: [u32; 12] = [
    0x16a085, 0x27ae60, 0x2c3e50, 0xf39c12, 0xe74c3c, 0x9b59b6, 0xfb6964, 0x342224, 0x472e32,
    0xbdbb99, 0x77b1a9, 0x73a857,
];

pub const DEFAULT_INITIAL_COLOR: u32 = 0x16a085;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color '{input}': expected #rrggbb")]
pub struct ColorParseError {
    pub input: String,
}

/// Color used to theme the widget. Compared by RGB value, so `#FB6964`
/// and `#fb6964` are the same color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        DEFAULT_INITIAL_COLOR.into()
    }
}

impl From<u32> for AccentColor {
    fn from(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl From<AccentColor> for ratatui::style::Color {
    fn from(color: AccentColor) -> Self {
        ratatui::style::Color::Rgb(color.r, color.g, color.b)
    }
}

impl FromStr for AccentColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        u32::from_str_radix(hex, 16)
            .map(AccentColor::from)
            .map_err(|_| err())
    }
}

impl TryFrom<String> for AccentColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fixed, ordered set of accent colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<AccentColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.iter().copied().map(AccentColor::from).collect())
    }
}

impl Palette {
    pub fn new(colors: Vec<AccentColor>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[AccentColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Draw a color uniformly from the entries that differ from `current`.
    ///
    /// Returns `current` unchanged when the palette offers no alternative
    /// (empty, a single entry, or every entry equal to `current`).
    pub fn pick_other<R: Rng + ?Sized>(&self, current: AccentColor, rng: &mut R) -> AccentColor {
        let candidates: Vec<AccentColor> = self
            .colors
            .iter()
            .copied()
            .filter(|color| *color != current)
            .collect();
        if candidates.is_empty() {
            return current;
        }
        candidates[rng.gen_range(0..candidates.len())]
    }
}
