//! Colours: the 8-entry cell palette and UI colours, hex → ratatui Color.

use ratatui::style::Color;
use thiserror::Error;

/// Cell palette, index 0 is the board background, 1..=7 the piece kinds.
pub const CELL_HEX: [&str; 8] = [
    "#000000", // background
    "#FFD700", // I
    "#DC143C", // S
    "#00CED1", // Z
    "#FF8C00", // J
    "#8A2BE2", // L
    "#20B2AA", // O
    "#FF69B4", // T
];

const OUTLINE_HEX: &str = "#3F444F";
const TEXT_HEX: &str = "#ABB2BF";
const TITLE_HEX: &str = "#E5C07B";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Fill colour per cell value.
    pub cells: [Color; 8],
    /// Square borders and panel frames.
    pub outline: Color,
    pub text: Color,
    pub title: Color,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl Theme {
    /// The built-in palette.
    pub fn load() -> Result<Self, ThemeError> {
        Self::from_hex(&CELL_HEX)
    }

    pub fn from_hex(cells: &[&str; 8]) -> Result<Self, ThemeError> {
        let mut parsed = [Color::Reset; 8];
        for (slot, hex) in parsed.iter_mut().zip(cells) {
            *slot = parse_hex(hex)?;
        }
        Ok(Self {
            cells: parsed,
            outline: parse_hex(OUTLINE_HEX)?,
            text: parse_hex(TEXT_HEX)?,
            title: parse_hex(TITLE_HEX)?,
        })
    }

    /// Fill colour for a cell value (0..=7).
    #[inline]
    pub fn cell_color(&self, index: u8) -> Color {
        self.cells[(index as usize) % self.cells.len()]
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.cells[0]
    }
}

/// Parse hex colour "#RRGGBB" or "#RGB" into ratatui Color.
pub fn parse_hex(s: &str) -> Result<Color, ThemeError> {
    let s = s.trim().trim_start_matches('#');
    let invalid = || ThemeError::InvalidHex(s.to_string());
    let channel = |range: std::ops::Range<usize>| {
        s.get(range)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .ok_or_else(invalid)
    };
    let (r, g, b) = match s.len() {
        6 => (channel(0..2)?, channel(2..4)?, channel(4..6)?),
        3 => (channel(0..1)? * 17, channel(1..2)? * 17, channel(2..3)? * 17),
        _ => return Err(invalid()),
    };
    Ok(Color::Rgb(r, g, b))
}
