//! Colors and the options a player picks from.
//!
//! ## Color
//!
//! Plain RGB triple. Two colors are equal iff all three channels match;
//! there is no tolerance or perceptual comparison.
//!
//! ## Text forms
//!
//! - `Display`: `"(168, 34, 1)"`, the form shown as the color to guess.
//! - `css()`: `"rgb(168, 34, 1)"`, the form a presentation layer renders
//!   an option with.
//!
//! `FromStr` accepts both, with optional whitespace around each channel.
//!
//! ```
//! use color_guess::core::Color;
//!
//! let color = Color::new(168, 34, 1);
//! assert_eq!(color.to_string(), "(168, 34, 1)");
//! assert_eq!(color.css(), "rgb(168, 34, 1)");
//! assert_eq!("rgb( 168 ,34, 1 )".parse::<Color>(), Ok(color));
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::rng::GameRng;

/// An RGB color, one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw a color with every channel uniform over `0..=255`.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        let [r, g, b] = rng.gen_channels();
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// CSS functional notation, e.g. `rgb(12, 0, 255)`.
    #[must_use]
    pub fn css(self) -> String {
        format!("rgb{}", self)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Failure to read a color back from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected `(r, g, b)` or `rgb(r, g, b)`, got {0:?}")]
    Malformed(String),

    #[error("expected 3 channels, got {0}")]
    ChannelCount(usize),

    #[error("channel {0:?} is not an integer in 0..=255")]
    Channel(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix("rgb").unwrap_or(trimmed).trim_start();
        let inner = body
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::Malformed(s.to_string()))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ColorParseError::ChannelCount(parts.len()));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            // u8 parsing accepts a leading '+', the display regex does not
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ColorParseError::Channel(part.to_string()));
            }
            *slot = part
                .parse()
                .map_err(|_| ColorParseError::Channel(part.to_string()))?;
        }

        Ok(Self::from(channels))
    }
}

/// Identity of one option within a round.
///
/// Ids are positions `0..OPTION_COUNT`. They stay meaningful even when two
/// options happen to share a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionId(pub u8);

impl OptionId {
    /// Create a new option ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position of this option in the round (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Option({})", self.0)
    }
}

/// A selectable color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorOption {
    pub id: OptionId,
    pub color: Color,
}

impl ColorOption {
    #[must_use]
    pub const fn new(id: OptionId, color: Color) -> Self {
        Self { id, color }
    }
}
