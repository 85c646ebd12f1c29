//! 8-bit RGB color value.
//!
//! `Rgb` is the only color representation the wheel stores or returns.
//! Derived quantities (hex name, channel extremes) are computed on demand.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An sRGB color with 8-bit channels. Alpha is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integer channels, rejecting anything outside `0..=255`.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        Ok(Self {
            r: checked_channel("r", r)?,
            g: checked_channel("g", g)?,
            b: checked_channel("b", b)?,
        })
    }

    /// Build a color from float channels in `0.0..=255.0`, rounding half away
    /// from zero and saturating at the ends.
    pub(crate) fn from_f32_saturating(channels: [f32; 3]) -> Self {
        let [r, g, b] = channels.map(|c| c.round().clamp(0.0, 255.0) as u8);
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let srgb = Srgb::<u8>::from_str(input.trim()).map_err(|source| ColorError::InvalidHex {
            input: input.to_string(),
            source,
        })?;
        Ok(srgb.into())
    }

    /// Lower-case `#rrggbb` name of the color.
    pub fn hex_name(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn max_channel(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    pub fn min_channel(&self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// True when all three channels are equal (hue is undefined).
    pub fn is_achromatic(&self) -> bool {
        self.max_channel() == self.min_channel()
    }
}

fn checked_channel(channel: &'static str, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { channel, value })
}

impl From<Srgb<u8>> for Rgb {
    fn from(c: Srgb<u8>) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(c: Rgb) -> Self {
        Srgb::new(c.r, c.g, c.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_name())
    }
}
