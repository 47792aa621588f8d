//! RGB color handling with hex formatting and integer serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for channel packing
#![allow(clippy::cast_possible_truncation)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// 24-bit RGB color.
///
/// Scene consumers (Three.js materials, plan-editor properties) expect colors
/// as packed integers, so the wire format is `0xRRGGBB` as a JSON number
/// (e.g. `0xf5f5dc` serializes as `16119260`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates an `RgbColor` from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use archsense::models::RgbColor;
    ///
    /// let beige = RgbColor::from_u32(0xf5f5dc);
    /// assert_eq!(beige, RgbColor::new(0xf5, 0xf5, 0xdc));
    /// ```
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Packs the color into a `0xRRGGBB` value.
    #[must_use]
    pub const fn to_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use archsense::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_u32(0xe8f4fd).to_hex(), "#e8f4fd");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

impl From<u32> for RgbColor {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<RgbColor> for u32 {
    fn from(color: RgbColor) -> Self {
        color.to_u32()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
