//! Colour type and hex parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{MapError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string in the map format's convention.
    ///
    /// Supports formats:
    /// - `#RRGGBB` (6 digits, opaque)
    /// - `#AARRGGBB` (8 digits, alpha first)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        // length and slicing below are byte-based; multi-byte input must not
        // reach them
        if !hex.is_ascii() {
            return Err(MapError::Colour {
                value: s.to_string(),
                help: Some("use #RRGGBB or #AARRGGBB format".to_string()),
            });
        }

        match hex.len() {
            6 => {
                let r = parse_hex_byte(s, &hex[0..2])?;
                let g = parse_hex_byte(s, &hex[2..4])?;
                let b = parse_hex_byte(s, &hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let a = parse_hex_byte(s, &hex[0..2])?;
                let r = parse_hex_byte(s, &hex[2..4])?;
                let g = parse_hex_byte(s, &hex[4..6])?;
                let b = parse_hex_byte(s, &hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(MapError::Colour {
                value: s.to_string(),
                help: Some("use #RRGGBB or #AARRGGBB format".to_string()),
            }),
        }
    }

    /// Convert to an RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(colour: &str, s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| MapError::Colour {
        value: colour.to_string(),
        help: None,
    })
}
