use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::channel::{channel_from_hex, channel_to_hex};
use crate::error::ColorError;
use crate::traits::ColorModel;
use crate::value::Rgb;

/// A color as three two-digit hexadecimal channels, rendered `#rrggbb`.
///
/// Channels are stored decoded; accessors render them back as lowercase,
/// zero-padded strings, so `Hex::new("FF", "00", "0a")` equals
/// `Hex::new("ff", "00", "0A")`.
///
/// # Example
/// ```
/// use ck_core::traits::ColorModel;
/// use ck_core::value::{Hex, Rgb};
///
/// let hex: Hex = "#ff0000".parse().unwrap();
/// assert_eq!(hex.red(), "ff");
/// assert_eq!(hex.to_rgb(), Rgb::new(255, 0, 0).unwrap());
/// assert_eq!(hex.to_string(), "#ff0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Hex {
    red: u8,
    green: u8,
    blue: u8,
}

impl Hex {
    /// Build from three two-digit hex strings (either case).
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidChannelFormat`] for a malformed channel.
    pub fn new(red: &str, green: &str, blue: &str) -> Result<Self, ColorError> {
        Ok(Self {
            red: channel_from_hex(red)?,
            green: channel_from_hex(green)?,
            blue: channel_from_hex(blue)?,
        })
    }

    /// Build from raw bytes; always valid.
    #[must_use]
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red channel as two lowercase hex digits.
    #[must_use]
    pub fn red(&self) -> String {
        channel_to_hex(self.red)
    }

    /// Green channel as two lowercase hex digits.
    #[must_use]
    pub fn green(&self) -> String {
        channel_to_hex(self.green)
    }

    /// Blue channel as two lowercase hex digits.
    #[must_use]
    pub fn blue(&self) -> String {
        channel_to_hex(self.blue)
    }

    /// Decoded `[red, green, blue]` bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl ColorModel for Hex {
    fn to_rgb(&self) -> Rgb {
        Rgb::from_channels(self.red, self.green, self.blue)
    }

    fn from_rgb(rgb: Rgb, _alpha: f64) -> Self {
        Self::from(rgb)
    }

    fn to_hex(&self) -> Hex {
        *self
    }
}

impl From<Rgb> for Hex {
    fn from(rgb: Rgb) -> Self {
        Self::from_channels(rgb.red(), rgb.green(), rgb.blue())
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.to_string()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    /// Parse `#rrggbb` or the `#rgb` shorthand, case-insensitive.
    ///
    /// Leading and trailing whitespace is trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidColorString(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                // Shorthand: each digit is doubled (#f0a -> #ff00aa).
                let pair = |i: usize| digits[i..=i].repeat(2);
                Hex::new(&pair(0), &pair(1), &pair(2))
            }
            6 => Hex::new(&digits[0..2], &digits[2..4], &digits[4..6]),
            _ => Err(invalid()),
        }
    }
}
