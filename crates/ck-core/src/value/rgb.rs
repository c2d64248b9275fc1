use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ColorError, check_channel};
use crate::parse::{expect_args, function_args, int_arg};
use crate::traits::ColorModel;

/// An opaque sRGB color with 8-bit channels, rendered `rgb(r,g,b)`.
///
/// # Example
/// ```
/// use ck_core::traits::ColorModel;
/// use ck_core::value::Rgb;
///
/// let red = Rgb::new(255, 0, 0).unwrap();
/// let hsl = red.to_hsl();
/// assert_eq!((hsl.hue(), hsl.saturation(), hsl.lightness()), (0.0, 100.0, 50.0));
/// assert!(Rgb::new(256, 0, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Build from integer channels.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidChannelValue`] if a channel is outside [0, 255].
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self, ColorError> {
        Ok(Self {
            red: check_channel("red", red)?,
            green: check_channel("green", green)?,
            blue: check_channel("blue", blue)?,
        })
    }

    /// Build from bytes; always valid.
    #[must_use]
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

impl ColorModel for Rgb {
    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn from_rgb(rgb: Rgb, _alpha: f64) -> Self {
        rgb
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parse `rgb(r, g, b)`; range errors come from [`Rgb::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b] = expect_args::<3>(s, function_args(s, "rgb")?)?;
        Rgb::new(int_arg(s, r)?, int_arg(s, g)?, int_arg(s, b)?)
    }
}
