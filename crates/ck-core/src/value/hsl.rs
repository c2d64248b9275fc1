use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ColorError, check_hue, check_percentage};
use crate::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::parse::{expect_args, function_args, number_arg, percent_arg};
use crate::traits::ColorModel;
use crate::value::Rgb;

/// An opaque color in HSL, rendered `hsl(h,s%,l%)`.
///
/// The hue is kept as given (any finite angle) and only normalised when
/// projected to RGB; saturation and lightness are percentages.
///
/// # Example
/// ```
/// use ck_core::traits::ColorModel;
/// use ck_core::value::Hsl;
///
/// let hsl = Hsl::new(200.0, 50.0, 50.0).unwrap();
/// assert_eq!(hsl.to_hex().to_string(), "#4095bf");
/// assert_eq!(hsl.to_string(), "hsl(200,50%,50%)");
/// assert!(Hsl::new(0.0, 101.0, 50.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl Hsl {
    /// Build from a hue (degrees) and saturation/lightness percentages.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidPercentageValue`] for saturation or
    /// lightness outside [0, 100], [`ColorError::InvalidHueValue`] for a
    /// non-finite hue.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ColorError> {
        Ok(Self {
            hue: check_hue(hue)?,
            saturation: check_percentage("saturation", saturation)?,
            lightness: check_percentage("lightness", lightness)?,
        })
    }

    /// Build from components already known to be in range.
    pub(crate) const fn from_components(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Hue in degrees, as constructed.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation percentage.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Lightness percentage.
    #[must_use]
    pub const fn lightness(&self) -> f64 {
        self.lightness
    }
}

impl ColorModel for Hsl {
    fn to_rgb(&self) -> Rgb {
        let (r, g, b) = hsl_to_rgb(self.hue, self.saturation, self.lightness);
        Rgb::from_channels(r, g, b)
    }

    fn from_rgb(rgb: Rgb, _alpha: f64) -> Self {
        let (h, s, l) = rgb_to_hsl(rgb.red(), rgb.green(), rgb.blue());
        Self::from_components(h, s, l)
    }

    fn from_hsl(hsl: Hsl, _alpha: f64) -> Self {
        hsl
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }
}

/// Round for display; `+ 0.0` folds `-0` into `0`.
#[inline]
pub(crate) fn display_round(value: f64) -> f64 {
    value.round() + 0.0
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            display_round(self.hue),
            display_round(self.saturation),
            display_round(self.lightness)
        )
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    /// Parse `hsl(h, s%, l%)`; the `%` signs are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [h, sat, l] = expect_args::<3>(s, function_args(s, "hsl")?)?;
        Hsl::new(number_arg(s, h)?, percent_arg(s, sat)?, percent_arg(s, l)?)
    }
}
