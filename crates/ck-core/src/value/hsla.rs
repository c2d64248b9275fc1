use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ColorError, check_alpha, check_hue, check_percentage};
use crate::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::parse::{expect_args, function_args, number_arg, percent_arg, round2};
use crate::traits::ColorModel;
use crate::value::hsl::display_round;
use crate::value::{Hsl, Rgb};

/// An HSL color with alpha, rendered `hsla(h,s%,l%,a)`.
///
/// # Example
/// ```
/// use ck_core::traits::{ColorModel, DEFAULT_MIX_WEIGHT};
/// use ck_core::value::Hsla;
///
/// let red = Hsla::new(0.0, 100.0, 50.0, 0.5).unwrap();
/// let blue = Hsla::new(240.0, 100.0, 50.0, 0.5).unwrap();
/// let mixed = red.mix(&blue, DEFAULT_MIX_WEIGHT);
/// assert_eq!(mixed.alpha(), 0.5);
/// assert_eq!(mixed.to_string(), "hsla(300,100%,25%,0.5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hsla {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: f64,
}

impl Hsla {
    /// Build from hue, saturation, lightness and alpha.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidPercentageValue`],
    /// [`ColorError::InvalidAlphaValue`] or [`ColorError::InvalidHueValue`].
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Self {
            hue: check_hue(hue)?,
            saturation: check_percentage("saturation", saturation)?,
            lightness: check_percentage("lightness", lightness)?,
            alpha: check_alpha(alpha)?,
        })
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

    /// Opacity in [0, 1].
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Same HSL components with another alpha.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidAlphaValue`] if `alpha` is outside [0, 1].
    pub fn with_alpha(self, alpha: f64) -> Result<Self, ColorError> {
        Ok(Self {
            alpha: check_alpha(alpha)?,
            ..self
        })
    }
}

impl ColorModel for Hsla {
    fn to_rgb(&self) -> Rgb {
        let (r, g, b) = hsl_to_rgb(self.hue, self.saturation, self.lightness);
        Rgb::from_channels(r, g, b)
    }

    fn from_rgb(rgb: Rgb, alpha: f64) -> Self {
        let (h, s, l) = rgb_to_hsl(rgb.red(), rgb.green(), rgb.blue());
        Self {
            hue: h,
            saturation: s,
            lightness: l,
            alpha,
        }
    }

    fn from_hsl(hsl: Hsl, alpha: f64) -> Self {
        Self {
            hue: hsl.hue(),
            saturation: hsl.saturation(),
            lightness: hsl.lightness(),
            alpha,
        }
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from_components(self.hue, self.saturation, self.lightness)
    }

    fn to_hsla(&self) -> Hsla {
        *self
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            display_round(self.hue),
            display_round(self.saturation),
            display_round(self.lightness),
            round2(self.alpha)
        )
    }
}

impl FromStr for Hsla {
    type Err = ColorError;

    /// Parse `hsla(h, s%, l%, a)`; the `%` signs are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [h, sat, l, a] = expect_args::<4>(s, function_args(s, "hsla")?)?;
        Hsla::new(
            number_arg(s, h)?,
            percent_arg(s, sat)?,
            percent_arg(s, l)?,
            number_arg(s, a)?,
        )
    }
}
