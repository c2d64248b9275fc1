use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ColorError, check_alpha, check_channel};
use crate::parse::{expect_args, function_args, int_arg, number_arg};
use crate::traits::ColorModel;
use crate::value::Rgb;

/// An sRGB color with 8-bit channels and an alpha in [0, 1], rendered `rgba(r,g,b,a)`.
///
/// # Example
/// ```
/// use ck_core::value::Rgba;
/// let c = Rgba::new(255, 0, 0, 0.5).unwrap();
/// assert_eq!(c.to_string(), "rgba(255,0,0,0.50)");
/// assert!(Rgba::new(255, 0, 0, 1.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgba {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

impl Rgba {
    /// Build from integer channels and an alpha.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidChannelValue`] or [`ColorError::InvalidAlphaValue`].
    pub fn new(red: i64, green: i64, blue: i64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Self {
            red: check_channel("red", red)?,
            green: check_channel("green", green)?,
            blue: check_channel("blue", blue)?,
            alpha: check_alpha(alpha)?,
        })
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

    /// Opacity in [0, 1].
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Same channels with another alpha.
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

impl ColorModel for Rgba {
    fn to_rgb(&self) -> Rgb {
        Rgb::from_channels(self.red, self.green, self.blue)
    }

    fn from_rgb(rgb: Rgb, alpha: f64) -> Self {
        Self {
            red: rgb.red(),
            green: rgb.green(),
            blue: rgb.blue(),
            alpha,
        }
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn to_rgba(&self) -> Rgba {
        *self
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{:.2})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    /// Parse `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b, a] = expect_args::<4>(s, function_args(s, "rgba")?)?;
        Rgba::new(
            int_arg(s, r)?,
            int_arg(s, g)?,
            int_arg(s, b)?,
            number_arg(s, a)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::LuminanceScale;

    #[test]
    fn validates_alpha_and_channels() {
        assert!(Rgba::new(0, 0, 0, 0.0).is_ok());
        assert!(Rgba::new(0, 0, 0, 1.0).is_ok());
        assert_eq!(
            Rgba::new(0, 0, 0, -0.1),
            Err(ColorError::InvalidAlphaValue(-0.1))
        );
        assert!(Rgba::new(0, 256, 0, 0.5).is_err());
        assert!(Rgba::new(0, 0, 0, f64::NAN).is_err());
    }

    #[test]
    fn parses_and_formats() {
        let c: Rgba = "rgba(10, 20, 30, 0.4)".parse().unwrap();
        assert_eq!(c, Rgba::new(10, 20, 30, 0.4).unwrap());
        assert_eq!(c.to_string(), "rgba(10,20,30,0.40)");
        assert_eq!(Rgba::new(1, 2, 3, 1.0).unwrap().to_string(), "rgba(1,2,3,1.00)");
        assert!("rgba(10,20,30)".parse::<Rgba>().is_err());
        assert!(matches!(
            "rgba(10,20,30,2)".parse::<Rgba>(),
            Err(ColorError::InvalidAlphaValue(_))
        ));
    }

    #[test]
    fn alpha_survives_conversions() {
        let c = Rgba::new(200, 100, 50, 0.3).unwrap();
        assert_eq!(c.to_rgba(), c);
        assert_eq!(c.to_rgba().to_rgba(), c);
        assert_eq!(c.to_hsla().alpha(), 0.3);
        assert_eq!(c.to_hsla().to_rgba(), c);
        assert_eq!(c.to_rgb(), Rgb::from_channels(200, 100, 50));
        assert_eq!(c.to_hex().to_string(), "#c86432");
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let c = Rgba::new(1, 2, 3, 0.3).unwrap();
        let d = c.with_alpha(0.9).unwrap();
        assert_eq!((d.red(), d.green(), d.blue(), d.alpha()), (1, 2, 3, 0.9));
        assert!(c.with_alpha(9.0).is_err());
    }

    #[test]
    fn mix_keeps_receiver_alpha() {
        let a = Rgba::new(255, 0, 0, 0.2).unwrap();
        let b = Rgba::new(0, 0, 255, 0.8).unwrap();
        let m = a.mix(&b, 0.5);
        assert_eq!(m, Rgba::new(128, 0, 128, 0.2).unwrap());
        assert_eq!(a.mix(&a, 0.5), a);
    }

    #[test]
    fn scale_keeps_alpha() {
        let a = Rgba::new(255, 0, 0, 0.5).unwrap();
        let palette = a.to_luminance_scale(&LuminanceScale::default());
        assert!(palette.values().all(|c| c.alpha() == 0.5));
        assert_eq!(palette[&500].to_rgb(), Rgb::from_channels(255, 51, 51));
    }
}
