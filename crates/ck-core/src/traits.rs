use std::collections::BTreeMap;

use crate::error::ColorError;
use crate::hsl::rgb_to_hsl;
use crate::hue::HueName;
use crate::inverse::DEFAULT_PRECISION;
use crate::luminance::{contrast_ratio, contrast_ratio_to_black, relative_luminance};
use crate::palette::{LuminanceScale, color_wheel, luminance_scale};
use crate::value::{Hex, Hsl, Hsla, Rgb, Rgba};

/// Default weight of the receiver in [`ColorModel::mix`].
pub const DEFAULT_MIX_WEIGHT: f64 = 0.5;

/// Capacités partagées par toutes les représentations de couleur.
///
/// Implémenté par : [`Hex`], [`Rgb`], [`Rgba`], [`Hsl`], [`Hsla`].
///
/// Implementors provide the projection to [`Rgb`] and the way back; every
/// conversion and derived quantity has a default built on those two.
/// HSL types override the HSL paths to keep full floating-point precision.
///
/// # Example
/// ```
/// use ck_core::traits::ColorModel;
/// use ck_core::value::{Hex, Rgb};
///
/// let red = Hex::from_channels(255, 0, 0);
/// assert_eq!(red.to_rgb(), Rgb::new(255, 0, 0).unwrap());
/// assert_eq!(red.to_color_name().as_str(), "red");
/// ```
pub trait ColorModel: Copy {
    /// Projection into 8-bit RGB.
    fn to_rgb(&self) -> Rgb;

    /// Build a value of this representation from RGB channels.
    ///
    /// `alpha` is already validated; representations without alpha ignore it.
    fn from_rgb(rgb: Rgb, alpha: f64) -> Self;

    /// Build a value of this representation from HSL components.
    ///
    /// Defaults to going through RGB.
    fn from_hsl(hsl: Hsl, alpha: f64) -> Self {
        Self::from_rgb(hsl.to_rgb(), alpha)
    }

    /// Opacity in [0, 1]; opaque representations return 1.
    fn alpha(&self) -> f64 {
        1.0
    }

    /// Convert to [`Hex`].
    fn to_hex(&self) -> Hex {
        Hex::from(self.to_rgb())
    }

    /// Convert to [`Rgba`], keeping this color's alpha.
    fn to_rgba(&self) -> Rgba {
        Rgba::from_rgb(self.to_rgb(), self.alpha())
    }

    /// Convert to [`Rgba`] with an explicit alpha.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidAlphaValue`] if `alpha` is outside [0, 1].
    ///
    /// # Example
    /// ```
    /// use ck_core::traits::ColorModel;
    /// use ck_core::value::Hex;
    /// let c = Hex::from_channels(255, 0, 0).to_rgba_with(0.25).unwrap();
    /// assert_eq!(c.to_string(), "rgba(255,0,0,0.25)");
    /// ```
    fn to_rgba_with(&self, alpha: f64) -> Result<Rgba, ColorError> {
        self.to_rgba().with_alpha(alpha)
    }

    /// Convert to [`Hsl`].
    fn to_hsl(&self) -> Hsl {
        let rgb = self.to_rgb();
        let (h, s, l) = rgb_to_hsl(rgb.red(), rgb.green(), rgb.blue());
        Hsl::from_components(h, s, l)
    }

    /// Convert to [`Hsla`], keeping this color's alpha.
    fn to_hsla(&self) -> Hsla {
        Hsla::from_hsl(self.to_hsl(), self.alpha())
    }

    /// Convert to [`Hsla`] with an explicit alpha.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidAlphaValue`] if `alpha` is outside [0, 1].
    fn to_hsla_with(&self, alpha: f64) -> Result<Hsla, ColorError> {
        self.to_hsla().with_alpha(alpha)
    }

    /// Relative luminance in [0, 100].
    fn luminance(&self) -> f64 {
        let rgb = self.to_rgb();
        relative_luminance(rgb.red(), rgb.green(), rgb.blue())
    }

    /// Contrast ratio against black, truncated to an integer.
    fn contrast_ratio(&self) -> u32 {
        contrast_ratio_to_black(self.luminance())
    }

    /// Contrast ratio against another color, truncated to an integer.
    fn contrast_ratio_with(&self, other: &impl ColorModel) -> u32 {
        contrast_ratio(self.luminance(), other.luminance())
    }

    /// Name of the 30° hue bucket this color falls in.
    fn to_color_name(&self) -> HueName {
        HueName::classify(self.to_hsl().hue())
    }

    /// Twelve colors rotated by 30° steps, keyed by hue name.
    fn to_color_wheel(&self) -> BTreeMap<HueName, Self> {
        let hsl = self.to_hsl();
        let alpha = self.alpha();
        color_wheel(hsl.hue(), hsl.saturation(), hsl.lightness())
            .into_iter()
            .map(|(name, color)| (name, Self::from_hsl(color, alpha)))
            .collect()
    }

    /// Tint/shade ramp at this color's hue and saturation.
    fn to_luminance_scale(&self, scale: &LuminanceScale) -> BTreeMap<u32, Self> {
        self.to_luminance_scale_with_precision(scale, DEFAULT_PRECISION)
    }

    /// Tint/shade ramp with an explicit refinement step.
    fn to_luminance_scale_with_precision(
        &self,
        scale: &LuminanceScale,
        precision: f64,
    ) -> BTreeMap<u32, Self> {
        let hsl = self.to_hsl();
        let alpha = self.alpha();
        luminance_scale(hsl.hue(), hsl.saturation(), scale, precision)
            .into_iter()
            .map(|(key, color)| (key, Self::from_hsl(color, alpha)))
            .collect()
    }

    /// Linear blend in RGB space: `round(weight * self + (1 - weight) * other)`
    /// per channel. The result keeps this representation and this alpha; when
    /// the blend equals this color's RGB projection, `self` is returned unchanged.
    ///
    /// `weight` is clamped into [0, 1].
    ///
    /// # Example
    /// ```
    /// use ck_core::traits::{ColorModel, DEFAULT_MIX_WEIGHT};
    /// use ck_core::value::Rgb;
    /// let red = Rgb::new(255, 0, 0).unwrap();
    /// let blue = Rgb::new(0, 0, 255).unwrap();
    /// assert_eq!(red.mix(&blue, DEFAULT_MIX_WEIGHT), Rgb::new(128, 0, 128).unwrap());
    /// ```
    #[must_use]
    fn mix(&self, other: &impl ColorModel, weight: f64) -> Self {
        let weight = if weight.is_nan() {
            DEFAULT_MIX_WEIGHT
        } else {
            weight.clamp(0.0, 1.0)
        };
        let a = self.to_rgb();
        let b = other.to_rgb();
        let blend = |x: u8, y: u8| -> u8 {
            (weight * f64::from(x) + (1.0 - weight) * f64::from(y))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        let mixed = Rgb::from_channels(
            blend(a.red(), b.red()),
            blend(a.green(), b.green()),
            blend(a.blue(), b.blue()),
        );
        // Blend landed on this color: keep it as is, HSL components included.
        if mixed == a {
            return *self;
        }
        Self::from_rgb(mixed, self.alpha())
    }
}
