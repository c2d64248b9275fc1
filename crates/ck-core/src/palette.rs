//! Derived palettes: luminance-matched tint/shade scales and 12-step color wheels.
//!
//! Both generators work on raw HSL components and return [`Hsl`] values;
//! [`ColorModel`](crate::traits::ColorModel) converts them to the caller's
//! representation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, check_percentage};
use crate::hue::HueName;
use crate::inverse::hsl_from_luminance;
use crate::value::Hsl;

/// One entry of a luminance scale: a palette key and its target luminance (percent).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScaleStep {
    /// Palette key, e.g. `500`.
    pub key: u32,
    /// Target relative luminance in [0, 100].
    pub luminance: f64,
}

/// Ordered table of luminance targets, lightest first by convention.
///
/// # Example
/// ```
/// use ck_core::palette::LuminanceScale;
/// let scale = LuminanceScale::default();
/// assert_eq!(scale.steps().len(), 10);
/// assert_eq!(scale.steps()[0].key, 50);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LuminanceScale {
    steps: Vec<ScaleStep>,
}

/// Default UI tint/shade ramp, key → luminance.
pub const DEFAULT_SCALE: [(u32, f64); 10] = [
    (50, 93.0),
    (100, 86.0),
    (200, 74.0),
    (300, 59.0),
    (400, 39.0),
    (500, 24.0),
    (600, 15.0),
    (700, 11.5),
    (800, 7.0),
    (900, 3.0),
];

impl Default for LuminanceScale {
    fn default() -> Self {
        Self {
            steps: DEFAULT_SCALE
                .iter()
                .map(|&(key, luminance)| ScaleStep { key, luminance })
                .collect(),
        }
    }
}

impl LuminanceScale {
    /// Build a scale from `(key, luminance)` pairs, keeping their order.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidPercentageValue`] if a target is outside [0, 100].
    ///
    /// # Example
    /// ```
    /// use ck_core::palette::LuminanceScale;
    /// assert!(LuminanceScale::new([(1, 80.0), (2, 20.0)]).is_ok());
    /// assert!(LuminanceScale::new([(1, 120.0)]).is_err());
    /// ```
    pub fn new(steps: impl IntoIterator<Item = (u32, f64)>) -> Result<Self, ColorError> {
        let steps = steps
            .into_iter()
            .map(|(key, luminance)| {
                check_percentage("luminance", luminance).map(|luminance| ScaleStep { key, luminance })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    /// Steps in table order.
    #[must_use]
    pub fn steps(&self) -> &[ScaleStep] {
        &self.steps
    }

    /// Clamp every target into [0, 100].
    pub fn clamp_all(&mut self) {
        for step in &mut self.steps {
            step.luminance = if step.luminance.is_nan() {
                0.0
            } else {
                step.luminance.clamp(0.0, 100.0)
            };
        }
    }
}

/// Build a luminance scale at fixed hue and saturation.
///
/// Each target is inverted to a lightness with [`hsl_from_luminance`]. A key
/// that appears twice keeps the later entry.
///
/// # Example
/// ```
/// use ck_core::palette::{luminance_scale, LuminanceScale};
/// use ck_core::inverse::DEFAULT_PRECISION;
/// let palette = luminance_scale(0.0, 100.0, &LuminanceScale::default(), DEFAULT_PRECISION);
/// assert_eq!(palette.len(), 10);
/// assert_eq!(palette[&500].lightness(), 60.0);
/// ```
#[must_use]
pub fn luminance_scale(
    hue: f64,
    saturation: f64,
    scale: &LuminanceScale,
    precision: f64,
) -> BTreeMap<u32, Hsl> {
    let saturation = saturation.clamp(0.0, 100.0);
    let mut palette = BTreeMap::new();
    for step in scale.steps() {
        let (h, s, l) = hsl_from_luminance(hue, saturation, step.luminance, precision);
        palette.insert(step.key, Hsl::from_components(h, s, l));
    }
    log::debug!(
        "luminance scale h={hue:.2} s={saturation:.2}: {} steps",
        palette.len()
    );
    palette
}

/// Build a 12-step color wheel from a base hue.
///
/// For every 30° rotation, a single 360° is subtracted when the rotated hue
/// exceeds 360 (no full modulo), the result is classified, and the color is
/// stored under its [`HueName`]. A later rotation landing in an already used
/// bucket replaces the earlier color.
///
/// # Example
/// ```
/// use ck_core::palette::color_wheel;
/// use ck_core::hue::HueName;
/// let wheel = color_wheel(0.0, 100.0, 50.0);
/// assert_eq!(wheel.len(), 12);
/// assert_eq!(wheel[&HueName::Blue].hue(), 240.0);
/// ```
#[must_use]
pub fn color_wheel(hue: f64, saturation: f64, lightness: f64) -> BTreeMap<HueName, Hsl> {
    let saturation = saturation.clamp(0.0, 100.0);
    let lightness = lightness.clamp(0.0, 100.0);
    let mut wheel = BTreeMap::new();
    for deg in (0..360u16).step_by(30) {
        let mut rotated = hue + f64::from(deg);
        if rotated > 360.0 {
            rotated -= 360.0;
        }
        let name = HueName::classify(rotated);
        if wheel
            .insert(name, Hsl::from_components(rotated, saturation, lightness))
            .is_some()
        {
            log::debug!("color wheel: hue {rotated:.2} overwrote bucket {name}");
        }
    }
    wheel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inverse::DEFAULT_PRECISION;

    #[test]
    fn default_scale_matches_table() {
        let scale = LuminanceScale::default();
        let pairs: Vec<_> = scale.steps().iter().map(|s| (s.key, s.luminance)).collect();
        assert_eq!(pairs, DEFAULT_SCALE.to_vec());
    }

    #[test]
    fn red_scale_lightness() {
        let palette = luminance_scale(0.0, 100.0, &LuminanceScale::default(), DEFAULT_PRECISION);
        let lightness: Vec<_> = palette.values().map(Hsl::lightness).collect();
        assert_eq!(
            lightness,
            vec![98.0, 96.0, 92.0, 86.0, 76.0, 60.0, 43.0, 38.0, 30.0, 21.0]
        );
        assert!(palette.values().all(|c| c.hue() == 0.0 && c.saturation() == 100.0));
    }

    #[test]
    fn scale_is_darker_as_keys_grow() {
        let palette = luminance_scale(210.0, 50.0, &LuminanceScale::default(), DEFAULT_PRECISION);
        let lightness: Vec<_> = palette.values().map(Hsl::lightness).collect();
        assert!(lightness.windows(2).all(|w| w[0] > w[1]), "{lightness:?}");
    }

    #[test]
    fn duplicate_keys_keep_the_later_step() {
        let scale = LuminanceScale::new([(1, 90.0), (1, 10.0)]).unwrap();
        let palette = luminance_scale(0.0, 0.0, &scale, DEFAULT_PRECISION);
        assert_eq!(palette.len(), 1);
        assert!(palette[&1].lightness() < 50.0);
    }

    #[test]
    fn clamp_all_bounds_targets() {
        let mut scale: LuminanceScale = scale_of(&[(1, -5.0), (2, 150.0), (3, 40.0)]);
        scale.clamp_all();
        let lum: Vec<_> = scale.steps().iter().map(|s| s.luminance).collect();
        assert_eq!(lum, vec![0.0, 100.0, 40.0]);
    }

    fn scale_of(pairs: &[(u32, f64)]) -> LuminanceScale {
        LuminanceScale {
            steps: pairs
                .iter()
                .map(|&(key, luminance)| ScaleStep { key, luminance })
                .collect(),
        }
    }

    #[test]
    fn wheel_from_red_covers_every_name() {
        let wheel = color_wheel(0.0, 100.0, 50.0);
        assert_eq!(wheel.len(), 12);
        let names: Vec<_> = wheel.keys().copied().collect();
        assert_eq!(names, HueName::ALL.to_vec());
        for (i, color) in wheel.values().enumerate() {
            assert_eq!(color.hue(), i as f64 * 30.0);
            assert_eq!(color.saturation(), 100.0);
            assert_eq!(color.lightness(), 50.0);
        }
    }

    #[test]
    fn wheel_subtracts_360_once() {
        let wheel = color_wheel(200.0, 40.0, 60.0);
        // 200 + 330 = 530 → 170
        assert_eq!(wheel[&HueName::Cyan].hue(), 170.0);
        assert_eq!(wheel.len(), 12);
        assert!(wheel.values().all(|c| c.hue() >= 0.0 && c.hue() <= 360.0));
    }

    #[test]
    fn wheel_keeps_unnormalised_hues_past_one_turn() {
        // 400 + 330 = 730 → 370 after the single subtraction, classified as red.
        let wheel = color_wheel(400.0, 50.0, 50.0);
        assert_eq!(wheel.len(), 12);
        assert_eq!(wheel[&HueName::Red].hue(), 370.0);
        assert_eq!(wheel[&HueName::Orange].hue(), 40.0);
    }
}
