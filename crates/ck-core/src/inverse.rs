//! Luminance → lightness inversion.
//!
//! There is no closed-form inverse from a luminance target (at fixed hue and
//! saturation) back to HSL lightness: the gamma curve is piecewise and
//! lightness reaches luminance through the HSL → RGB projection. The search
//! below samples instead, in two passes:
//!
//! 1. every integer lightness from 100 down to 0;
//! 2. 201 samples spaced by `precision`, scanning down from
//!    `closest + precision * 100` to `closest - precision * 100`.
//!
//! `closest` in pass 2 is the best luminance *difference* from pass 1, not the
//! best lightness. Palettes produced by earlier releases depend on that
//! window, so it is kept as is.

use crate::hsl::hsl_to_rgb;
use crate::luminance::relative_luminance;

/// Default step of the refinement pass, in lightness units.
pub const DEFAULT_PRECISION: f64 = 0.01;

/// Number of steps in the refinement window (`2 * precision * 100 / precision`).
const REFINE_STEPS: u32 = 200;

/// Luminance of an HSL triple after projection to 8-bit RGB.
#[inline]
#[must_use]
pub fn hsl_luminance(hue: f64, saturation: f64, lightness: f64) -> f64 {
    let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
    relative_luminance(r, g, b)
}

/// Tracks the best sample seen so far. Only a strictly smaller difference wins.
struct Best {
    lightness: f64,
    difference: f64,
}

impl Best {
    #[inline]
    fn offer(&mut self, target: f64, hue: f64, saturation: f64, lightness: f64) {
        let difference = (target - hsl_luminance(hue, saturation, lightness)).abs();
        if difference < self.difference {
            self.lightness = lightness;
            self.difference = difference;
        }
    }
}

/// Find the lightness whose HSL color best matches `luminance`.
///
/// Returns `(hue, saturation, lightness)` with hue and saturation unchanged
/// and lightness in [0, 100].
///
/// # Example
/// ```
/// use ck_core::inverse::{hsl_from_luminance, DEFAULT_PRECISION};
/// use ck_core::hsl::hsl_to_rgb;
/// let (h, s, l) = hsl_from_luminance(0.0, 100.0, 24.0, DEFAULT_PRECISION);
/// assert_eq!((h, s), (0.0, 100.0));
/// assert_eq!(hsl_to_rgb(h, s, l), (255, 51, 51));
/// ```
#[must_use]
pub fn hsl_from_luminance(
    hue: f64,
    saturation: f64,
    luminance: f64,
    precision: f64,
) -> (f64, f64, f64) {
    let mut best = Best {
        lightness: 100.0,
        difference: 100.0,
    };

    for sample in (0..=100u8).rev() {
        best.offer(luminance, hue, saturation, f64::from(sample));
    }
    let coarse = best.lightness;

    let top = best.difference + precision * 100.0;
    for step in 0..=REFINE_STEPS {
        let sample = top - f64::from(step) * precision;
        best.offer(luminance, hue, saturation, sample);
    }

    log::trace!(
        "luminance {luminance:.3} @ h={hue:.2} s={saturation:.2}: coarse L={coarse}, refined L={:.4} (Δ={:.4})",
        best.lightness,
        best.difference
    );

    (hue, saturation, best.lightness.clamp(0.0, 100.0))
}
