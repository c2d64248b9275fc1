//! sRGB relative luminance and contrast ratio.
//!
//! Luminance is expressed as a percentage in [0, 100] rather than the usual
//! [0, 1] `Y`; divide by 100 to recover the standard scale.

/// Threshold below which an sRGB channel is decoded linearly.
const LINEAR_THRESHOLD: f64 = 0.039_28;

/// Channel weights (percent-scaled Rec. 709 coefficients).
const WEIGHTS: [f64; 3] = [21.26, 71.52, 7.22];

/// Offset added to both luminances in the contrast ratio.
const CONTRAST_FLARE: f64 = 0.05;

/// Decode one gamma-encoded channel [0,255] to linear light [0,1].
#[inline]
fn decode_channel(value: u8) -> f64 {
    let c = f64::from(value) / 255.0;
    if c < LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an sRGB triple, in [0, 100].
///
/// # Example
/// ```
/// use ck_core::luminance::relative_luminance;
/// assert_eq!(relative_luminance(0, 0, 0), 0.0);
/// assert!((relative_luminance(255, 255, 255) - 100.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    WEIGHTS[0] * decode_channel(r) + WEIGHTS[1] * decode_channel(g) + WEIGHTS[2] * decode_channel(b)
}

/// Contrast ratio between two percent-scaled luminances.
///
/// Computed as `(max + 0.05) / (min + 0.05)` on the [0,1] scale and truncated
/// toward zero. Note the truncation: WCAG reports this ratio with decimals.
///
/// # Example
/// ```
/// use ck_core::luminance::{contrast_ratio, relative_luminance};
/// let white = relative_luminance(255, 255, 255);
/// let black = relative_luminance(0, 0, 0);
/// assert_eq!(contrast_ratio(white, black), 21);
/// assert_eq!(contrast_ratio(black, white), 21);
/// ```
#[must_use]
pub fn contrast_ratio(luminance: f64, reference: f64) -> u32 {
    let a = luminance / 100.0;
    let b = reference / 100.0;
    let (hi, lo) = if a > b { (a, b) } else { (b, a) };
    ((hi + CONTRAST_FLARE) / (lo + CONTRAST_FLARE)) as u32
}

/// Contrast ratio of a luminance against pure black.
///
/// # Example
/// ```
/// use ck_core::luminance::{contrast_ratio_to_black, relative_luminance};
/// assert_eq!(contrast_ratio_to_black(relative_luminance(255, 0, 0)), 5);
/// ```
#[must_use]
pub fn contrast_ratio_to_black(luminance: f64) -> u32 {
    contrast_ratio(luminance, relative_luminance(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_bounds() {
        assert_eq!(relative_luminance(0, 0, 0), 0.0);
        assert!((relative_luminance(255, 255, 255) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_weights_per_primary() {
        assert!((relative_luminance(255, 0, 0) - 21.26).abs() < 1e-9);
        assert!((relative_luminance(0, 255, 0) - 71.52).abs() < 1e-9);
        assert!((relative_luminance(0, 0, 255) - 7.22).abs() < 1e-9);
    }

    #[test]
    fn luminance_is_monotonic_on_greys() {
        let mut prev = -1.0;
        for v in 0..=255u8 {
            let l = relative_luminance(v, v, v);
            assert!(l > prev, "luminance non monotone à {v}");
            prev = l;
        }
    }

    #[test]
    fn linear_segment_below_threshold() {
        // 10/255 ≈ 0.0392 < 0.03928
        let expected = 100.0 * (10.0 / 255.0) / 12.92;
        assert!((relative_luminance(10, 10, 10) - expected).abs() < 1e-9);
    }

    /// Known deviation from WCAG: ratios are truncated to integers.
    #[test]
    fn contrast_ratio_truncates() {
        // Exact ratios: red 5.25, grey(128) 5.32, grey(100) 3.55.
        assert_eq!(contrast_ratio_to_black(relative_luminance(255, 0, 0)), 5);
        assert_eq!(contrast_ratio_to_black(relative_luminance(128, 128, 128)), 5);
        assert_eq!(contrast_ratio_to_black(relative_luminance(100, 100, 100)), 3);
        assert_eq!(contrast_ratio_to_black(0.0), 1);
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let a = relative_luminance(30, 120, 200);
        let b = relative_luminance(240, 240, 20);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }
}
