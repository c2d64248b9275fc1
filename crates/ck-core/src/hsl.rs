/// Normalise any finite hue into [0, 360).
///
/// # Example
/// ```
/// use ck_core::hsl::normalize_hue;
/// assert_eq!(normalize_hue(-30.0), 330.0);
/// assert_eq!(normalize_hue(720.0), 0.0);
/// ```
#[inline]
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    ((hue % 360.0) + 360.0) % 360.0
}

/// Convertit RGB [0,255] → HSL. H ∈ [0.0, 360.0), S ∈ [0.0, 100.0], L ∈ [0.0, 100.0].
///
/// # Example
/// ```
/// use ck_core::hsl::rgb_to_hsl;
/// let (h, s, l) = rgb_to_hsl(255, 0, 0);
/// assert_eq!(h, 0.0);
/// assert_eq!(s, 100.0);
/// assert_eq!(l, 50.0);
/// ```
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if (max - r).abs() < f64::EPSILON {
        60.0 * (((g - b) / delta) % 6.0)
    } else if (max - g).abs() < f64::EPSILON {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    let l = (max + min) / 2.0;
    let s = if l > 0.0 && l < 1.0 {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    } else {
        0.0
    };

    (h, s.min(1.0) * 100.0, l.min(1.0) * 100.0)
}

/// Convertit HSL → RGB [0,255]. H any finite angle, S and L ∈ [0.0, 100.0].
///
/// The hue is truncated to whole degrees, then normalised. Sextants are closed
/// on their upper bound: `[0,60]`, `(60,120]`, `(120,180]`, `(180,240]`,
/// `(240,300]`, `(300,360]`. Channels are rounded half away from zero, then
/// clamped.
///
/// Only whole degrees reach the projection, so an RGB → HSL → RGB round trip
/// can drift by up to `(max - min) / 60` on top of rounding.
///
/// # Example
/// ```
/// use ck_core::hsl::hsl_to_rgb;
/// assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
/// assert_eq!(hsl_to_rgb(-120.0, 100.0, 50.0), (0, 0, 255));
/// assert_eq!(hsl_to_rgb(200.0, 50.0, 50.0), (64, 149, 191));
/// ```
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    // Whole degrees only, truncated toward zero.
    let h = normalize_hue(hue.trunc());
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h <= 60.0 {
        (c, x, 0.0)
    } else if h <= 120.0 {
        (x, c, 0.0)
    } else if h <= 180.0 {
        (0.0, c, x)
    } else if h <= 240.0 {
        (0.0, x, c)
    } else if h <= 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
