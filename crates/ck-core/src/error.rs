use thiserror::Error;

/// Errors raised when building a color value.
///
/// Every variant is reported at construction time; conversions between
/// already-valid colors never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// RGB channel outside [0, 255].
    #[error("Invalid {channel} channel value: {value} (expected 0..=255)")]
    InvalidChannelValue {
        /// Channel name (`red`, `green`, `blue`).
        channel: &'static str,
        /// Rejected value.
        value: i64,
    },

    /// HSL saturation or lightness outside [0, 100].
    #[error("Invalid {component} value: {value} (expected 0..=100)")]
    InvalidPercentageValue {
        /// Component name (`saturation`, `lightness`, `luminance`).
        component: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Alpha outside [0, 1].
    #[error("Invalid alpha value: {0} (expected 0..=1)")]
    InvalidAlphaValue(f64),

    /// Hex channel that is not exactly two hexadecimal digits.
    #[error("Invalid hex channel: {0:?} (expected two hex digits)")]
    InvalidChannelFormat(String),

    /// Hue that is NaN or infinite.
    #[error("Invalid hue value: {0} (expected a finite angle)")]
    InvalidHueValue(f64),

    /// Text that matches none of the canonical color forms.
    #[error("Unrecognized color string: {0:?}")]
    InvalidColorString(String),
}

/// Ensure an RGB channel lies in [0, 255] and narrow it to a byte.
///
/// # Errors
/// Returns [`ColorError::InvalidChannelValue`] when out of range.
pub(crate) fn check_channel(channel: &'static str, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::InvalidChannelValue { channel, value })
}

/// Ensure a saturation/lightness percentage lies in [0, 100].
///
/// # Errors
/// Returns [`ColorError::InvalidPercentageValue`] when out of range or NaN.
pub(crate) fn check_percentage(component: &'static str, value: f64) -> Result<f64, ColorError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::InvalidPercentageValue { component, value })
    }
}

/// Ensure an alpha value lies in [0, 1].
///
/// # Errors
/// Returns [`ColorError::InvalidAlphaValue`] when out of range or NaN.
pub(crate) fn check_alpha(value: f64) -> Result<f64, ColorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::InvalidAlphaValue(value))
    }
}

/// Ensure a hue is finite. Any finite angle is accepted.
///
/// # Errors
/// Returns [`ColorError::InvalidHueValue`] for NaN or infinities.
pub(crate) fn check_hue(value: f64) -> Result<f64, ColorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::InvalidHueValue(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_bounds() {
        assert_eq!(check_channel("red", 0), Ok(0));
        assert_eq!(check_channel("red", 255), Ok(255));
        assert_eq!(
            check_channel("green", 256),
            Err(ColorError::InvalidChannelValue {
                channel: "green",
                value: 256
            })
        );
        assert!(check_channel("blue", -1).is_err());
    }

    #[test]
    fn percentage_rejects_nan() {
        assert!(check_percentage("saturation", f64::NAN).is_err());
        assert!(check_percentage("lightness", 100.5).is_err());
        assert_eq!(check_percentage("lightness", 100.0), Ok(100.0));
    }

    #[test]
    fn alpha_and_hue() {
        assert!(check_alpha(1.01).is_err());
        assert_eq!(check_alpha(0.0), Ok(0.0));
        assert!(check_hue(f64::INFINITY).is_err());
        assert_eq!(check_hue(-725.0), Ok(-725.0));
    }

    #[test]
    fn messages_name_the_component() {
        let err = check_percentage("saturation", 120.0).unwrap_err();
        assert!(err.to_string().contains("saturation"));
    }
}
