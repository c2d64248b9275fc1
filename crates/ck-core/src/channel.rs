use crate::error::ColorError;

/// Decode a two-digit hexadecimal channel into a byte.
///
/// Both cases are accepted; anything other than exactly two hex digits is rejected.
///
/// # Errors
/// Returns [`ColorError::InvalidChannelFormat`] for malformed input.
///
/// # Example
/// ```
/// use ck_core::channel::channel_from_hex;
/// assert_eq!(channel_from_hex("ff").unwrap(), 255);
/// assert_eq!(channel_from_hex("0A").unwrap(), 10);
/// assert!(channel_from_hex("f").is_err());
/// ```
pub fn channel_from_hex(hex: &str) -> Result<u8, ColorError> {
    // from_str_radix accepte un signe '+', on exige donc deux chiffres hex stricts.
    if hex.len() != 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidChannelFormat(hex.to_string()));
    }
    u8::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidChannelFormat(hex.to_string()))
}

/// Encode a byte as two lowercase, zero-padded hexadecimal digits.
///
/// # Example
/// ```
/// use ck_core::channel::channel_to_hex;
/// assert_eq!(channel_to_hex(10), "0a");
/// assert_eq!(channel_to_hex(255), "ff");
/// ```
#[must_use]
pub fn channel_to_hex(value: u8) -> String {
    format!("{value:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_survives_hex() {
        for v in 0..=255u8 {
            let hex = channel_to_hex(v);
            assert_eq!(hex.len(), 2);
            assert_eq!(hex, hex.to_lowercase());
            assert_eq!(channel_from_hex(&hex), Ok(v));
        }
    }

    #[test]
    fn rejects_malformed_channels() {
        for bad in ["", "0", "000", "+f", "gg", " f", "é"] {
            assert_eq!(
                channel_from_hex(bad),
                Err(ColorError::InvalidChannelFormat(bad.to_string())),
                "accepted {bad:?}"
            );
        }
    }
}
