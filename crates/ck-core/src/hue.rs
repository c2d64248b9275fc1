use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::hsl::normalize_hue;

/// Twelve named hue buckets, each 30° wide, in color-wheel order.
///
/// # Example
/// ```
/// use ck_core::hue::HueName;
/// assert_eq!(HueName::classify(0.0), HueName::Red);
/// assert_eq!(HueName::classify(200.0), HueName::Cobalt);
/// assert_eq!(HueName::classify(350.0).as_str(), "red");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HueName {
    /// [345, 15)
    Red,
    /// [15, 45)
    Orange,
    /// [45, 75)
    Yellow,
    /// [75, 105)
    Lime,
    /// [105, 135)
    Green,
    /// [135, 165)
    Turquoise,
    /// [165, 195)
    Cyan,
    /// [195, 225)
    Cobalt,
    /// [225, 255)
    Blue,
    /// [255, 285)
    Violet,
    /// [285, 315)
    Magenta,
    /// [315, 345)
    Rose,
}

/// Lower bound of every bucket but red, which wraps across 0°.
const HUE_BUCKETS: [(f64, HueName); 11] = [
    (15.0, HueName::Orange),
    (45.0, HueName::Yellow),
    (75.0, HueName::Lime),
    (105.0, HueName::Green),
    (135.0, HueName::Turquoise),
    (165.0, HueName::Cyan),
    (195.0, HueName::Cobalt),
    (225.0, HueName::Blue),
    (255.0, HueName::Violet),
    (285.0, HueName::Magenta),
    (315.0, HueName::Rose),
];

/// Width of each bucket in degrees.
const BUCKET_WIDTH: f64 = 30.0;

impl HueName {
    /// All names in wheel order.
    pub const ALL: [HueName; 12] = [
        HueName::Red,
        HueName::Orange,
        HueName::Yellow,
        HueName::Lime,
        HueName::Green,
        HueName::Turquoise,
        HueName::Cyan,
        HueName::Cobalt,
        HueName::Blue,
        HueName::Violet,
        HueName::Magenta,
        HueName::Rose,
    ];

    /// Classify a hue angle. The angle is normalised into [0, 360) first.
    #[must_use]
    pub fn classify(hue: f64) -> Self {
        let hue = normalize_hue(hue);
        if hue >= 345.0 || hue < 15.0 {
            return HueName::Red;
        }
        HUE_BUCKETS
            .iter()
            .find(|(start, _)| hue >= *start && hue < start + BUCKET_WIDTH)
            .map_or(HueName::Red, |&(_, name)| name)
    }

    /// Lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HueName::Red => "red",
            HueName::Orange => "orange",
            HueName::Yellow => "yellow",
            HueName::Lime => "lime",
            HueName::Green => "green",
            HueName::Turquoise => "turquoise",
            HueName::Cyan => "cyan",
            HueName::Cobalt => "cobalt",
            HueName::Blue => "blue",
            HueName::Violet => "violet",
            HueName::Magenta => "magenta",
            HueName::Rose => "rose",
        }
    }
}

impl fmt::Display for HueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HueName {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        HueName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::InvalidColorString(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_edges() {
        assert_eq!(HueName::classify(344.999), HueName::Rose);
        assert_eq!(HueName::classify(345.0), HueName::Red);
        assert_eq!(HueName::classify(14.999), HueName::Red);
        assert_eq!(HueName::classify(15.0), HueName::Orange);
        assert_eq!(HueName::classify(45.0), HueName::Yellow);
        assert_eq!(HueName::classify(194.9), HueName::Cyan);
        assert_eq!(HueName::classify(195.0), HueName::Cobalt);
        assert_eq!(HueName::classify(315.0), HueName::Rose);
    }

    #[test]
    fn every_hue_has_exactly_one_bucket() {
        let mut hue = 0.0;
        while hue < 360.0 {
            let in_red = hue >= 345.0 || hue < 15.0;
            let matches = HUE_BUCKETS
                .iter()
                .filter(|(start, _)| hue >= *start && hue < start + BUCKET_WIDTH)
                .count()
                + usize::from(in_red);
            assert_eq!(matches, 1, "hue {hue} matched {matches} buckets");
            hue += 0.25;
        }
    }

    #[test]
    fn wraparound_is_continuous() {
        for hue in [345.0, 350.0, 359.99, 0.0, 5.0, 14.99, 360.0, -10.0] {
            assert_eq!(HueName::classify(hue), HueName::Red, "hue {hue}");
        }
    }

    #[test]
    fn centres_map_in_wheel_order() {
        for (i, name) in HueName::ALL.iter().enumerate() {
            assert_eq!(HueName::classify(i as f64 * 30.0), *name);
        }
    }

    #[test]
    fn names_parse_back() {
        for name in HueName::ALL {
            assert_eq!(name.to_string().parse::<HueName>(), Ok(name));
        }
        assert!("teal".parse::<HueName>().is_err());
    }
}
