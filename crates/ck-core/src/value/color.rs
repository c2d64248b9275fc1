use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::hue::HueName;
use crate::palette::LuminanceScale;
use crate::traits::ColorModel;
use crate::value::{Hex, Hsl, Hsla, Rgb, Rgba};

/// Names a color representation.
///
/// # Example
/// ```
/// use ck_core::value::Format;
/// assert_eq!("hsla".parse::<Format>().unwrap(), Format::Hsla);
/// assert_eq!(Format::default(), Format::Hex);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r,g,b)`
    Rgb,
    /// `rgba(r,g,b,a)`
    Rgba,
    /// `hsl(h,s%,l%)`
    Hsl,
    /// `hsla(h,s%,l%,a)`
    Hsla,
}

impl Format {
    /// All formats, in declaration order.
    pub const ALL: [Format; 5] = [
        Format::Hex,
        Format::Rgb,
        Format::Rgba,
        Format::Hsl,
        Format::Hsla,
    ];

    /// Lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::Hsl => "hsl",
            Format::Hsla => "hsla",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Format::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::InvalidColorString(s.to_string()))
    }
}

/// Any color, when the representation is only known at runtime.
///
/// Operations preserve the variant, like the typed [`ColorModel`] API.
///
/// # Example
/// ```
/// use ck_core::value::{Color, Format};
///
/// let color: Color = "rgb(255,0,0)".parse().unwrap();
/// assert_eq!(color.format(), Format::Rgb);
/// assert_eq!(color.convert(Format::Hsl).to_string(), "hsl(0,100%,50%)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum Color {
    /// Hexadecimal channels.
    Hex(Hex),
    /// Opaque RGB.
    Rgb(Rgb),
    /// RGB with alpha.
    Rgba(Rgba),
    /// Opaque HSL.
    Hsl(Hsl),
    /// HSL with alpha.
    Hsla(Hsla),
}

/// Evaluate `$body` with `$c` bound to the wrapped value of any variant.
macro_rules! each_variant {
    ($value:expr, $c:ident => $body:expr) => {
        match $value {
            Color::Hex($c) => $body,
            Color::Rgb($c) => $body,
            Color::Rgba($c) => $body,
            Color::Hsl($c) => $body,
            Color::Hsla($c) => $body,
        }
    };
}

impl Color {
    /// Representation of the wrapped value.
    #[must_use]
    pub fn format(&self) -> Format {
        match self {
            Color::Hex(_) => Format::Hex,
            Color::Rgb(_) => Format::Rgb,
            Color::Rgba(_) => Format::Rgba,
            Color::Hsl(_) => Format::Hsl,
            Color::Hsla(_) => Format::Hsla,
        }
    }

    /// Convert into another representation. Alpha is kept when the target has one.
    #[must_use]
    pub fn convert(&self, format: Format) -> Color {
        match format {
            Format::Hex => Color::Hex(self.to_hex()),
            Format::Rgb => Color::Rgb(self.to_rgb()),
            Format::Rgba => Color::Rgba(self.to_rgba()),
            Format::Hsl => Color::Hsl(self.to_hsl()),
            Format::Hsla => Color::Hsla(self.to_hsla()),
        }
    }

    /// See [`ColorModel::to_hex`].
    #[must_use]
    pub fn to_hex(&self) -> Hex {
        each_variant!(self, c => c.to_hex())
    }

    /// See [`ColorModel::to_rgb`].
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        each_variant!(self, c => c.to_rgb())
    }

    /// See [`ColorModel::to_rgba`].
    #[must_use]
    pub fn to_rgba(&self) -> Rgba {
        each_variant!(self, c => c.to_rgba())
    }

    /// See [`ColorModel::to_hsl`].
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        each_variant!(self, c => c.to_hsl())
    }

    /// See [`ColorModel::to_hsla`].
    #[must_use]
    pub fn to_hsla(&self) -> Hsla {
        each_variant!(self, c => c.to_hsla())
    }

    /// See [`ColorModel::alpha`].
    #[must_use]
    pub fn alpha(&self) -> f64 {
        each_variant!(self, c => ColorModel::alpha(c))
    }

    /// See [`ColorModel::luminance`].
    #[must_use]
    pub fn luminance(&self) -> f64 {
        each_variant!(self, c => c.luminance())
    }

    /// See [`ColorModel::contrast_ratio`].
    #[must_use]
    pub fn contrast_ratio(&self) -> u32 {
        each_variant!(self, c => c.contrast_ratio())
    }

    /// See [`ColorModel::contrast_ratio_with`].
    #[must_use]
    pub fn contrast_ratio_with(&self, other: &Color) -> u32 {
        each_variant!(self, c => c.contrast_ratio_with(&other.to_rgb()))
    }

    /// See [`ColorModel::to_color_name`].
    #[must_use]
    pub fn to_color_name(&self) -> HueName {
        each_variant!(self, c => c.to_color_name())
    }

    /// See [`ColorModel::mix`]; the result has this color's variant and alpha.
    #[must_use]
    pub fn mix(&self, other: &Color, weight: f64) -> Color {
        let other = other.to_rgb();
        each_variant!(self, c => Color::from(c.mix(&other, weight)))
    }

    /// See [`ColorModel::to_color_wheel`].
    #[must_use]
    pub fn to_color_wheel(&self) -> BTreeMap<HueName, Color> {
        each_variant!(self, c => c
            .to_color_wheel()
            .into_iter()
            .map(|(name, v)| (name, Color::from(v)))
            .collect())
    }

    /// See [`ColorModel::to_luminance_scale_with_precision`].
    #[must_use]
    pub fn to_luminance_scale(
        &self,
        scale: &LuminanceScale,
        precision: f64,
    ) -> BTreeMap<u32, Color> {
        each_variant!(self, c => c
            .to_luminance_scale_with_precision(scale, precision)
            .into_iter()
            .map(|(key, v)| (key, Color::from(v)))
            .collect())
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Color::Rgba(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}

impl From<Hsla> for Color {
    fn from(value: Hsla) -> Self {
        Color::Hsla(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_variant!(self, c => fmt::Display::fmt(c, f))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse any canonical form, dispatching on its prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let head = s.trim_start().get(..5).unwrap_or(s.trim_start()).to_ascii_lowercase();
        if head.starts_with('#') {
            s.parse().map(Color::Hex)
        } else if head.starts_with("rgba(") {
            s.parse().map(Color::Rgba)
        } else if head.starts_with("rgb(") {
            s.parse().map(Color::Rgb)
        } else if head.starts_with("hsla(") {
            s.parse().map(Color::Hsla)
        } else if head.starts_with("hsl(") {
            s.parse().map(Color::Hsl)
        } else {
            Err(ColorError::InvalidColorString(s.to_string()))
        }
    }
}
