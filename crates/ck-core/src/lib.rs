/// Color values, conversions and derived palettes for chromakit.
///
/// This crate holds the five color representations, the luminance model,
/// the luminance → lightness search and the palette generators shared by
/// the CLI.

pub mod channel;
pub mod config;
pub mod error;
pub mod hsl;
pub mod hue;
pub mod inverse;
pub mod luminance;
pub mod palette;
mod parse;
pub mod traits;
pub mod value;

pub use config::PaletteConfig;
pub use error::ColorError;
pub use hue::HueName;
pub use palette::LuminanceScale;
pub use traits::ColorModel;
pub use value::{Color, Format, Hex, Hsl, Hsla, Rgb, Rgba};
