//! Color value types.
//!
//! Five immutable representations share the [`ColorModel`](crate::traits::ColorModel)
//! contract; [`Color`] wraps any of them when the representation is only known
//! at runtime (parsed text, CLI input).

mod color;
mod hex;
pub(crate) mod hsl;
mod hsla;
mod rgb;
mod rgba;

pub use color::{Color, Format};
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsla::Hsla;
pub use rgb::Rgb;
pub use rgba::Rgba;
