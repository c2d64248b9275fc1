use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::inverse::DEFAULT_PRECISION;
use crate::palette::LuminanceScale;
use crate::traits::DEFAULT_MIX_WEIGHT;
use crate::value::Format;

/// Smallest accepted refinement step.
const MIN_PRECISION: f64 = 0.0001;

/// Configuration des palettes générées.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ck_core::config::PaletteConfig;
/// let config = PaletteConfig::default();
/// assert_eq!(config.precision, 0.01);
/// assert_eq!(config.scale.steps().len(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PaletteConfig {
    /// Pas de raffinement de la recherche de luminance [0.0001, 1.0].
    pub precision: f64,
    /// Output representation for generated colors.
    pub format: Format,
    /// Weight of the first color in a mix [0.0, 1.0].
    pub mix_weight: f64,
    /// Luminance targets of the tint/shade ramp.
    pub scale: LuminanceScale,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            format: Format::Hex,
            mix_weight: DEFAULT_MIX_WEIGHT,
            scale: LuminanceScale::default(),
        }
    }
}

impl PaletteConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.precision = if self.precision.is_nan() {
            DEFAULT_PRECISION
        } else {
            self.precision.clamp(MIN_PRECISION, 1.0)
        };
        self.mix_weight = if self.mix_weight.is_nan() {
            DEFAULT_MIX_WEIGHT
        } else {
            self.mix_weight.clamp(0.0, 1.0)
        };
        self.scale.clamp_all();
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    palette: Option<PaletteSection>,
    scale: Option<LuminanceScale>,
}

/// Palette section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct PaletteSection {
    precision: Option<f64>,
    format: Option<Format>,
    mix_weight: Option<f64>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this layout.
///
/// # Example
/// ```
/// use ck_core::config::parse_config;
/// let config = parse_config("[palette]\nformat = \"rgb\"\n").unwrap();
/// assert_eq!(config.format, ck_core::value::Format::Rgb);
/// assert_eq!(config.precision, 0.01);
/// ```
pub fn parse_config(content: &str) -> Result<PaletteConfig> {
    let file: ConfigFile = toml::from_str(content).context("Invalid palette configuration")?;

    let mut config = PaletteConfig::default();

    if let Some(p) = file.palette {
        if let Some(v) = p.precision {
            config.precision = v;
        }
        if let Some(v) = p.format {
            config.format = v;
        }
        if let Some(v) = p.mix_weight {
            config.mix_weight = v;
        }
    }
    if let Some(v) = file.scale {
        config.scale = v;
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ck_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("chromakit.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<PaletteConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let config = parse_config(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    log::info!(
        "Loaded {} ({} scale steps, precision {})",
        path.display(),
        config.scale.steps().len(),
        config.precision
    );
    Ok(config)
}
