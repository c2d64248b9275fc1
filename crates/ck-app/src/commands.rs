use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Result;
use ck_core::{Color, Format, HueName, PaletteConfig};
use serde::Serialize;

use crate::cli::Command;

/// Everything `info` reports about a color.
#[derive(Debug, Serialize)]
struct ColorInfo {
    hex: Color,
    rgb: Color,
    rgba: Color,
    hsl: Color,
    hsla: Color,
    name: HueName,
    luminance: f64,
    contrast_ratio: u32,
}

impl ColorInfo {
    fn of(color: &Color) -> Self {
        Self {
            hex: color.convert(Format::Hex),
            rgb: color.convert(Format::Rgb),
            rgba: color.convert(Format::Rgba),
            hsl: color.convert(Format::Hsl),
            hsla: color.convert(Format::Hsla),
            name: color.to_color_name(),
            luminance: color.luminance(),
            contrast_ratio: color.contrast_ratio(),
        }
    }
}

/// Exécute une commande et renvoie la sortie à afficher.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(command: &Command, config: &PaletteConfig, json: bool) -> Result<String> {
    match command {
        Command::Convert { color, to } => {
            let converted = color.convert(to.unwrap_or(config.format));
            log::debug!("convert {color} -> {converted}");
            single(&converted, json)
        }
        Command::Info { color } => {
            let info = ColorInfo::of(color);
            if json {
                return Ok(serde_json::to_string_pretty(&info)?);
            }
            let mut out = String::new();
            for (label, value) in [
                ("hex", info.hex),
                ("rgb", info.rgb),
                ("rgba", info.rgba),
                ("hsl", info.hsl),
                ("hsla", info.hsla),
            ] {
                writeln!(out, "{label:<10} {value}")?;
            }
            writeln!(out, "{:<10} {}", "name", info.name)?;
            writeln!(out, "{:<10} {:.2}", "luminance", info.luminance)?;
            write!(out, "{:<10} {}", "contrast", info.contrast_ratio)?;
            Ok(out)
        }
        Command::Scale { color, to } => {
            let format = to.unwrap_or(config.format);
            let palette: BTreeMap<u32, Color> = color
                .to_luminance_scale(&config.scale, config.precision)
                .into_iter()
                .map(|(key, c)| (key, c.convert(format)))
                .collect();
            table(&palette, json)
        }
        Command::Wheel { color, to } => {
            let format = to.unwrap_or(config.format);
            let wheel: BTreeMap<HueName, Color> = color
                .to_color_wheel()
                .into_iter()
                .map(|(name, c)| (name, c.convert(format)))
                .collect();
            table(&wheel, json)
        }
        Command::Mix {
            color,
            other,
            weight,
        } => {
            let weight = weight.unwrap_or(config.mix_weight);
            let mixed = color.mix(other, weight);
            log::debug!("mix {color} + {other} @ {weight} -> {mixed}");
            single(&mixed, json)
        }
    }
}

fn single(color: &Color, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(color)?)
    } else {
        Ok(color.to_string())
    }
}

/// One `key color` line per entry, or a JSON object.
fn table<K>(entries: &BTreeMap<K, Color>, json: bool) -> Result<String>
where
    K: Ord + Serialize + std::fmt::Display,
{
    if json {
        return Ok(serde_json::to_string_pretty(entries)?);
    }
    let lines: Vec<String> = entries
        .iter()
        .map(|(key, color)| format!("{:<10} {color}", key.to_string()))
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(text: &str) -> Color {
        text.parse().unwrap()
    }

    #[test]
    fn convert_uses_configured_format_by_default() {
        let config = PaletteConfig {
            format: Format::Hsl,
            ..PaletteConfig::default()
        };
        let cmd = Command::Convert {
            color: color("#ff0000"),
            to: None,
        };
        assert_eq!(render(&cmd, &config, false).unwrap(), "hsl(0,100%,50%)");

        let cmd = Command::Convert {
            color: color("#ff0000"),
            to: Some(Format::Rgb),
        };
        assert_eq!(render(&cmd, &config, true).unwrap(), "\"rgb(255,0,0)\"");
    }

    #[test]
    fn info_lists_every_form() {
        let cmd = Command::Info {
            color: color("rgb(255,255,255)"),
        };
        let out = render(&cmd, &PaletteConfig::default(), false).unwrap();
        assert!(out.contains("#ffffff"));
        assert!(out.contains("hsla(0,0%,100%,1)"));
        assert!(out.ends_with("contrast   21"));

        let json = render(&cmd, &PaletteConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hex"], "#ffffff");
        assert_eq!(value["name"], "red");
        assert_eq!(value["contrast_ratio"], 21);
    }

    #[test]
    fn scale_follows_configured_table() {
        let cmd = Command::Scale {
            color: color("#ff0000"),
            to: None,
        };
        let out = render(&cmd, &PaletteConfig::default(), false).unwrap();
        assert_eq!(out.lines().count(), 10);
        assert!(out.contains("500        #ff3333"));

        let config = PaletteConfig {
            scale: ck_core::LuminanceScale::new([(1, 24.0)]).unwrap(),
            ..PaletteConfig::default()
        };
        let json = render(&cmd, &config, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["1"], "#ff3333");
    }

    #[test]
    fn wheel_has_twelve_entries() {
        let cmd = Command::Wheel {
            color: color("hsl(0,100%,50%)"),
            to: Some(Format::Hsl),
        };
        let out = render(&cmd, &PaletteConfig::default(), false).unwrap();
        assert_eq!(out.lines().count(), 12);
        assert!(out.contains("blue       hsl(240,100%,50%)"));
    }

    #[test]
    fn mix_keeps_first_format() {
        let cmd = Command::Mix {
            color: color("hsla(0,100%,50%,0.5)"),
            other: color("#0000ff"),
            weight: None,
        };
        assert_eq!(
            render(&cmd, &PaletteConfig::default(), false).unwrap(),
            "hsla(300,100%,25%,0.5)"
        );
    }
}
