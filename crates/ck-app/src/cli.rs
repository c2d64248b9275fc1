use std::path::PathBuf;

use ck_core::{Color, Format};
use clap::{Parser, Subcommand};

/// chromakit — color conversions, luminance scales and color wheels.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML. Défaut : chromakit.toml.
    #[arg(short, long, default_value = "chromakit.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print results as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convertir une couleur vers une autre représentation.
    Convert {
        /// Couleur d'entrée : #rrggbb, rgb(), rgba(), hsl() ou hsla().
        color: Color,
        /// Target format (default: configured format).
        #[arg(long)]
        to: Option<Format>,
    },
    /// Show every representation, the hue name, luminance and contrast.
    Info {
        /// Couleur d'entrée.
        color: Color,
    },
    /// Tint/shade scale matching the configured luminance targets.
    Scale {
        /// Couleur de base (la teinte et la saturation sont conservées).
        color: Color,
        /// Output format (default: configured format).
        #[arg(long)]
        to: Option<Format>,
    },
    /// Twelve colors rotated by 30° from the base hue.
    Wheel {
        /// Couleur de base.
        color: Color,
        /// Output format (default: configured format).
        #[arg(long)]
        to: Option<Format>,
    },
    /// Mix two colors in RGB space; the result keeps the first color's format.
    Mix {
        /// Première couleur (format et alpha conservés).
        color: Color,
        /// Seconde couleur.
        other: Color,
        /// Weight of the first color in [0, 1] (default: configured weight).
        #[arg(long)]
        weight: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_and_subcommand() {
        let cli = Cli::try_parse_from([
            "chromakit",
            "--json",
            "--log-level",
            "debug",
            "convert",
            "#ff0000",
            "--to",
            "hsl",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.config, PathBuf::from("chromakit.toml"));
        match cli.command {
            Command::Convert { color, to } => {
                assert_eq!(color.format(), Format::Hex);
                assert_eq!(to, Some(Format::Hsl));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_color() {
        assert!(Cli::try_parse_from(["chromakit", "info", "rgb(300,0,0)"]).is_err());
        assert!(Cli::try_parse_from(["chromakit", "wheel", "#ff0000", "--to", "cmyk"]).is_err());
    }

    #[test]
    fn mix_takes_two_colors() {
        let cli = Cli::try_parse_from([
            "chromakit",
            "mix",
            "hsla(0,100%,50%,0.5)",
            "#0000ff",
            "--weight",
            "0.25",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Mix {
                weight: Some(w),
                ..
            } if w == 0.25
        ));
    }
}
