use anyhow::Result;
use ck_core::PaletteConfig;
use clap::Parser;

pub mod cli;
pub mod commands;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let config = resolve_config(&cli)?;

    // 4. Exécuter la commande
    let output = commands::render(&cli.command, &config, cli.json)?;
    println!("{output}");
    Ok(())
}

/// Load the config file, or fall back to defaults when it does not exist.
fn resolve_config(cli: &cli::Cli) -> Result<PaletteConfig> {
    if cli.config.exists() {
        ck_core::config::load_config(&cli.config)
    } else {
        log::info!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(PaletteConfig::default())
    }
}
