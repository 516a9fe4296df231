use anyhow::Result;
use deskcal_core::config::DeskcalConfig;
use owo_colors::OwoColorize;

/// Print where config and data live, and the effective settings.
pub fn run(config: &DeskcalConfig) -> Result<()> {
    println!("{} {}", "config:".dimmed(), DeskcalConfig::config_path()?.display());
    println!("{} {}", "data:  ".dimmed(), config.data_path()?.display());
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
