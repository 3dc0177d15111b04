use anyhow::{Context, Result};

use crate::config::Config;

pub fn handle_config_command() -> Result<()> {
    let config = Config::load()?;
    let rendered =
        toml::to_string_pretty(&config.redacted()).context("Failed to serialize config")?;
    print!("{}", rendered);
    Ok(())
}
