use anyhow::{Context, Result};

use crate::config::Config;

use super::args::{ConfigCliArgs, ConfigCommand};

pub fn handle_config_command(args: ConfigCliArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            println!("{content}");
        }
        ConfigCommand::Path => {
            println!("{}", Config::config_path()?.display());
        }
        ConfigCommand::Init => {
            let path = Config::config_path()?;
            Config::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
