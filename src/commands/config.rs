//! Config commands

use autosupport_console::config::DEFAULT_API_URL;
use autosupport_console::FileConfig;

use super::CommandResult;
use crate::ConfigCommands;

const KEYS: [&str; 3] = ["api_url", "timeout_secs", "default_format"];

pub fn handle(action: ConfigCommands, profile: Option<&str>) -> CommandResult {
    match action {
        ConfigCommands::Init => {
            let config = FileConfig { api_url: Some(DEFAULT_API_URL.to_string()), ..FileConfig::default() };
            let path = config.save(profile)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = FileConfig::load(profile)?;
            config.set(&key, value)?;
            config.save(profile)?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let config = FileConfig::load(profile)?;
            let value = config.get(&key)?;
            println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
        }
        ConfigCommands::List => {
            let config = FileConfig::load(profile)?;
            for key in KEYS {
                let value = config.get(key)?;
                println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
            }
        }
    }
    Ok(())
}
