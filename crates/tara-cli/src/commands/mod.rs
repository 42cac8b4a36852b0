//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::Path;

use tara_core::ParserConfig;

/// Load the parser configuration, preferring an explicit path.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ParserConfig> {
    match config_path {
        Some(path) => Ok(ParserConfig::from_file(Path::new(path))?),
        None => {
            let default_path = config::default_config_path();
            if default_path.exists() {
                Ok(ParserConfig::from_file(&default_path)?)
            } else {
                Ok(ParserConfig::default())
            }
        }
    }
}
