//! Configuration file discovery and command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portal::PortalConfig;

use crate::cli::Cli;

/// `$XDG_CONFIG_HOME/portald/config.json`, when a config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("portald").join("config.json"))
}

/// Loads the explicit file, or the default file when it exists, or defaults.
pub fn load(explicit: Option<&Path>) -> Result<PortalConfig> {
	if let Some(path) = explicit {
		return read(path);
	}

	match default_config_path() {
		Some(path) if path.is_file() => read(&path),
		_ => Ok(PortalConfig::default()),
	}
}

/// Loads the configuration and applies `--launcher` / `--file-picker`.
pub fn resolve(cli: &Cli) -> Result<PortalConfig> {
	let mut config = load(cli.config.as_deref())?;
	if let Some(program) = &cli.launcher {
		config.launcher.program = program.clone();
	}
	if let Some(program) = &cli.file_picker {
		config.file_picker.program = program.clone();
	}
	Ok(config)
}

fn read(path: &Path) -> Result<PortalConfig> {
	let text = fs::read_to_string(path).with_context(|| format!("can not read config {}", path.display()))?;
	serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}
