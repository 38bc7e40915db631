use anyhow::{Context, Result};
use portal::PortalConfig;

pub(super) fn print(config: &PortalConfig) -> Result<()> {
	let text = serde_json::to_string_pretty(config).context("can not serialize config")?;
	println!("{text}");
	Ok(())
}
