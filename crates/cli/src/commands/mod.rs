mod config;
mod serve;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub async fn dispatch(cli: Cli) -> Result<()> {
	let resolved = crate::config::resolve(&cli)?;

	match cli.command.unwrap_or_default() {
		Commands::Serve => serve::run(resolved).await?,
		Commands::Config => config::print(&resolved)?,
	}

	Ok(())
}
