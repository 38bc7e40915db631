use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "portald")]
#[command(about = "Desktop portal broker for sandboxed applications")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Configuration file (defaults to $XDG_CONFIG_HOME/portald/config.json)
	#[arg(short, long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// URI launcher program, replacing the configured one
	#[arg(long, global = true, value_name = "PROGRAM")]
	pub launcher: Option<String>,

	/// File picker program, replacing the configured one
	#[arg(long, global = true, value_name = "PROGRAM")]
	pub file_picker: Option<String>,

	#[command(subcommand)]
	pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commands {
	/// Claim org.freedesktop.portal.Desktop and serve requests (default)
	#[default]
	Serve,

	/// Print the resolved configuration as JSON
	Config,
}
