//! Synchronous helper process invocation.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HelperError, Result};

/// Program plus fixed arguments of an external helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperCommand {
	pub program: String,
	#[serde(default)]
	pub args: Vec<String>,
}

impl HelperCommand {
	pub fn new(program: impl Into<String>) -> Self {
		Self {
			program: program.into(),
			args: Vec::new(),
		}
	}

	/// Appends one argument.
	pub fn arg(mut self, arg: impl Into<String>) -> Self {
		self.args.push(arg.into());
		self
	}

	/// Appends several arguments in order.
	pub fn args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.args.extend(args.into_iter().map(Into::into));
		self
	}
}

impl fmt::Display for HelperCommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.program)?;
		for arg in &self.args {
			write!(f, " {arg}")?;
		}
		Ok(())
	}
}

/// Captured result of a helper that exited with status 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelperOutput {
	pub stdout: String,
}

/// Runs a helper to completion and reports its outcome.
///
/// Implementations block the calling thread; async callers are expected to
/// move the call onto a blocking worker.
pub trait HelperInvoker: Send + Sync {
	fn invoke(&self, command: &HelperCommand) -> Result<HelperOutput>;
}

/// Invoker that spawns real processes found on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInvoker;

impl HelperInvoker for SystemInvoker {
	fn invoke(&self, command: &HelperCommand) -> Result<HelperOutput> {
		let path = resolve_program(&command.program)?;
		debug!(target = "portald.helper", program = %path.display(), args = ?command.args, "spawning helper");

		let output = Command::new(&path)
			.args(&command.args)
			.stdin(Stdio::null())
			.stderr(Stdio::inherit())
			.output()
			.map_err(|source| HelperError::Spawn {
				program: command.program.clone(),
				source,
			})?;

		if !output.status.success() {
			return Err(HelperError::Exit {
				program: command.program.clone(),
				code: output.status.code(),
			});
		}

		debug!(target = "portald.helper", program = %command.program, bytes = output.stdout.len(), "helper exited successfully");
		Ok(HelperOutput {
			stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
		})
	}
}

/// Resolves `program` on `PATH`; absolute and relative paths are checked as given.
pub fn resolve_program(program: &str) -> Result<PathBuf> {
	which::which(program).map_err(|_| HelperError::NotFound {
		program: program.to_string(),
	})
}
