use thiserror::Error;

pub type Result<T> = std::result::Result<T, HelperError>;

/// Failures of a single helper invocation.
#[derive(Debug, Error)]
pub enum HelperError {
	#[error("can not find {program} on PATH")]
	NotFound { program: String },

	#[error("failed to spawn {program}: {source}")]
	Spawn {
		program: String,
		#[source]
		source: std::io::Error,
	},

	#[error("{program} exited with {}", exit_description(*.code))]
	Exit { program: String, code: Option<i32> },
}

impl HelperError {
	/// Program the failed invocation targeted.
	pub fn program(&self) -> &str {
		match self {
			Self::NotFound { program } | Self::Spawn { program, .. } | Self::Exit { program, .. } => program,
		}
	}
}

fn exit_description(code: Option<i32>) -> String {
	match code {
		Some(code) => format!("status {code}"),
		None => "a signal".to_string(),
	}
}
