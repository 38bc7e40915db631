//! Scripted helper invoker for unit testing portal handlers without subprocesses.
//!
//! # Example
//!
//! ```ignore
//! let invoker = Arc::new(ScriptedInvoker::new());
//! invoker.push_stdout("/home/user/file.txt\n");
//! invoker.push_exit(1);
//!
//! // ... drive handlers that call `invoker.invoke(...)` ...
//!
//! assert_eq!(invoker.invocations()[0].program, "zenity");
//! ```

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::error::{HelperError, Result};
use crate::process::{HelperCommand, HelperInvoker, HelperOutput};

#[derive(Debug, Clone)]
enum Outcome {
	Stdout(String),
	Exit(Option<i32>),
	NotFound,
}

/// Invoker that replays queued outcomes in FIFO order and records every command.
///
/// When the queue is empty every invocation fails with [`HelperError::NotFound`].
#[derive(Debug, Default)]
pub struct ScriptedInvoker {
	outcomes: Mutex<VecDeque<Outcome>>,
	invocations: Mutex<Vec<HelperCommand>>,
}

impl ScriptedInvoker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a successful exit printing `stdout`.
	pub fn push_stdout(&self, stdout: impl Into<String>) {
		self.outcomes.lock().push_back(Outcome::Stdout(stdout.into()));
	}

	/// Queues an exit with a non-zero status.
	pub fn push_exit(&self, code: i32) {
		self.outcomes.lock().push_back(Outcome::Exit(Some(code)));
	}

	/// Queues a termination by signal.
	pub fn push_killed(&self) {
		self.outcomes.lock().push_back(Outcome::Exit(None));
	}

	/// Queues a helper that cannot be found.
	pub fn push_not_found(&self) {
		self.outcomes.lock().push_back(Outcome::NotFound);
	}

	/// Commands seen so far, in invocation order.
	pub fn invocations(&self) -> Vec<HelperCommand> {
		self.invocations.lock().clone()
	}
}

impl HelperInvoker for ScriptedInvoker {
	fn invoke(&self, command: &HelperCommand) -> Result<HelperOutput> {
		self.invocations.lock().push(command.clone());
		let outcome = self.outcomes.lock().pop_front().unwrap_or(Outcome::NotFound);

		match outcome {
			Outcome::Stdout(stdout) => Ok(HelperOutput { stdout }),
			Outcome::Exit(code) => Err(HelperError::Exit {
				program: command.program.clone(),
				code,
			}),
			Outcome::NotFound => Err(HelperError::NotFound {
				program: command.program.clone(),
			}),
		}
	}
}
