//! `org.freedesktop.portal.FileChooser`.
//!
//! `OpenFile` answers with a request path immediately and runs the picker in a
//! detached task:
//!
//! ```text
//! Created --(picker exits 0)--> Response(0, {uris})
//!         --(spawn fails or exit != 0)--> Response(1, {})
//! ```

use std::sync::Arc;

use portald_protocol::{DIRECTORY, FILE_CHOOSER_VERSION, MULTIPLE, Options, OptionsExt, ResponseCode, ResponseResults};
use portald_runtime::HelperCommand;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use zbus::message::Header;
use zbus::{fdo, interface};
use zvariant::OwnedObjectPath;

use super::{PortalContext, run_helper};
use crate::config::FilePickerConfig;
use crate::error::Result;
use crate::request::Request;

/// What the caller asked the picker to select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
	pub multiple: bool,
	pub directory: bool,
}

impl Selection {
	pub fn from_options(options: &Options) -> Result<Self> {
		Ok(Self {
			multiple: options.flag(MULTIPLE)?,
			directory: options.flag(DIRECTORY)?,
		})
	}
}

pub struct FileChooserPortal {
	context: Arc<PortalContext>,
}

impl FileChooserPortal {
	pub fn new(context: Arc<PortalContext>) -> Self {
		Self { context }
	}

	/// Creates the request for `sender` and starts the picker.
	///
	/// Option errors are returned before any task is spawned. The handle of the
	/// detached task is returned for tests; the bus method drops it.
	pub fn start_open_file(
		&self,
		sender: &str,
		parent_window: &str,
		title: &str,
		options: &Options,
	) -> Result<(OwnedObjectPath, JoinHandle<()>)> {
		info!(target = "portald.file_chooser", sender, parent_window, title, ?options, "enter OpenFile");

		let token = options.handle_token()?;
		let selection = Selection::from_options(options)?;
		let request = Request::new(self.context.emitter(), sender, token)?;
		let path = request.path().clone();

		let command = picker_command(&self.context.config().file_picker, title, selection);
		let invoker = self.context.invoker();
		let task = tokio::spawn(async move {
			let (code, results) = match run_helper(invoker, command).await {
				Ok(output) => selection_results(&output.stdout, selection.multiple),
				Err(err) => {
					warn!(target = "portald.file_chooser", path = request.path().as_str(), error = %err, "picker failed");
					(ResponseCode::Cancelled, ResponseResults::empty())
				}
			};

			if let Err(err) = request.respond(code, results).await {
				debug!(target = "portald.file_chooser", error = %err, "in OpenFile");
			}
		});

		Ok((path, task))
	}
}

#[interface(name = "org.freedesktop.portal.FileChooser")]
impl FileChooserPortal {
	async fn open_file(
		&self,
		#[zbus(header)] header: Header<'_>,
		parent_window: &str,
		title: &str,
		options: Options,
	) -> fdo::Result<OwnedObjectPath> {
		let sender = header
			.sender()
			.ok_or_else(|| fdo::Error::Failed("message has no sender".to_string()))?;
		let (path, _task) = self.start_open_file(sender.as_str(), parent_window, title, &options)?;
		Ok(path)
	}

	#[zbus(property, name = "version")]
	async fn version(&self) -> u32 {
		FILE_CHOOSER_VERSION
	}
}

fn picker_command(config: &FilePickerConfig, title: &str, selection: Selection) -> HelperCommand {
	let mut command = HelperCommand::new(&config.program).args(config.args.iter().cloned());

	if let Some(flag) = config.title_flag.as_deref().filter(|_| !title.is_empty()) {
		command = command.arg(format!("{flag}={title}"));
	}
	if selection.directory {
		if let Some(flag) = &config.directory_flag {
			command = command.arg(flag);
		}
	}
	if selection.multiple {
		command = command.args(config.multiple_flags.iter().cloned());
	}
	command
}

/// Maps picker output to a response.
///
/// Single selection always succeeds with the whole trimmed output as one path,
/// even when that path is empty. Multiple selection takes one path per
/// non-empty line, and a multiple selection with no lines is a cancellation.
pub fn selection_results(stdout: &str, multiple: bool) -> (ResponseCode, ResponseResults) {
	if !multiple {
		return (ResponseCode::Success, ResponseResults::with_uris(vec![file_uri(stdout.trim())]));
	}

	let uris: Vec<String> = stdout
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(file_uri)
		.collect();
	if uris.is_empty() {
		return (ResponseCode::Cancelled, ResponseResults::empty());
	}
	(ResponseCode::Success, ResponseResults::with_uris(uris))
}

fn file_uri(path: &str) -> String {
	format!("file://{path}")
}
