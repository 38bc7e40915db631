//! Portal interface handlers.
//!
//! Each handler is bound to one `org.freedesktop.portal.*` interface and holds a
//! shared [`PortalContext`]. Handlers that need host interaction detach a task
//! and return to the bus dispatcher without waiting for it.

mod file_chooser;
mod open_uri;
mod settings;

use std::sync::Arc;

use portald_runtime::{HelperCommand, HelperInvoker, HelperOutput};

use crate::bus::ResponseEmitter;
use crate::config::PortalConfig;
use crate::error::{PortalError, Result};
use crate::settings::SettingsTable;

pub use file_chooser::{FileChooserPortal, Selection, selection_results};
pub use open_uri::OpenUriPortal;
pub use settings::{SettingsError, SettingsPortal};

/// State shared by every interface handler.
pub struct PortalContext {
	emitter: Arc<dyn ResponseEmitter>,
	invoker: Arc<dyn HelperInvoker>,
	config: PortalConfig,
	settings: SettingsTable,
}

impl PortalContext {
	pub fn new(emitter: Arc<dyn ResponseEmitter>, invoker: Arc<dyn HelperInvoker>, config: PortalConfig) -> Self {
		Self {
			emitter,
			invoker,
			config,
			settings: SettingsTable::builtin(),
		}
	}

	pub fn emitter(&self) -> Arc<dyn ResponseEmitter> {
		Arc::clone(&self.emitter)
	}

	pub fn invoker(&self) -> Arc<dyn HelperInvoker> {
		Arc::clone(&self.invoker)
	}

	pub fn config(&self) -> &PortalConfig {
		&self.config
	}

	pub fn settings(&self) -> &SettingsTable {
		&self.settings
	}
}

/// Runs `command` on the blocking pool and waits for it.
pub(crate) async fn run_helper(invoker: Arc<dyn HelperInvoker>, command: HelperCommand) -> Result<HelperOutput> {
	let output = tokio::task::spawn_blocking(move || invoker.invoke(&command))
		.await
		.map_err(|err| PortalError::Context(format!("helper task failed: {err}")))??;
	Ok(output)
}
