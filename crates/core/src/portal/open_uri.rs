//! `org.freedesktop.portal.OpenURI`.
//!
//! This interface version defines no request object for `OpenURI`: the call
//! returns nothing and launch failures are only logged.

use std::sync::Arc;

use portald_protocol::{OPEN_URI_VERSION, Options};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use zbus::interface;

use super::{PortalContext, run_helper};

pub struct OpenUriPortal {
	context: Arc<PortalContext>,
}

impl OpenUriPortal {
	pub fn new(context: Arc<PortalContext>) -> Self {
		Self { context }
	}

	/// Hands `uri` to the launcher in a detached task.
	///
	/// The returned handle is only useful to tests; the bus method drops it.
	pub fn launch(&self, parent_window: &str, uri: &str, options: &Options) -> JoinHandle<()> {
		info!(target = "portald.open_uri", parent_window, uri, ?options, "enter OpenURI");

		let command = self.context.config().launcher.command(uri);
		let invoker = self.context.invoker();
		tokio::spawn(async move {
			match run_helper(invoker, command).await {
				Ok(_) => debug!(target = "portald.open_uri", "launcher finished"),
				Err(err) => warn!(target = "portald.open_uri", error = %err, "in OpenURI"),
			}
		})
	}
}

#[interface(name = "org.freedesktop.portal.OpenURI")]
impl OpenUriPortal {
	#[zbus(name = "OpenURI")]
	async fn open_uri(&self, parent_window: &str, uri: &str, options: Options) {
		drop(self.launch(parent_window, uri, &options));
	}

	#[zbus(property, name = "version")]
	async fn version(&self) -> u32 {
		OPEN_URI_VERSION
	}
}
