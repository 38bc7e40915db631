//! Long-running broker process.

use std::sync::Arc;

use anyhow::{Context, Result};
use portal::{BusEmitter, PortalConfig, PortalContext, PortalServer};
use portald_runtime::SystemInvoker;
use tracing::info;
use zbus::Connection;

/// Connects to the session bus, serves the portal, and blocks until SIGINT.
pub(super) async fn run(config: PortalConfig) -> Result<()> {
	let connection = Connection::session().await.context("can not connect session bus")?;

	let emitter = Arc::new(BusEmitter::new(connection.clone()));
	let context = Arc::new(PortalContext::new(emitter, Arc::new(SystemInvoker), config));
	let server = PortalServer::start(connection, context).await.context("can not start portal")?;

	tokio::signal::ctrl_c().await.context("can not wait for shutdown signal")?;
	info!(target = "portald.server", "shutting down");
	server.stop().await.context("can not release service name")?;
	Ok(())
}
