//! Bootstrap: export the portal interfaces and claim the service name.

use std::sync::Arc;

use portald_protocol::{FILE_CHOOSER_INTERFACE, OBJECT_PATH, OPEN_URI_INTERFACE, SERVICE_NAME, SETTINGS_INTERFACE};
use tracing::info;
use zbus::fdo::{RequestNameFlags, RequestNameReply};
use zbus::object_server::Interface;
use zbus::{Connection, ObjectServer};

use crate::error::{PortalError, Result};
use crate::portal::{FileChooserPortal, OpenUriPortal, PortalContext, SettingsPortal};

/// A broker that owns `org.freedesktop.portal.Desktop` on a connection.
pub struct PortalServer {
	connection: Connection,
}

impl PortalServer {
	/// Exports every interface at the portal object path, then claims the
	/// service name without queueing.
	///
	/// # Errors
	///
	/// Returns error if:
	/// - An interface is already exported at the portal path
	/// - The bus rejects the export or the name request
	/// - Another process owns the service name
	pub async fn start(connection: Connection, context: Arc<PortalContext>) -> Result<Self> {
		export_portals(&connection, context).await?;
		claim_name(&connection).await?;
		info!(target = "portald.server", name = SERVICE_NAME, path = OBJECT_PATH, "portal ready");

		Ok(Self { connection })
	}

	/// Releases the service name.
	pub async fn stop(self) -> Result<()> {
		self.connection.release_name(SERVICE_NAME).await?;
		info!(target = "portald.server", name = SERVICE_NAME, "service name released");
		Ok(())
	}
}

/// Exports OpenURI, FileChooser and Settings at the portal object path.
///
/// Does not touch bus names, so it also works on a peer-to-peer connection.
pub async fn export_portals(connection: &Connection, context: Arc<PortalContext>) -> Result<()> {
	let server = connection.object_server();
	export(&server, OPEN_URI_INTERFACE, OpenUriPortal::new(Arc::clone(&context))).await?;
	export(&server, FILE_CHOOSER_INTERFACE, FileChooserPortal::new(Arc::clone(&context))).await?;
	export(&server, SETTINGS_INTERFACE, SettingsPortal::new(context)).await?;
	Ok(())
}

async fn export<I: Interface>(server: &ObjectServer, interface: &str, handler: I) -> Result<()> {
	if !server.at(OBJECT_PATH, handler).await? {
		return Err(PortalError::AlreadyExported {
			interface: interface.to_string(),
		});
	}
	info!(target = "portald.server", interface, "interface exported");
	Ok(())
}

async fn claim_name(connection: &Connection) -> Result<()> {
	let reply = connection
		.request_name_with_flags(SERVICE_NAME, RequestNameFlags::DoNotQueue.into())
		.await;
	name_claimed(reply)
}

/// Only primary ownership counts as a successful claim.
fn name_claimed(reply: zbus::Result<RequestNameReply>) -> Result<()> {
	match reply {
		Ok(RequestNameReply::PrimaryOwner | RequestNameReply::AlreadyOwner) => Ok(()),
		Ok(_) | Err(zbus::Error::NameTaken) => Err(PortalError::NameTaken {
			name: SERVICE_NAME.to_string(),
		}),
		Err(err) => Err(err.into()),
	}
}
