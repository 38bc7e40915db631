//! Outbound side of the session bus.
//!
//! The request protocol only needs one thing from the bus: emitting the
//! `Response` signal on a request path. That is abstracted behind
//! [`ResponseEmitter`] so the protocol can run against [`RecordingEmitter`] in tests.

mod fake_emitter;

use std::future::Future;
use std::pin::Pin;

use portald_protocol::{REQUEST_INTERFACE, RESPONSE_SIGNAL, RequestResponse};
use tracing::debug;
use zbus::Connection;
use zbus::names::BusName;

use crate::error::Result;

pub use fake_emitter::RecordingEmitter;

/// Emits `org.freedesktop.portal.Request.Response` signals.
///
/// Implementations must tolerate concurrent calls from many detached tasks.
pub trait ResponseEmitter: Send + Sync {
	fn emit_response(&self, response: RequestResponse) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Emitter backed by a live bus connection.
#[derive(Clone, Debug)]
pub struct BusEmitter {
	connection: Connection,
}

impl BusEmitter {
	pub fn new(connection: Connection) -> Self {
		Self { connection }
	}
}

impl ResponseEmitter for BusEmitter {
	fn emit_response(&self, response: RequestResponse) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
		Box::pin(async move {
			debug!(target = "portald.request", path = response.path.as_str(), code = response.code.as_u32(), "emitting response");
			self.connection
				.emit_signal(
					None::<BusName<'static>>,
					response.path.as_str(),
					REQUEST_INTERFACE,
					RESPONSE_SIGNAL,
					&response.body(),
				)
				.await?;
			Ok(())
		})
	}
}
