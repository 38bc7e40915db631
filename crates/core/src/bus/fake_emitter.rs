//! Recording emitter for testing the request protocol without a bus.
//!
//! # Example
//!
//! ```ignore
//! let (emitter, mut responses) = RecordingEmitter::new();
//! let request = Request::new(Arc::new(emitter), ":1.7", "abc")?;
//! request.respond(ResponseCode::Success, ResponseResults::empty()).await?;
//!
//! let sent = responses.recv().await.unwrap();
//! assert_eq!(sent.code, ResponseCode::Success);
//! ```

use std::future::Future;
use std::pin::Pin;

use portald_protocol::RequestResponse;
use tokio::sync::mpsc;

use super::ResponseEmitter;
use crate::error::{PortalError, Result};

/// Forwards every emitted response into a channel.
pub struct RecordingEmitter {
	sent: mpsc::UnboundedSender<RequestResponse>,
	fail: bool,
}

impl RecordingEmitter {
	/// Creates an emitter and the receiver observing its responses.
	pub fn new() -> (Self, mpsc::UnboundedReceiver<RequestResponse>) {
		let (sent, rx) = mpsc::unbounded_channel();
		(Self { sent, fail: false }, rx)
	}

	/// Creates an emitter whose sends always fail, as with a disconnected bus.
	///
	/// Attempted responses are still forwarded to the receiver.
	pub fn failing() -> (Self, mpsc::UnboundedReceiver<RequestResponse>) {
		let (sent, rx) = mpsc::unbounded_channel();
		(Self { sent, fail: true }, rx)
	}
}

impl ResponseEmitter for RecordingEmitter {
	fn emit_response(&self, response: RequestResponse) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
		Box::pin(async move {
			let _ = self.sent.send(response);
			if self.fail {
				return Err(PortalError::Context("bus disconnected".to_string()));
			}
			Ok(())
		})
	}
}
