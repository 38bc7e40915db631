//! Pending portal requests.
//!
//! A [`Request`] is created synchronously inside a method handler, its path is
//! returned to the caller, and the detached task that owns it later emits the
//! single terminal `Response` signal.
//!
//! # Lifecycle
//!
//! 1. Handler derives the path from the caller's unique name and `handle_token`
//! 2. Handler returns the path as the method result
//! 3. Detached task performs the interaction
//! 4. Task calls [`Request::respond`], which consumes the request
//!
//! There is no table of live requests: once the response is sent and the task
//! ends, the request is dropped.

use std::sync::Arc;

use portald_protocol::{RequestResponse, ResponseCode, ResponseResults, request_path};
use tracing::error;
use zvariant::OwnedObjectPath;

use crate::bus::ResponseEmitter;
use crate::error::Result;

/// One in-flight asynchronous portal operation.
pub struct Request {
	emitter: Arc<dyn ResponseEmitter>,
	path: OwnedObjectPath,
}

impl Request {
	/// Derives the request path for `sender` and `token`.
	pub fn new(emitter: Arc<dyn ResponseEmitter>, sender: &str, token: &str) -> Result<Self> {
		let path = request_path(sender, token)?;
		Ok(Self { emitter, path })
	}

	pub fn path(&self) -> &OwnedObjectPath {
		&self.path
	}

	/// Emits the terminal response.
	///
	/// Taking `self` makes a second response on the same request impossible. A
	/// failed emit is logged here; the caller has no further handle to be told.
	pub async fn respond(self, code: ResponseCode, results: ResponseResults) -> Result<()> {
		let response = RequestResponse {
			path: self.path.clone(),
			code,
			results,
		};

		if let Err(err) = self.emitter.emit_response(response).await {
			error!(target = "portald.request", path = self.path.as_str(), error = %err, "can not send response");
			return Err(err);
		}
		Ok(())
	}
}

impl std::fmt::Debug for Request {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Request").field("path", &self.path).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::bus::RecordingEmitter;

	#[tokio::test]
	async fn respond_emits_on_request_path() {
		let (emitter, mut rx) = RecordingEmitter::new();
		let request = Request::new(Arc::new(emitter), ":1.42", "tok").unwrap();
		assert_eq!(request.path().as_str(), "/org/freedesktop/portal/desktop/request/1_42/tok");

		request
			.respond(ResponseCode::Success, ResponseResults::with_uris(vec!["file:///a".into()]))
			.await
			.unwrap();

		let sent = rx.recv().await.unwrap();
		assert_eq!(sent.path.as_str(), "/org/freedesktop/portal/desktop/request/1_42/tok");
		assert_eq!(sent.code, ResponseCode::Success);
		assert_eq!(sent.results.uris, Some(vec!["file:///a".to_string()]));
		assert!(rx.try_recv().is_err());
	}

	#[tokio::test]
	async fn failed_emit_is_returned() {
		let (emitter, mut rx) = RecordingEmitter::failing();
		let request = Request::new(Arc::new(emitter), ":1.1", "tok").unwrap();

		let result = request.respond(ResponseCode::Cancelled, ResponseResults::empty()).await;
		assert!(result.is_err());
		assert_eq!(rx.recv().await.unwrap().code, ResponseCode::Cancelled);
	}

	#[test]
	fn invalid_sender_fails_construction() {
		let (emitter, _rx) = RecordingEmitter::new();
		assert!(Request::new(Arc::new(emitter), "not-a-unique-name", "tok").is_err());
	}
}
