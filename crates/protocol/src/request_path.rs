//! Derivation of `org.freedesktop.portal.Request` object paths.
//!
//! The caller owns request identity: a request lives at
//! `/org/freedesktop/portal/desktop/request/SENDER/TOKEN`, where `SENDER` is the
//! caller's unique bus name without the leading `:` and with every `.` replaced
//! by `_`. The broker keeps no registry; the same inputs always produce the same path.

use zvariant::OwnedObjectPath;

use crate::names::OBJECT_PATH;

/// Strips the unique-name marker and replaces `.` with `_`.
///
/// `":1.42"` becomes `"1_42"`.
pub fn sanitize_sender(sender: &str) -> String {
	sender.strip_prefix(':').unwrap_or(sender).replace('.', "_")
}

/// Builds the request path for `sender` and `token`.
///
/// Fails when the result is not a valid object path, e.g. when the sender is a
/// well-known name containing `-`.
pub fn request_path(sender: &str, token: &str) -> Result<OwnedObjectPath, zvariant::Error> {
	let path = format!("{OBJECT_PATH}/request/{}/{token}", sanitize_sender(sender));
	OwnedObjectPath::try_from(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sender_marker_is_stripped_and_dots_replaced() {
		assert_eq!(sanitize_sender(":1.42"), "1_42");
		assert_eq!(sanitize_sender(":1.2.3"), "1_2_3");
	}

	#[test]
	fn sender_without_marker_is_kept() {
		assert_eq!(sanitize_sender("1.7"), "1_7");
	}

	#[test]
	fn path_follows_request_layout() {
		let path = request_path(":1.7", "abc").unwrap();
		assert_eq!(path.as_str(), "/org/freedesktop/portal/desktop/request/1_7/abc");
	}

	#[test]
	fn path_is_deterministic() {
		assert_eq!(request_path(":1.7", "abc").unwrap(), request_path(":1.7", "abc").unwrap());
	}

	#[test]
	fn differing_inputs_give_differing_paths() {
		let base = request_path(":1.7", "abc").unwrap();
		assert_ne!(base, request_path(":1.7", "abd").unwrap());
		assert_ne!(base, request_path(":1.8", "abc").unwrap());
	}

	#[test]
	fn invalid_sender_is_rejected() {
		assert!(request_path("org.example-app", "abc").is_err());
	}
}
