//! Payload of the `org.freedesktop.portal.Request.Response` signal.

use zvariant::{DeserializeDict, OwnedObjectPath, SerializeDict, Type};

/// Response status carried as the signal's first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ResponseCode {
	/// The interaction completed.
	Success = 0,
	/// The user cancelled, or the helper did not produce a result.
	Cancelled = 1,
	/// The interaction ended in some other way.
	Other = 2,
}

impl ResponseCode {
	pub fn as_u32(self) -> u32 {
		self as u32
	}
}

impl From<ResponseCode> for u32 {
	fn from(code: ResponseCode) -> Self {
		code.as_u32()
	}
}

/// Result dictionary (`a{sv}`) sent with a response.
///
/// Absent fields are omitted from the dictionary, so a failed request carries `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, SerializeDict, DeserializeDict, Type)]
#[zvariant(signature = "a{sv}")]
pub struct ResponseResults {
	/// Selected files as `file://` URIs, in selection order.
	pub uris: Option<Vec<String>>,
}

impl ResponseResults {
	/// Empty results, used with a non-zero response code.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Results carrying the given URIs.
	pub fn with_uris(uris: Vec<String>) -> Self {
		Self { uris: Some(uris) }
	}
}

/// A response addressed to one request path.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestResponse {
	pub path: OwnedObjectPath,
	pub code: ResponseCode,
	pub results: ResponseResults,
}

impl RequestResponse {
	/// Signal body `(u, a{sv})`.
	pub fn body(&self) -> (u32, &ResponseResults) {
		(self.code.as_u32(), &self.results)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn response_codes_match_wire_values() {
		assert_eq!(ResponseCode::Success.as_u32(), 0);
		assert_eq!(ResponseCode::Cancelled.as_u32(), 1);
		assert_eq!(u32::from(ResponseCode::Other), 2);
	}

	#[test]
	fn results_are_a_string_variant_dictionary() {
		assert_eq!(<ResponseResults as Type>::SIGNATURE.to_string(), "a{sv}");
	}

	#[test]
	fn empty_results_carry_no_uris() {
		assert_eq!(ResponseResults::empty().uris, None);
		assert_eq!(ResponseResults::with_uris(vec!["file:///tmp/a".into()]).uris.unwrap().len(), 1);
	}
}
