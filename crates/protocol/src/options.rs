//! Caller-supplied options dictionaries (`a{sv}`).
//!
//! Every portal method takes an options bag. Unknown keys are ignored; the keys
//! the broker consumes are read through [`OptionsExt`], which reports a typed
//! [`OptionError`] instead of assuming the caller sent the right shape.

use std::collections::HashMap;

use thiserror::Error;
use zvariant::{OwnedValue, Value};

/// Key of the caller-chosen request token.
pub const HANDLE_TOKEN: &str = "handle_token";
/// FileChooser: allow selecting more than one file.
pub const MULTIPLE: &str = "multiple";
/// FileChooser: select a directory instead of a file.
pub const DIRECTORY: &str = "directory";

/// Options bag as received from the bus.
pub type Options = HashMap<String, OwnedValue>;

/// Errors raised while extracting a consumed option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
	#[error("missing required option `{key}`")]
	Missing { key: String },

	#[error("option `{key}` has type `{found}`, expected `{expected}`")]
	WrongType {
		key: String,
		expected: &'static str,
		found: String,
	},

	#[error("invalid handle token `{0}`: only ASCII letters, digits and `_` are allowed")]
	InvalidToken(String),
}

/// Typed accessors over an [`Options`] bag.
pub trait OptionsExt {
	/// Returns the string stored under `key`, if present.
	fn string(&self, key: &str) -> Result<Option<&str>, OptionError>;

	/// Returns the boolean stored under `key`; absent means `false`.
	fn flag(&self, key: &str) -> Result<bool, OptionError>;

	/// Returns the validated `handle_token`.
	fn handle_token(&self) -> Result<&str, OptionError> {
		let token = self.string(HANDLE_TOKEN)?.ok_or_else(|| OptionError::Missing { key: HANDLE_TOKEN.to_string() })?;
		validate_token(token)?;
		Ok(token)
	}
}

impl OptionsExt for Options {
	fn string(&self, key: &str) -> Result<Option<&str>, OptionError> {
		match self.get(key).map(|value| &**value) {
			None => Ok(None),
			Some(Value::Str(s)) => Ok(Some(s.as_str())),
			Some(other) => Err(wrong_type(key, "s", other)),
		}
	}

	fn flag(&self, key: &str) -> Result<bool, OptionError> {
		match self.get(key).map(|value| &**value) {
			None => Ok(false),
			Some(Value::Bool(b)) => Ok(*b),
			Some(other) => Err(wrong_type(key, "b", other)),
		}
	}
}

/// Checks that `token` can be used as a single object path element.
pub fn validate_token(token: &str) -> Result<(), OptionError> {
	if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
		return Err(OptionError::InvalidToken(token.to_string()));
	}
	Ok(())
}

fn wrong_type(key: &str, expected: &'static str, found: &Value<'_>) -> OptionError {
	OptionError::WrongType {
		key: key.to_string(),
		expected,
		found: found.value_signature().to_string(),
	}
}
