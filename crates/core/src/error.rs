use portald_protocol::OptionError;
use portald_runtime::HelperError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortalError>;

#[derive(Debug, Error)]
pub enum PortalError {
	#[error("bus error: {0}")]
	Bus(#[from] zbus::Error),

	#[error("invalid value: {0}")]
	Variant(#[from] zvariant::Error),

	#[error("invalid options: {0}")]
	Options(#[from] OptionError),

	#[error(transparent)]
	Helper(#[from] HelperError),

	#[error("name {name} already taken")]
	NameTaken { name: String },

	#[error("interface {interface} is already exported")]
	AlreadyExported { interface: String },

	#[error("{0}")]
	Context(String),
}

impl From<PortalError> for zbus::fdo::Error {
	fn from(err: PortalError) -> Self {
		match err {
			PortalError::Options(_) | PortalError::Variant(_) => zbus::fdo::Error::InvalidArgs(err.to_string()),
			other => zbus::fdo::Error::Failed(other.to_string()),
		}
	}
}
