//! `org.freedesktop.portal.Settings`.
//!
//! Answers synchronously from the static settings table. `ReadOne` returns the
//! value boxed once; the older `Read` boxes it twice (`v` holding a `v`), which
//! is what existing callers of `Read` unwrap.

use std::collections::HashMap;
use std::sync::Arc;

use portald_protocol::SETTINGS_VERSION;
use tracing::info;
use zbus::message::Header;
use zbus::{DBusError, interface};
use zvariant::{OwnedValue, Value};

use super::PortalContext;
use crate::settings::SettingValue;

/// Bus errors returned by the Settings interface.
#[derive(Debug, DBusError)]
#[zbus(prefix = "org.freedesktop.DBus.Error")]
pub enum SettingsError {
	#[zbus(error)]
	ZBus(zbus::Error),
	/// The requested setting does not exist.
	NoSuchObject(String),
}

pub struct SettingsPortal {
	context: Arc<PortalContext>,
}

impl SettingsPortal {
	pub fn new(context: Arc<PortalContext>) -> Self {
		Self { context }
	}

	fn lookup(&self, namespace: &str, key: &str) -> Result<SettingValue, SettingsError> {
		self.context
			.settings()
			.lookup(namespace, key)
			.ok_or_else(|| SettingsError::NoSuchObject(format!("requested setting {namespace}.{key} not found")))
	}

	/// Value of `namespace.key`, boxed once.
	pub fn read_one_value(&self, namespace: &str, key: &str) -> Result<OwnedValue, SettingsError> {
		owned(self.lookup(namespace, key)?.to_value())
	}

	/// Value of `namespace.key`, boxed twice.
	pub fn read_value(&self, namespace: &str, key: &str) -> Result<OwnedValue, SettingsError> {
		let inner = self.lookup(namespace, key)?.to_value();
		owned(Value::Value(Box::new(inner)))
	}

	/// Every setting in namespaces matching `namespaces`, grouped by namespace.
	pub fn read_all_values(&self, namespaces: &[String]) -> Result<HashMap<String, HashMap<String, OwnedValue>>, SettingsError> {
		let mut all: HashMap<String, HashMap<String, OwnedValue>> = HashMap::new();
		for setting in self.context.settings().matching(namespaces) {
			all.entry(setting.namespace.to_string())
				.or_default()
				.insert(setting.key.to_string(), owned(setting.value.to_value())?);
		}
		Ok(all)
	}
}

#[interface(name = "org.freedesktop.portal.Settings")]
impl SettingsPortal {
	async fn read_all(
		&self,
		#[zbus(header)] header: Header<'_>,
		namespaces: Vec<String>,
	) -> Result<HashMap<String, HashMap<String, OwnedValue>>, SettingsError> {
		info!(target = "portald.settings", sender = ?header.sender(), ?namespaces, "enter ReadAll");
		self.read_all_values(&namespaces)
	}

	async fn read(&self, #[zbus(header)] header: Header<'_>, namespace: &str, key: &str) -> Result<OwnedValue, SettingsError> {
		info!(target = "portald.settings", sender = ?header.sender(), namespace, key, "enter Read");
		self.read_value(namespace, key)
	}

	async fn read_one(&self, #[zbus(header)] header: Header<'_>, namespace: &str, key: &str) -> Result<OwnedValue, SettingsError> {
		info!(target = "portald.settings", sender = ?header.sender(), namespace, key, "enter ReadOne");
		self.read_one_value(namespace, key)
	}

	#[zbus(property, name = "version")]
	async fn version(&self) -> u32 {
		SETTINGS_VERSION
	}
}

fn owned(value: Value<'_>) -> Result<OwnedValue, SettingsError> {
	value.try_to_owned().map_err(|err| SettingsError::ZBus(err.into()))
}
