//! Static, read-only settings table served by `org.freedesktop.portal.Settings`.

use zvariant::Value;

/// `color-scheme` value meaning "prefer dark appearance".
pub const COLOR_SCHEME_PREFER_DARK: u32 = 1;

/// A setting value as stored in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
	Uint32(u32),
	Str(&'static str),
}

impl SettingValue {
	/// Single-boxed dynamic value, as returned by `ReadOne`.
	pub fn to_value(self) -> Value<'static> {
		match self {
			Self::Uint32(v) => Value::from(v),
			Self::Str(s) => Value::from(s),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
	pub namespace: &'static str,
	pub key: &'static str,
	pub value: SettingValue,
}

impl Setting {
	fn matches(&self, path: &str) -> bool {
		path.len() == self.namespace.len() + 1 + self.key.len()
			&& path.starts_with(self.namespace)
			&& path[self.namespace.len()..].starts_with('.')
			&& path.ends_with(self.key)
	}
}

const BUILTIN: &[Setting] = &[Setting {
	namespace: "org.freedesktop.appearance",
	key: "color-scheme",
	value: SettingValue::Uint32(COLOR_SCHEME_PREFER_DARK),
}];

/// Immutable lookup table keyed by `"<namespace>.<key>"`.
#[derive(Debug, Clone, Copy)]
pub struct SettingsTable {
	entries: &'static [Setting],
}

impl Default for SettingsTable {
	fn default() -> Self {
		Self::builtin()
	}
}

impl SettingsTable {
	/// The table shipped with the broker.
	pub fn builtin() -> Self {
		Self { entries: BUILTIN }
	}

	/// Looks up `namespace + "." + key`.
	pub fn lookup(&self, namespace: &str, key: &str) -> Option<SettingValue> {
		let path = format!("{namespace}.{key}");
		self.entries.iter().find(|setting| setting.matches(&path)).map(|setting| setting.value)
	}

	/// Entries whose namespace matches any of `patterns`.
	///
	/// An empty pattern list matches everything; a trailing `*` matches by prefix.
	pub fn matching<'a>(&'a self, patterns: &'a [String]) -> impl Iterator<Item = &'static Setting> + 'a {
		self.entries
			.iter()
			.filter(move |setting| patterns.is_empty() || patterns.iter().any(|p| namespace_matches(p, setting.namespace)))
	}
}

fn namespace_matches(pattern: &str, namespace: &str) -> bool {
	match pattern.strip_suffix('*') {
		Some(prefix) => namespace.starts_with(prefix),
		None => pattern == namespace,
	}
}
