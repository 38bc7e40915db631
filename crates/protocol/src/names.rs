//! Well-known bus names, object paths and interface versions.

/// Well-known name claimed by the broker.
pub const SERVICE_NAME: &str = "org.freedesktop.portal.Desktop";

/// The single object path every portal interface is exported on.
pub const OBJECT_PATH: &str = "/org/freedesktop/portal/desktop";

/// Interface carrying the `Response` signal of a pending request.
pub const REQUEST_INTERFACE: &str = "org.freedesktop.portal.Request";

/// Signal member emitted once per request.
pub const RESPONSE_SIGNAL: &str = "Response";

pub const OPEN_URI_INTERFACE: &str = "org.freedesktop.portal.OpenURI";
pub const FILE_CHOOSER_INTERFACE: &str = "org.freedesktop.portal.FileChooser";
pub const SETTINGS_INTERFACE: &str = "org.freedesktop.portal.Settings";

/// Advertised `version` property of `org.freedesktop.portal.OpenURI`.
pub const OPEN_URI_VERSION: u32 = 4;
/// Advertised `version` property of `org.freedesktop.portal.FileChooser`.
pub const FILE_CHOOSER_VERSION: u32 = 3;
/// Advertised `version` property of `org.freedesktop.portal.Settings`.
pub const SETTINGS_VERSION: u32 = 1;
