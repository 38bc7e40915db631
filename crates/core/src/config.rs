//! Helper program configuration shared by the portal interfaces.

use portald_runtime::HelperCommand;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LAUNCHER: &str = "xdg-open-dispatch";
pub const DEFAULT_FILE_PICKER: &str = "zenity";

/// Resolved helper configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
	pub launcher: LauncherConfig,
	pub file_picker: FilePickerConfig,
}

/// URI launcher. The URI is appended after `args`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
	pub program: String,
	pub args: Vec<String>,
}

impl Default for LauncherConfig {
	fn default() -> Self {
		Self {
			program: DEFAULT_LAUNCHER.to_string(),
			args: Vec::new(),
		}
	}
}

impl LauncherConfig {
	pub fn command(&self, uri: &str) -> HelperCommand {
		HelperCommand::new(&self.program).args(self.args.iter().cloned()).arg(uri)
	}
}

/// File-selection dialog program and the flag spellings it understands.
///
/// A flag set to `null` is never passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePickerConfig {
	pub program: String,
	pub args: Vec<String>,
	/// Prefix of the title argument, passed as `<flag>=<title>`.
	pub title_flag: Option<String>,
	pub directory_flag: Option<String>,
	/// Flags enabling multi-selection with one path per output line.
	pub multiple_flags: Vec<String>,
}

impl Default for FilePickerConfig {
	fn default() -> Self {
		Self {
			program: DEFAULT_FILE_PICKER.to_string(),
			args: vec!["--file-selection".to_string()],
			title_flag: Some("--title".to_string()),
			directory_flag: Some("--directory".to_string()),
			multiple_flags: vec!["--multiple".to_string(), "--separator=\n".to_string()],
		}
	}
}
