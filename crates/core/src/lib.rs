//! portald: a desktop portal broker.
//!
//! Registers `org.freedesktop.portal.Desktop` on the session bus and answers
//! portal calls on behalf of sandboxed applications.
//!
//! # Request protocol
//!
//! 1. A caller invokes e.g. `FileChooser.OpenFile` with a `handle_token` option
//! 2. The handler derives the request path and returns it immediately
//! 3. A detached task runs the external helper
//! 4. The task emits exactly one `Request.Response(code, results)` on that path
//!
//! The bus connection is only needed at the edges: [`BusEmitter`] for signals
//! and [`PortalServer`] for exporting the interfaces. Everything in between
//! runs against the [`ResponseEmitter`] and
//! [`HelperInvoker`](portald_runtime::HelperInvoker) traits.

pub mod bus;
pub mod config;
pub mod error;
pub mod portal;
pub mod request;
pub mod server;
pub mod settings;

pub use bus::{BusEmitter, RecordingEmitter, ResponseEmitter};
pub use config::{FilePickerConfig, LauncherConfig, PortalConfig};
pub use error::{PortalError, Result};
pub use portal::{FileChooserPortal, OpenUriPortal, PortalContext, SettingsError, SettingsPortal};
pub use request::Request;
pub use server::{PortalServer, export_portals};
pub use settings::{SettingValue, SettingsTable};
