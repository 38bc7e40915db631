//! Wire types for the desktop portal protocol.
//!
//! This crate contains the names, values and dictionary shapes exchanged with
//! callers over the session bus. These types represent the "protocol layer":
//! the shapes of data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No I/O and no bus connection
//! * 1:1 with protocol: Match the `org.freedesktop.portal.*` interface XML
//! * Stable: Changes only when the wire protocol changes
//!
//! The request lifecycle and interface handlers are built on top of these types in `portald`.

pub mod names;
pub mod options;
pub mod request_path;
pub mod response;

pub use names::*;
pub use options::*;
pub use request_path::*;
pub use response::*;
