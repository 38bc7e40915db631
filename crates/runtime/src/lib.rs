//! Helper program lifecycle for portald.
//!
//! Every portal operation that needs host-side interaction shells out to an
//! external helper. The contract with a helper is only "exit code plus optional
//! stdout payload"; this crate owns resolving, spawning and collecting it.

pub mod error;
pub mod fake;
pub mod process;

pub use error::{HelperError, Result};
pub use fake::ScriptedInvoker;
pub use process::{HelperCommand, HelperInvoker, HelperOutput, SystemInvoker};
