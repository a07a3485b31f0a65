//! Dispatcher primitives: commands, invocations, runners, settings and errors.

pub mod command;
pub mod error;
pub mod resolution;
pub mod runner;
pub mod settings;

pub use command::{Invocation, UiCommand};
pub use error::{ComphyError, ErrorKind};
pub use resolution::Resolution;
pub use runner::{CommandOutput, CommandRunner, DryRunRunner, SystemRunner};
pub use settings::{DEFAULT_UI_PROGRAM, Settings};
