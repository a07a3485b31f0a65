//! Library behind the `comphy` command-line front-end.
//!
//! UI operations become [`Invocation`]s that a [`CommandRunner`] executes;
//! the aspect-ratio resizer runs in-process.

pub mod core;
pub mod imaging;

pub use self::core::{
    CommandOutput, CommandRunner, ComphyError, DEFAULT_UI_PROGRAM, DryRunRunner, ErrorKind,
    Invocation, Resolution, Settings, SystemRunner, UiCommand,
};
pub use self::imaging::{fit_to_aspect, resize_to_aspect, target_dimensions};

/// Run a UI command through `runner` using the programs named in `settings`.
pub fn dispatch<R: CommandRunner + ?Sized>(
    runner: &R,
    settings: &Settings,
    command: &UiCommand,
) -> Result<CommandOutput, ComphyError> {
    runner.run(&command.invocation(settings))
}
