//! Common CLI functionality for the epx executable packer.
//!
//! This crate renders the informational screens of the `epx` binary: the
//! two-tier help screen with its supported-variant listing, the license
//! screen and the version listing. The packing engines are external to
//! this crate; what lives here is the presentation layer over the variant
//! catalog and build metadata exposed by `epx-core`.
//!
//! Screen state (the one-shot banner latch and the console's current
//! foreground color) lives in explicit per-invocation values rather than
//! globals; none of it is safe to share across threads, and the binary
//! runs everything on one thread.

use std::io;

use epx_core::{BuildInfo, FeatureFlags};

pub mod config;
pub mod console;
pub mod error;
pub mod format;


pub use config::{CliConfig, ColorMode, ScreenKind, VerbosityLevel, PROGRAM_NAME};
pub use console::{Console, ConsoleColor};
pub use error::{Error, Result};
pub use format::screens::Screens;

/// Renders the screen selected by `config` to stdout.
///
/// Builds one [`Screens`] renderer over a locked stdout handle, so the
/// banner latch covers the whole invocation.
///
/// # Errors
///
/// Returns [`Error::WriteOutput`] if writing to stdout fails.
pub fn run(config: &CliConfig) -> Result<()> {
    let stdout = io::stdout().lock();
    let console = Console::new(stdout, config.color.should_use_color());
    let mut screens = Screens::new(console, BuildInfo::current());
    let flags = FeatureFlags::detect();

    match config.screen {
        ScreenKind::HelpBrief => screens.show_help(VerbosityLevel::Brief, &flags),
        ScreenKind::HelpFull => screens.show_help(VerbosityLevel::Full, &flags),
        ScreenKind::License => screens.show_license(),
        ScreenKind::Version => screens.show_version(false),
        ScreenKind::VersionShort => screens.show_version(true),
    }
}
