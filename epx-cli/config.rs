//! Configuration types and constants for the epx CLI surface.

use std::env;
use std::io::IsTerminal;

/// Program name printed in usage and error messages.
pub const PROGRAM_NAME: &str = "epx";

/// Help-text detail level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Short help: commands, common options and a hint at the full screen.
    Brief,
    /// Full help: every option group plus the supported-variant listing.
    Full,
}

/// Which informational screen an invocation asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Brief help screen (`-h`, or the default with no arguments).
    HelpBrief,
    /// Full help screen (`-H` / `--help`).
    HelpFull,
    /// License screen (`-L`).
    License,
    /// Full version listing (`-V` / `--version`).
    Version,
    /// One-line version output (`--version-short`).
    VersionShort,
}

/// Terminal color behavior, following the `--color`/`--no-color` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Force colors on.
    Always,
    /// Force colors off (`--no-color` / `--mono`).
    Never,
}

impl ColorMode {
    /// Whether screen output should carry color escapes.
    pub fn should_use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            // NO_COLOR per no-color.org, then terminal detection.
            ColorMode::Auto => {
                env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Configuration for one CLI invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// Screen to render.
    pub screen: ScreenKind,
    /// Color behavior for the output stream.
    pub color: ColorMode,
}
