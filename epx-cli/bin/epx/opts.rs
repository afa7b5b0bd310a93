//! Command line argument parsing for the epx binary.

use clap::Parser;

use epx_cli::{CliConfig, ColorMode, ScreenKind};

/// epx executable packer
///
/// Screen-selection flags for the epx command-line surface. The packing
/// flags documented on the help screens are handled by the engine layer
/// and are intentionally not parsed here.
#[derive(Parser, Debug)]
#[command(
    name = "epx",
    about = "Pack and unpack executable files",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct EpxOpts {
    /// Files to process
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Display brief help and exit
    #[arg(short = 'h')]
    pub help: bool,

    /// Display detailed help and exit
    #[arg(short = 'H', long = "help")]
    pub long_help: bool,

    /// Display the software license and exit
    #[arg(short = 'L', long = "license")]
    pub license: bool,

    /// Display version numbers of epx and its backends
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// Display only the epx version number
    #[arg(long = "version-short", conflicts_with = "version")]
    pub version_short: bool,

    /// Force colorized output
    #[arg(long = "color", conflicts_with_all = ["no_color", "mono"])]
    pub color: bool,

    /// Disable colorized output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Monochrome output (same as --no-color)
    #[arg(long = "mono")]
    pub mono: bool,
}

impl EpxOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Screen explicitly requested by a flag, if any
    fn requested_screen(&self) -> Option<ScreenKind> {
        if self.license {
            Some(ScreenKind::License)
        } else if self.version_short {
            Some(ScreenKind::VersionShort)
        } else if self.version {
            Some(ScreenKind::Version)
        } else if self.long_help {
            Some(ScreenKind::HelpFull)
        } else if self.help {
            Some(ScreenKind::HelpBrief)
        } else {
            None
        }
    }

    /// Whether this invocation falls back to the brief help screen
    pub fn defaulted_to_help(&self) -> bool {
        self.requested_screen().is_none() && self.files.is_empty()
    }

    /// Color behavior selected on the command line
    fn color_mode(&self) -> ColorMode {
        if self.color {
            ColorMode::Always
        } else if self.no_color || self.mono {
            ColorMode::Never
        } else {
            ColorMode::Auto
        }
    }

    /// Build the invocation config.
    ///
    /// Returns `None` when input files were given without a screen flag;
    /// that combination belongs to the packing engines, not this surface.
    pub fn config(&self) -> Option<CliConfig> {
        let screen = match self.requested_screen() {
            Some(screen) => screen,
            None if self.files.is_empty() => ScreenKind::HelpBrief,
            None => return None,
        };

        Some(CliConfig {
            screen,
            color: self.color_mode(),
        })
    }
}
