//! Colored console output with save/restore foreground handling.
//!
//! Screen sections are colorized with a save-set-restore discipline: the
//! caller remembers the previous foreground returned by
//! [`Console::set_fg`], writes the colored block, then sets the previous
//! color back. A [`Console`] is a plain single-owner value; it is not
//! meant to be shared across threads, and the CLI constructs exactly one
//! per process.

use std::io::Write;

use colored::{Color, Colorize};

use crate::error::Result;

/// Foreground color token for screen sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleColor {
    /// Terminal default; text is written unstyled.
    #[default]
    Default,
    /// Banner text.
    Green,
    /// Section headers.
    Yellow,
    /// URL block on the license screen.
    Cyan,
    /// Instrumentation warning footer.
    Red,
    /// Contact block on the license screen.
    Orange,
}

impl ConsoleColor {
    fn to_colored(self) -> Option<Color> {
        match self {
            ConsoleColor::Default => None,
            ConsoleColor::Green => Some(Color::Green),
            ConsoleColor::Yellow => Some(Color::Yellow),
            ConsoleColor::Cyan => Some(Color::Cyan),
            ConsoleColor::Red => Some(Color::Red),
            ConsoleColor::Orange => Some(Color::TrueColor {
                r: 0xff,
                g: 0xa5,
                b: 0x00,
            }),
        }
    }
}

/// Output stream with a current foreground color.
///
/// Text written through the console is styled with the current foreground
/// when coloring is enabled; with coloring disabled the bytes pass through
/// untouched, which is what tests rely on when they capture output into a
/// `Vec<u8>`.
#[derive(Debug)]
pub struct Console<W: Write> {
    writer: W,
    fg: ConsoleColor,
    enabled: bool,
}

impl<W: Write> Console<W> {
    /// Wraps `writer`; `enabled` decides whether colors are emitted.
    ///
    /// An enabled console overrides `colored`'s own tty/env detection,
    /// which would otherwise strip the escapes again on every render;
    /// the enable decision has already been made by the caller.
    pub fn new(writer: W, enabled: bool) -> Self {
        if enabled {
            colored::control::set_override(true);
        }
        Self {
            writer,
            fg: ConsoleColor::Default,
            enabled,
        }
    }

    /// Sets the current foreground and returns the previous one.
    pub fn set_fg(&mut self, color: ConsoleColor) -> ConsoleColor {
        std::mem::replace(&mut self.fg, color)
    }

    /// Writes `text` in the current foreground, without a newline.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        match self.fg.to_colored() {
            Some(color) if self.enabled => {
                write!(self.writer, "{}", text.color(color))?;
            }
            _ => {
                write!(self.writer, "{text}")?;
            }
        }
        Ok(())
    }

    /// Writes `text` in the current foreground, followed by a newline.
    ///
    /// The newline itself is never styled, so captured output stays
    /// line-splittable regardless of color mode.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.write_str(text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Consumes the console, returning the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
