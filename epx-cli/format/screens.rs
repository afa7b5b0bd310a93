//! The help, license and version screens.
//!
//! A [`Screens`] value owns the console and the banner latch for one
//! process (or one test). For a fixed verbosity/flags pair the rendered
//! bytes are identical across calls, except that the banner block is
//! emitted at most once per `Screens` lifetime.

use std::io::Write;

use epx_core::{backend_versions, BuildInfo, FeatureFlags, OptionsContext};

use crate::config::{VerbosityLevel, PROGRAM_NAME};
use crate::console::{Console, ConsoleColor};
use crate::error::Result;
use crate::format::variants::{
    collect_variant_names, render_variant_lines, sort_variant_names, SortKey,
};
use crate::format::version::{tool_identity, version_lines};

/// One platform-specific option group on the full help screen.
///
/// Groups render in table order; `enabled` decides whether this build
/// shows the group at all.
struct PlatformSection {
    title: &'static str,
    body: &'static str,
    enabled: fn(&FeatureFlags) -> bool,
}

const PLATFORM_SECTIONS: &[PlatformSection] = &[
    PlatformSection {
        title: "djgpp2/coff options:",
        body: "  --coff              produce COFF output [default: EXE]\n\n",
        enabled: |f| f.djgpp2_coff,
    },
    PlatformSection {
        title: "dos/com options:",
        body: "  --8086              make compressed com work on any 8086\n\n",
        enabled: |f| f.dos_com,
    },
    PlatformSection {
        title: "dos/exe options:",
        body: "  --8086              make compressed exe work on any 8086\n\
               \x20 --no-reloc          put no relocations in to the exe header\n\n",
        enabled: |f| f.dos_exe,
    },
    PlatformSection {
        title: "dos/sys options:",
        body: "  --8086              make compressed sys work on any 8086\n\n",
        enabled: |f| f.dos_sys,
    },
    PlatformSection {
        title: "ps1/exe options:",
        body: "  --8-bit             uses 8 bit size compression [default: 32 bit]\n\
               \x20 --8mib-ram          8 MiB memory limit [default: 2 MiB]\n\
               \x20 --boot-only         disables client/host transfer compatibility\n\
               \x20 --no-align          don't align to 2048 bytes [enables: --console-run]\n\n",
        enabled: |f| f.ps1_exe,
    },
    PlatformSection {
        title: "watcom/le options:",
        body: "  --le                produce LE output [default: EXE]\n\n",
        enabled: |f| f.watcom_le,
    },
    PlatformSection {
        title: "win32/pe, win64/pe & arm/pe options:",
        body: "  --compress-exports=0    do not compress the export section\n\
               \x20 --compress-exports=1    compress the export section [default]\n\
               \x20 --compress-icons=0      do not compress any icons\n\
               \x20 --compress-icons=1      compress all but the first icon\n\
               \x20 --compress-icons=2      compress all but the first icon directory [default]\n\
               \x20 --compress-icons=3      compress all icons\n\
               \x20 --compress-resources=0  do not compress any resources at all\n\
               \x20 --keep-resource=list    do not compress resources specified by list\n\
               \x20 --strip-relocs=0        do not strip relocations\n\
               \x20 --strip-relocs=1        strip relocations [default]\n\n",
        enabled: |f| f.win_pe,
    },
    PlatformSection {
        title: "linux/elf options:",
        body: "  --preserve-build-id     copy .gnu.note.build-id to compressed output\n\n",
        enabled: |f| f.linux_elf,
    },
];

/// Renders the informational screens to one console.
#[derive(Debug)]
pub struct Screens<W: Write> {
    console: Console<W>,
    build: BuildInfo,
    banner_shown: bool,
}

impl<W: Write> Screens<W> {
    /// Creates a screen renderer over `console` for the given build.
    pub fn new(console: Console<W>, build: BuildInfo) -> Self {
        Self {
            console,
            build,
            banner_shown: false,
        }
    }

    /// Consumes the renderer, returning the underlying writer.
    pub fn into_writer(self) -> W {
        self.console.into_inner()
    }

    /// Writes a yellow section header with the save/restore discipline.
    fn section_header(&mut self, title: &str) -> Result<()> {
        let prev = self.console.set_fg(ConsoleColor::Yellow);
        self.console.write_line(title)?;
        self.console.set_fg(prev);
        Ok(())
    }

    /// Emits the introductory banner block, at most once per renderer.
    pub fn show_banner(&mut self) -> Result<()> {
        if self.banner_shown {
            return Ok(());
        }
        self.banner_shown = true;

        let identity = tool_identity(&self.build);

        let prev = self.console.set_fg(ConsoleColor::Green);
        self.console
            .write_line("                       epx -- the executable packer toolkit")?;
        self.console
            .write_line("                   Copyright (C) 2019-2026 The epx developers")?;
        self.console
            .write_line(&format!("                              {PROGRAM_NAME} {identity}"))?;
        self.console.write_line("")?;
        self.console.set_fg(prev);
        Ok(())
    }

    /// Writes the one-line usage summary.
    pub fn show_usage(&mut self) -> Result<()> {
        self.console.write_line(&format!(
            "Usage: {PROGRAM_NAME} [-123456789dlthVL] [-qvfk] [-o FILE] FILE.."
        ))
    }

    /// Writes the sorted variant listing.
    ///
    /// Verbose mode lists one variant per line with its short id; compact
    /// mode packs the display names into 80-column lines.
    pub fn show_all_variants(&mut self, verbose: bool) -> Result<()> {
        let opts = OptionsContext::default();
        let mut names = collect_variant_names(&opts);
        sort_variant_names(&mut names, SortKey::DisplayName);
        for line in render_variant_lines(&names, verbose) {
            self.console.write_line(&line)?;
        }
        Ok(())
    }

    /// Renders the help screen at the requested detail level.
    pub fn show_help(&mut self, verbosity: VerbosityLevel, flags: &FeatureFlags) -> Result<()> {
        let full = verbosity == VerbosityLevel::Full;

        self.show_banner()?;
        self.show_usage()?;

        self.console.write_line("")?;
        self.section_header("Commands:")?;
        self.console.write_str(
            "  -1     compress faster                   -9    compress better\n",
        )?;
        if full {
            self.console
                .write_str("  --best compress best (can be slow for big files)\n")?;
        }
        self.console.write_str(
            "  -d     decompress                        -l    list compressed file\n\
             \x20 -t     test compressed file              -V    display version number\n",
        )?;
        self.console.write_str(&format!(
            "  -h     give {} help                    -L    display software license\n",
            if full { "this" } else { "more" }
        ))?;
        if full {
            self.console.write_line("")?;
        }

        self.section_header("Options:")?;
        self.console.write_str(
            "  -q     be quiet                          -v    be verbose\n\
             \x20 -oFILE write output to 'FILE'\n\
             \x20 -f     force compression of suspicious files\n",
        )?;
        if full {
            self.console
                .write_str("  --no-color, --mono, --color, --no-progress   change look\n")?;
        } else {
            self.console.write_str("  -k     keep backup files\n")?;
        }

        if full {
            self.console.write_line("")?;
            self.section_header("Compression tuning options:")?;
            self.console.write_str(
                "  --lzma              try LZMA [slower but tighter than NRV]\n\
                 \x20 --brute             try all available compression methods & filters [slow]\n\
                 \x20 --ultra-brute       try even more compression variants [very slow]\n\n",
            )?;
            self.section_header("Backup options:")?;
            self.console.write_str(
                "  -k, --backup        keep backup files\n\
                 \x20 --no-backup         no backup files [default]\n\n",
            )?;
            self.section_header("Overlay options:")?;
            self.console.write_str(
                "  --overlay=copy      copy any extra data attached to the file [default]\n\
                 \x20 --overlay=strip     strip any extra data attached to the file [dangerous]\n\
                 \x20 --overlay=skip      don't compress a file with an overlay\n\n",
            )?;

            for section in PLATFORM_SECTIONS {
                if (section.enabled)(flags) {
                    self.section_header(section.title)?;
                    self.console.write_str(section.body)?;
                }
            }
        }

        self.console
            .write_line("FILE..   executables to (de)compress")?;

        if full {
            self.console.write_line("")?;
            self.section_header("This version supports:")?;
            self.show_all_variants(true)?;
        } else {
            self.console.write_line(&format!(
                "\nType '{PROGRAM_NAME} --help' for more detailed help."
            ))?;
        }

        self.console.write_line(&format!(
            "\n{PROGRAM_NAME} is free software; for details visit https://github.com/epx-pack/epx"
        ))?;

        if flags.debug_build || flags.instrumented {
            let mut warning = String::from("\nWARNING: this version is compiled with:");
            if flags.debug_build {
                warning.push_str(" debug-assertions");
            }
            if flags.instrumented {
                warning.push_str(" self-checks");
            }
            let prev = self.console.set_fg(ConsoleColor::Red);
            self.console.write_line(&warning)?;
            self.console.set_fg(prev);
        }

        Ok(())
    }

    /// Renders the license screen.
    pub fn show_license(&mut self) -> Result<()> {
        self.show_banner()?;

        self.console.write_str(
            "   This program may be used freely, and you are welcome to\n\
             \x20  redistribute it under certain conditions.\n\
             \x20  This program is distributed in the hope that it will be useful,\n\
             \x20  but WITHOUT ANY WARRANTY of any kind.\n\
             \n\
             \x20  You should have received a copy of the epx license along with\n\
             \x20  this program; see the file LICENSE. If not, visit one of the\n\
             \x20  following pages:\n\
             \n",
        )?;

        let prev = self.console.set_fg(ConsoleColor::Cyan);
        self.console.write_str(
            "        https://github.com/epx-pack/epx\n\
             \x20       https://opensource.org/license/mit\n",
        )?;
        self.console.set_fg(ConsoleColor::Orange);
        self.console.write_str(
            "\n\
             \x20  The epx developers\n\
             \x20  <maintainers@epx-pack.dev>\n",
        )?;
        self.console.set_fg(prev);
        Ok(())
    }

    /// Renders the version screen; `one_line` stops after the tool line.
    pub fn show_version(&mut self, one_line: bool) -> Result<()> {
        let backends = backend_versions();
        for line in version_lines(&self.build, &backends, one_line) {
            self.console.write_line(&line)?;
        }
        Ok(())
    }
}
