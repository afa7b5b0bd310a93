//! epx executable packer
//!
//! Command-line entry point for the informational screens of epx. This
//! build carries the help/license/version surface; the packing engines
//! are linked in separately by full distributions.

use std::process;

mod opts;

use opts::EpxOpts;

use epx_cli::{run, PROGRAM_NAME};

fn main() -> std::io::Result<()> {
    let opts = EpxOpts::parse();

    let Some(config) = opts.config() else {
        // Files were given without a screen flag; packing lives in the
        // engine crates, which this build does not include.
        eprintln!(
            "{PROGRAM_NAME}: this build provides only the informational screens; \
             type '{PROGRAM_NAME} --help' for help"
        );
        process::exit(1);
    };

    if let Err(err) = run(&config) {
        eprintln!("{PROGRAM_NAME}: {err}");
        process::exit(1);
    }

    // Defaulting to the brief help because no command was given is a
    // usage error, same as giving no input files to a packer run.
    if opts.defaulted_to_help() {
        process::exit(1);
    }

    Ok(())
}
