//! Assembly of the `epx --version` output lines.

use epx_core::{BackendVersion, BuildInfo};

use crate::config::PROGRAM_NAME;

/// Tool version descriptor, preferring the richest embedded form.
///
/// `git describe` output wins when present, then the base version with an
/// appended revision, then the plain base version. The banner and the
/// version screen both derive their identity from this one chain.
pub(crate) fn tool_identity(build: &BuildInfo) -> String {
    if let Some(describe) = build.git_describe {
        describe.to_string()
    } else if let Some(rev) = build.gitrev {
        format!("{}-git-{rev}", build.version)
    } else {
        build.version.to_string()
    }
}

fn tool_line(build: &BuildInfo) -> String {
    format!("{PROGRAM_NAME} {}", tool_identity(build))
}

/// Builds the ordered version listing.
///
/// The first line is always the tool's own identity; with `one_line` set
/// nothing else is emitted. The full listing appends one line per backend
/// that reports a non-empty version string (in the order given, which is
/// the backends' fixed registration order), the tool copyright, each
/// present backend's copyright, and the license-screen hint.
pub fn version_lines(
    build: &BuildInfo,
    backends: &[BackendVersion],
    one_line: bool,
) -> Vec<String> {
    let mut lines = vec![tool_line(build)];
    if one_line {
        return lines;
    }

    for backend in backends {
        // A backend with no version string is present but silent here.
        if let Some(version) = backend.version.filter(|v| !v.is_empty()) {
            lines.push(format!("{} {version}", backend.name));
        }
    }

    lines.push("Copyright (C) 2019-2026 The epx developers".to_string());
    for backend in backends {
        if let Some(copyright) = backend.copyright {
            lines.push(copyright.to_string());
        }
    }

    lines.push(format!(
        "{PROGRAM_NAME} is free software; type '{PROGRAM_NAME} -L' for license details."
    ));
    lines
}
