//! Version and copyright metadata for the tool and its backends.

/// Version identity of this build of the tool.
///
/// `gitrev` and `git_describe` are injected by the release tooling through
/// build environment variables; plain `cargo build` leaves both unset and
/// the bare package version is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Base package version, e.g. `0.3.0`.
    pub version: &'static str,
    /// Abbreviated source revision embedded at build time, if any.
    pub gitrev: Option<&'static str>,
    /// Full `git describe` string embedded at build time, if any.
    pub git_describe: Option<&'static str>,
}

impl BuildInfo {
    /// Identity of the currently running build.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            gitrev: option_env!("EPX_GITREV"),
            git_describe: option_env!("EPX_GIT_DESCRIBE"),
        }
    }
}

/// Version and copyright of one optional compression backend.
///
/// A backend appears in the list returned by [`backend_versions`] only if
/// it is compiled into this build; an entry with an empty or missing
/// version string is still "present" for copyright purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendVersion {
    /// Human-readable component name as printed by `epx --version`.
    pub name: &'static str,
    /// Version string reported by the backend, if it reports one.
    pub version: Option<&'static str>,
    /// Copyright line for the backend's authors, if one applies.
    pub copyright: Option<&'static str>,
}

/// Compiled-in backends, in fixed registration order.
///
/// The order here is the order `epx --version` prints them in and must
/// stay stable across builds that carry the same backends.
pub fn backend_versions() -> Vec<BackendVersion> {
    let mut backends = Vec::new();

    if cfg!(feature = "ucl") {
        backends.push(BackendVersion {
            name: "UCL data compression library",
            version: Some("1.03"),
            copyright: Some("Copyright (C) 1996-2004 Markus F.X.J. Oberhumer"),
        });
    }
    if cfg!(feature = "zlib") {
        backends.push(BackendVersion {
            name: "zlib data compression library",
            version: Some("1.3.1"),
            copyright: Some("Copyright (C) 1995-2024 Jean-loup Gailly and Mark Adler"),
        });
    }
    if cfg!(feature = "lzma") {
        backends.push(BackendVersion {
            name: "LZMA SDK version",
            version: Some("4.43"),
            copyright: Some("Copyright (C) 1999-2006 Igor Pavlov"),
        });
    }
    if cfg!(feature = "zstd") {
        backends.push(BackendVersion {
            name: "zstd data compression library",
            version: Some("1.5.6"),
            copyright: Some("Copyright (C) 2015-2024 Meta Platforms, Inc. and affiliates"),
        });
    }

    backends
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that backend registration order is stable
    #[test]
    fn backend_order_is_fixed() {
        let names: Vec<_> = backend_versions().iter().map(|b| b.name).collect();
        let mut expected = Vec::new();
        if cfg!(feature = "ucl") {
            expected.push("UCL data compression library");
        }
        if cfg!(feature = "zlib") {
            expected.push("zlib data compression library");
        }
        if cfg!(feature = "lzma") {
            expected.push("LZMA SDK version");
        }
        if cfg!(feature = "zstd") {
            expected.push("zstd data compression library");
        }
        assert_eq!(names, expected);
    }

    /// Test that the current build info carries the package version
    #[test]
    fn build_info_uses_package_version() {
        let build = BuildInfo::current();
        assert_eq!(build.version, env!("CARGO_PKG_VERSION"));
    }
}
