//! Build-time feature flags surfaced to the help screens.

/// Which optional parts of the build are present.
///
/// Platform fields select the platform-specific option groups shown by the
/// full help screen; the instrumentation fields drive the trailing warning
/// line. The flags are plain runtime booleans so tests can construct
/// arbitrary combinations, but [`FeatureFlags::detect`] reflects what this
/// build actually carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FeatureFlags {
    /// djgpp2/coff option group.
    pub djgpp2_coff: bool,
    /// dos/com option group.
    pub dos_com: bool,
    /// dos/exe option group.
    pub dos_exe: bool,
    /// dos/sys option group.
    pub dos_sys: bool,
    /// ps1/exe option group.
    pub ps1_exe: bool,
    /// watcom/le option group.
    pub watcom_le: bool,
    /// win32/pe, win64/pe & arm/pe option group.
    pub win_pe: bool,
    /// linux/elf option group.
    pub linux_elf: bool,
    /// Debug assertions are enabled in this build.
    pub debug_build: bool,
    /// Extra self-check instrumentation is compiled in.
    pub instrumented: bool,
}

impl FeatureFlags {
    /// Flags describing the current build.
    ///
    /// The catalog ships every platform handler, so all platform groups
    /// are on; the instrumentation markers come from the compiler/feature
    /// configuration.
    pub fn detect() -> Self {
        Self {
            djgpp2_coff: true,
            dos_com: true,
            dos_exe: true,
            dos_sys: true,
            ps1_exe: true,
            watcom_le: true,
            win_pe: true,
            linux_elf: true,
            debug_build: cfg!(debug_assertions),
            instrumented: cfg!(feature = "instrumented"),
        }
    }

    /// Flags with every group and marker disabled; a test convenience.
    pub fn none() -> Self {
        Self {
            djgpp2_coff: false,
            dos_com: false,
            dos_exe: false,
            dos_sys: false,
            ps1_exe: false,
            watcom_le: false,
            win_pe: false,
            linux_elf: false,
            debug_build: false,
            instrumented: false,
        }
    }
}
