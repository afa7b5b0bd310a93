//! Shared configuration primitives for variant-name rendering.

/// Naming context threaded through variant display-name construction.
///
/// The catalog stores one canonical spelling per CPU; some deployments
/// prefer the legacy toolchain aliases (`x86_64` instead of `amd64`,
/// `aarch64` instead of `arm64`). The context decides which spelling a
/// [`crate::PackerEntry`] uses when building its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionsContext {
    /// Render CPU names with their legacy toolchain aliases.
    pub legacy_cpu_names: bool,
}
