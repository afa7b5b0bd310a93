//! # epx-core
//!
//! Catalog and build metadata for the epx executable packer.
//!
//! This crate owns the boundary between the packing engines and the CLI
//! surface: the closed catalog of supported executable-format variants, the
//! options context that parameterizes how variant names are rendered, the
//! build-time feature flags that decide which help-screen sections apply to
//! this build, and the version/copyright metadata of the optional
//! compression backends.
//!
//! The packing engines themselves live elsewhere; nothing in this crate
//! reads or rewrites binaries.

pub mod catalog;
pub mod flags;
pub mod options;
pub mod version;

pub use catalog::{visit_all, PackerEntry};
pub use flags::FeatureFlags;
pub use options::OptionsContext;
pub use version::{backend_versions, BackendVersion, BuildInfo};
