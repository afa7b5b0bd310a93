//! Output formatting for the informational screens.
//!
//! This module contains presentation-focused code — variant listing
//! layout, the help/license screens, and version-line assembly — kept
//! separate from the CLI argument handling in `bin/`.

pub mod screens;
pub mod variants;
pub mod version;
