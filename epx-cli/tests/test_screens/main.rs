//! End-to-end checks of the rendered screens through the public API.

use epx_cli::format::variants::{collect_variant_names, MAX_VARIANTS};
use epx_cli::{Console, ConsoleColor, Screens, VerbosityLevel};
use epx_core::{BuildInfo, FeatureFlags, OptionsContext};

fn new_screens() -> Screens<Vec<u8>> {
    let console = Console::new(Vec::new(), false);
    Screens::new(console, BuildInfo::current())
}

/// Test that the shipped catalog fits the fixed collection bound
#[test]
fn catalog_fits_capacity_bound() {
    let names = collect_variant_names(&OptionsContext::default());
    assert!(!names.is_empty());
    assert!(names.len() <= MAX_VARIANTS);
    assert_eq!(names.len(), epx_core::catalog::catalog_len());
}

/// Test the full help screen as the binary renders it
#[test]
fn full_help_end_to_end() {
    let mut screens = new_screens();
    screens
        .show_help(VerbosityLevel::Full, &FeatureFlags::detect())
        .unwrap();
    let output = String::from_utf8(screens.into_writer()).unwrap();

    // Banner, usage, every platform group of a full build, and the listing.
    assert!(output.contains("epx -- the executable packer toolkit"));
    assert!(output.contains("Usage: epx"));
    for title in [
        "djgpp2/coff options:",
        "dos/com options:",
        "dos/exe options:",
        "dos/sys options:",
        "ps1/exe options:",
        "watcom/le options:",
        "win32/pe, win64/pe & arm/pe options:",
        "linux/elf options:",
    ] {
        assert!(output.contains(title), "missing platform group {title:?}");
    }
    assert!(output.contains("This version supports:"));
    assert!(output.contains("amd64-linux.elf"));
    assert!(output.contains("linux/amd64"));
}

/// Test that the verbose listing keeps the 4-space margin end to end
#[test]
fn verbose_listing_margin() {
    let mut screens = new_screens();
    screens.show_all_variants(true).unwrap();
    let output = String::from_utf8(screens.into_writer()).unwrap();

    assert!(!output.is_empty());
    for line in output.lines() {
        assert!(line.starts_with("    "), "bad margin in {line:?}");
    }
}

/// Test that the compact listing stays within 80 columns end to end
#[test]
fn compact_listing_width() {
    let mut screens = new_screens();
    screens.show_all_variants(false).unwrap();
    let output = String::from_utf8(screens.into_writer()).unwrap();

    assert!(!output.is_empty());
    for line in output.lines() {
        assert!(line.len() <= 80, "line too wide: {line:?}");
        assert!(line.starts_with("  "));
    }
}

/// Test that the default build reports its compiled-in backends
#[test]
fn version_screen_reports_backends() {
    let mut screens = new_screens();
    screens.show_version(false).unwrap();
    let output = String::from_utf8(screens.into_writer()).unwrap();

    let first = output.lines().next().unwrap();
    assert!(first.starts_with("epx "));
    assert!(output.contains("zlib data compression library"));
    assert!(output.contains("UCL data compression library"));
    assert!(output.lines().count() > 1);
}

/// Test that color tokens round-trip through a fresh console
#[test]
fn console_color_round_trip() {
    let mut console = Console::new(Vec::new(), false);
    let prev = console.set_fg(ConsoleColor::Cyan);
    assert_eq!(prev, ConsoleColor::Default);
    assert_eq!(console.set_fg(prev), ConsoleColor::Cyan);
}
