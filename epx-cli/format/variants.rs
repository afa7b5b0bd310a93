//! Collection, ordering and column layout of the variant listing.

use epx_core::{visit_all, OptionsContext};

/// Hard upper bound on collected variants.
///
/// The catalog is closed at compile time, so blowing this bound means a
/// defective build, not bad user input; the push asserts rather than
/// growing.
pub const MAX_VARIANTS: usize = 64;

/// Maximum line width for the compact listing.
pub const LIST_WIDTH: usize = 80;

/// Field width of the display-name column in the verbose listing.
const DISPLAY_FIELD_WIDTH: usize = 36;

/// Name pair extracted from one catalog variant.
///
/// Both strings are owned copies made while the transient catalog handle
/// was still alive, so a `VariantName` is self-contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantName {
    /// Full display name, e.g. `amd64-linux.elf`.
    pub display: String,
    /// Stable short identifier, e.g. `linux/amd64`.
    pub short: String,
}

/// Sort key for [`sort_variant_names`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Order by full display name; the listing screens use this.
    DisplayName,
    /// Order by short identifier.
    ShortId,
}

/// Appends one name pair, enforcing the catalog bound.
///
/// # Panics
///
/// Panics when `names` already holds [`MAX_VARIANTS`] entries.
pub fn push_variant(names: &mut Vec<VariantName>, name: VariantName) {
    assert!(
        names.len() < MAX_VARIANTS,
        "variant catalog exceeds {MAX_VARIANTS} entries"
    );
    names.push(name);
}

/// Collects the name pair of every supported variant.
///
/// Drives the catalog enumeration; each transient handle is consumed and
/// dropped here after both names have been copied out. The result is in
/// registration order, not sorted.
pub fn collect_variant_names(opts: &OptionsContext) -> Vec<VariantName> {
    let mut names = Vec::with_capacity(MAX_VARIANTS);
    visit_all(|entry| {
        let name = VariantName {
            display: entry.display_name(opts),
            short: entry.short_id().to_string(),
        };
        push_variant(&mut names, name);
    });
    names
}

/// Sorts name pairs by the chosen key, bytewise and locale-free.
///
/// Keys are expected to be unique in a well-formed catalog; adjacent
/// duplicates after sorting indicate a defective catalog and trip a debug
/// assertion rather than being silently accepted.
pub fn sort_variant_names(names: &mut [VariantName], key: SortKey) {
    match key {
        SortKey::DisplayName => {
            names.sort_unstable_by(|a, b| a.display.as_bytes().cmp(b.display.as_bytes()));
            debug_assert!(
                names.windows(2).all(|w| w[0].display != w[1].display),
                "duplicate display names in variant catalog"
            );
        }
        SortKey::ShortId => {
            names.sort_unstable_by(|a, b| a.short.as_bytes().cmp(b.short.as_bytes()));
            debug_assert!(
                names.windows(2).all(|w| w[0].short != w[1].short),
                "duplicate short ids in variant catalog"
            );
        }
    }
}

/// Lays out an ordered name sequence as listing lines.
///
/// Verbose mode prints one line per variant: a 4-space margin, the display
/// name in a 36-column field, one space and the short id. Compact mode
/// packs display names greedily left to right into lines of at most
/// [`LIST_WIDTH`] columns with a 2-space margin; names are atomic and a
/// name too long for the limit overflows on its own line. Empty input
/// yields no lines at all.
pub fn render_variant_lines(names: &[VariantName], verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if verbose {
        for name in names {
            lines.push(format!(
                "    {:<width$} {}",
                name.display,
                name.short,
                width = DISPLAY_FIELD_WIDTH
            ));
        }
        return lines;
    }

    let mut current = String::new();
    let mut pos = 0usize;
    for name in names {
        let len = name.display.len();
        if pos == 0 {
            current = format!("  {}", name.display);
            pos = 2 + len;
        } else if pos + 1 + len > LIST_WIDTH {
            lines.push(std::mem::take(&mut current));
            current = format!("  {}", name.display);
            pos = 2 + len;
        } else {
            current.push(' ');
            current.push_str(&name.display);
            pos += 1 + len;
        }
    }
    if pos > 0 {
        lines.push(current);
    }

    lines
}
