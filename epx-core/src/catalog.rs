//! The closed catalog of supported executable-format variants.
//!
//! The catalog is fixed at compile time: every variant the packing engines
//! can handle has exactly one entry here, and nothing is registered at
//! runtime. Consumers enumerate it through [`visit_all`], which hands each
//! variant to the visitor as a transient, uniquely-owned handle. The
//! visitor extracts whatever it needs and drops the handle; handles are
//! never shared and never outlive the visit.

use crate::options::OptionsContext;

/// One catalog row. The display name is assembled on demand from the CPU
/// and target fields so that [`OptionsContext`] can pick the CPU spelling.
#[derive(Debug, Clone, Copy)]
struct VariantSpec {
    /// Canonical CPU name (`amd64`, `arm64`, `i386`, ...).
    cpu: &'static str,
    /// Legacy toolchain alias for the CPU, where one exists.
    cpu_alias: Option<&'static str>,
    /// Target OS / container suffix (`linux.elf`, `win64.pe`, ...).
    target: &'static str,
    /// Stable short identifier used in verbose listings.
    short: &'static str,
}

/// All supported variants, in engine registration order (not sorted).
///
/// Adding a row here is the only way a new variant reaches the listing
/// screens; the catalog is the single source of truth for "this version
/// supports".
const CATALOG: &[VariantSpec] = &[
    VariantSpec { cpu: "i086", cpu_alias: None, target: "dos16.com", short: "dos/com" },
    VariantSpec { cpu: "i086", cpu_alias: None, target: "dos16.exe", short: "dos/exe" },
    VariantSpec { cpu: "i086", cpu_alias: None, target: "dos16.sys", short: "dos/sys" },
    VariantSpec { cpu: "i386", cpu_alias: None, target: "dos32.djgpp2.coff", short: "djgpp2/coff" },
    VariantSpec { cpu: "i386", cpu_alias: None, target: "dos32.watcom.le", short: "watcom/le" },
    VariantSpec { cpu: "i386", cpu_alias: None, target: "dos32.tmt.adam", short: "tmt/adam" },
    VariantSpec { cpu: "i386", cpu_alias: None, target: "win32.pe", short: "win32/pe" },
    VariantSpec { cpu: "amd64", cpu_alias: Some("x86_64"), target: "win64.pe", short: "win64/pe" },
    VariantSpec { cpu: "arm", cpu_alias: None, target: "wince.pe", short: "arm/pe" },
    VariantSpec { cpu: "i386", cpu_alias: None, target: "linux.elf", short: "linux/i386" },
    VariantSpec { cpu: "amd64", cpu_alias: Some("x86_64"), target: "linux.elf", short: "linux/amd64" },
    VariantSpec { cpu: "arm", cpu_alias: None, target: "linux.elf", short: "linux/arm" },
    VariantSpec { cpu: "armeb", cpu_alias: None, target: "linux.elf", short: "linux/armeb" },
    VariantSpec { cpu: "arm64", cpu_alias: Some("aarch64"), target: "linux.elf", short: "linux/arm64" },
    VariantSpec { cpu: "mips", cpu_alias: None, target: "linux.elf", short: "linux/mips" },
    VariantSpec { cpu: "mipsel", cpu_alias: None, target: "linux.elf", short: "linux/mipsel" },
    VariantSpec { cpu: "powerpc", cpu_alias: None, target: "linux.elf", short: "linux/ppc32" },
    VariantSpec { cpu: "powerpc64le", cpu_alias: None, target: "linux.elf", short: "linux/ppc64le" },
    VariantSpec { cpu: "i386", cpu_alias: None, target: "linux.kernel.vmlinuz", short: "vmlinuz/i386" },
    VariantSpec { cpu: "mipsel.r3000", cpu_alias: None, target: "ps1", short: "ps1/exe" },
    VariantSpec { cpu: "m68k", cpu_alias: None, target: "atari.tos", short: "atari/tos" },
    VariantSpec { cpu: "i386", cpu_alias: None, target: "darwin.macho", short: "macho/i386" },
    VariantSpec { cpu: "amd64", cpu_alias: Some("x86_64"), target: "darwin.macho", short: "macho/amd64" },
    VariantSpec { cpu: "arm64", cpu_alias: Some("aarch64"), target: "darwin.macho", short: "macho/arm64" },
];

/// Transient handle to one catalog variant.
///
/// A handle is valid only for the duration of a single visitor call; both
/// name accessors must be consumed (copied out) before the handle is
/// dropped. The boxed handle is uniquely owned by the visitor.
pub trait PackerEntry {
    /// Full display name for listings, e.g. `amd64-linux.elf`.
    ///
    /// The CPU spelling follows `opts`; the returned string is owned by
    /// the caller and independent of the handle's lifetime.
    fn display_name(&self, opts: &OptionsContext) -> String;

    /// Stable short identifier, e.g. `linux/amd64`.
    fn short_id(&self) -> &'static str;
}

struct CatalogEntry {
    spec: &'static VariantSpec,
}

impl PackerEntry for CatalogEntry {
    fn display_name(&self, opts: &OptionsContext) -> String {
        let cpu = if opts.legacy_cpu_names {
            self.spec.cpu_alias.unwrap_or(self.spec.cpu)
        } else {
            self.spec.cpu
        };
        format!("{}-{}", cpu, self.spec.target)
    }

    fn short_id(&self) -> &'static str {
        self.spec.short
    }
}

/// Enumerates every supported variant, passing ownership of a transient
/// handle to `visitor` once per catalog entry.
///
/// The visitor receives each handle by value and is responsible for
/// releasing it (dropping the box) after extracting the names. Entries are
/// visited in engine registration order, which is deliberately unsorted;
/// callers that need an ordering sort what they collected.
pub fn visit_all<F>(mut visitor: F)
where
    F: FnMut(Box<dyn PackerEntry>),
{
    for spec in CATALOG {
        visitor(Box::new(CatalogEntry { spec }));
    }
}

/// Number of entries in the catalog.
pub fn catalog_len() -> usize {
    CATALOG.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Test that every catalog entry is visited exactly once
    #[test]
    fn visit_all_covers_catalog_once() {
        let mut shorts = Vec::new();
        visit_all(|entry| shorts.push(entry.short_id()));
        assert_eq!(shorts.len(), catalog_len());

        let unique: BTreeSet<_> = shorts.iter().copied().collect();
        assert_eq!(unique.len(), shorts.len(), "duplicate short ids in catalog");
    }

    /// Test that display names are unique under the default naming context
    #[test]
    fn display_names_are_unique() {
        let opts = OptionsContext::default();
        let mut names = Vec::new();
        visit_all(|entry| names.push(entry.display_name(&opts)));

        let unique: BTreeSet<_> = names.iter().cloned().collect();
        assert_eq!(unique.len(), names.len(), "duplicate display names in catalog");
    }

    /// Test that the legacy naming context swaps in the CPU alias
    #[test]
    fn legacy_context_uses_cpu_alias() {
        let canonical = OptionsContext::default();
        let legacy = OptionsContext {
            legacy_cpu_names: true,
        };

        let mut pairs = Vec::new();
        visit_all(|entry| {
            pairs.push((entry.display_name(&canonical), entry.display_name(&legacy)));
        });

        assert!(pairs.iter().any(|(c, _)| c == "amd64-linux.elf"));
        assert!(pairs
            .iter()
            .any(|(c, l)| c == "amd64-linux.elf" && l == "x86_64-linux.elf"));
        // Entries without an alias keep the canonical spelling.
        assert!(pairs.iter().any(|(c, l)| c == "i386-linux.elf" && l == c));
    }
}
