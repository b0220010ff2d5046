use super::engine::{Effect, NoirEffect, SepiaEffect, VignetteEffect};
use super::{FilterError, FilterResult};

// ---------------------------------------------------------------------------
// FilterKind – the closed set of built-in filters
// ---------------------------------------------------------------------------

/// One of the built-in filters. Adding a filter is a closed-set extension:
/// a new variant here plus one entry in [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Sepia,
    Vignette,
    Noir,
}

// ---------------------------------------------------------------------------
// FilterDescriptor – one catalog entry
// ---------------------------------------------------------------------------

/// A catalog entry: stable identifier plus the name shown in the UI.
#[derive(Debug, Clone, Copy)]
pub struct FilterDescriptor {
    /// Unique, stable identifier. Used for lookup; never shown to the user.
    pub id: &'static str,
    /// Human-readable name for the filter panel.
    pub display_name: &'static str,
    pub kind: FilterKind,
}

/// All built-in filters. Array order is display order.
const CATALOG: [FilterDescriptor; 3] = [
    FilterDescriptor {
        id: "sepia",
        display_name: "Sepia",
        kind: FilterKind::Sepia,
    },
    FilterDescriptor {
        id: "vignette",
        display_name: "Vignette",
        kind: FilterKind::Vignette,
    },
    FilterDescriptor {
        id: "noir",
        display_name: "Noir",
        kind: FilterKind::Noir,
    },
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// The built-in filters, in display order.
pub fn list() -> &'static [FilterDescriptor] {
    &CATALOG
}

/// Resolve an identifier to a fresh engine handle.
///
/// Each call constructs a new effect with its default parameters; handles
/// carry no state across calls. Unknown identifiers fail loudly instead of
/// falling back to a default filter.
pub fn resolve(id: &str) -> FilterResult<Box<dyn Effect>> {
    let entry = CATALOG
        .iter()
        .find(|d| d.id == id)
        .ok_or_else(|| FilterError::UnknownFilter(id.to_string()))?;

    Ok(match entry.kind {
        FilterKind::Sepia => Box::new(SepiaEffect::default()),
        FilterKind::Vignette => Box::new(VignetteEffect::default()),
        FilterKind::Noir => Box::new(NoirEffect),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_id_resolves() {
        for descriptor in list() {
            assert!(
                resolve(descriptor.id).is_ok(),
                "{} did not resolve",
                descriptor.id
            );
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = resolve("unknown").unwrap_err();
        assert!(matches!(err, FilterError::UnknownFilter(id) if id == "unknown"));
    }

    #[test]
    fn display_order_is_sepia_vignette_noir() {
        let kinds: Vec<FilterKind> = list().iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![FilterKind::Sepia, FilterKind::Vignette, FilterKind::Noir]
        );
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = list().iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list().len());
    }
}
