//! Reference maps for reconciling historical labels.
//!
//! Country, discipline and host naming changed over the decades. Each map
//! resolves a retired or long-form label to its canonical form. The maps are
//! built once on first access and are read-only afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Read-only alias table from a historical label to its canonical label.
///
/// Identity pairs are never stored, so a canonical value is never also an
/// alias key. This keeps `canonical` idempotent.
#[derive(Debug, Clone)]
pub struct ReferenceMap {
    name: &'static str,
    entries: BTreeMap<&'static str, &'static str>,
}

impl ReferenceMap {
    /// Build a map from `(alias, canonical)` pairs, skipping identity pairs.
    pub fn new<I>(name: &'static str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let entries = pairs
            .into_iter()
            .filter(|(alias, canonical)| alias != canonical)
            .collect();
        Self { name, entries }
    }

    /// Name used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical label for an alias, or `None` when the value is not an alias.
    pub fn resolve(&self, raw: &str) -> Option<&'static str> {
        self.entries.get(raw).copied()
    }

    /// Canonical label for `raw`, falling back to `raw` itself.
    pub fn canonical<'a>(&self, raw: &'a str) -> &'a str {
        self.entries.get(raw).copied().unwrap_or(raw)
    }

    pub fn is_alias(&self, raw: &str) -> bool {
        self.entries.contains_key(raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(alias, canonical)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(alias, canonical)| (*alias, *canonical))
    }
}

static COUNTRY_NAME_MAP: OnceLock<ReferenceMap> = OnceLock::new();
static COUNTRY_CODE_MAP: OnceLock<ReferenceMap> = OnceLock::new();
static DISCIPLINE_TITLE_MAP: OnceLock<ReferenceMap> = OnceLock::new();
static HOST_LOCATION_FIXES: OnceLock<ReferenceMap> = OnceLock::new();

/// Long or historical country names mapped to their short form.
pub fn country_name_map() -> &'static ReferenceMap {
    COUNTRY_NAME_MAP.get_or_init(|| {
        ReferenceMap::new(
            "country_name",
            [
                (
                    "German Democratic Republic (Germany)",
                    "German Democratic Republic",
                ),
                ("Democratic People's Republic of Korea", "North Korea"),
                ("Republic of Korea", "South Korea"),
                ("People's Republic of China", "China"),
                ("Islamic Republic of Iran", "Iran"),
                ("United States of America", "United States"),
            ],
        )
    })
}

/// Three-letter codes of successor or dissolved states mapped to one
/// standardized country name.
pub fn country_code_map() -> &'static ReferenceMap {
    COUNTRY_CODE_MAP.get_or_init(|| {
        ReferenceMap::new(
            "country_code",
            [
                ("GER", "Germany"),
                ("FRG", "Germany"),
                ("GDR", "Germany"),
                ("CZE", "Czech Republic"),
                ("TCH", "Czech Republic"),
                ("IOA", "Russia"),
                ("ROC", "Russia"),
                ("RUS", "Russia"),
                ("URS", "Russia"),
            ],
        )
    })
}

/// Retired or renamed discipline titles mapped to the current title.
pub fn discipline_title_map() -> &'static ReferenceMap {
    DISCIPLINE_TITLE_MAP.get_or_init(|| {
        ReferenceMap::new(
            "discipline_title",
            [
                ("Gymnastics Artistic", "Artistic Gymnastics"),
                ("Gymnastics Rhythmic", "Rhythmic Gymnastics"),
                ("Synchronized Swimming", "Artistic Swimming"),
                ("Equestrian Dressage", "Equestrian"),
                ("Equestrian Jumping", "Equestrian"),
                ("Equestrian Eventing", "Equestrian"),
                ("Trampoline", "Trampoline Gymnastics"),
                ("Cycling BMX", "Cycling BMX Racing"),
                ("Short Track Speed Skating", "Short Track"),
            ],
        )
    })
}

/// Host locations keyed by game slug, for hosts whose recorded location does
/// not match the country name used in the medals table.
pub fn host_location_fixes() -> &'static ReferenceMap {
    HOST_LOCATION_FIXES.get_or_init(|| {
        ReferenceMap::new(
            "host_location",
            [
                ("melbourne-1956", "Australia"),
                ("pyeongchang-2018", "North Korea"),
                ("seoul-1988", "South Korea"),
                ("moscow-1980", "Soviet Union"),
            ],
        )
    })
}
