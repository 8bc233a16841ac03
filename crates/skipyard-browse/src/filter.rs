//! Filter state and predicate.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use skipyard_core::{Catalog, CatalogStats, SkipOffering};

use crate::sort::SortKey;

/// User-adjustable filter and ordering inputs.
///
/// Created once from the catalog's price bounds, mutated only by user
/// input, never persisted. Equality over the whole value is what the
/// memoized view keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Keep only offerings of exactly this size, when set.
    pub selected_size: Option<u32>,
    /// Drop offerings that may not be placed on a public road.
    pub only_on_road: bool,
    /// Upper bound on the derived (VAT-inclusive) price.
    pub max_price: u32,
    /// Ordering applied to the filtered set.
    pub sort_by: SortKey,
}

impl FilterState {
    /// Initial filter for a catalog: price bound at the catalog maximum
    /// so every offering is visible by default.
    pub fn new(stats: &CatalogStats) -> Self {
        Self {
            selected_size: None,
            only_on_road: false,
            max_price: stats.max_price,
            sort_by: SortKey::default(),
        }
    }

    /// The filter predicate. All three conditions must pass; their order
    /// is immaterial.
    pub fn matches(&self, offering: &SkipOffering) -> bool {
        if let Some(size) = self.selected_size {
            if offering.size != size {
                return false;
            }
        }
        if self.only_on_road && !offering.allowed_on_road {
            return false;
        }
        offering.derived_price() <= self.max_price
    }

    /// Set the price bound, clamping to the catalog's valid range.
    pub fn set_max_price(&mut self, value: u32, stats: &CatalogStats) {
        self.max_price = value.clamp(stats.min_price, stats.max_price);
    }
}

/// Distinct sizes on offer, ascending. Drives the size-filter control.
pub fn size_options(catalog: &Catalog) -> Vec<u32> {
    catalog.iter().map(|o| o.size).sorted().dedup().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skipyard_core::OfferingId;

    fn offering(size: u32, price: f64, on_road: bool) -> SkipOffering {
        SkipOffering {
            id: OfferingId::new(size),
            size,
            price_before_vat: price,
            vat: 20.0,
            hire_period_days: 14,
            allowed_on_road: on_road,
            not_suitable_for_heavy_waste: false,
            recommended: false,
        }
    }

    fn stats() -> CatalogStats {
        CatalogStats {
            min_price: 100,
            max_price: 900,
            total: 2,
            skipped: 0,
        }
    }

    #[test]
    fn test_size_filter_exact_match() {
        let mut filter = FilterState::new(&stats());
        filter.selected_size = Some(6);

        assert!(filter.matches(&offering(6, 264.0, true)));
        assert!(!filter.matches(&offering(8, 264.0, true)));
    }

    #[test]
    fn test_road_filter() {
        let mut filter = FilterState::new(&stats());
        filter.only_on_road = true;

        assert!(filter.matches(&offering(4, 211.0, true)));
        assert!(!filter.matches(&offering(10, 356.0, false)));
    }

    #[test]
    fn test_price_bound() {
        let mut filter = FilterState::new(&stats());
        filter.max_price = 300;

        assert!(filter.matches(&offering(4, 211.0, true))); // 253
        assert!(!filter.matches(&offering(6, 264.0, true))); // 317
    }

    #[test]
    fn test_price_bound_clamps() {
        let stats = stats();
        let mut filter = FilterState::new(&stats);

        filter.set_max_price(5, &stats);
        assert_eq!(filter.max_price, 100);

        filter.set_max_price(5000, &stats);
        assert_eq!(filter.max_price, 900);
    }

    #[test]
    fn test_size_options_distinct_sorted() {
        let catalog = Catalog::new(
            vec![
                offering(8, 295.0, true),
                offering(4, 211.0, true),
                offering(8, 299.0, true),
            ],
            Vec::new(),
        );
        assert_eq!(size_options(&catalog), vec![4, 8]);
    }
}
