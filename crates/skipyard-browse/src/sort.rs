//! Sort orderings for the offering grid.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use skipyard_core::SkipOffering;

/// Ordering applied to the filtered offering list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, FromRepr, Serialize, Deserialize,
)]
pub enum SortKey {
    /// Recommended offerings first, then selectable ones - the default.
    #[default]
    #[strum(to_string = "Popularity")]
    Popularity,
    /// Derived price ascending (cheapest first).
    #[strum(to_string = "Price ↑")]
    PriceAsc,
    /// Derived price descending (dearest first).
    #[strum(to_string = "Price ↓")]
    PriceDesc,
    /// Size ascending (smallest first).
    #[strum(to_string = "Size ↑")]
    SizeAsc,
    /// Size descending (largest first).
    #[strum(to_string = "Size ↓")]
    SizeDesc,
}

impl SortKey {
    /// Cycle to the next sort key.
    pub fn next(self) -> Self {
        let current = self as usize;
        let next = (current + 1) % Self::iter().count();
        Self::from_repr(next).unwrap_or_default()
    }

    /// Get a short label for display in the status bar.
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Popularity => "POP",
            Self::PriceAsc => "PR↑",
            Self::PriceDesc => "PR↓",
            Self::SizeAsc => "SZ↑",
            Self::SizeDesc => "SZ↓",
        }
    }

    /// Compare two offerings under this key.
    ///
    /// Returns `Ordering::Equal` for ties so a stable sort preserves
    /// catalog order among equal items.
    pub fn compare(&self, a: &SkipOffering, b: &SkipOffering) -> Ordering {
        match self {
            Self::Popularity => {
                // true sorts first on both criteria
                b.recommended
                    .cmp(&a.recommended)
                    .then_with(|| b.is_selectable().cmp(&a.is_selectable()))
            }
            Self::PriceAsc => a.derived_price().cmp(&b.derived_price()),
            Self::PriceDesc => b.derived_price().cmp(&a.derived_price()),
            Self::SizeAsc => a.size.cmp(&b.size),
            Self::SizeDesc => b.size.cmp(&a.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skipyard_core::OfferingId;

    fn offering(id: u32, size: u32, price: f64, recommended: bool) -> SkipOffering {
        SkipOffering {
            id: OfferingId::new(id),
            size,
            price_before_vat: price,
            vat: 20.0,
            hire_period_days: 14,
            allowed_on_road: true,
            not_suitable_for_heavy_waste: false,
            recommended,
        }
    }

    #[test]
    fn test_sort_key_cycle_wraps() {
        let mut key = SortKey::default();
        for _ in 0..SortKey::iter().count() {
            key = key.next();
        }
        assert_eq!(key, SortKey::Popularity);
    }

    #[test]
    fn test_price_comparators_are_mirrors() {
        let a = offering(1, 4, 211.0, false);
        let b = offering(2, 6, 264.0, false);

        assert_eq!(SortKey::PriceAsc.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::PriceDesc.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_popularity_prefers_recommended() {
        let plain = offering(1, 4, 211.0, false);
        let promoted = offering(2, 6, 264.0, true);

        assert_eq!(SortKey::Popularity.compare(&promoted, &plain), Ordering::Less);
        assert_eq!(SortKey::Popularity.compare(&plain, &promoted), Ordering::Greater);
    }

    #[test]
    fn test_popularity_prefers_selectable_among_unrecommended() {
        let selectable = offering(1, 4, 211.0, false);
        let mut restricted = offering(2, 10, 356.0, false);
        restricted.allowed_on_road = false;

        assert_eq!(
            SortKey::Popularity.compare(&selectable, &restricted),
            Ordering::Less
        );
    }

    #[test]
    fn test_equal_items_compare_equal() {
        let a = offering(1, 4, 211.0, false);
        let b = offering(2, 4, 211.0, false);
        assert_eq!(SortKey::Popularity.compare(&a, &b), Ordering::Equal);
        assert_eq!(SortKey::PriceAsc.compare(&a, &b), Ordering::Equal);
    }
}
