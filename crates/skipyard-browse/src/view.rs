//! Derived view of the catalog and its memoizing selector.

use serde::{Deserialize, Serialize};

use skipyard_core::{Catalog, SkipOffering};

use crate::filter::FilterState;

/// One offering ready for rendering: the entry plus its derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingView {
    /// The underlying catalog entry.
    pub offering: SkipOffering,
    /// VAT-inclusive price in whole pounds.
    pub price: u32,
    /// Road-legal and suitable for heavy waste; renders disabled otherwise.
    pub selectable: bool,
}

impl OfferingView {
    fn new(offering: &SkipOffering) -> Self {
        Self {
            price: offering.derived_price(),
            selectable: offering.is_selectable(),
            offering: offering.clone(),
        }
    }
}

/// Filter then stable-sort the catalog under the given inputs.
///
/// Pure: same (catalog, filter) always yields the same sequence, and
/// items equal under the sort key keep catalog order.
pub fn derive_view(catalog: &Catalog, filter: &FilterState) -> Vec<OfferingView> {
    let mut items: Vec<OfferingView> = catalog
        .iter()
        .filter(|o| filter.matches(o))
        .map(OfferingView::new)
        .collect();

    items.sort_by(|a, b| filter.sort_by.compare(&a.offering, &b.offering));
    items
}

/// Memoized selector over [`derive_view`].
///
/// Keyed on the [`FilterState`] value: `refresh` recomputes only when
/// the inputs changed since the last call.
#[derive(Debug, Default)]
pub struct BrowseView {
    inputs: Option<FilterState>,
    items: Vec<OfferingView>,
}

impl BrowseView {
    /// Create an empty view; the first `refresh` populates it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the view if `filter` differs from the memoized inputs.
    /// Returns whether a recomputation ran.
    pub fn refresh(&mut self, catalog: &Catalog, filter: &FilterState) -> bool {
        if self.inputs.as_ref() == Some(filter) {
            return false;
        }
        self.items = derive_view(catalog, filter);
        self.inputs = Some(filter.clone());
        true
    }

    /// The current derived list (empty before the first refresh).
    pub fn items(&self) -> &[OfferingView] {
        &self.items
    }

    /// Number of offerings passing the current filter.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no offerings pass the current filter.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
