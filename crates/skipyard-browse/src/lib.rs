//! Derivation pipeline for skipyard.
//!
//! This crate turns a [`Catalog`] and a [`FilterState`] into the ordered
//! list of offerings a front end renders:
//!
//! 1. **Filter** - size exact-match, road-legal-only, price bound
//! 2. **Sort** - stable, by [`SortKey`] (popularity, price, size)
//! 3. **Paginate** - a [`Pager`] that grows by one page per "show more"
//!
//! The pipeline is a pure function of (catalog, filter); [`BrowseView`]
//! memoizes it on the filter value so unchanged inputs never recompute.
//!
//! ```rust
//! use skipyard_browse::{BrowseView, FilterState, SortKey};
//! use skipyard_catalog::bundled;
//!
//! let catalog = bundled().unwrap();
//! let mut filter = FilterState::new(&catalog.stats);
//! filter.only_on_road = true;
//! filter.sort_by = SortKey::PriceAsc;
//!
//! let mut view = BrowseView::new();
//! view.refresh(&catalog, &filter);
//! assert!(view.items().iter().all(|v| v.offering.allowed_on_road));
//! ```

mod filter;
mod pager;
mod sort;
mod view;

pub use filter::{size_options, FilterState};
pub use pager::Pager;
pub use sort::SortKey;
pub use view::{derive_view, BrowseView, OfferingView};

// Re-export core types
pub use skipyard_core::{Catalog, CatalogStats, SkipOffering};
