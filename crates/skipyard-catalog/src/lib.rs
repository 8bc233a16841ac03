//! Catalog acquisition for skipyard.
//!
//! This crate turns a JSON catalog of skip offerings into a validated
//! [`Catalog`]:
//!
//! - **Bundled catalog** - the default dataset compiled into the binary
//! - **File loading** - an alternate catalog supplied at runtime
//! - **Per-entry validation** - malformed entries are skipped with a
//!   warning rather than failing the whole load
//!
//! A load failure (missing file, unreadable file, syntactically invalid
//! JSON) is a [`CatalogError`], never an empty catalog, so callers can
//! tell "nothing on offer" apart from "catalog unavailable".
//!
//! ```rust
//! use skipyard_catalog::bundled;
//!
//! let catalog = bundled().unwrap();
//! assert!(!catalog.is_empty());
//! println!("{} offerings, prices {}..={}",
//!     catalog.len(), catalog.stats.min_price, catalog.stats.max_price);
//! ```

mod loader;

pub use loader::{bundled, from_str, load};

// Re-export core types
pub use skipyard_core::{Catalog, CatalogError, CatalogStats, CatalogWarning, SkipOffering};
