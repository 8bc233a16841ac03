//! Skip offering types.

use serde::{Deserialize, Serialize};

/// URL template for skip imagery, keyed by nominal size.
const IMAGE_URL_BASE: &str =
    "https://yozbrydxdlcxghkphhtq.supabase.co/storage/v1/object/public/skips/skip-sizes";

/// Unique identifier for an offering within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OfferingId(pub u32);

impl OfferingId {
    /// Create a new OfferingId from a u32.
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A single skip-size offering in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipOffering {
    /// Unique identifier, stable across renders.
    pub id: OfferingId,

    /// Nominal container size in yards.
    pub size: u32,

    /// Base price before VAT.
    pub price_before_vat: f64,

    /// VAT percentage applied on top of the base price.
    pub vat: f64,

    /// Length of the hire period in days.
    pub hire_period_days: u32,

    /// Legal to place on a public road.
    pub allowed_on_road: bool,

    /// Excluded from selection when carrying heavy waste.
    pub not_suitable_for_heavy_waste: bool,

    /// Editorially promoted item.
    #[serde(default)]
    pub recommended: bool,
}

impl SkipOffering {
    /// VAT-inclusive price in whole pounds.
    ///
    /// Rounds half away from zero, so £253.20 and £253.50 both land on the
    /// nearest pound the customer expects to see (253 and 254).
    pub fn derived_price(&self) -> u32 {
        (self.price_before_vat * (1.0 + self.vat / 100.0)).round() as u32
    }

    /// Whether the offering can actually be selected: road-legal and not
    /// excluded for heavy waste.
    pub fn is_selectable(&self) -> bool {
        self.allowed_on_road && !self.not_suitable_for_heavy_waste
    }

    /// Content address of the offering's image, keyed by size.
    pub fn image_url(&self) -> String {
        format!("{IMAGE_URL_BASE}/{}-yarder-skip.jpg", self.size)
    }

    /// Display title, e.g. "6 Yard Skip".
    pub fn title(&self) -> String {
        format!("{} Yard Skip", self.size)
    }
}
