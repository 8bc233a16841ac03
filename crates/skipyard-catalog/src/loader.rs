//! Catalog parsing and per-entry validation.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use skipyard_core::{Catalog, CatalogError, CatalogWarning, OfferingId, SkipOffering};

/// Default catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// An entry as it appears on disk, before validation.
///
/// Required fields are optional here so one bad entry surfaces as a
/// warning instead of failing the whole file.
#[derive(Debug, Deserialize)]
struct RawOffering {
    id: Option<u32>,
    size: Option<u32>,
    price_before_vat: Option<f64>,
    vat: Option<f64>,
    hire_period_days: Option<u32>,
    #[serde(default)]
    allowed_on_road: bool,
    #[serde(default)]
    not_suitable_for_heavy_waste: bool,
    #[serde(default)]
    recommended: bool,
}

/// Load the catalog bundled into the binary.
pub fn bundled() -> Result<Catalog, CatalogError> {
    from_str(BUNDLED_CATALOG)
}

/// Load a catalog from a file.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    from_str(&contents)
}

/// Parse and validate a catalog from a JSON string.
pub fn from_str(contents: &str) -> Result<Catalog, CatalogError> {
    let raw: Vec<RawOffering> = serde_json::from_str(contents).map_err(CatalogError::parse)?;

    let mut offerings = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, entry) in raw.into_iter().enumerate() {
        match validate(index, entry, &mut seen_ids) {
            Ok(offering) => offerings.push(offering),
            Err(warning) => {
                tracing::warn!(target: "catalog", "skipping entry: {}", warning.message);
                warnings.push(warning);
            }
        }
    }

    Ok(Catalog::new(offerings, warnings))
}

/// Validate one raw entry into a SkipOffering.
fn validate(
    index: usize,
    raw: RawOffering,
    seen_ids: &mut HashSet<u32>,
) -> Result<SkipOffering, CatalogWarning> {
    let id = raw
        .id
        .ok_or_else(|| CatalogWarning::missing_field(index, "id"))?;
    let size = raw
        .size
        .ok_or_else(|| CatalogWarning::missing_field(index, "size"))?;
    let price_before_vat = raw
        .price_before_vat
        .ok_or_else(|| CatalogWarning::missing_field(index, "price_before_vat"))?;
    let vat = raw
        .vat
        .ok_or_else(|| CatalogWarning::missing_field(index, "vat"))?;
    let hire_period_days = raw
        .hire_period_days
        .ok_or_else(|| CatalogWarning::missing_field(index, "hire_period_days"))?;

    if !price_before_vat.is_finite() || price_before_vat < 0.0 {
        return Err(CatalogWarning::invalid_price(index, price_before_vat));
    }
    if !vat.is_finite() || vat < 0.0 {
        return Err(CatalogWarning::invalid_vat(index, vat));
    }
    if !seen_ids.insert(id) {
        return Err(CatalogWarning::duplicate_id(index, id));
    }

    Ok(SkipOffering {
        id: OfferingId::new(id),
        size,
        price_before_vat,
        vat,
        hire_period_days,
        allowed_on_road: raw.allowed_on_road,
        not_suitable_for_heavy_waste: raw.not_suitable_for_heavy_waste,
        recommended: raw.recommended,
    })
}
