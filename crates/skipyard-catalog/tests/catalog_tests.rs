use std::fs;

use tempfile::TempDir;

use skipyard_catalog::{bundled, from_str, load, CatalogError};
use skipyard_core::WarningKind;

const VALID_CATALOG: &str = r#"[
    {"id": 1, "size": 4, "price_before_vat": 211.0, "vat": 20.0, "hire_period_days": 14,
     "allowed_on_road": true, "not_suitable_for_heavy_waste": false},
    {"id": 2, "size": 6, "price_before_vat": 264.0, "vat": 20.0, "hire_period_days": 14,
     "allowed_on_road": true, "not_suitable_for_heavy_waste": false, "recommended": true},
    {"id": 3, "size": 40, "price_before_vat": 799.0, "vat": 20.0, "hire_period_days": 14,
     "allowed_on_road": false, "not_suitable_for_heavy_waste": true}
]"#;

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");
    fs::write(&path, VALID_CATALOG).unwrap();

    let catalog = load(&path).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.stats.min_price, 253);
    assert_eq!(catalog.stats.max_price, 959);
}

#[test]
fn test_missing_file_is_not_found_not_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("does-not-exist.json");

    let result = load(&path);
    assert!(matches!(result, Err(CatalogError::NotFound { .. })));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, "{ definitely not a catalog").unwrap();

    let result = load(&path);
    assert!(matches!(result, Err(CatalogError::Parse { .. })));
}

#[test]
fn test_partial_catalog_loads_with_warnings() {
    let catalog = from_str(
        r#"[
            {"id": 1, "size": 4, "price_before_vat": 211.0, "vat": 20.0, "hire_period_days": 14},
            {"id": 2, "size": 6, "price_before_vat": -5.0, "vat": 20.0, "hire_period_days": 14},
            {"id": 3, "size": 8, "price_before_vat": 295.0, "vat": -1.0, "hire_period_days": 14},
            {"id": 4, "size": 10, "price_before_vat": 356.0, "vat": 20.0, "hire_period_days": 14}
        ]"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.warnings.len(), 2);
    assert_eq!(catalog.warnings[0].kind, WarningKind::InvalidPrice);
    assert_eq!(catalog.warnings[1].kind, WarningKind::InvalidVat);

    // Bounds cover only the valid entries
    assert_eq!(catalog.stats.min_price, 253);
    assert_eq!(catalog.stats.max_price, 427);
    assert_eq!(catalog.stats.skipped, 2);
}

#[test]
fn test_bundled_matches_expected_shape() {
    let catalog = bundled().unwrap();

    // Every derived quantity must be computable for every entry
    for offering in catalog.iter() {
        assert!(offering.derived_price() > 0);
        assert!(offering.image_url().contains(&offering.size.to_string()));
    }

    // Bundled data carries at least one editorial pick and one
    // road-restricted size so the browse filters have something to do.
    assert!(catalog.iter().any(|o| o.recommended));
    assert!(catalog.iter().any(|o| !o.allowed_on_road));
}
