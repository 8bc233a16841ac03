use skipyard_core::{
    BrowseConfig, Catalog, CatalogError, CatalogWarning, OfferingId, SkipOffering, WarningKind,
};

fn offering(id: u32, size: u32, price: f64, vat: f64) -> SkipOffering {
    SkipOffering {
        id: OfferingId::new(id),
        size,
        price_before_vat: price,
        vat,
        hire_period_days: 14,
        allowed_on_road: true,
        not_suitable_for_heavy_waste: false,
        recommended: false,
    }
}

#[test]
fn test_offering_id_operations() {
    let id1 = OfferingId::new(42);
    let id2 = OfferingId::new(42);

    assert_eq!(id1, id2);
    assert_eq!(id1.0, 42);
}

#[test]
fn test_derived_price_reference_values() {
    // The canonical example: 211 before VAT at 20% -> 253
    assert_eq!(offering(1, 4, 211.0, 20.0).derived_price(), 253);

    // A spread of real-world price points
    assert_eq!(offering(2, 6, 264.0, 20.0).derived_price(), 317);
    assert_eq!(offering(3, 8, 295.0, 20.0).derived_price(), 354);
    assert_eq!(offering(4, 40, 799.0, 20.0).derived_price(), 959);
}

#[test]
fn test_derived_price_rounding_is_uniform() {
    // .5 boundaries round up, uniformly
    assert_eq!(offering(1, 4, 250.0, 1.0).derived_price(), 253); // 252.5
    assert_eq!(offering(2, 4, 150.0, 1.0).derived_price(), 152); // 151.5
    // just below the boundary rounds down
    assert_eq!(offering(3, 4, 249.0, 1.0).derived_price(), 251); // 251.49
}

#[test]
fn test_selectability_matrix() {
    let mut item = offering(1, 8, 295.0, 20.0);

    assert!(item.is_selectable());

    item.not_suitable_for_heavy_waste = true;
    assert!(!item.is_selectable());

    item.allowed_on_road = false;
    assert!(!item.is_selectable());

    item.not_suitable_for_heavy_waste = false;
    assert!(!item.is_selectable());
}

#[test]
fn test_offering_serde_roundtrip() {
    let item = offering(17, 12, 390.0, 20.0);
    let json = serde_json::to_string(&item).unwrap();
    let back: SkipOffering = serde_json::from_str(&json).unwrap();
    assert_eq!(item, back);
}

#[test]
fn test_recommended_defaults_false() {
    let json = r#"{
        "id": 1,
        "size": 4,
        "price_before_vat": 211.0,
        "vat": 20.0,
        "hire_period_days": 14,
        "allowed_on_road": true,
        "not_suitable_for_heavy_waste": false
    }"#;
    let item: SkipOffering = serde_json::from_str(json).unwrap();
    assert!(!item.recommended);
}

#[test]
fn test_catalog_stats_and_lookup() {
    let catalog = Catalog::new(
        vec![
            offering(1, 4, 211.0, 20.0),
            offering(2, 6, 264.0, 20.0),
            offering(3, 20, 719.0, 20.0),
        ],
        Vec::new(),
    );

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.stats.min_price, 253);
    assert_eq!(catalog.stats.max_price, 863);
    assert_eq!(catalog.get(OfferingId::new(2)).unwrap().size, 6);
    assert!(!catalog.has_warnings());
}

#[test]
fn test_catalog_with_warnings() {
    let catalog = Catalog::new(
        vec![offering(1, 4, 211.0, 20.0)],
        vec![CatalogWarning::invalid_price(1, -10.0)],
    );

    assert!(catalog.has_warnings());
    assert_eq!(catalog.stats.skipped, 1);
    assert_eq!(catalog.warnings[0].kind, WarningKind::InvalidPrice);
}

#[test]
fn test_catalog_error_io_classification() {
    let err = CatalogError::io(
        "/no/such/catalog.json",
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    );
    assert!(matches!(err, CatalogError::NotFound { .. }));

    let err = CatalogError::io(
        "/etc/shadow",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(matches!(err, CatalogError::PermissionDenied { .. }));

    let err = CatalogError::io(
        "/dev/full",
        std::io::Error::other("weird"),
    );
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_browse_config_builder() {
    let config = BrowseConfig::builder()
        .page_size(12usize)
        .build()
        .unwrap();
    assert_eq!(config.page_size, 12);
    assert_eq!(config.debounce_ms, 800);

    assert!(BrowseConfig::builder().page_size(0usize).build().is_err());
}
